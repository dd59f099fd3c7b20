//! Game repository functions for the domain layer (generic over ConnectionTrait).

use sea_orm::{ConnectionTrait, DbErr};
use uuid::Uuid;

use crate::adapters::games_sea as games_adapter;
use crate::adapters::games_sea::GameCreate;
use crate::domain::board::{Board, Mark};
use crate::entities::games;
use crate::entities::games::GamePhase;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::infra::db_errors::map_db_err;

/// A game participant with their assigned mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GamePlayer {
    pub id: Uuid,
    pub mark: Mark,
}

/// Game domain model. Board and marks are decoded from their stored form;
/// a row that fails to decode is data corruption, not a validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: Uuid,
    pub host: GamePlayer,
    pub guest: GamePlayer,
    pub current_player_id: Uuid,
    pub starting_player_id: Uuid,
    pub board: Board,
    pub phase: GamePhase,
    pub winner_id: Option<Uuid>,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

impl Game {
    pub fn is_participant(&self, player_id: Uuid) -> bool {
        self.host.id == player_id || self.guest.id == player_id
    }

    /// The mark a participant plays, or None for outsiders.
    pub fn mark_of(&self, player_id: Uuid) -> Option<Mark> {
        if self.host.id == player_id {
            Some(self.host.mark)
        } else if self.guest.id == player_id {
            Some(self.guest.mark)
        } else {
            None
        }
    }

    /// The other participant's id, or None for outsiders.
    pub fn opponent_of(&self, player_id: Uuid) -> Option<Uuid> {
        if self.host.id == player_id {
            Some(self.guest.id)
        } else if self.guest.id == player_id {
            Some(self.host.id)
        } else {
            None
        }
    }

    /// True while moves are still being accepted.
    pub fn in_progress(&self) -> bool {
        self.phase == GamePhase::InProgress
    }
}

impl TryFrom<games::Model> for Game {
    type Error = DomainError;

    fn try_from(m: games::Model) -> Result<Self, Self::Error> {
        Ok(Game {
            id: m.id,
            host: GamePlayer {
                id: m.host_id,
                mark: Mark::from_stored(&m.host_mark)?,
            },
            guest: GamePlayer {
                id: m.guest_id,
                mark: Mark::from_stored(&m.guest_mark)?,
            },
            current_player_id: m.current_player_id,
            starting_player_id: m.starting_player_id,
            board: Board::from_stored(&m.board)?,
            phase: m.phase,
            winner_id: m.winner_id,
            created_at: m.created_at,
            updated_at: m.updated_at,
        })
    }
}

/// Parameters for starting a game: the pairing with marks, and who moves first.
#[derive(Debug, Clone, Copy)]
pub struct NewGame {
    pub host: GamePlayer,
    pub guest: GamePlayer,
    pub starting_player_id: Uuid,
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: Uuid,
) -> Result<Option<Game>, DomainError> {
    let game = games_adapter::find_by_id(conn, game_id)
        .await
        .map_err(map_db_err)?;
    game.map(Game::try_from).transpose()
}

/// Find a game by id, or fail with NotFound.
pub async fn require_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: Uuid,
) -> Result<Game, DomainError> {
    find_by_id(conn, game_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Game, format!("Game {game_id} not found"))
    })
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    new: NewGame,
) -> Result<Game, DomainError> {
    let dto = GameCreate {
        id: Uuid::new_v4(),
        host_id: new.host.id,
        guest_id: new.guest.id,
        host_mark: new.host.mark.as_char().to_string(),
        guest_mark: new.guest.mark.as_char().to_string(),
        starting_player_id: new.starting_player_id,
        board: Board::empty().to_stored(),
    };
    let game = games_adapter::create_game(conn, dto)
        .await
        .map_err(map_db_err)?;
    Game::try_from(game)
}

/// Persist the mutable fields of a game. NotFound if the row is gone.
pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game: &Game,
) -> Result<Game, DomainError> {
    let model = games::Model {
        id: game.id,
        host_id: game.host.id,
        guest_id: game.guest.id,
        host_mark: game.host.mark.as_char().to_string(),
        guest_mark: game.guest.mark.as_char().to_string(),
        current_player_id: game.current_player_id,
        starting_player_id: game.starting_player_id,
        board: game.board.to_stored(),
        phase: game.phase.clone(),
        winner_id: game.winner_id,
        created_at: game.created_at,
        updated_at: game.updated_at,
    };
    let updated = games_adapter::update_game(conn, model)
        .await
        .map_err(|e| match e {
            DbErr::RecordNotUpdated => DomainError::not_found(
                NotFoundKind::Game,
                format!("Game {} not found", game.id),
            ),
            other => map_db_err(other),
        })?;
    Game::try_from(updated)
}
