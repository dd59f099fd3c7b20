//! Game session operations: starting games, applying moves, reading state.
//!
//! Mutating operations load the room with an exclusive row lock first; the
//! room row is the serialization point for everything that happens inside a
//! room, including its current game.

use rand::Rng;
use sea_orm::ConnectionTrait;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::board::Mark;
use crate::entities::games::GamePhase;
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::repos::games::{self, Game, GamePlayer, NewGame};
use crate::repos::players;
use crate::repos::rooms::{self, Room, RowLock};

/// Create the next game for a complete room and point the room at it.
///
/// Fresh pairings get random marks and a random starter. A rematch between
/// the same host/guest pair keeps the marks of the previous game and gives
/// the first move to whoever did not start it. Resets both wants-new-game
/// flags; the caller persists the room.
pub(crate) async fn start_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room: &mut Room,
) -> Result<Uuid, AppError> {
    let guest = room
        .guest
        .ok_or_else(|| AppError::internal("Cannot start a game without a guest"))?;

    let mut rng = rand::rng();
    let host_mark = if rng.random_bool(0.5) { Mark::X } else { Mark::O };
    let mut new_game = NewGame {
        host: GamePlayer {
            id: room.host.id,
            mark: host_mark,
        },
        guest: GamePlayer {
            id: guest.id,
            mark: host_mark.other(),
        },
        starting_player_id: if rng.random_bool(0.5) {
            room.host.id
        } else {
            guest.id
        },
    };

    if let Some(prev_id) = room.game_id {
        let prev = games::require_by_id(conn, prev_id).await?;
        if prev.in_progress() {
            return Err(DomainError::validation(
                ValidationKind::GameInProgress,
                "Current game is still in progress",
            )
            .into());
        }
        if prev.host.id == room.host.id && prev.guest.id == guest.id {
            new_game.host.mark = prev.host.mark;
            new_game.guest.mark = prev.guest.mark;
            new_game.starting_player_id = if prev.starting_player_id == room.host.id {
                guest.id
            } else {
                room.host.id
            };
        }
    }

    let game = games::create(conn, new_game).await?;
    room.game_id = Some(game.id);
    room.host.wants_new_game = false;
    if let Some(g) = room.guest.as_mut() {
        g.wants_new_game = false;
    }

    info!(game_id = %game.id, room_id = %room.id, "Game started");
    Ok(game.id)
}

/// Record that a player wants a new game; start one once both occupants do.
///
/// Returns the new game id, or `None` when no game was created: the request
/// is recorded but the opponent has not (yet) requested, the room has no
/// guest, or the current game is still in progress (repeat requests during a
/// game are a no-op rather than an error).
pub async fn request_new_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: Uuid,
    player_id: Uuid,
) -> Result<Option<Uuid>, AppError> {
    let mut room = rooms::require_by_id(conn, room_id, RowLock::Exclusive).await?;

    if !room.is_occupant(player_id) {
        return Err(DomainError::validation(
            ValidationKind::NotInRoom,
            "Player is not in this room",
        )
        .into());
    }

    if room.is_host(player_id) {
        room.host.wants_new_game = true;
    } else if let Some(g) = room.guest.as_mut() {
        g.wants_new_game = true;
    }

    if let Some(game_id) = room.game_id {
        let game = games::require_by_id(conn, game_id).await?;
        if game.in_progress() {
            debug!(room_id = %room.id, game_id = %game.id, "New-game request while game in progress");
            rooms::update(conn, &room).await?;
            return Ok(None);
        }
    }

    let both_want =
        room.host.wants_new_game && room.guest.map(|g| g.wants_new_game).unwrap_or(false);
    let game_id = if both_want {
        Some(start_game(conn, &mut room).await?)
    } else {
        None
    };
    rooms::update(conn, &room).await?;

    Ok(game_id)
}

/// Apply one move to the room's current game.
///
/// Validation order: participant, game not completed, mover's turn, position
/// in 1..=9, cell vacant. A winning move completes the game with the mover
/// as winner; a board-filling move completes it as a draw; otherwise the
/// turn passes. Stat updates land in the same transaction as the move.
pub async fn apply_move<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: Uuid,
    player_id: Uuid,
    position: u8,
) -> Result<Game, AppError> {
    let room = rooms::require_by_id(conn, room_id, RowLock::Exclusive).await?;
    let game_id = room.game_id.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Game, format!("Room {room_id} has no game"))
    })?;
    let mut game = games::require_by_id(conn, game_id).await?;

    let mark = game.mark_of(player_id).ok_or_else(|| {
        DomainError::validation(
            ValidationKind::NotInRoom,
            "Player is not a participant of the current game",
        )
    })?;
    if !game.in_progress() {
        return Err(DomainError::validation(
            ValidationKind::GameCompleted,
            "Game is already completed",
        )
        .into());
    }
    if game.current_player_id != player_id {
        return Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            "It is not this player's turn",
        )
        .into());
    }
    game.board.place(position, mark)?;

    let opponent_id = if game.host.id == player_id {
        game.guest.id
    } else {
        game.host.id
    };

    if game.board.is_won_by(mark) {
        game.phase = GamePhase::Completed;
        game.winner_id = Some(player_id);
        players::record_win(conn, player_id).await?;
        players::record_loss(conn, opponent_id).await?;
        info!(game_id = %game.id, winner_id = %player_id, "Game won");
    } else if game.board.is_full() {
        game.phase = GamePhase::Completed;
        players::record_draw(conn, game.host.id).await?;
        players::record_draw(conn, game.guest.id).await?;
        info!(game_id = %game.id, "Game drawn");
    } else {
        game.current_player_id = opponent_id;
    }

    let game = games::update(conn, &game).await?;
    Ok(game)
}

/// Read the room's current game. Occupants only; no lock.
pub async fn game_state<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: Uuid,
    player_id: Uuid,
) -> Result<Game, AppError> {
    let room = rooms::require_by_id(conn, room_id, RowLock::None).await?;
    if !room.is_occupant(player_id) {
        return Err(AppError::forbidden(
            "Player is not an occupant of this room",
        ));
    }
    let game_id = room.game_id.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Game, format!("Room {room_id} has no game"))
    })?;
    Ok(games::require_by_id(conn, game_id).await?)
}
