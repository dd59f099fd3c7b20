//! SeaORM adapter for the games store - generic over ConnectionTrait.

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set};
use uuid::Uuid;

use crate::entities::games;

/// Column values for a new game row. Board starts empty; phase starts
/// IN_PROGRESS; the starter is also the first current player.
#[derive(Debug, Clone)]
pub struct GameCreate {
    pub id: Uuid,
    pub host_id: Uuid,
    pub guest_id: Uuid,
    pub host_mark: String,
    pub guest_mark: String,
    pub starting_player_id: Uuid,
    pub board: String,
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: Uuid,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find_by_id(game_id).one(conn).await
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameCreate,
) -> Result<games::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let game_active = games::ActiveModel {
        id: Set(dto.id),
        host_id: Set(dto.host_id),
        guest_id: Set(dto.guest_id),
        host_mark: Set(dto.host_mark),
        guest_mark: Set(dto.guest_mark),
        current_player_id: Set(dto.starting_player_id),
        starting_player_id: Set(dto.starting_player_id),
        board: Set(dto.board),
        phase: Set(games::GamePhase::InProgress),
        winner_id: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    };

    game_active.insert(conn).await
}

/// Update the mutable columns of a game row. Participants, marks, and the
/// starting player are fixed at creation and stay NotSet here.
pub async fn update_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    model: games::Model,
) -> Result<games::Model, sea_orm::DbErr> {
    let game_active = games::ActiveModel {
        id: Set(model.id),
        board: Set(model.board),
        current_player_id: Set(model.current_player_id),
        phase: Set(model.phase),
        winner_id: Set(model.winner_id),
        updated_at: Set(time::OffsetDateTime::now_utc()),
        ..Default::default()
    };

    game_active.update(conn).await
}
