//! SeaORM adapter for the rooms store - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::entities::rooms;

/// Row-locking mode for room loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowLock {
    None,
    /// `SELECT ... FOR UPDATE` on Postgres. SQLite emits no lock clause;
    /// its single-writer model serializes the transaction anyway.
    Exclusive,
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: Uuid,
    lock: RowLock,
) -> Result<Option<rooms::Model>, sea_orm::DbErr> {
    let query = rooms::Entity::find_by_id(room_id);
    let query = match lock {
        RowLock::None => query,
        RowLock::Exclusive => query.lock_exclusive(),
    };
    query.one(conn).await
}

/// Find the room a player occupies as host or guest, if any.
pub async fn find_by_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: Uuid,
) -> Result<Option<rooms::Model>, sea_orm::DbErr> {
    rooms::Entity::find()
        .filter(
            Condition::any()
                .add(rooms::Column::HostId.eq(player_id))
                .add(rooms::Column::GuestId.eq(player_id)),
        )
        .one(conn)
        .await
}

pub async fn list_by_phase<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    phase: rooms::RoomPhase,
) -> Result<Vec<rooms::Model>, sea_orm::DbErr> {
    rooms::Entity::find()
        .filter(rooms::Column::Phase.eq(phase))
        .order_by_asc(rooms::Column::CreatedAt)
        .all(conn)
        .await
}

pub async fn create_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
    host_id: Uuid,
    title: &str,
    description: Option<&str>,
) -> Result<rooms::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let room_active = rooms::ActiveModel {
        id: Set(id),
        host_id: Set(host_id),
        host_wants_new_game: Set(true),
        guest_id: Set(None),
        guest_wants_new_game: Set(false),
        game_id: Set(None),
        title: Set(title.to_string()),
        description: Set(description.map(str::to_string)),
        phase: Set(rooms::RoomPhase::Open),
        created_at: Set(now),
        updated_at: Set(now),
    };

    room_active.insert(conn).await
}

/// Update the mutable columns of a room row. Title and description are fixed
/// at creation; the host column itself changes when a guest is promoted.
/// Zero matched rows surfaces as `DbErr::RecordNotUpdated`.
pub async fn update_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    model: rooms::Model,
) -> Result<rooms::Model, sea_orm::DbErr> {
    let room_active = rooms::ActiveModel {
        id: Set(model.id),
        host_id: Set(model.host_id),
        host_wants_new_game: Set(model.host_wants_new_game),
        guest_id: Set(model.guest_id),
        guest_wants_new_game: Set(model.guest_wants_new_game),
        game_id: Set(model.game_id),
        phase: Set(model.phase),
        updated_at: Set(time::OffsetDateTime::now_utc()),
        ..Default::default()
    };

    room_active.update(conn).await
}

pub async fn delete_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: Uuid,
) -> Result<u64, sea_orm::DbErr> {
    let res = rooms::Entity::delete_by_id(room_id).exec(conn).await?;
    Ok(res.rows_affected)
}
