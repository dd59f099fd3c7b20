//! Room repository functions for the domain layer (generic over ConnectionTrait).

use sea_orm::{ConnectionTrait, DbErr};
use uuid::Uuid;

use crate::adapters::rooms_sea as rooms_adapter;
pub use crate::adapters::rooms_sea::RowLock;
use crate::entities::rooms;
use crate::entities::rooms::RoomPhase;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::infra::db_errors::map_db_err;

/// An occupant slot of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomPlayer {
    pub id: Uuid,
    pub wants_new_game: bool,
}

/// Room domain model.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: Uuid,
    pub host: RoomPlayer,
    pub guest: Option<RoomPlayer>,
    pub game_id: Option<Uuid>,
    pub title: String,
    pub description: Option<String>,
    pub phase: RoomPhase,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

impl Room {
    pub fn is_host(&self, player_id: Uuid) -> bool {
        self.host.id == player_id
    }

    pub fn is_guest(&self, player_id: Uuid) -> bool {
        self.guest.map(|g| g.id == player_id).unwrap_or(false)
    }

    pub fn is_occupant(&self, player_id: Uuid) -> bool {
        self.is_host(player_id) || self.is_guest(player_id)
    }
}

impl From<rooms::Model> for Room {
    fn from(m: rooms::Model) -> Self {
        Room {
            id: m.id,
            host: RoomPlayer {
                id: m.host_id,
                wants_new_game: m.host_wants_new_game,
            },
            guest: m.guest_id.map(|id| RoomPlayer {
                id,
                wants_new_game: m.guest_wants_new_game,
            }),
            game_id: m.game_id,
            title: m.title,
            description: m.description,
            phase: m.phase,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

fn to_model(room: &Room) -> rooms::Model {
    rooms::Model {
        id: room.id,
        host_id: room.host.id,
        host_wants_new_game: room.host.wants_new_game,
        guest_id: room.guest.map(|g| g.id),
        guest_wants_new_game: room.guest.map(|g| g.wants_new_game).unwrap_or(false),
        game_id: room.game_id,
        title: room.title.clone(),
        description: room.description.clone(),
        phase: room.phase.clone(),
        created_at: room.created_at,
        updated_at: room.updated_at,
    }
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: Uuid,
    lock: RowLock,
) -> Result<Option<Room>, DomainError> {
    let room = rooms_adapter::find_by_id(conn, room_id, lock)
        .await
        .map_err(map_db_err)?;
    Ok(room.map(Room::from))
}

/// Find a room by id, or fail with NotFound.
pub async fn require_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: Uuid,
    lock: RowLock,
) -> Result<Room, DomainError> {
    find_by_id(conn, room_id, lock).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Room, format!("Room {room_id} not found"))
    })
}

/// Find the room a player occupies as host or guest, if any.
pub async fn find_by_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: Uuid,
) -> Result<Option<Room>, DomainError> {
    let room = rooms_adapter::find_by_player(conn, player_id)
        .await
        .map_err(map_db_err)?;
    Ok(room.map(Room::from))
}

pub async fn list_by_phase<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    phase: RoomPhase,
) -> Result<Vec<Room>, DomainError> {
    let rooms = rooms_adapter::list_by_phase(conn, phase)
        .await
        .map_err(map_db_err)?;
    Ok(rooms.into_iter().map(Room::from).collect())
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    host_id: Uuid,
    title: &str,
    description: Option<&str>,
) -> Result<Room, DomainError> {
    let room = rooms_adapter::create_room(conn, Uuid::new_v4(), host_id, title, description)
        .await
        .map_err(map_db_err)?;
    Ok(Room::from(room))
}

/// Persist the mutable fields of a room. NotFound if the row is gone.
pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room: &Room,
) -> Result<Room, DomainError> {
    let updated = rooms_adapter::update_room(conn, to_model(room))
        .await
        .map_err(|e| match e {
            DbErr::RecordNotUpdated => DomainError::not_found(
                NotFoundKind::Room,
                format!("Room {} not found", room.id),
            ),
            other => map_db_err(other),
        })?;
    Ok(Room::from(updated))
}

pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: Uuid,
) -> Result<(), DomainError> {
    let rows = rooms_adapter::delete_room(conn, room_id)
        .await
        .map_err(map_db_err)?;
    if rows == 0 {
        return Err(DomainError::not_found(
            NotFoundKind::Room,
            format!("Room {room_id} not found"),
        ));
    }
    Ok(())
}
