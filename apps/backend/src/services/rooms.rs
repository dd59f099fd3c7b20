//! Room lifecycle operations: create, join, leave, and room reads.

use std::collections::HashMap;

use sea_orm::ConnectionTrait;
use tracing::info;
use uuid::Uuid;

use crate::entities::games::GamePhase;
use crate::entities::rooms::RoomPhase;
use crate::error::AppError;
use crate::errors::domain::{DomainError, InfraErrorKind, ValidationKind};
use crate::repos::games;
use crate::repos::players;
use crate::repos::rooms::{self, Room, RoomPlayer, RowLock};
use crate::services::games as games_service;

pub const MAX_TITLE_LEN: usize = 30;
pub const MAX_DESCRIPTION_LEN: usize = 150;

/// An open room as shown in the public listing.
#[derive(Debug, Clone)]
pub struct OpenRoom {
    pub room: Room,
    pub host_nickname: String,
}

/// Create an Open room hosted by `host_id`, who starts flagged as wanting a
/// game so that the first join can start one immediately.
pub async fn create_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    host_id: Uuid,
    title: &str,
    description: Option<&str>,
) -> Result<Room, AppError> {
    if rooms::find_by_player(conn, host_id).await?.is_some() {
        return Err(DomainError::validation(
            ValidationKind::PlayerInAnotherRoom,
            "Player already occupies a room",
        )
        .into());
    }
    if title.is_empty() {
        return Err(DomainError::validation(ValidationKind::TitleRequired, "Title is required").into());
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(DomainError::validation(
            ValidationKind::TitleTooLong,
            format!("Title is too long. Max length is {MAX_TITLE_LEN}"),
        )
        .into());
    }
    if description.map(|d| d.chars().count() > MAX_DESCRIPTION_LEN) == Some(true) {
        return Err(DomainError::validation(
            ValidationKind::DescriptionTooLong,
            format!("Description is too long. Max length is {MAX_DESCRIPTION_LEN}"),
        )
        .into());
    }

    let room = rooms::create(conn, host_id, title, description).await?;
    info!(room_id = %room.id, host_id = %host_id, "Room created");
    Ok(room)
}

/// Attach `player_id` as guest and start the first game.
///
/// Joining expresses "wants a new game" for the guest, and the waiting host
/// was flagged at creation, so game creation is unconditional here.
pub async fn join_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: Uuid,
    player_id: Uuid,
) -> Result<Room, AppError> {
    let mut room = rooms::require_by_id(conn, room_id, RowLock::Exclusive).await?;

    if let Some(guest) = room.guest {
        if guest.id != player_id {
            return Err(DomainError::validation(ValidationKind::RoomFull, "Room is full").into());
        }
    }
    if room.is_host(player_id) {
        return Err(DomainError::validation(
            ValidationKind::AlreadyHost,
            "Player is already the host of this room",
        )
        .into());
    }
    if room.is_guest(player_id) {
        return Err(DomainError::validation(
            ValidationKind::AlreadyGuest,
            "Player is already the guest of this room",
        )
        .into());
    }
    if rooms::find_by_player(conn, player_id).await?.is_some() {
        return Err(DomainError::validation(
            ValidationKind::PlayerInAnotherRoom,
            "Player already occupies a room",
        )
        .into());
    }

    room.guest = Some(RoomPlayer {
        id: player_id,
        wants_new_game: true,
    });
    games_service::start_game(conn, &mut room).await?;
    room.phase = RoomPhase::Full;
    let room = rooms::update(conn, &room).await?;

    info!(room_id = %room.id, guest_id = %player_id, "Guest joined room");
    Ok(room)
}

/// Remove `player_id` from the room.
///
/// Leaving an in-progress game forfeits it: the remaining occupant is
/// recorded as winner and both stat rows are updated before the room
/// transition. A host who leaves hands the room to the guest; the last
/// occupant out deletes the room.
pub async fn leave_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: Uuid,
    player_id: Uuid,
) -> Result<(), AppError> {
    let mut room = rooms::require_by_id(conn, room_id, RowLock::Exclusive).await?;

    if !room.is_occupant(player_id) {
        return Err(DomainError::validation(
            ValidationKind::NotInRoom,
            "Player is not in this room",
        )
        .into());
    }

    if let Some(game_id) = room.game_id {
        let mut game = games::require_by_id(conn, game_id).await?;
        if game.in_progress() {
            let winner_id = game.opponent_of(player_id).ok_or_else(|| {
                DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    "Game participants do not match room occupants",
                )
            })?;
            game.phase = GamePhase::Completed;
            game.winner_id = Some(winner_id);
            players::record_win(conn, winner_id).await?;
            players::record_loss(conn, player_id).await?;
            games::update(conn, &game).await?;
            info!(room_id = %room.id, game_id = %game.id, winner_id = %winner_id, "Game forfeited by leaving player");
        }
    }

    if room.is_host(player_id) {
        match room.guest.take() {
            Some(guest) => {
                // Guest takes over the room, keeping their own flag.
                room.host = guest;
                room.phase = RoomPhase::Open;
                rooms::update(conn, &room).await?;
            }
            None => {
                rooms::delete(conn, room.id).await?;
            }
        }
    } else {
        room.guest = None;
        room.phase = RoomPhase::Open;
        rooms::update(conn, &room).await?;
    }

    info!(room_id = %room_id, player_id = %player_id, "Player left room");
    Ok(())
}

/// List all Open rooms with their hosts' nicknames, oldest first.
pub async fn open_rooms<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<OpenRoom>, AppError> {
    let rooms = rooms::list_by_phase(conn, RoomPhase::Open).await?;
    let host_ids: Vec<Uuid> = rooms.iter().map(|r| r.host.id).collect();
    let nicknames: HashMap<Uuid, String> = players::find_by_ids(conn, host_ids)
        .await?
        .into_iter()
        .map(|p| (p.id, p.nickname))
        .collect();

    Ok(rooms
        .into_iter()
        .map(|room| {
            let host_nickname = nicknames.get(&room.host.id).cloned().unwrap_or_default();
            OpenRoom {
                room,
                host_nickname,
            }
        })
        .collect())
}

/// Read a room by id. Occupants only; no lock.
pub async fn room_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: Uuid,
    player_id: Uuid,
) -> Result<Room, AppError> {
    let room = rooms::require_by_id(conn, room_id, RowLock::None).await?;
    if !room.is_occupant(player_id) {
        return Err(AppError::forbidden(
            "Player is not an occupant of this room",
        ));
    }
    Ok(room)
}

/// Find the room `player_id` currently occupies, if any. No lock.
pub async fn room_for_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: Uuid,
) -> Result<Option<Room>, AppError> {
    Ok(rooms::find_by_player(conn, player_id).await?)
}
