//! Player repository functions for the domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::adapters::players_sea as players_adapter;
use crate::entities::players;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::infra::db_errors::map_db_err;

/// Player domain model: identity plus cumulative results.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: Uuid,
    pub login: String,
    /// bcrypt hash; never leaves the service layer.
    pub password_hash: String,
    pub nickname: String,
    pub wins: i32,
    pub losses: i32,
    pub draws: i32,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

impl From<players::Model> for Player {
    fn from(m: players::Model) -> Self {
        Player {
            id: m.id,
            login: m.login,
            password_hash: m.password_hash,
            nickname: m.nickname,
            wins: m.wins,
            losses: m.losses,
            draws: m.draws,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: Uuid,
) -> Result<Option<Player>, DomainError> {
    let player = players_adapter::find_by_id(conn, player_id)
        .await
        .map_err(map_db_err)?;
    Ok(player.map(Player::from))
}

/// Find a player by id, or fail with NotFound.
pub async fn require_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: Uuid,
) -> Result<Player, DomainError> {
    find_by_id(conn, player_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Player, format!("Player {player_id} not found"))
    })
}

pub async fn find_by_login<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    login: &str,
) -> Result<Option<Player>, DomainError> {
    let player = players_adapter::find_by_login(conn, login)
        .await
        .map_err(map_db_err)?;
    Ok(player.map(Player::from))
}

pub async fn find_by_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_ids: Vec<Uuid>,
) -> Result<Vec<Player>, DomainError> {
    let players = players_adapter::find_by_ids(conn, player_ids)
        .await
        .map_err(map_db_err)?;
    Ok(players.into_iter().map(Player::from).collect())
}

pub async fn create_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    login: &str,
    password_hash: &str,
    nickname: &str,
) -> Result<Player, DomainError> {
    let player = players_adapter::create_player(conn, Uuid::new_v4(), login, password_hash, nickname)
        .await
        .map_err(map_db_err)?;
    Ok(Player::from(player))
}

async fn add_stats<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: Uuid,
    wins: i32,
    losses: i32,
    draws: i32,
) -> Result<(), DomainError> {
    let rows = players_adapter::add_stats(conn, player_id, wins, losses, draws)
        .await
        .map_err(map_db_err)?;
    if rows == 0 {
        return Err(DomainError::not_found(
            NotFoundKind::Player,
            format!("Player {player_id} not found"),
        ));
    }
    Ok(())
}

pub async fn record_win<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: Uuid,
) -> Result<(), DomainError> {
    add_stats(conn, player_id, 1, 0, 0).await
}

pub async fn record_loss<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: Uuid,
) -> Result<(), DomainError> {
    add_stats(conn, player_id, 0, 1, 0).await
}

pub async fn record_draw<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: Uuid,
) -> Result<(), DomainError> {
    add_stats(conn, player_id, 0, 0, 1).await
}

/// One ranking page plus the total number of players.
pub async fn ranking_page<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    offset: u64,
    limit: u64,
) -> Result<(Vec<Player>, u64), DomainError> {
    let total = players_adapter::count_players(conn)
        .await
        .map_err(map_db_err)?;
    let page = players_adapter::ranking_page(conn, offset, limit)
        .await
        .map_err(map_db_err)?;
    Ok((page.into_iter().map(Player::from).collect(), total))
}
