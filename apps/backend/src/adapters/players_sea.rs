//! SeaORM adapter for the players store - generic over ConnectionTrait.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::entities::players;

// Adapter functions return DbErr; the repos layer maps to DomainError.

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: Uuid,
) -> Result<Option<players::Model>, sea_orm::DbErr> {
    players::Entity::find_by_id(player_id).one(conn).await
}

pub async fn find_by_login<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    login: &str,
) -> Result<Option<players::Model>, sea_orm::DbErr> {
    players::Entity::find()
        .filter(players::Column::Login.eq(login))
        .one(conn)
        .await
}

pub async fn find_by_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_ids: Vec<Uuid>,
) -> Result<Vec<players::Model>, sea_orm::DbErr> {
    if player_ids.is_empty() {
        return Ok(Vec::new());
    }
    players::Entity::find()
        .filter(players::Column::Id.is_in(player_ids))
        .all(conn)
        .await
}

pub async fn create_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
    login: &str,
    password_hash: &str,
    nickname: &str,
) -> Result<players::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let player_active = players::ActiveModel {
        id: Set(id),
        login: Set(login.to_string()),
        password_hash: Set(password_hash.to_string()),
        nickname: Set(nickname.to_string()),
        wins: Set(0),
        losses: Set(0),
        draws: Set(0),
        created_at: Set(now),
        updated_at: Set(now),
    };

    player_active.insert(conn).await
}

/// Add deltas to a player's cumulative counters in place.
pub async fn add_stats<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: Uuid,
    wins: i32,
    losses: i32,
    draws: i32,
) -> Result<u64, sea_orm::DbErr> {
    let res = players::Entity::update_many()
        .col_expr(
            players::Column::Wins,
            Expr::col(players::Column::Wins).add(wins),
        )
        .col_expr(
            players::Column::Losses,
            Expr::col(players::Column::Losses).add(losses),
        )
        .col_expr(
            players::Column::Draws,
            Expr::col(players::Column::Draws).add(draws),
        )
        .col_expr(
            players::Column::UpdatedAt,
            Expr::value(time::OffsetDateTime::now_utc()),
        )
        .filter(players::Column::Id.eq(player_id))
        .exec(conn)
        .await?;

    Ok(res.rows_affected)
}

/// One page of the ranking: wins desc, draws desc, losses asc.
pub async fn ranking_page<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    offset: u64,
    limit: u64,
) -> Result<Vec<players::Model>, sea_orm::DbErr> {
    players::Entity::find()
        .order_by_desc(players::Column::Wins)
        .order_by_desc(players::Column::Draws)
        .order_by_asc(players::Column::Losses)
        .offset(offset)
        .limit(limit)
        .all(conn)
        .await
}

pub async fn count_players<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<u64, sea_orm::DbErr> {
    players::Entity::find().count(conn).await
}
