//! Player-facing HTTP routes.

use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::extractors::CurrentPlayer;
use crate::repos::players::Player;
use crate::services::players as players_service;
use crate::state::app_state::AppState;

/// Public view of a player. Never carries the password hash.
#[derive(Debug, Serialize)]
pub struct PlayerResponse {
    pub id: Uuid,
    pub login: String,
    pub nickname: String,
    pub wins: i32,
    pub losses: i32,
    pub draws: i32,
}

impl From<Player> for PlayerResponse {
    fn from(p: Player) -> Self {
        PlayerResponse {
            id: p.id,
            login: p.login,
            nickname: p.nickname,
            wins: p.wins,
            losses: p.losses,
            draws: p.draws,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RankingQuery {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct RankingResponse {
    pub players: Vec<PlayerResponse>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
}

/// GET /api/players/ranking
///
/// Cumulative standings, best first. `page` is 1-based and clamped to the
/// last page server-side.
async fn ranking(
    _current: CurrentPlayer,
    query: web::Query<RankingQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let page = players_service::ranking(&app_state.db, query.page, query.page_size).await?;

    Ok(HttpResponse::Ok().json(RankingResponse {
        players: page.players.into_iter().map(PlayerResponse::from).collect(),
        total: page.total,
        page: page.page,
        page_size: page.page_size,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/ranking").route(web::get().to(ranking)));
}
