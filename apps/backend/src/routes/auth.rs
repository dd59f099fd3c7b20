//! Login endpoint: credentials in, JWT + player profile out.

use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::routes::players::PlayerResponse;
use crate::services::auth::authenticate;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub player: PlayerResponse,
}

/// POST /api/auth/login
async fn login(
    req: web::Json<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let body = req.into_inner();
    let (player, token) = authenticate(
        &app_state.db,
        &app_state.security,
        &body.login,
        &body.password,
    )
    .await?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        token,
        player: player.into(),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/login").route(web::post().to(login)));
}
