//! JWT token generation helpers for tests

use std::time::SystemTime;

use backend::repos::players::Player;
use backend::state::security_config::SecurityConfig;
use backend::{mint_access_token, AppError};

/// Mint a bearer token for `player`, signed with the given security config.
pub fn token_for(player: &Player, security: &SecurityConfig) -> Result<String, AppError> {
    mint_access_token(
        &player.id.to_string(),
        &player.login,
        SystemTime::now(),
        security,
    )
}

/// Authorization header pair for `TestRequest::insert_header`.
pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}
