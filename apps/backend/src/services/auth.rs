//! Login service: credential check plus access-token issuance.

use std::time::SystemTime;

use sea_orm::ConnectionTrait;
use tracing::debug;

use crate::auth::jwt::mint_access_token;
use crate::auth::password::verify_password;
use crate::error::AppError;
use crate::logging::security::login_failed;
use crate::repos::players::{self, Player};
use crate::state::security_config::SecurityConfig;

/// Authenticate a player by login and password and mint an access token.
///
/// Unknown login and wrong password both map to the same generic
/// Unauthorized so the response never reveals which part was wrong.
pub async fn authenticate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    security: &SecurityConfig,
    login: &str,
    password: &str,
) -> Result<(Player, String), AppError> {
    let Some(player) = players::find_by_login(conn, login).await? else {
        login_failed("unknown_login", Some(login));
        return Err(AppError::unauthorized());
    };

    if !verify_password(password, &player.password_hash)? {
        login_failed("bad_password", Some(login));
        return Err(AppError::unauthorized());
    }

    let token = mint_access_token(
        &player.id.to_string(),
        &player.login,
        SystemTime::now(),
        security,
    )?;

    debug!(player_id = %player.id, "Player authenticated");
    Ok((player, token))
}
