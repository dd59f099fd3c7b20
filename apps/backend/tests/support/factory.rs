use backend::repos::players::{self, Player};
use backend::repos::rooms::Room;
use backend::services::rooms as rooms_service;
use backend::AppError;
use backend_test_support::unique_helpers::unique_str;
use sea_orm::ConnectionTrait;

/// Plaintext password every factory-made player logs in with.
pub const TEST_PASSWORD: &str = "correct horse battery staple";

/// Bcrypt cost for test fixtures. DEFAULT_COST makes test suites crawl.
const TEST_BCRYPT_COST: u32 = 4;

/// Create a player with a unique login and nickname derived from `prefix`,
/// whose password is [`TEST_PASSWORD`].
pub async fn create_test_player(
    conn: &(impl ConnectionTrait + Send + Sync),
    prefix: &str,
) -> Result<Player, AppError> {
    let login = unique_str(prefix);
    let nickname = format!("{prefix} (test)");
    let password_hash = bcrypt::hash(TEST_PASSWORD, TEST_BCRYPT_COST)
        .map_err(|e| AppError::internal(format!("Failed to hash test password: {e}")))?;

    let player = players::create_player(conn, &login, &password_hash, &nickname).await?;
    Ok(player)
}

/// Create two players and a room where the first hosts and the second has
/// joined. Joining starts the first game, so the returned room is Full and
/// carries a game id.
pub async fn setup_room_with_pair(
    conn: &(impl ConnectionTrait + Send + Sync),
) -> Result<(Player, Player, Room), AppError> {
    let host = create_test_player(conn, "host").await?;
    let guest = create_test_player(conn, "guest").await?;

    let room = rooms_service::create_room(conn, host.id, "Test room", None).await?;
    let room = rooms_service::join_room(conn, room.id, guest.id).await?;

    Ok((host, guest, room))
}
