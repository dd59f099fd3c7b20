//! Helpers for driving a room's current game from tests.
//!
//! The opening player is chosen at random when a game starts, so tests read
//! the turn order off the game state instead of assuming it.

use backend::repos::games::Game;
use backend::services::games as games_service;
use backend::AppError;
use sea_orm::ConnectionTrait;
use uuid::Uuid;

/// The two participants of the room's current game, in turn order.
pub async fn ordered_players(
    conn: &(impl ConnectionTrait + Send + Sync),
    room_id: Uuid,
    occupant: Uuid,
) -> Result<(Uuid, Uuid), AppError> {
    let game = games_service::game_state(conn, room_id, occupant).await?;
    let first = game.current_player_id;
    let second = game.opponent_of(first).ok_or_else(|| {
        AppError::internal("Current player is not a participant of its own game")
    })?;
    Ok((first, second))
}

/// Play the room's game to a win for the opening player.
///
/// The opener takes the top row (1, 2, 3) while the answer moves sit in the
/// middle row. Returns `(winner, loser)`.
pub async fn play_first_mover_win(
    conn: &(impl ConnectionTrait + Send + Sync),
    room_id: Uuid,
    occupant: Uuid,
) -> Result<(Uuid, Uuid), AppError> {
    let (first, second) = ordered_players(conn, room_id, occupant).await?;

    for (player, position) in [(first, 1), (second, 4), (first, 2), (second, 5), (first, 3)] {
        games_service::apply_move(conn, room_id, player, position).await?;
    }

    Ok((first, second))
}

/// Play the room's game to a draw and return the final game state.
///
/// Fills the board without ever completing a line for either player:
/// the opener ends up on 1, 3, 4, 8, 9 and the answerer on 2, 5, 6, 7.
pub async fn play_draw(
    conn: &(impl ConnectionTrait + Send + Sync),
    room_id: Uuid,
    occupant: Uuid,
) -> Result<Game, AppError> {
    let (first, second) = ordered_players(conn, room_id, occupant).await?;

    for (player, position) in [
        (first, 1),
        (second, 2),
        (first, 3),
        (second, 5),
        (first, 4),
        (second, 6),
        (first, 8),
        (second, 7),
        (first, 9),
    ] {
        games_service::apply_move(conn, room_id, player, position).await?;
    }

    games_service::game_state(conn, room_id, occupant).await
}
