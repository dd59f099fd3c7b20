//! Error codes for the OXO backend API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the OXO backend API.
///
/// This enum ensures type safety and prevents the use of ad-hoc error codes.
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string that appears
/// in HTTP responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// Authentication required
    Unauthorized,
    /// Missing or malformed Bearer token
    UnauthorizedMissingBearer,
    /// Invalid JWT token
    UnauthorizedInvalidJwt,
    /// JWT token has expired
    UnauthorizedExpiredJwt,
    /// Access denied (caller is not an occupant of the room)
    Forbidden,

    // Request Validation
    /// Player already occupies a room
    PlayerInAnotherRoom,
    /// Room title missing
    TitleRequired,
    /// Room title over the length limit
    TitleTooLong,
    /// Room description over the length limit
    DescriptionTooLong,
    /// Room already has a guest
    RoomFull,
    /// Player is already the host of this room
    AlreadyHost,
    /// Player is already the guest of this room
    AlreadyGuest,
    /// Player is not an occupant of this room
    NotInRoom,
    /// A game is still in progress
    GameInProgress,
    /// The game has already finished
    GameCompleted,
    /// Not this player's turn
    OutOfTurn,
    /// Board position outside 1..=9
    InvalidPosition,
    /// Board position already holds a mark
    PositionOccupied,

    // Resource Not Found
    /// Player not found
    PlayerNotFound,
    /// Room not found
    RoomNotFound,
    /// Game not found
    GameNotFound,

    // System Errors
    /// Database error
    DbError,
    /// Data corruption detected
    DataCorruption,
    /// Configuration error
    ConfigError,
    /// Internal server error
    Internal,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    ///
    /// This is the exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            // Authentication & Authorization
            Self::Unauthorized => "UNAUTHORIZED",
            Self::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            Self::UnauthorizedInvalidJwt => "UNAUTHORIZED_INVALID_JWT",
            Self::UnauthorizedExpiredJwt => "UNAUTHORIZED_EXPIRED_JWT",
            Self::Forbidden => "FORBIDDEN",

            // Request Validation
            Self::PlayerInAnotherRoom => "PLAYER_IN_ANOTHER_ROOM",
            Self::TitleRequired => "TITLE_REQUIRED",
            Self::TitleTooLong => "TITLE_TOO_LONG",
            Self::DescriptionTooLong => "DESCRIPTION_TOO_LONG",
            Self::RoomFull => "ROOM_FULL",
            Self::AlreadyHost => "ALREADY_HOST",
            Self::AlreadyGuest => "ALREADY_GUEST",
            Self::NotInRoom => "NOT_IN_ROOM",
            Self::GameInProgress => "GAME_IN_PROGRESS",
            Self::GameCompleted => "GAME_COMPLETED",
            Self::OutOfTurn => "OUT_OF_TURN",
            Self::InvalidPosition => "INVALID_POSITION",
            Self::PositionOccupied => "POSITION_OCCUPIED",

            // Resource Not Found
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::RoomNotFound => "ROOM_NOT_FOUND",
            Self::GameNotFound => "GAME_NOT_FOUND",

            // System Errors
            Self::DbError => "DB_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::ConfigError => "CONFIG_ERROR",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_strings() {
        // Verify that all error codes produce the expected SCREAMING_SNAKE_CASE strings
        assert_eq!(ErrorCode::Unauthorized.as_str(), "UNAUTHORIZED");
        assert_eq!(
            ErrorCode::UnauthorizedMissingBearer.as_str(),
            "UNAUTHORIZED_MISSING_BEARER"
        );
        assert_eq!(
            ErrorCode::UnauthorizedInvalidJwt.as_str(),
            "UNAUTHORIZED_INVALID_JWT"
        );
        assert_eq!(
            ErrorCode::UnauthorizedExpiredJwt.as_str(),
            "UNAUTHORIZED_EXPIRED_JWT"
        );
        assert_eq!(ErrorCode::Forbidden.as_str(), "FORBIDDEN");
        assert_eq!(
            ErrorCode::PlayerInAnotherRoom.as_str(),
            "PLAYER_IN_ANOTHER_ROOM"
        );
        assert_eq!(ErrorCode::TitleRequired.as_str(), "TITLE_REQUIRED");
        assert_eq!(ErrorCode::TitleTooLong.as_str(), "TITLE_TOO_LONG");
        assert_eq!(
            ErrorCode::DescriptionTooLong.as_str(),
            "DESCRIPTION_TOO_LONG"
        );
        assert_eq!(ErrorCode::RoomFull.as_str(), "ROOM_FULL");
        assert_eq!(ErrorCode::AlreadyHost.as_str(), "ALREADY_HOST");
        assert_eq!(ErrorCode::AlreadyGuest.as_str(), "ALREADY_GUEST");
        assert_eq!(ErrorCode::NotInRoom.as_str(), "NOT_IN_ROOM");
        assert_eq!(ErrorCode::GameInProgress.as_str(), "GAME_IN_PROGRESS");
        assert_eq!(ErrorCode::GameCompleted.as_str(), "GAME_COMPLETED");
        assert_eq!(ErrorCode::OutOfTurn.as_str(), "OUT_OF_TURN");
        assert_eq!(ErrorCode::InvalidPosition.as_str(), "INVALID_POSITION");
        assert_eq!(ErrorCode::PositionOccupied.as_str(), "POSITION_OCCUPIED");
        assert_eq!(ErrorCode::PlayerNotFound.as_str(), "PLAYER_NOT_FOUND");
        assert_eq!(ErrorCode::RoomNotFound.as_str(), "ROOM_NOT_FOUND");
        assert_eq!(ErrorCode::GameNotFound.as_str(), "GAME_NOT_FOUND");
        assert_eq!(ErrorCode::DbError.as_str(), "DB_ERROR");
        assert_eq!(ErrorCode::DataCorruption.as_str(), "DATA_CORRUPTION");
        assert_eq!(ErrorCode::ConfigError.as_str(), "CONFIG_ERROR");
        assert_eq!(ErrorCode::Internal.as_str(), "INTERNAL");
    }

    #[test]
    fn test_display_trait() {
        assert_eq!(format!("{}", ErrorCode::Unauthorized), "UNAUTHORIZED");
        assert_eq!(format!("{}", ErrorCode::OutOfTurn), "OUT_OF_TURN");
        assert_eq!(
            format!("{}", ErrorCode::PositionOccupied),
            "POSITION_OCCUPIED"
        );
        assert_eq!(format!("{}", ErrorCode::RoomNotFound), "ROOM_NOT_FOUND");
        assert_eq!(format!("{}", ErrorCode::DbError), "DB_ERROR");
    }
}
