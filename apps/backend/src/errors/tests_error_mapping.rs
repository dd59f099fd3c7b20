// Unit tests for error mapping - no running server or database required
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind, ValidationKind};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_to_400() {
    let cases = [
        (
            ValidationKind::PlayerInAnotherRoom,
            ErrorCode::PlayerInAnotherRoom,
        ),
        (ValidationKind::TitleRequired, ErrorCode::TitleRequired),
        (ValidationKind::TitleTooLong, ErrorCode::TitleTooLong),
        (
            ValidationKind::DescriptionTooLong,
            ErrorCode::DescriptionTooLong,
        ),
        (ValidationKind::RoomFull, ErrorCode::RoomFull),
        (ValidationKind::AlreadyHost, ErrorCode::AlreadyHost),
        (ValidationKind::AlreadyGuest, ErrorCode::AlreadyGuest),
        (ValidationKind::NotInRoom, ErrorCode::NotInRoom),
        (ValidationKind::GameInProgress, ErrorCode::GameInProgress),
        (ValidationKind::GameCompleted, ErrorCode::GameCompleted),
        (ValidationKind::OutOfTurn, ErrorCode::OutOfTurn),
        (ValidationKind::InvalidPosition, ErrorCode::InvalidPosition),
        (
            ValidationKind::PositionOccupied,
            ErrorCode::PositionOccupied,
        ),
    ];

    for (kind, expected_code) in cases {
        let app: AppError = DomainError::validation(kind, "rejected").into();
        assert_eq!(app.code(), expected_code, "kind {kind:?}");
        assert_eq!(app.status().as_u16(), 400, "kind {kind:?}");
    }
}

#[test]
fn maps_not_found() {
    let nf = DomainError::not_found(NotFoundKind::Room, "no room");
    let app: AppError = nf.into();
    assert_eq!(app.code().as_str(), "ROOM_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);

    let nf = DomainError::not_found(NotFoundKind::Game, "no game");
    let app: AppError = nf.into();
    assert_eq!(app.code(), ErrorCode::GameNotFound);

    let nf = DomainError::not_found(NotFoundKind::Player, "no player");
    let app: AppError = nf.into();
    assert_eq!(app.code(), ErrorCode::PlayerNotFound);
}

#[test]
fn maps_forbidden() {
    let fb = DomainError::forbidden("not an occupant");
    let app: AppError = fb.into();
    assert_eq!(app.code(), ErrorCode::Forbidden);
    assert_eq!(app.status().as_u16(), 403);
}

#[test]
fn maps_infra() {
    let db = DomainError::infra(InfraErrorKind::Db, "store down");
    let app: AppError = db.into();
    assert_eq!(app.code().as_str(), "DB_ERROR");
    assert_eq!(app.status().as_u16(), 500);
    assert!(matches!(app, AppError::Db { .. }));

    let corr = DomainError::infra(InfraErrorKind::DataCorruption, "bad board");
    let app: AppError = corr.into();
    assert_eq!(app.code().as_str(), "DATA_CORRUPTION");
    assert_eq!(app.status().as_u16(), 500);
    assert!(matches!(app, AppError::DataCorruption { .. }));
}

#[tokio::test]
async fn renders_problem_details_with_trace_parity() {
    use actix_web::error::ResponseError;
    use actix_web::http::StatusCode;
    use backend_test_support::problem_details::assert_problem_details_from_http_response;

    crate::trace_ctx::with_trace_id("trace-err-map".to_string(), async {
        let app = AppError::Validation {
            code: ErrorCode::RoomFull,
            detail: "Room is full".to_string(),
        };
        let resp = app.error_response();
        assert_problem_details_from_http_response(
            resp,
            "ROOM_FULL",
            StatusCode::BAD_REQUEST,
            Some("Room is full"),
        )
        .await;
    })
    .await;
}

#[test]
fn unauthorized_variants_keep_distinct_codes() {
    assert_eq!(
        AppError::unauthorized_missing_bearer().code(),
        ErrorCode::UnauthorizedMissingBearer
    );
    assert_eq!(
        AppError::unauthorized_invalid_jwt().code(),
        ErrorCode::UnauthorizedInvalidJwt
    );
    assert_eq!(
        AppError::unauthorized_expired_jwt().code(),
        ErrorCode::UnauthorizedExpiredJwt
    );
    assert_eq!(AppError::unauthorized().code(), ErrorCode::Unauthorized);
    for app in [
        AppError::unauthorized(),
        AppError::unauthorized_missing_bearer(),
        AppError::unauthorized_invalid_jwt(),
        AppError::unauthorized_expired_jwt(),
    ] {
        assert_eq!(app.status().as_u16(), 401);
    }
}
