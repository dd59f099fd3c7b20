mod common;
mod support;

use backend::repos::players;
use backend::services::rooms as rooms_service;
use backend::{with_txn, AppError, ErrorCode};
use backend_test_support::unique_helpers::unique_str;
use support::factory::{create_test_player, setup_room_with_pair};
use support::test_state::build_test_state;

#[tokio::test]
async fn test_with_txn_commits_on_ok() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;

    let login = unique_str("committed");
    let txn_login = login.clone();
    let player = with_txn(&state, move |txn| {
        Box::pin(async move {
            let player = players::create_player(txn, &txn_login, "hash", "Committed").await?;
            Ok(player)
        })
    })
    .await?;

    // Visible outside the transaction once committed
    let found = players::find_by_login(&state.db, &login).await?;
    assert_eq!(found.map(|p| p.id), Some(player.id));

    Ok(())
}

#[tokio::test]
async fn test_with_txn_rolls_back_on_err() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;

    let login = unique_str("rolled-back");
    let txn_login = login.clone();
    let err = with_txn(&state, move |txn| {
        Box::pin(async move {
            players::create_player(txn, &txn_login, "hash", "Rolled Back").await?;
            Err::<(), _>(AppError::internal("forced failure"))
        })
    })
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Internal { .. }));

    // The insert preceding the failure never became visible
    let found = players::find_by_login(&state.db, &login).await?;
    assert!(found.is_none());

    Ok(())
}

#[tokio::test]
async fn test_service_errors_inside_with_txn_leave_no_trace(
) -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let (_, guest, room) = setup_room_with_pair(&state.db).await?;
    let third = create_test_player(&state.db, "third").await?;

    let room_id = room.id;
    let third_id = third.id;
    let err = with_txn(&state, move |txn| {
        Box::pin(async move { rooms_service::join_room(txn, room_id, third_id).await })
    })
    .await
    .unwrap_err();
    assert!(
        matches!(err, AppError::Validation { code: ErrorCode::RoomFull, .. }),
        "expected RoomFull, got {err:?}"
    );

    // The room still holds its original pair
    let reloaded = rooms_service::room_for_player(&state.db, guest.id).await?;
    assert_eq!(reloaded.and_then(|r| r.guest).map(|g| g.id), Some(guest.id));

    Ok(())
}
