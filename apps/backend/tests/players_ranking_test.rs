mod common;
mod support;

use actix_web::test;
use backend::repos::players::{self, Player};
use backend::services::players as players_service;
use backend::AppError;
use sea_orm::ConnectionTrait;
use support::auth::{bearer, token_for};
use support::create_test_app;
use support::factory::create_test_player;
use support::test_state::build_test_state;
use uuid::Uuid;

/// Five players with distinct records, returned best-first:
/// 2-0-0, then 1-0-1 draw ahead of 1-0-0, then a clean 0 record ahead of 0-1-0.
async fn seed_ladder(
    conn: &(impl ConnectionTrait + Send + Sync),
) -> Result<Vec<Player>, AppError> {
    let champion = create_test_player(conn, "champion").await?;
    players::record_win(conn, champion.id).await?;
    players::record_win(conn, champion.id).await?;

    let runner_up = create_test_player(conn, "runner-up").await?;
    players::record_win(conn, runner_up.id).await?;
    players::record_draw(conn, runner_up.id).await?;

    let third = create_test_player(conn, "third").await?;
    players::record_win(conn, third.id).await?;

    let fourth = create_test_player(conn, "fourth").await?;

    let fifth = create_test_player(conn, "fifth").await?;
    players::record_loss(conn, fifth.id).await?;

    Ok(vec![champion, runner_up, third, fourth, fifth])
}

fn ids(page: &[Player]) -> Vec<Uuid> {
    page.iter().map(|p| p.id).collect()
}

#[tokio::test]
async fn test_ranking_orders_by_wins_draws_then_losses() -> Result<(), Box<dyn std::error::Error>>
{
    let state = build_test_state().await?;
    let ladder = seed_ladder(&state.db).await?;

    let page = players_service::ranking(&state.db, None, None).await?;

    assert_eq!(page.total, 5);
    assert_eq!(page.page, 1);
    assert_eq!(page.page_size, players_service::DEFAULT_PAGE_SIZE);
    assert_eq!(ids(&page.players), ids(&ladder));

    // Stats came back through the ranking read
    assert_eq!(page.players[0].wins, 2);
    assert_eq!(page.players[1].draws, 1);
    assert_eq!(page.players[4].losses, 1);

    Ok(())
}

#[tokio::test]
async fn test_ranking_pages_are_stable_slices() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let ladder = seed_ladder(&state.db).await?;

    let page1 = players_service::ranking(&state.db, Some(1), Some(2)).await?;
    let page2 = players_service::ranking(&state.db, Some(2), Some(2)).await?;
    let page3 = players_service::ranking(&state.db, Some(3), Some(2)).await?;

    assert_eq!(ids(&page1.players), ids(&ladder[0..2]));
    assert_eq!(ids(&page2.players), ids(&ladder[2..4]));
    assert_eq!(ids(&page3.players), ids(&ladder[4..5]));
    for page in [&page1, &page2, &page3] {
        assert_eq!(page.total, 5);
        assert_eq!(page.page_size, 2);
    }

    Ok(())
}

#[tokio::test]
async fn test_ranking_clamps_out_of_range_paging() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let ladder = seed_ladder(&state.db).await?;

    // Far past the end: serve the last page instead of an empty one
    let page = players_service::ranking(&state.db, Some(99), Some(2)).await?;
    assert_eq!(page.page, 3);
    assert_eq!(ids(&page.players), ids(&ladder[4..5]));

    // Page zero is treated as the first page
    let page = players_service::ranking(&state.db, Some(0), Some(2)).await?;
    assert_eq!(page.page, 1);
    assert_eq!(ids(&page.players), ids(&ladder[0..2]));

    // Page size is clamped into 1..=MAX_PAGE_SIZE
    let page = players_service::ranking(&state.db, Some(1), Some(0)).await?;
    assert_eq!(page.page_size, 1);
    assert_eq!(page.players.len(), 1);

    let page = players_service::ranking(&state.db, Some(1), Some(5000)).await?;
    assert_eq!(page.page_size, players_service::MAX_PAGE_SIZE);
    assert_eq!(page.players.len(), 5);

    Ok(())
}

#[tokio::test]
async fn test_ranking_on_an_empty_ladder() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;

    let page = players_service::ranking(&state.db, Some(7), None).await?;
    assert_eq!(page.total, 0);
    assert_eq!(page.page, 1, "no rows means a single empty page");
    assert!(page.players.is_empty());

    Ok(())
}

#[actix_web::test]
async fn test_ranking_endpoint_serves_paged_standings() -> Result<(), Box<dyn std::error::Error>>
{
    let state = build_test_state().await?;
    let ladder = seed_ladder(&state.db).await?;
    let token = token_for(&ladder[0], &state.security)?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get()
        .uri("/api/players/ranking?page=1&page_size=2")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;

    assert_eq!(body["total"], 5);
    assert_eq!(body["page"], 1);
    assert_eq!(body["page_size"], 2);
    let rows = body["players"].as_array().expect("players should be an array");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["id"], serde_json::json!(ladder[0].id));
    assert_eq!(rows[0]["wins"], 2);
    assert_eq!(rows[1]["id"], serde_json::json!(ladder[1].id));
    assert!(
        rows[0].get("password_hash").is_none(),
        "standings must not leak password hashes"
    );

    Ok(())
}

#[actix_web::test]
async fn test_ranking_endpoint_requires_auth() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get()
        .uri("/api/players/ranking")
        .to_request();
    let resp = test::call_service(&app, req).await;

    common::assert_problem_details_structure(
        resp,
        401,
        "UNAUTHORIZED_MISSING_BEARER",
        "Missing or malformed Bearer token",
    )
    .await;

    Ok(())
}
