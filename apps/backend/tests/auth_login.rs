mod common;
mod support;

use actix_web::test;
use serde_json::json;
use support::create_test_app;
use support::factory::{create_test_player, TEST_PASSWORD};
use support::test_state::{build_test_state, test_security_config};

#[actix_web::test]
async fn test_login_returns_token_and_profile() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let player = create_test_player(&state.db, "alice").await?;

    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({
            "login": player.login,
            "password": TEST_PASSWORD,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;

    // Token decodes against the same security config and names the player
    let token = body["token"].as_str().expect("token should be a string");
    assert!(!token.is_empty());
    let claims = backend::verify_access_token(token, &test_security_config())?;
    assert_eq!(claims.sub, player.id.to_string());
    assert_eq!(claims.login, player.login);
    assert_eq!(claims.exp, claims.iat + 3600);

    // Profile payload, without the password hash
    assert_eq!(body["player"]["id"], json!(player.id));
    assert_eq!(body["player"]["login"], json!(player.login));
    assert_eq!(body["player"]["nickname"], json!(player.nickname));
    assert_eq!(body["player"]["wins"], 0);
    assert_eq!(body["player"]["losses"], 0);
    assert_eq!(body["player"]["draws"], 0);
    assert!(
        body["player"].get("password_hash").is_none(),
        "profile must not leak the password hash"
    );

    Ok(())
}

#[actix_web::test]
async fn test_login_wrong_password_is_unauthorized() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let player = create_test_player(&state.db, "bob").await?;

    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({
            "login": player.login,
            "password": "not the password",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    // Deliberately the same generic body as an unknown login
    common::assert_problem_details_structure(resp, 401, "UNAUTHORIZED", "Authentication required")
        .await;

    Ok(())
}

#[actix_web::test]
async fn test_login_unknown_login_is_unauthorized() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({
            "login": "nobody-with-this-login",
            "password": TEST_PASSWORD,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    common::assert_problem_details_structure(resp, 401, "UNAUTHORIZED", "Authentication required")
        .await;

    Ok(())
}
