use actix_web::web;

pub mod auth;
pub mod health;
pub mod players;
pub mod rooms;

/// Configure application routes.
///
/// Used by `main.rs` and by route-level tests, so both serve exactly the
/// same paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.configure(health::configure_routes);

    // Auth routes: /api/auth/**
    cfg.service(web::scope("/api/auth").configure(auth::configure_routes));

    // Room + game routes: /api/rooms/**
    cfg.service(web::scope("/api/rooms").configure(rooms::configure_routes));

    // Player routes: /api/players/**
    cfg.service(web::scope("/api/players").configure(players::configure_routes));
}
