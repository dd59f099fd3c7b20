pub mod app_builder;
pub mod auth;
pub mod factory;
pub mod game_setup;
pub mod test_state;

// Re-export only what current tests actually import
pub use app_builder::create_test_app;
