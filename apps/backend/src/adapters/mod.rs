//! Adapters for external dependencies.

pub mod games_sea;
pub mod players_sea;
pub mod rooms_sea;
