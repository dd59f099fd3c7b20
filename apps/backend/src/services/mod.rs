pub mod auth;
pub mod games;
pub mod players;
pub mod rooms;
