//! Repository functions and domain models over the adapters.

pub mod games;
pub mod players;
pub mod rooms;
