//! Domain layer: pure game logic types and helpers.

pub mod board;

#[cfg(test)]
mod tests_props_board;

// Re-exports for ergonomics
pub use board::{Board, Mark, EMPTY_BOARD};
