pub mod current_player;

pub use current_player::CurrentPlayer;
