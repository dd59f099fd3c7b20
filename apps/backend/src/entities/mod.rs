pub mod games;
pub mod players;
pub mod rooms;

pub use games::Entity as Games;
pub use games::Model as Game;
pub use players::Entity as Players;
pub use players::Model as Player;
pub use rooms::Entity as Rooms;
pub use rooms::Model as Room;
