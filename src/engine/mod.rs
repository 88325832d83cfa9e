pub mod draw;
pub mod player_setup;
pub mod rng;
pub mod ticket_purchase;

pub use draw::*;
pub use rng::*;
