pub mod award;
pub mod config;
pub mod player;
pub mod pool;
pub mod roster;

pub use award::*;
pub use config::*;
pub use player::*;
pub use pool::*;
pub use roster::*;
