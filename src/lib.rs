//! Tiered lottery draw simulator.
//!
//! One human player and a randomized set of CPU players buy tickets for a
//! round, three prize tiers are drawn in fixed order (grand, second, third),
//! prizes are credited to player balances, and the house keeps the rest.
//! Everything runs synchronously on the calling thread; the only state is a
//! per-round ticket pool and the player roster.

// -----------------------------------------------------------------------------
// Modules
// -----------------------------------------------------------------------------
pub mod constants;
pub mod display;
pub mod engine;
pub mod errors;
pub mod state;

pub use engine::draw::DrawEngine;
pub use engine::rng::{DrawRng, GameRng};
pub use errors::{LotteryError, Result};
pub use state::award::{AwardResult, Tier};
pub use state::config::LotteryConfig;
pub use state::player::Player;
pub use state::pool::TicketPool;
pub use state::roster::Roster;
