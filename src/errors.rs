use thiserror::Error;

use crate::state::award::Tier;

pub type Result<T> = std::result::Result<T, LotteryError>;

/// Domain error for a lottery round.
///
/// Any failure aborts the remainder of the round; balances already credited
/// before the failure stay credited (no rollback).
#[derive(Debug, Error)]
pub enum LotteryError {
    // ─────────────────────────────
    // Setup and configuration
    // ─────────────────────────────
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse configuration file: {0}")]
    ConfigFormat(#[from] serde_json::Error),

    // ─────────────────────────────
    // Ticket purchase
    // ─────────────────────────────
    #[error("ticket amount must be zero or greater, got {0}")]
    InvalidTicketAmount(i64),

    #[error("expected a whole number of tickets: {0}")]
    InvalidTicketInput(#[from] std::num::ParseIntError),

    // ─────────────────────────────
    // Draw and award
    // ─────────────────────────────
    #[error("there are no active tickets currently")]
    NoActiveTickets,

    #[error("award tier {0} has no winner-share draw")]
    UnknownTier(Tier),

    #[error("winner share for {0} rounds to zero winners")]
    NoTierWinners(Tier),

    #[error("ticket {0} has no owning player")]
    TicketOwnerMissing(String),

    // ─────────────────────────────
    // Reporting
    // ─────────────────────────────
    #[error("no players available to display in the summary")]
    EmptyRoster,
}
