use std::fmt;

use rust_decimal::Decimal;

/// Prize tiers, drawn in this fixed order. Earlier tiers remove their
/// winning tickets, shrinking the pool seen by later tiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    GrandPrize,
    SecondTier,
    ThirdTier,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::GrandPrize => "Grand Prize",
            Tier::SecondTier => "Second Tier",
            Tier::ThirdTier => "Third Tier",
        };
        f.write_str(name)
    }
}

/// Outcome of one tier draw.
///
/// `winners` holds one player id per winning ticket. A player holding
/// several winning tickets in the same tier appears once per ticket; the
/// display layer groups repeats with a multiplier.
#[derive(Clone, Debug)]
pub struct AwardResult {
    pub tier: Tier,
    pub prize_per_winner: Decimal,
    pub winners: Vec<u64>,
}

impl AwardResult {
    /// Total amount actually credited for this tier.
    pub fn total_distributed(&self) -> Decimal {
        self.prize_per_winner * Decimal::from(self.winners.len() as u64)
    }
}
