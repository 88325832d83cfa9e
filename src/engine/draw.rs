use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::info;

use crate::constants::CURRENCY_DP;
use crate::engine::rng::DrawRng;
use crate::errors::{LotteryError, Result};
use crate::state::award::{AwardResult, Tier};
use crate::state::config::LotteryConfig;
use crate::state::pool::TicketPool;
use crate::state::roster::Roster;

/// Runs the three prize draws for one round.
///
/// Owns the live ticket pool and the rounding remainder kept by the house.
/// The pool only shrinks, and only when a ticket is awarded; a draw by
/// itself removes nothing, so one ticket can be drawn several times within
/// a single tier and its owner then wins that tier once per draw. Repeat
/// winners are a documented policy, not an accident: the display layer
/// shows them with a multiplier.
pub struct DrawEngine<R: DrawRng> {
    config: LotteryConfig,
    rng: R,
    pool: TicketPool,
    rounding_remainder: Decimal,
}

impl<R: DrawRng> DrawEngine<R> {
    pub fn new(config: LotteryConfig, pool: TicketPool, rng: R) -> Self {
        Self {
            config,
            rng,
            pool,
            rounding_remainder: Decimal::ZERO,
        }
    }

    pub fn pool(&self) -> &TicketPool {
        &self.pool
    }

    /// Fractions of a cent left over from splitting tier pots, kept by the
    /// house. Accumulates across tiers within the round.
    pub fn rounding_remainder(&self) -> Decimal {
        self.rounding_remainder
    }

    /// Draws the grand prize: one ticket, the full tier amount to its owner.
    pub fn award_grand_prize(
        &mut self,
        total_revenue: Decimal,
        roster: &mut Roster,
        round_id: &str,
    ) -> Result<AwardResult> {
        let prize = total_revenue * self.config.grand_prize_percentage;

        if self.pool.is_empty() {
            return Err(LotteryError::NoActiveTickets);
        }

        let index = self.rng.next_index(self.pool.len());
        let ticket = self
            .pool
            .ticket_at(index)
            .ok_or(LotteryError::NoActiveTickets)?
            .to_owned();

        let winner = roster
            .find_owner_mut(round_id, &ticket)
            .ok_or_else(|| LotteryError::TicketOwnerMissing(ticket.clone()))?;
        winner.balance += prize;
        let winner_id = winner.id;
        self.pool.remove(&ticket);

        info!(round_id, winner = winner_id, %prize, "grand prize awarded");
        Ok(AwardResult {
            tier: Tier::GrandPrize,
            prize_per_winner: prize,
            winners: vec![winner_id],
        })
    }

    /// Draws a shared tier (second or third).
    ///
    /// The winner count is the configured share of all tickets sold, rounded
    /// half-to-even; the tier pot is split evenly at currency precision and
    /// the rounding remainder stays with the house. A share that rounds to
    /// zero winners is an error for this tier, not a silent skip.
    pub fn award_tier(
        &mut self,
        tier: Tier,
        total_revenue: Decimal,
        roster: &mut Roster,
        round_id: &str,
    ) -> Result<AwardResult> {
        let (prize_percentage, winner_share) = self.config.tier_shares(tier)?;

        let total_tickets = roster.total_tickets(round_id);
        let winners_count = (Decimal::from(total_tickets) * winner_share)
            .round()
            .to_u64()
            .unwrap_or(0);
        if winners_count == 0 {
            return Err(LotteryError::NoTierWinners(tier));
        }

        let winning_tickets = self.draw_winning_tickets(winners_count as usize)?;

        let prize_amount = total_revenue * prize_percentage;
        let prize_per_winner =
            (prize_amount / Decimal::from(winners_count)).round_dp(CURRENCY_DP);
        let distributed = prize_per_winner * Decimal::from(winners_count);
        self.rounding_remainder += prize_amount - distributed;

        self.award_winning_tickets(&winning_tickets, prize_per_winner, tier, roster, round_id)
    }

    /// Picks `count` tickets, each uniform over whatever the pool holds at
    /// that instant. Nothing is removed here, so duplicates are possible.
    fn draw_winning_tickets(&mut self, count: usize) -> Result<Vec<String>> {
        let mut winning = Vec::with_capacity(count);
        for _ in 0..count {
            if self.pool.is_empty() {
                return Err(LotteryError::NoActiveTickets);
            }
            let index = self.rng.next_index(self.pool.len());
            let ticket = self
                .pool
                .ticket_at(index)
                .ok_or(LotteryError::NoActiveTickets)?
                .to_owned();
            winning.push(ticket);
        }
        Ok(winning)
    }

    /// Credits a flat prize for each drawn ticket, in draw order.
    ///
    /// Each ticket is removed from the pool on its first award; a duplicate
    /// draw finds the owner again through the player's ticket record and the
    /// second removal is a no-op. A ticket with no owner fails the call;
    /// credits applied by earlier iterations persist.
    pub fn award_winning_tickets(
        &mut self,
        tickets: &[String],
        prize_per_winner: Decimal,
        tier: Tier,
        roster: &mut Roster,
        round_id: &str,
    ) -> Result<AwardResult> {
        let mut winners = Vec::with_capacity(tickets.len());
        for ticket in tickets {
            let winner = roster
                .find_owner_mut(round_id, ticket)
                .ok_or_else(|| LotteryError::TicketOwnerMissing(ticket.clone()))?;
            winner.balance += prize_per_winner;
            winners.push(winner.id);
            self.pool.remove(ticket);
        }

        info!(round_id, %tier, winners = winners.len(), %prize_per_winner, "tier awarded");
        Ok(AwardResult {
            tier,
            prize_per_winner,
            winners,
        })
    }

    /// Draws and awards all three tiers in fixed order: grand, second,
    /// third. Earlier tiers shrink the pool seen by later ones. On any
    /// failure the round stops; credits already applied are not rolled back.
    pub fn run(&mut self, roster: &mut Roster, round_id: &str) -> Result<Vec<AwardResult>> {
        let total_revenue = roster.total_revenue(round_id, self.config.ticket_price);

        let grand = self.award_grand_prize(total_revenue, roster, round_id)?;
        let second = self.award_tier(Tier::SecondTier, total_revenue, roster, round_id)?;
        let third = self.award_tier(Tier::ThirdTier, total_revenue, roster, round_id)?;

        Ok(vec![grand, second, third])
    }
}
