//! Console strings for the round. The draw engine never prints; it hands
//! structured result data here and `main` writes the lines out.

use std::fmt::Write;

use rust_decimal::Decimal;

use crate::errors::{LotteryError, Result};
use crate::state::award::{AwardResult, Tier};
use crate::state::config::LotteryConfig;
use crate::state::player::Player;

pub fn welcome_banner(user: &Player, config: &LotteryConfig) -> String {
    format!(
        "Welcome to the lottery, Player {id}!\n\n\
         * Your digital balance: ${balance}\n\
         * Ticket Price: ${price} each\n\n\
         How many tickets do you want to buy, Player {id}?",
        id = user.id,
        balance = user.balance,
        price = config.ticket_price,
    )
}

/// Shown when a request exceeded what the balance could cover.
pub fn purchase_notice(purchased: u32) -> String {
    format!(
        "\nNote:\nTicket amount requested exceeds player balance, \
         player instead will purchase {purchased} tickets"
    )
}

pub fn draw_summary(players: &[&Player]) -> Result<String> {
    if players.is_empty() {
        return Err(LotteryError::EmptyRoster);
    }
    Ok(format!(
        "\n{} players have purchased tickets.\n\nTicket Draw Results:\n",
        players.len()
    ))
}

/// Per-tier winner announcements.
///
/// Single winners of a shared tier are listed together; a player drawn more
/// than once in the same tier is shown with a multiplier and total winnings,
/// grouped by multiplicity in descending order.
pub fn winners_report(results: &[AwardResult]) -> String {
    let mut out = String::new();
    for result in results {
        match result.tier {
            Tier::GrandPrize => {
                if let Some(id) = result.winners.first() {
                    let _ = writeln!(
                        out,
                        "* Grand Prize: Player {id} wins ${}!",
                        result.prize_per_winner
                    );
                }
            }
            Tier::SecondTier | Tier::ThirdTier => tier_lines(&mut out, result),
        }
    }
    out
}

pub fn house_revenue_line(house_revenue: Decimal) -> String {
    format!("\nHouse Revenue: ${house_revenue}")
}

fn tier_lines(out: &mut String, result: &AwardResult) {
    let groups = group_counts(&result.winners);

    let singles: Vec<String> = groups
        .iter()
        .filter(|(_, count)| *count == 1)
        .map(|(id, _)| id.to_string())
        .collect();
    if !singles.is_empty() {
        let _ = writeln!(
            out,
            "* {}: Players {} win ${} each!",
            result.tier,
            singles.join(", "),
            result.prize_per_winner
        );
    }

    // Repeat winners, largest multiplier first.
    let mut by_count: std::collections::BTreeMap<usize, Vec<u64>> = std::collections::BTreeMap::new();
    for (id, count) in groups {
        if count > 1 {
            by_count.entry(count).or_default().push(id);
        }
    }
    for (count, ids) in by_count.into_iter().rev() {
        let ids: Vec<String> = ids.iter().map(u64::to_string).collect();
        let winnings = Decimal::from(count as u64) * result.prize_per_winner;
        let _ = writeln!(
            out,
            "    * Players {} have won {} times, winnings = ${}",
            ids.join(", "),
            count,
            winnings
        );
    }
}

/// Counts occurrences per player id, preserving first-appearance order.
fn group_counts(winners: &[u64]) -> Vec<(u64, usize)> {
    let mut groups: Vec<(u64, usize)> = Vec::new();
    for &id in winners {
        match groups.iter_mut().find(|(group_id, _)| *group_id == id) {
            Some((_, count)) => *count += 1,
            None => groups.push((id, 1)),
        }
    }
    groups
}
