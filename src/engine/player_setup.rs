use tracing::info;

use crate::constants::{MAX_CPU_TICKET_REQUEST, USER_PLAYER_ID};
use crate::engine::rng::DrawRng;
use crate::engine::ticket_purchase::purchase_tickets;
use crate::errors::Result;
use crate::state::config::LotteryConfig;
use crate::state::player::Player;
use crate::state::roster::Roster;

/// Seeds a round with CPU players and lets each buy a random handful of
/// tickets through the same purchase path as the human player.
///
/// The CPU count is uniform in `[min_players - 1, max_players - 1]`, so the
/// round holds between `min_players` and `max_players` players once the
/// human player is added. Ids run sequentially from 2; id 1 is the human's.
pub fn setup_cpu_players<R: DrawRng>(
    roster: &mut Roster,
    round_id: &str,
    config: &LotteryConfig,
    rng: &mut R,
) -> Result<u32> {
    let span = (config.max_players - config.min_players + 1) as usize;
    let cpu_count = config.min_players - 1 + rng.next_index(span) as u32;

    for offset in 0..u64::from(cpu_count) {
        let mut cpu = Player::new(USER_PLAYER_ID + 1 + offset, round_id, config.starting_balance);
        let requested = rng.next_index(MAX_CPU_TICKET_REQUEST) as i64;
        purchase_tickets(&mut cpu, requested, config)?;
        roster.add_player(cpu);
    }

    info!(round_id, cpu_count, "cpu players seeded");
    Ok(cpu_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::rng::GameRng;
    use rust_decimal_macros::dec;

    fn config() -> LotteryConfig {
        LotteryConfig {
            min_players: 10,
            max_players: 15,
            starting_balance: dec!(10),
            ticket_price: dec!(1),
            grand_prize_percentage: dec!(0.5),
            second_tier_percentage: dec!(0.3),
            third_tier_percentage: dec!(0.1),
            second_tier_user_share_percentage: dec!(0.1),
            third_tier_user_share_percentage: dec!(0.2),
        }
    }

    #[test]
    fn seeds_a_cpu_count_within_bounds() {
        let config = config();
        for seed in 0..20 {
            let mut roster = Roster::new();
            let mut rng = GameRng::seeded(seed);

            let cpu_count = setup_cpu_players(&mut roster, "round", &config, &mut rng).unwrap();

            assert!(cpu_count >= config.min_players - 1);
            assert!(cpu_count <= config.max_players - 1);
            assert_eq!(
                roster.players_for_round("round").len(),
                cpu_count as usize
            );
        }
    }

    #[test]
    fn cpu_players_pay_for_their_tickets() {
        let config = config();
        let mut roster = Roster::new();
        let mut rng = GameRng::seeded(7);

        setup_cpu_players(&mut roster, "round", &config, &mut rng).unwrap();

        for player in roster.players_for_round("round") {
            assert!(player.id >= 2);
            assert_eq!(player.tickets.len(), player.tickets_purchased as usize);
            let spent = config.ticket_price * rust_decimal::Decimal::from(player.tickets_purchased);
            assert_eq!(player.balance, config.starting_balance - spent);
        }
    }
}
