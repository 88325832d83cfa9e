use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::errors::{LotteryError, Result};
use crate::state::config::LotteryConfig;
use crate::state::player::Player;

/// Sells tickets to a player, capped by what the balance can afford.
///
/// Deducts the cost, appends freshly minted ticket ids, and sets the
/// player's purchased count. A request above the affordable count is
/// reduced rather than rejected; the caller can compare the returned count
/// against the request to tell the player about the reduction.
pub fn purchase_tickets(
    player: &mut Player,
    requested: i64,
    config: &LotteryConfig,
) -> Result<u32> {
    if requested < 0 {
        return Err(LotteryError::InvalidTicketAmount(requested));
    }

    let affordable = (player.balance / config.ticket_price)
        .floor()
        .to_i64()
        .unwrap_or(i64::MAX)
        .min(requested);
    let total_price = config.ticket_price * Decimal::from(affordable);

    player.balance -= total_price;
    for _ in 0..affordable {
        player.tickets.push(Uuid::new_v4().to_string());
    }
    player.tickets_purchased = affordable as u32;

    debug!(
        player = player.id,
        requested,
        purchased = affordable,
        "tickets purchased"
    );
    Ok(affordable as u32)
}
