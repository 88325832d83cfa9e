use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::{LotteryError, Result};
use crate::state::award::Tier;

/// Run-wide configuration, read once at startup and immutable thereafter.
///
/// All percentages are fractions in [0, 1]. The pool percentages split total
/// revenue between tiers; the user-share percentages turn total tickets sold
/// into a winner count for the shared tiers.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LotteryConfig {
    /// Fewest players in a round, the human player included.
    pub min_players: u32,

    /// Most players in a round, the human player included.
    pub max_players: u32,

    /// Balance every player starts the round with.
    pub starting_balance: Decimal,

    /// Price of one ticket.
    pub ticket_price: Decimal,

    /// Share of total revenue paid to the single grand-prize winner.
    pub grand_prize_percentage: Decimal,

    /// Share of total revenue pooled for second-tier winners.
    pub second_tier_percentage: Decimal,

    /// Share of total revenue pooled for third-tier winners.
    pub third_tier_percentage: Decimal,

    /// Fraction of tickets sold that win the second tier.
    pub second_tier_user_share_percentage: Decimal,

    /// Fraction of tickets sold that win the third tier.
    pub third_tier_user_share_percentage: Decimal,
}

impl LotteryConfig {
    /// Reads and validates the configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config: LotteryConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_players < 2 {
            return Err(LotteryError::InvalidConfig(
                "minPlayers must be at least 2".into(),
            ));
        }
        if self.max_players < self.min_players {
            return Err(LotteryError::InvalidConfig(
                "maxPlayers must not be below minPlayers".into(),
            ));
        }
        if self.ticket_price <= Decimal::ZERO {
            return Err(LotteryError::InvalidConfig(
                "ticketPrice must be positive".into(),
            ));
        }
        if self.starting_balance < Decimal::ZERO {
            return Err(LotteryError::InvalidConfig(
                "startingBalance must not be negative".into(),
            ));
        }

        let percentages = [
            ("grandPrizePercentage", self.grand_prize_percentage),
            ("secondTierPercentage", self.second_tier_percentage),
            ("thirdTierPercentage", self.third_tier_percentage),
            (
                "secondTierUserSharePercentage",
                self.second_tier_user_share_percentage,
            ),
            (
                "thirdTierUserSharePercentage",
                self.third_tier_user_share_percentage,
            ),
        ];
        for (name, value) in percentages {
            if value < Decimal::ZERO || value > Decimal::ONE {
                return Err(LotteryError::InvalidConfig(format!(
                    "{name} must be a fraction in [0, 1]"
                )));
            }
        }

        let pooled =
            self.grand_prize_percentage + self.second_tier_percentage + self.third_tier_percentage;
        if pooled > Decimal::ONE {
            return Err(LotteryError::InvalidConfig(
                "tier prize percentages must not exceed 1 in total".into(),
            ));
        }

        Ok(())
    }

    /// Returns (prize-pool percentage, winner-share percentage) for a shared
    /// tier. The grand prize has no winner share and is not valid here.
    pub fn tier_shares(&self, tier: Tier) -> Result<(Decimal, Decimal)> {
        match tier {
            Tier::SecondTier => Ok((
                self.second_tier_percentage,
                self.second_tier_user_share_percentage,
            )),
            Tier::ThirdTier => Ok((
                self.third_tier_percentage,
                self.third_tier_user_share_percentage,
            )),
            Tier::GrandPrize => Err(LotteryError::UnknownTier(tier)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn valid_config() -> LotteryConfig {
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
    fn valid_config_passes_validation() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn binds_camel_case_keys() {
        let raw = r#"{
            "minPlayers": 10,
            "maxPlayers": 15,
            "startingBalance": 10,
            "ticketPrice": 1,
            "grandPrizePercentage": 0.5,
            "secondTierPercentage": 0.3,
            "thirdTierPercentage": 0.1,
            "secondTierUserSharePercentage": 0.1,
            "thirdTierUserSharePercentage": 0.2
        }"#;
        let config: LotteryConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config.max_players, 15);
        assert_eq!(config.second_tier_percentage, dec!(0.3));
    }

    #[test]
    fn rejects_percentage_above_one() {
        let mut config = valid_config();
        config.grand_prize_percentage = dec!(1.5);
        assert!(matches!(
            config.validate(),
            Err(LotteryError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_pool_percentages_over_revenue() {
        let mut config = valid_config();
        config.second_tier_percentage = dec!(0.6);
        assert!(matches!(
            config.validate(),
            Err(LotteryError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_inverted_player_bounds() {
        let mut config = valid_config();
        config.max_players = 5;
        assert!(matches!(
            config.validate(),
            Err(LotteryError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_free_tickets() {
        let mut config = valid_config();
        config.ticket_price = dec!(0);
        assert!(matches!(
            config.validate(),
            Err(LotteryError::InvalidConfig(_))
        ));
    }

    #[test]
    fn grand_prize_has_no_tier_shares() {
        let config = valid_config();
        assert!(matches!(
            config.tier_shares(Tier::GrandPrize),
            Err(LotteryError::UnknownTier(Tier::GrandPrize))
        ));
        assert_eq!(
            config.tier_shares(Tier::ThirdTier).unwrap(),
            (dec!(0.1), dec!(0.2))
        );
    }
}
