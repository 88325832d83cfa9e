use rust_decimal::Decimal;

use crate::state::player::Player;

/// Every player ever added, across all rounds. Nothing is evicted while the
/// process lives; round membership is a filter on the stored round id.
#[derive(Debug, Default)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends unconditionally; duplicate ids are not checked.
    pub fn add_player(&mut self, player: Player) {
        self.players.push(player);
    }

    /// Players of one round, in insertion order.
    pub fn players_for_round(&self, round_id: &str) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|p| p.round_id == round_id)
            .collect()
    }

    /// First player in insertion order holding the given ticket.
    pub fn find_owner_mut(&mut self, round_id: &str, ticket: &str) -> Option<&mut Player> {
        self.players
            .iter_mut()
            .find(|p| p.round_id == round_id && p.holds_ticket(ticket))
    }

    pub fn total_tickets(&self, round_id: &str) -> u64 {
        self.players
            .iter()
            .filter(|p| p.round_id == round_id)
            .map(|p| u64::from(p.tickets_purchased))
            .sum()
    }

    /// Revenue for the round: tickets sold times ticket price.
    pub fn total_revenue(&self, round_id: &str, ticket_price: Decimal) -> Decimal {
        Decimal::from(self.total_tickets(round_id)) * ticket_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn player_with_tickets(id: u64, round_id: &str, tickets: &[&str]) -> Player {
        let mut player = Player::new(id, round_id, Decimal::ZERO);
        player.tickets = tickets.iter().map(|t| t.to_string()).collect();
        player.tickets_purchased = tickets.len() as u32;
        player
    }

    #[test]
    fn filters_players_by_round_in_insertion_order() {
        let mut roster = Roster::new();
        roster.add_player(Player::new(3, "round-a", Decimal::ZERO));
        roster.add_player(Player::new(1, "round-b", Decimal::ZERO));
        roster.add_player(Player::new(2, "round-a", Decimal::ZERO));

        let round_a: Vec<u64> = roster
            .players_for_round("round-a")
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(round_a, vec![3, 2]);
    }

    #[test]
    fn finds_first_owner_of_a_ticket() {
        let mut roster = Roster::new();
        roster.add_player(player_with_tickets(1, "round", &["a"]));
        roster.add_player(player_with_tickets(2, "round", &["b", "c"]));

        assert_eq!(roster.find_owner_mut("round", "c").unwrap().id, 2);
        assert!(roster.find_owner_mut("round", "zzz").is_none());
        assert!(roster.find_owner_mut("other-round", "a").is_none());
    }

    #[test]
    fn revenue_is_tickets_sold_times_price() {
        let mut roster = Roster::new();
        roster.add_player(player_with_tickets(1, "round", &["a", "b"]));
        roster.add_player(player_with_tickets(2, "round", &["c"]));
        roster.add_player(player_with_tickets(3, "elsewhere", &["d"]));

        assert_eq!(roster.total_tickets("round"), 3);
        assert_eq!(roster.total_revenue("round", dec!(1.5)), dec!(4.5));
    }
}
