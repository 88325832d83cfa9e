use rust_decimal::Decimal;

/// A participant in one lottery round.
///
/// Balance and the ticket list are mutated by ticket purchase and by prize
/// award. Awarded tickets stay in `tickets` as a purchase record; only the
/// live pool forgets them.
#[derive(Debug, Clone)]
pub struct Player {
    pub id: u64,
    pub round_id: String,
    pub balance: Decimal,
    pub tickets_purchased: u32,
    pub tickets: Vec<String>,
}

impl Player {
    pub fn new(id: u64, round_id: impl Into<String>, balance: Decimal) -> Self {
        Self {
            id,
            round_id: round_id.into(),
            balance,
            tickets_purchased: 0,
            tickets: Vec::new(),
        }
    }

    pub fn holds_ticket(&self, ticket: &str) -> bool {
        self.tickets.iter().any(|t| t == ticket)
    }
}
