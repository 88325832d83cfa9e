use crate::state::player::Player;

/// Live pool of undrawn ticket ids for one round.
///
/// A ticket id appears at most once. Drawing alone does not remove a ticket;
/// removal happens when the ticket is awarded, so the same id can be drawn
/// more than once within a single tier before it is claimed.
#[derive(Debug, Clone, Default)]
pub struct TicketPool {
    tickets: Vec<String>,
}

impl TicketPool {
    /// Collects every ticket held by the given players, in player order.
    pub fn from_players<'a>(players: impl IntoIterator<Item = &'a Player>) -> Self {
        let tickets = players
            .into_iter()
            .flat_map(|p| p.tickets.iter().cloned())
            .collect();
        Self { tickets }
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    pub fn ticket_at(&self, index: usize) -> Option<&str> {
        self.tickets.get(index).map(String::as_str)
    }

    pub fn contains(&self, ticket: &str) -> bool {
        self.tickets.iter().any(|t| t == ticket)
    }

    /// Removes a ticket by id. A no-op when the ticket is already gone, so
    /// awarding a duplicate draw stays idempotent.
    pub fn remove(&mut self, ticket: &str) -> bool {
        match self.tickets.iter().position(|t| t == ticket) {
            Some(index) => {
                self.tickets.remove(index);
                true
            }
            None => false,
        }
    }
}
