use crate::TicketChanges;

/// Validated fields for a ticket that has no id yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTicket {
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: String,
}

impl From<NewTicket> for TicketChanges {
    fn from(ticket: NewTicket) -> Self {
        Self {
            title: Some(ticket.title),
            description: Some(ticket.description),
            category: Some(ticket.category),
            priority: Some(ticket.priority),
        }
    }
}
