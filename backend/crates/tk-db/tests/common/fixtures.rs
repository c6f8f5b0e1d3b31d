use tk_core::{NewTicket, Ticket};
use tk_db::TicketRepository;

use sqlx::SqlitePool;

/// Creates a NewTicket with sensible defaults
pub fn new_ticket(title: &str) -> NewTicket {
    NewTicket {
        title: title.to_string(),
        description: format!("Description of {}", title),
        category: "general".to_string(),
        priority: "medium".to_string(),
    }
}

/// Creates a NewTicket with every field chosen by the caller
pub fn new_ticket_with(
    title: &str,
    description: &str,
    category: &str,
    priority: &str,
) -> NewTicket {
    NewTicket {
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        priority: priority.to_string(),
    }
}

/// Inserts the given tickets in order and returns them with ids
pub async fn insert_all(pool: &SqlitePool, tickets: Vec<NewTicket>) -> Vec<Ticket> {
    let mut inserted = Vec::with_capacity(tickets.len());
    for ticket in tickets {
        inserted.push(
            TicketRepository::create(pool, &ticket)
                .await
                .expect("Failed to insert ticket"),
        );
    }
    inserted
}
