use crate::TicketChanges;

use serde::{Deserialize, Serialize};

/// A support ticket as persisted and as sent over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: String,
}

impl Ticket {
    /// Replace every field present in `changes`, leaving the rest untouched.
    pub fn apply(&mut self, changes: TicketChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(category) = changes.category {
            self.category = category;
        }
        if let Some(priority) = changes.priority {
            self.priority = priority;
        }
    }
}
