use serde::Serialize;

pub const TICKET_DELETED: &str = "Ticket deleted successfully";

/// Body returned after a successful delete
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

impl DeleteResponse {
    pub fn ticket_deleted() -> Self {
        Self {
            message: TICKET_DELETED.to_string(),
        }
    }
}
