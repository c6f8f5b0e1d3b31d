pub mod ticket_body;
pub mod ticket_id;
