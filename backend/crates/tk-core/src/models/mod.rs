pub mod new_ticket;
pub mod ticket;
pub mod ticket_changes;
pub mod ticket_input;
