pub mod error;
pub mod models;
pub mod query;
pub mod validation;


pub use error::{CoreError, Result};
pub use models::new_ticket::NewTicket;
pub use models::ticket::Ticket;
pub use models::ticket_changes::TicketChanges;
pub use models::ticket_input::TicketInput;
pub use query::order_field::OrderField;
pub use query::page::Page;
pub use query::page_request::PageRequest;
pub use query::sort_direction::SortDirection;
pub use query::ticket_filter::TicketFilter;
pub use query::ticket_ordering::TicketOrdering;
pub use validation::field_errors::FieldErrors;
pub use validation::ticket_limits::TicketLimits;
pub use validation::ticket_validator::TicketValidator;
