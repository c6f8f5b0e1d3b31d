pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::{MIGRATOR, create_pool, run_migrations};
pub use error::{DbError, Result};
pub use repositories::ticket_repository::TicketRepository;
