pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{AuthenticatedUser, require_auth},
    cache_layer::{X_CACHE, response_cache},
    delete_response::DeleteResponse,
    error::{ApiError, Result as ApiResult},
    extractors::{ticket_body::TicketBody, ticket_id::TicketId},
    tickets::{
        list_tickets_query::ListTicketsQuery,
        page_links::PageLinks,
        ticket_page_response::TicketPageResponse,
        tickets::{
            create_ticket, delete_ticket, get_ticket, list_tickets, patch_ticket, update_ticket,
        },
    },
};
pub use app_state::AppState;
pub use metrics::Metrics;

pub use crate::routes::build_router;
