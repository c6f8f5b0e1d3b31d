pub mod list_tickets_query;
pub mod page_links;
pub mod ticket_page_response;
#[allow(clippy::module_inception)]
pub mod tickets;
