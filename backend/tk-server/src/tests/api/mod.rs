mod error;
mod list_tickets_query;
mod page_links;
