pub mod order_field;
pub mod page;
pub mod page_request;
pub mod sort_direction;
pub mod ticket_filter;
pub mod ticket_ordering;
