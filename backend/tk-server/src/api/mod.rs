pub mod auth;
pub mod cache_layer;
pub mod delete_response;
pub mod error;
pub mod extractors;
pub mod tickets;
