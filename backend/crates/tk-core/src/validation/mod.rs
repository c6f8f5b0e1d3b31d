pub mod field_errors;
pub mod ticket_limits;
pub mod ticket_validator;
