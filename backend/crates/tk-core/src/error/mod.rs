use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid page: {value} {location}")]
    InvalidPage {
        value: String,
        location: ErrorLocation,
    },

    #[error("Unknown ordering field: {value} {location}")]
    UnknownOrderField {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
