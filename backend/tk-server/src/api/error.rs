//! REST API error types
//!
//! Each variant maps to one status code and one JSON body shape:
//! field-level validation maps for 400s, `{"detail": ..}` for request and
//! auth problems, `{"error": ..}` for missing records and server faults.

use tk_auth::AuthError;
use tk_core::{CoreError, FieldErrors};
use tk_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header::WWW_AUTHENTICATE},
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde_json::json;
use thiserror::Error;

pub const TICKET_NOT_FOUND: &str = "Ticket not found";
pub const INVALID_PAGE: &str = "Invalid page.";
pub const CREDENTIALS_NOT_PROVIDED: &str = "Authentication credentials were not provided.";
pub const TOKEN_NOT_VALID: &str = "Given token not valid";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Field validation failed (400)
    #[error("Validation failed: {errors} {location}")]
    Validation {
        errors: FieldErrors,
        location: ErrorLocation,
    },

    /// Malformed request, e.g. unparseable body (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Missing or rejected credentials (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Record not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Page number out of range or not a number (404)
    #[error("Invalid page: {value} {location}")]
    InvalidPage {
        value: String,
        location: ErrorLocation,
    },

    /// Internal server error (500); the message is logged, never sent
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn ticket_not_found() -> Self {
        ApiError::NotFound {
            message: TICKET_NOT_FOUND.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        ApiError::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::NotFound { .. } | ApiError::InvalidPage { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        match self {
            ApiError::Validation { errors, .. } => (status, Json(errors)).into_response(),
            ApiError::BadRequest { message, .. } => {
                (status, Json(json!({ "detail": message }))).into_response()
            }
            ApiError::Unauthorized { message, .. } => {
                let mut response = (status, Json(json!({ "detail": message }))).into_response();
                response
                    .headers_mut()
                    .insert(WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
                response
            }
            ApiError::NotFound { message, .. } => {
                (status, Json(json!({ "error": message }))).into_response()
            }
            ApiError::InvalidPage { .. } => {
                (status, Json(json!({ "detail": INVALID_PAGE }))).into_response()
            }
            ApiError::Internal { .. } => {
                (status, Json(json!({ "error": INTERNAL_SERVER_ERROR }))).into_response()
            }
        }
    }
}

impl From<FieldErrors> for ApiError {
    #[track_caller]
    fn from(errors: FieldErrors) -> Self {
        ApiError::Validation {
            errors,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::InvalidPage { value, .. } => ApiError::InvalidPage {
                value,
                location: ErrorLocation::from(Location::caller()),
            },
            CoreError::UnknownOrderField { value, .. } => ApiError::BadRequest {
                message: format!("Unknown ordering field: {value}"),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Every token problem collapses to one client-facing message; the cause is logged
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let message = if e.is_missing_credentials() {
            CREDENTIALS_NOT_PROVIDED
        } else {
            log::debug!("Rejected bearer token ({}): {}", e.error_code(), e);
            TOKEN_NOT_VALID
        };

        ApiError::Unauthorized {
            message: message.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Database details stay in the log
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        ApiError::Internal {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
