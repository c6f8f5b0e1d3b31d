use crate::ApiError;

use tk_core::TicketInput;

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde_json::Value;

/// JSON ticket payload, kept raw so field errors can be reported per field.
///
/// The body must be a JSON object; anything else is a 400 with a `detail`
/// message. The `Content-Type` header is not checked.
#[derive(Debug, Clone)]
pub struct TicketBody(pub TicketInput);

impl<S> FromRequest<S> for TicketBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(format!("Could not read request body - {e}")))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(ApiError::bad_request(
                "JSON parse error - request body is empty",
            ));
        }

        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::bad_request(format!("JSON parse error - {e}")))?;

        if !value.is_object() {
            return Err(ApiError::bad_request(
                "Invalid data. Expected a dictionary, but got a non-object value.",
            ));
        }

        let input = serde_json::from_value::<TicketInput>(value)
            .map_err(|e| ApiError::bad_request(format!("JSON parse error - {e}")))?;

        Ok(TicketBody(input))
    }
}
