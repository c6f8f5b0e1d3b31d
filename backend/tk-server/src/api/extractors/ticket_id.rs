use crate::ApiError;

use std::future::Future;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

/// Ticket id taken from the `{id}` path segment.
///
/// A segment that is not an integer cannot name any ticket, so it is
/// rejected as not found rather than as a bad request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketId(pub i64);

impl<S> FromRequestParts<S> for TicketId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Path(raw) = Path::<String>::from_request_parts(parts, state)
                .await
                .map_err(|e| {
                    log::debug!("Unreadable ticket id path segment: {e}");
                    ApiError::ticket_not_found()
                })?;

            raw.trim()
                .parse::<i64>()
                .map(TicketId)
                .map_err(|_| ApiError::ticket_not_found())
        }
    }
}
