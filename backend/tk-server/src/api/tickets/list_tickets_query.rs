use crate::ApiError;

use std::future::Future;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

/// Query parameters for listing tickets.
///
/// Unknown parameters are ignored and a repeated parameter keeps its last
/// value, so no list request is rejected for the shape of its query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTicketsQuery {
    /// Exact, case-sensitive category match
    pub category: Option<String>,
    /// Case-insensitive substring of title or description
    pub search: Option<String>,
    /// Comma-separated field names, `-` prefix for descending
    pub ordering: Option<String>,
    /// 1-based page number, or `last`
    pub page: Option<String>,
}

impl ListTicketsQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();

        for (name, value) in pairs {
            let slot = match name.as_str() {
                "category" => &mut query.category,
                "search" => &mut query.search,
                "ordering" => &mut query.ordering,
                "page" => &mut query.page,
                _ => continue,
            };
            *slot = Some(value);
        }

        query
    }
}

impl<S> FromRequestParts<S> for ListTicketsQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
                .map_err(|e| ApiError::bad_request(format!("Invalid query string - {e}")))?;

            Ok(Self::from_pairs(pairs))
        }
    }
}
