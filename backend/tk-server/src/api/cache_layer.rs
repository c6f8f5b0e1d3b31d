//! Response caching for ticket reads.
//!
//! Successful `GET` responses are stored under `METHOD origin/path?query`
//! for the configured TTL and replayed on later identical requests. Writes clear
//! the whole cache through [`AppState::invalidate_cache`]. Cache failures
//! are logged and the request is served uncached.

use crate::api::tickets::page_links::request_origin;
use crate::{ApiError, AppState};

use tk_cache::CachedResponse;

use std::panic::Location;

use axum::{
    body::{Body, to_bytes},
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, Method, StatusCode, Uri, header::CONTENT_TYPE},
    middleware::Next,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;

pub const X_CACHE: &str = "x-cache";

const HIT: &str = "HIT";
const MISS: &str = "MISS";

/// Cache key for a request: method, origin, path and raw query string.
///
/// List bodies embed absolute page links built from the origin, so requests
/// addressed to different hosts or schemes are cached apart.
pub fn cache_key(method: &Method, headers: &HeaderMap, uri: &Uri) -> String {
    let origin = request_origin(headers, uri).unwrap_or_default();
    match uri.query() {
        Some(query) => format!("{} {}{}?{}", method, origin, uri.path(), query),
        None => format!("{} {}{}", method, origin, uri.path()),
    }
}

pub async fn response_cache(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if request.method() != Method::GET {
        return next.run(request).await;
    }

    let key = cache_key(request.method(), request.headers(), request.uri());

    match state.cache.get(&key).await {
        Ok(Some(cached)) => {
            state.metrics.cache_hit();
            log::debug!("Cache hit: {key}");
            return replay(cached);
        }
        Ok(None) => {}
        Err(e) => {
            state.metrics.cache_error("get");
            log::warn!("Response cache read failed for {key}: {e}");
        }
    }

    state.metrics.cache_miss();
    log::debug!("Cache miss: {key}");

    let response = next.run(request).await;
    if response.status() != StatusCode::OK {
        return with_cache_status(response, MISS);
    }

    let (parts, body) = response.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            return ApiError::Internal {
                message: format!("Failed to buffer response body: {e}"),
                location: ErrorLocation::from(Location::caller()),
            }
            .into_response();
        }
    };

    let content_type = parts
        .headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let cached = CachedResponse::new(parts.status.as_u16(), content_type, bytes.to_vec());

    if let Err(e) = state.cache.put(&key, &cached, state.cache_ttl).await {
        state.metrics.cache_error("put");
        log::warn!("Response cache write failed for {key}: {e}");
    }

    with_cache_status(Response::from_parts(parts, Body::from(bytes)), MISS)
}

fn replay(cached: CachedResponse) -> Response {
    let status = StatusCode::from_u16(cached.status).unwrap_or(StatusCode::OK);
    let mut response = (status, cached.body).into_response();

    if let Some(content_type) = cached
        .content_type
        .as_deref()
        .and_then(|value| HeaderValue::from_str(value).ok())
    {
        response.headers_mut().insert(CONTENT_TYPE, content_type);
    }

    with_cache_status(response, HIT)
}

fn with_cache_status(mut response: Response, status: &'static str) -> Response {
    response
        .headers_mut()
        .insert(X_CACHE, HeaderValue::from_static(status));
    response
}
