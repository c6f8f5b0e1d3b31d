//! Bearer-token authentication for the ticket routes

use crate::{ApiError, AppState};

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

/// Identity of the caller, inserted into request extensions by [`require_auth`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser(pub String);

/// Reject requests without a valid bearer token before they reach the
/// cache or a handler. With authentication disabled every caller is the
/// configured anonymous user.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user = match &state.jwt_validator {
        None => AuthenticatedUser(state.anonymous_user.clone()),
        Some(validator) => {
            // A header that is not valid UTF-8 counts as a bad token, not a missing one
            let header = request
                .headers()
                .get(AUTHORIZATION)
                .map(|value| value.to_str().unwrap_or_default());

            let claims = validator.validate_header(header)?;
            AuthenticatedUser(claims.sub)
        }
    };

    log::debug!(
        "{} {} as {}",
        request.method(),
        request.uri().path(),
        user.0
    );
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}
