use crate::ApiError;
use crate::api::error::{CREDENTIALS_NOT_PROVIDED, TOKEN_NOT_VALID};

use tk_auth::AuthError;
use tk_core::{FieldErrors, PageRequest};

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http::header::WWW_AUTHENTICATE;
use http_body_util::BodyExt;

async fn into_json(error: ApiError) -> (StatusCode, http::HeaderMap, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_error_key() {
    let (status, _, json) = into_json(ApiError::ticket_not_found()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, serde_json::json!({ "error": "Ticket not found" }));
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field_map() {
    let mut errors = FieldErrors::new();
    errors.add("title", "This field is required.");
    errors.add("description", FieldErrors::max_length_message(100));

    let (status, _, json) = into_json(ApiError::from(errors)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["title"][0], "This field is required.");
    assert_eq!(
        json["description"][0],
        "Ensure this field has no more than 100 characters."
    );
}

#[tokio::test]
async fn test_bad_request_returns_400_with_detail() {
    let (status, _, json) = into_json(ApiError::bad_request("JSON parse error - oops")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["detail"], "JSON parse error - oops");
}

#[tokio::test]
async fn test_invalid_page_returns_404_with_detail() {
    let core_error = PageRequest::parse(Some("zero"), 2).unwrap_err();

    let (status, _, json) = into_json(ApiError::from(core_error)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["detail"], "Invalid page.");
}

#[tokio::test]
async fn test_internal_error_hides_message() {
    let error = ApiError::Internal {
        message: "database is locked".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, _, json) = into_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Internal server error");
    assert!(!json.to_string().contains("locked"));
}

#[tokio::test]
async fn test_missing_header_maps_to_not_provided() {
    let auth_error = tk_auth::bearer_token(None).unwrap_err();

    let (status, headers, json) = into_json(ApiError::from(auth_error)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["detail"], CREDENTIALS_NOT_PROVIDED);
    assert_eq!(headers.get(WWW_AUTHENTICATE).unwrap(), "Bearer");
}

#[tokio::test]
async fn test_expired_token_maps_to_not_valid() {
    let auth_error = AuthError::TokenExpired {
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, headers, json) = into_json(ApiError::from(auth_error)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["detail"], TOKEN_NOT_VALID);
    assert_eq!(headers.get(WWW_AUTHENTICATE).unwrap(), "Bearer");
}

#[test]
fn test_db_error_converts_to_internal() {
    let db_error = tk_db::DbError::from(sqlx::Error::PoolTimedOut);

    let api_error = ApiError::from(db_error);

    assert!(matches!(api_error, ApiError::Internal { .. }));
    assert_eq!(api_error.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
