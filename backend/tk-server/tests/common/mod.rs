#![allow(dead_code)]

//! Test infrastructure for tk-server API tests

use tk_auth::{Claims, JwtValidator};
use tk_cache::{InMemoryResponseCache, ResponseCache};
use tk_core::TicketValidator;
use tk_server::{AppState, Metrics, build_router};

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde_json::Value;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test-secret-key-at-least-32-bytes-long";
pub const TEST_HOST: &str = "testserver";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    tk_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// AppState with authentication on and an in-memory response cache
pub async fn create_test_app_state() -> AppState {
    create_test_app_state_with(Arc::new(InMemoryResponseCache::new()), true).await
}

pub async fn create_test_app_state_with(
    cache: Arc<dyn ResponseCache>,
    auth_enabled: bool,
) -> AppState {
    let jwt_validator =
        auth_enabled.then(|| Arc::new(JwtValidator::with_hs256(TEST_SECRET.as_bytes())));

    AppState {
        pool: create_test_pool().await,
        cache,
        cache_ttl: Duration::from_secs(60),
        jwt_validator,
        anonymous_user: "anonymous".to_string(),
        validator: TicketValidator::default(),
        page_size: 2,
        metrics: Metrics::new(),
        prometheus: None,
    }
}

/// Mint an HS256 token for `sub` signed with `secret`, expiring `ttl_secs` from now
pub fn create_token(sub: &str, secret: &str, ttl_secs: i64) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: sub.to_string(),
        exp: now + ttl_secs,
        iat: now,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("Failed to encode token")
}

pub fn bearer(sub: &str) -> String {
    format!("Bearer {}", create_token(sub, TEST_SECRET, 3600))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub json: Value,
}

impl TestResponse {
    pub fn x_cache(&self) -> Option<&str> {
        self.headers
            .get("x-cache")
            .and_then(|value| value.to_str().ok())
    }
}

/// Drives the router one request at a time, optionally authenticated
pub struct TestClient {
    app: Router,
    authorization: Option<String>,
    host: String,
}

impl TestClient {
    /// Client sending a valid bearer token for `tester`
    pub fn new(state: AppState) -> Self {
        Self {
            app: build_router(state),
            authorization: Some(bearer("tester")),
            host: TEST_HOST.to_string(),
        }
    }

    pub fn anonymous(state: AppState) -> Self {
        Self {
            app: build_router(state),
            authorization: None,
            host: TEST_HOST.to_string(),
        }
    }

    pub fn with_authorization(state: AppState, authorization: &str) -> Self {
        Self {
            app: build_router(state),
            authorization: Some(authorization.to_string()),
            host: TEST_HOST.to_string(),
        }
    }

    /// Send every request with `host` as the `Host` header
    pub fn with_host(mut self, host: &str) -> Self {
        self.host = host.to_string();
        self
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let body = body.map(|value| value.to_string());
        self.send_raw(method, uri, body).await
    }

    pub async fn send_raw(&self, method: Method, uri: &str, body: Option<String>) -> TestResponse {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::HOST, self.host.as_str());

        if let Some(ref authorization) = self.authorization {
            builder = builder.header(header::AUTHORIZATION, authorization);
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            json,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> TestResponse {
        self.send(Method::PUT, uri, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, body: Value) -> TestResponse {
        self.send(Method::PATCH, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(Method::DELETE, uri, None).await
    }

    /// Create a ticket through the API and return its id
    pub async fn create_ticket(
        &self,
        title: &str,
        description: &str,
        category: &str,
        priority: &str,
    ) -> i64 {
        let response = self
            .post(
                "/tickets",
                serde_json::json!({
                    "title": title,
                    "description": description,
                    "category": category,
                    "priority": priority,
                }),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.json);
        response.json["id"].as_i64().unwrap()
    }
}
