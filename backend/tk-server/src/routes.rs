use crate::{
    AppState, create_ticket, delete_ticket, get_ticket, health, list_tickets, patch_ticket,
    require_auth, response_cache, update_ticket,
};

use axum::{Router, middleware, routing::get};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    // Layers run outermost-last: auth rejects before the cache is consulted
    let tickets = Router::new()
        .route("/tickets", get(list_tickets).post(create_ticket))
        .route("/tickets/", get(list_tickets).post(create_ticket))
        .route(
            "/tickets/{id}",
            get(get_ticket)
                .put(update_ticket)
                .patch(patch_ticket)
                .delete(delete_ticket),
        )
        .route(
            "/tickets/{id}/",
            get(get_ticket)
                .put(update_ticket)
                .patch(patch_ticket)
                .delete(delete_ticket),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            response_cache,
        ))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .merge(tickets)
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .route("/metrics", get(health::metrics))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
