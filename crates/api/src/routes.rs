use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

/// DoH endpoints. Every method other than GET, POST and OPTIONS gets a 400.
pub fn create_doh_routes(state: AppState) -> Router {
    let doh = get(handlers::doh_get)
        .post(handlers::doh_post)
        .options(handlers::preflight)
        .fallback(handlers::unsupported_method);

    Router::new()
        .route("/dns-query", doh.clone())
        .route("/resolve", doh)
        .with_state(state)
}

/// JSON status endpoints, intended to be nested under `/api`.
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/providers", get(handlers::get_providers))
        .route("/cache/stats", get(handlers::get_cache_stats))
        .with_state(state)
}
