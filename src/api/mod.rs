use axum::http::{HeaderValue, Method, header};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::llm::CompletionClient;
use crate::search::SearchClient;

pub mod handlers;
pub mod models;

/// Clients constructed once at startup and shared read-only by every request.
pub struct AppState {
    pub search: SearchClient,
    pub llm: CompletionClient,
}

/// Wildcard origins stay permissive without credentials; an explicit origin
/// list gets credential support, since the two cannot be combined.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| match o.parse() {
                Ok(origin) => Some(origin),
                Err(_) => {
                    tracing::warn!(origin = %o, "ignoring malformed allowed origin");
                    None
                }
            })
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
            .allow_credentials(true)
    }
}

pub fn create_router(state: Arc<AppState>, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/ask", post(handlers::ask_handler))
        .route("/plan", post(handlers::plan_handler))
        .with_state(state)
        .layer(cors_layer(allowed_origins))
}
