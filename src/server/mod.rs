//! HTTP surface: router construction and shared state
//!
//! Thin plumbing around the digest core: decode JSON, call the service, map
//! error kinds to status codes. No business logic lives here.

pub mod handlers;

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::ServerConfig;
use crate::digest::DigestService;

#[derive(Clone)]
pub struct AppState {
    pub digest: Arc<DigestService>,
}

pub fn build_router(digest: Arc<DigestService>, server: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/summarize", post(handlers::summarize))
        .route("/qa", post(handlers::qa))
        .layer(cors_layer(server))
        .with_state(AppState { digest })
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    if server.cors_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let mut origins = Vec::new();
    for origin in &server.cors_origins {
        match origin.parse::<HeaderValue>() {
            Ok(value) => origins.push(value),
            Err(_) => log::warn!("Ignoring invalid CORS origin '{}'", origin),
        }
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
