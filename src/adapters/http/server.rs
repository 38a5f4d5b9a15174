//! Router assembly with the cross-cutting tower layers.

use std::time::Duration;

use axum::Router;
use http::{HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::tools::{tool_shelf_router, ToolShelfState};

/// Builds the application router.
///
/// CORS is only added when origins are configured; the page itself is same-origin.
pub fn build_app(state: ToolShelfState, config: &ServerConfig) -> Router {
    let mut app = tool_shelf_router(state)
        .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout_secs)))
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = cors_layer(&config.cors_origins_list()) {
        app = app.layer(cors);
    }
    app
}

fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(allowed)
            .allow_methods([Method::GET, Method::POST]),
    )
}
