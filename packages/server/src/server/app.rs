//! Application setup and server configuration.

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::common::AppState;
use crate::config::Config;
use crate::server::routes::{
    health_handler, list_activities_handler, root_redirect_handler, signup_handler,
    unregister_handler,
};
use crate::server::static_files::serve_static;

/// Build the Axum application router over the given state
pub fn build_app(state: AppState, config: &Config) -> Router {
    Router::new()
        .route("/", get(root_redirect_handler))
        .route("/activities", get(list_activities_handler))
        .route("/activities/:activity_name/signup", post(signup_handler))
        .route(
            "/activities/:activity_name/unregister",
            delete(unregister_handler),
        )
        .route("/health", get(health_handler))
        .route("/static/*path", get(serve_static))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(state))
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(cors_layer(&config.allowed_origins))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    // No configured origins - allow any origin (development)
    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
}
