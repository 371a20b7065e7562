//! Router setup with all API routes and middleware.
//!
//! Configures the axum Router with CORS, tracing, compression,
//! and all endpoint handlers.

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::handlers;
use crate::state::AppState;

/// Create the axum Router with all routes and middleware.
///
/// CORS origins come from `[server] cors_origins` in the configuration;
/// the widget served from `/ui` is same-origin and needs none of them.
pub fn create_router(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = state
        .config
        .server
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/ui", get(handlers::ui))
        .route("/chat/sessions", post(handlers::create_chat_session))
        .route("/chat/message", post(handlers::chat_message))
        .route(
            "/chat/sessions/{id}/messages",
            get(handlers::chat_history),
        )
        .route("/chat/sessions/{id}", delete(handlers::end_chat_session))
        .route("/products", get(handlers::products))
        .route("/products/categories", get(handlers::product_categories))
        .route("/products/{id}", get(handlers::product))
        .route("/feed/media", get(handlers::feed_media))
        .layer(DefaultBodyLimit::max(64 * 1024)) // 64KB global limit
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the HTTP server on the configured address.
///
/// Binds to 127.0.0.1 (localhost only) on the port from config; a reverse
/// proxy fronts the service in deployment.
pub async fn start_server(
    config: &crumb_core::config::CrumbConfig,
    state: AppState,
) -> crumb_core::Result<()> {
    let port = config.server.port;
    let addr = format!("127.0.0.1:{}", port);

    let router = create_router(state);

    tracing::info!("Starting API server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| crumb_core::CrumbError::Api(format!("Failed to bind: {}", e)))?;

    axum::serve(listener, router)
        .await
        .map_err(|e| crumb_core::CrumbError::Api(format!("Server error: {}", e)))?;

    Ok(())
}
