//! Crumb API crate - axum HTTP server and route handlers.
//!
//! Provides the REST API for the MiniBiscos site: chat sessions and
//! message resolution, the product catalog, the media feed, the embedded
//! chat widget, and health checks.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{create_router, start_server};
pub use state::AppState;
