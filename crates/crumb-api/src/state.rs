//! Application state shared across all route handlers.
//!
//! AppState holds references to all services and shared resources.
//! It is passed to handlers via axum's State extractor.

use std::sync::Arc;
use std::time::Instant;

use crumb_chat::ChatService;
use crumb_core::config::CrumbConfig;
use crumb_feed::Feed;

/// Shared application state.
///
/// All fields use `Arc` for cheap cloning across handler tasks. The
/// catalog is a compile-time table and needs no state. Configuration is
/// read-only for the lifetime of the process.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<CrumbConfig>,
    /// Chat sessions and response resolution.
    pub chat: Arc<ChatService>,
    /// Media feed facade.
    pub feed: Arc<Feed>,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState with the given components.
    pub fn new(config: CrumbConfig, feed: Feed) -> Self {
        let chat = ChatService::new(config.chat.clone());
        Self {
            config: Arc::new(config),
            chat: Arc::new(chat),
            feed: Arc::new(feed),
            start_time: Instant::now(),
        }
    }
}
