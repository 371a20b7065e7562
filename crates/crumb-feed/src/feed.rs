//! Feed facade used by the API layer.
//!
//! Wraps a [`DynFeedSource`] and applies the site's tolerance policy: the
//! feed section is decorative, so any fetch problem degrades to an empty
//! list instead of an error page.

use tracing::{info, warn};

use crumb_core::config::FeedConfig;

use crate::source::{DynFeedSource, HttpFeedSource, MockFeedSource};
use crate::types::{MediaItem, MediaKind};

pub struct Feed {
    source: Box<dyn DynFeedSource>,
    config: FeedConfig,
}

impl Feed {
    pub fn new(source: Box<dyn DynFeedSource>, config: FeedConfig) -> Self {
        Self { source, config }
    }

    /// Builds a feed from configuration. An empty endpoint means no feed
    /// is wired up; the facade then always serves an empty list.
    pub fn from_config(config: FeedConfig) -> crumb_core::Result<Self> {
        if config.endpoint.trim().is_empty() {
            info!("no feed endpoint configured, feed disabled");
            return Ok(Self::new(Box::new(MockFeedSource::empty()), config));
        }
        let source = HttpFeedSource::new(&config)?;
        info!(endpoint = %config.endpoint, "feed endpoint configured");
        Ok(Self::new(Box::new(source), config))
    }

    /// Every media item the source currently has. Fetch failures are
    /// logged and produce an empty list.
    pub async fn latest_media(&self) -> Vec<MediaItem> {
        match self.source.fetch_media_boxed().await {
            Ok(items) => items,
            Err(err) => {
                warn!(error = %err, "feed fetch failed, serving empty feed");
                Vec::new()
            }
        }
    }

    /// The newest image posts, up to `limit` (defaulting from config).
    pub async fn latest_posts(&self, limit: Option<usize>) -> Vec<MediaItem> {
        let limit = limit.unwrap_or(self.config.default_post_limit);
        self.filtered(MediaKind::Image, limit).await
    }

    /// The newest video reels, up to `limit` (defaulting from config).
    pub async fn latest_reels(&self, limit: Option<usize>) -> Vec<MediaItem> {
        let limit = limit.unwrap_or(self.config.default_reel_limit);
        self.filtered(MediaKind::Video, limit).await
    }

    async fn filtered(&self, kind: MediaKind, limit: usize) -> Vec<MediaItem> {
        self.latest_media()
            .await
            .into_iter()
            .filter(|item| item.media_type == kind)
            .take(limit)
            .collect()
    }
}
