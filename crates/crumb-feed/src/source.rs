//! Feed source trait and implementations.
//!
//! - `HttpFeedSource` fetches the configured feed endpoint over HTTP and
//!   deserializes the JSON item array. This is the production source.
//! - `MockFeedSource` serves a fixed item list for testing and for
//!   deployments with no feed endpoint configured.

use std::time::Duration;

use crumb_core::config::FeedConfig;
use crumb_core::CrumbError;

use crate::types::MediaItem;

/// Source of media feed items.
pub trait FeedSource: Send + Sync {
    /// Fetch every available media item, newest first as served upstream.
    fn fetch_media(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<MediaItem>, CrumbError>> + Send;
}

/// Object-safe version of [`FeedSource`] for dynamic dispatch.
///
/// Because `FeedSource::fetch_media` returns `impl Future` it is not
/// object-safe. This trait uses a boxed future instead, allowing
/// `Box<dyn DynFeedSource>` to be stored in structs without generics.
///
/// A blanket implementation is provided so that every `FeedSource`
/// automatically implements `DynFeedSource`.
pub trait DynFeedSource: Send + Sync {
    /// Fetch every available media item (boxed future).
    fn fetch_media_boxed<'a>(
        &'a self,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Vec<MediaItem>, CrumbError>> + Send + 'a>,
    >;
}

/// Blanket impl: any `FeedSource` automatically implements `DynFeedSource`.
impl<T: FeedSource> DynFeedSource for T {
    fn fetch_media_boxed<'a>(
        &'a self,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Vec<MediaItem>, CrumbError>> + Send + 'a>,
    > {
        Box::pin(self.fetch_media())
    }
}

// ---------------------------------------------------------------------------
// HttpFeedSource - real HTTP fetch of the configured endpoint
// ---------------------------------------------------------------------------

/// HTTP-backed feed source.
///
/// Expects the endpoint to return a JSON array of media items. Non-2xx
/// responses, timeouts, and malformed payloads all surface as
/// [`CrumbError::Feed`]; the caller decides how tolerant to be.
#[derive(Debug, Clone)]
pub struct HttpFeedSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpFeedSource {
    pub fn new(config: &FeedConfig) -> Result<Self, CrumbError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CrumbError::Feed(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl FeedSource for HttpFeedSource {
    async fn fetch_media(&self) -> Result<Vec<MediaItem>, CrumbError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| CrumbError::Feed(format!("Feed request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(CrumbError::Feed(format!(
                "Feed endpoint returned status {}",
                response.status()
            )));
        }

        response
            .json::<Vec<MediaItem>>()
            .await
            .map_err(|e| CrumbError::Feed(format!("Invalid feed payload: {}", e)))
    }
}

// ---------------------------------------------------------------------------
// MockFeedSource - fixed items for tests and feedless deployments
// ---------------------------------------------------------------------------

/// Feed source that serves a fixed list of items.
#[derive(Debug, Clone, Default)]
pub struct MockFeedSource {
    items: Vec<MediaItem>,
}

impl MockFeedSource {
    pub fn new(items: Vec<MediaItem>) -> Self {
        Self { items }
    }

    /// A source with nothing to serve. Used when no feed endpoint is
    /// configured.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl FeedSource for MockFeedSource {
    async fn fetch_media(&self) -> Result<Vec<MediaItem>, CrumbError> {
        Ok(self.items.clone())
    }
}
