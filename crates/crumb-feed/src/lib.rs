//! Social media feed client for the MiniBiscos site.
//!
//! Fetches the latest posts and reels from a configured feed endpoint and
//! degrades to an empty feed when the endpoint is missing or unreachable.

pub mod feed;
pub mod source;
pub mod types;

pub use feed::Feed;
pub use source::{DynFeedSource, FeedSource, HttpFeedSource, MockFeedSource};
pub use types::{MediaItem, MediaKind};
