//! Feed wire types.
//!
//! Field names and the uppercase media type values follow the upstream
//! feed API, so items deserialize straight off the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of a media item. Kinds introduced upstream that this crate does
/// not know yet deserialize as [`MediaKind::Other`] and simply match no
/// post or reel filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaKind {
    #[serde(rename = "IMAGE")]
    Image,
    #[serde(rename = "VIDEO")]
    Video,
    #[serde(other, rename = "OTHER")]
    Other,
}

impl MediaKind {
    /// Parses a kind slug from a query string, ignoring ASCII case.
    pub fn parse(value: &str) -> Option<MediaKind> {
        match value.trim().to_ascii_lowercase().as_str() {
            "image" | "posts" => Some(MediaKind::Image),
            "video" | "reels" => Some(MediaKind::Video),
            _ => None,
        }
    }
}

/// One entry from the media feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub media_type: MediaKind,
    pub media_url: String,
    pub permalink: String,
    pub timestamp: DateTime<Utc>,
}
