use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{CrumbError, Result};

/// Top-level configuration for the Crumb application.
///
/// Loaded from `~/.crumb/config.toml` by default. Each section corresponds
/// to a bounded context or cross-cutting concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrumbConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub feed: FeedConfig,
}

impl Default for CrumbConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            server: ServerConfig::default(),
            chat: ChatConfig::default(),
            feed: FeedConfig::default(),
        }
    }
}

impl CrumbConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: CrumbConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| CrumbError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// TCP port for the API server.
    pub port: u16,
    /// Origins allowed by CORS. The storefront dev server's origin
    /// belongs here.
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 4040,
            cors_origins: vec![
                "http://localhost:5173".to_string(),
                "http://127.0.0.1:5173".to_string(),
            ],
        }
    }
}

/// Chat service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Whether the chat service accepts messages.
    pub enabled: bool,
    /// Maximum user message length in characters.
    pub max_message_length: usize,
    /// Typing-indicator delay hint in milliseconds, applied by the widget
    /// before it shows a reply. Never applied server-side.
    pub typing_delay_ms: u64,
    /// Minutes of inactivity before a session expires.
    pub session_ttl_minutes: u32,
    /// Maximum messages retained per session (oldest dropped first).
    pub history_limit: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_message_length: 500,
            typing_delay_ms: 1000,
            session_ttl_minutes: 30,
            history_limit: 200,
        }
    }
}

/// Media feed configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// URL of the media feed endpoint. Empty means the feed is disabled
    /// and the feed routes serve an empty list.
    pub endpoint: String,
    /// HTTP timeout for feed fetches, in seconds.
    pub timeout_secs: u64,
    /// Default number of image posts returned when no limit is given.
    pub default_post_limit: usize,
    /// Default number of video reels returned when no limit is given.
    pub default_reel_limit: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            timeout_secs: 10,
            default_post_limit: 3,
            default_reel_limit: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = CrumbConfig::default();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.server.port, 4040);
        assert!(config.chat.enabled);
        assert_eq!(config.chat.max_message_length, 500);
        assert_eq!(config.chat.typing_delay_ms, 1000);
        assert_eq!(config.chat.session_ttl_minutes, 30);
        assert_eq!(config.chat.history_limit, 200);
        assert!(config.feed.endpoint.is_empty());
        assert_eq!(config.feed.timeout_secs, 10);
        assert_eq!(config.feed.default_post_limit, 3);
        assert_eq!(config.feed.default_reel_limit, 1);
    }

    #[test]
    fn test_load_valid_config() {
        let content = r#"
[general]
log_level = "debug"

[server]
port = 8080
cors_origins = ["https://minibiscos.example"]

[chat]
enabled = false
max_message_length = 280
typing_delay_ms = 500
session_ttl_minutes = 10
history_limit = 50

[feed]
endpoint = "http://localhost:9000/api/instagram"
timeout_secs = 5
default_post_limit = 6
default_reel_limit = 2
"#;
        let file = create_temp_config(content);
        let config = CrumbConfig::load(file.path()).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.cors_origins, vec!["https://minibiscos.example"]);
        assert!(!config.chat.enabled);
        assert_eq!(config.chat.max_message_length, 280);
        assert_eq!(config.chat.typing_delay_ms, 500);
        assert_eq!(config.chat.session_ttl_minutes, 10);
        assert_eq!(config.chat.history_limit, 50);
        assert_eq!(config.feed.endpoint, "http://localhost:9000/api/instagram");
        assert_eq!(config.feed.timeout_secs, 5);
        assert_eq!(config.feed.default_post_limit, 6);
        assert_eq!(config.feed.default_reel_limit, 2);
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let content = r#"
[general]
log_level = "warn"
"#;
        let file = create_temp_config(content);
        let config = CrumbConfig::load(file.path()).unwrap();
        assert_eq!(config.general.log_level, "warn");
        // Remaining fields use defaults
        assert_eq!(config.server.port, 4040);
        assert!(config.chat.enabled);
        assert_eq!(config.feed.timeout_secs, 10);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = CrumbConfig::load_or_default(Path::new("/nonexistent/config.toml"));
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.server.port, 4040);
    }

    #[test]
    fn test_load_invalid_toml() {
        let content = "this is {{ not valid TOML";
        let file = create_temp_config(content);
        let result = CrumbConfig::load(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = CrumbConfig::default();
        config.save(&path).unwrap();

        let reloaded = CrumbConfig::load(&path).unwrap();
        assert_eq!(reloaded.server.port, config.server.port);
        assert_eq!(reloaded.chat.typing_delay_ms, config.chat.typing_delay_ms);
        assert_eq!(reloaded.feed.endpoint, config.feed.endpoint);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("dir").join("config.toml");

        let config = CrumbConfig::default();
        config.save(&path).unwrap();

        assert!(path.exists());
        let reloaded = CrumbConfig::load(&path).unwrap();
        assert_eq!(reloaded.general.log_level, "info");
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = CrumbConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let deserialized: CrumbConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(deserialized.general.log_level, config.general.log_level);
        assert_eq!(deserialized.server.port, config.server.port);
        assert_eq!(deserialized.server.cors_origins, config.server.cors_origins);
        assert_eq!(
            deserialized.chat.max_message_length,
            config.chat.max_message_length
        );
        assert_eq!(
            deserialized.feed.default_post_limit,
            config.feed.default_post_limit
        );
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let content = "";
        let file = create_temp_config(content);
        let config = CrumbConfig::load(file.path()).unwrap();

        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.server.port, 4040);
        assert_eq!(config.chat.history_limit, 200);
    }

    #[test]
    fn test_sub_config_defaults() {
        let general = GeneralConfig::default();
        assert_eq!(general.log_level, "info");

        let server = ServerConfig::default();
        assert_eq!(server.port, 4040);
        assert_eq!(server.cors_origins.len(), 2);

        let chat = ChatConfig::default();
        assert!(chat.enabled);
        assert_eq!(chat.max_message_length, 500);

        let feed = FeedConfig::default();
        assert!(feed.endpoint.is_empty());
        assert_eq!(feed.default_reel_limit, 1);
    }
}
