//! Command-line argument parsing for the crumb binary.
//!
//! Settings resolve in priority order: CLI flag, then environment
//! variable, then config file, then built-in default.

use clap::Parser;
use std::path::PathBuf;

/// MiniBiscos site server: chat assistant, product catalog, and media feed.
#[derive(Parser, Debug)]
#[command(name = "crumb", version, about)]
pub struct CliArgs {
    /// Path to the configuration file
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Port for the API server
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: `--config` flag, `CRUMB_CONFIG` env var,
    /// `~/.crumb/config.toml`.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(path) = &self.config {
            return path.clone();
        }
        if let Ok(path) = std::env::var("CRUMB_CONFIG") {
            return PathBuf::from(path);
        }
        default_config_path()
    }

    /// Resolve the API server port.
    ///
    /// Priority: `--port` flag, `CRUMB_PORT` env var, config file value,
    /// 4040.
    pub fn resolve_port(&self, config_port: u16) -> u16 {
        if let Some(port) = self.port {
            return port;
        }
        if let Ok(value) = std::env::var("CRUMB_PORT") {
            if let Ok(port) = value.parse::<u16>() {
                return port;
            }
        }
        if config_port != 0 {
            return config_port;
        }
        4040
    }

    /// Log level override from the `--log-level` flag, if given.
    pub fn resolve_log_level(&self) -> Option<String> {
        self.log_level.clone()
    }
}

/// Default config location under the user's home directory.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Ok(home) = std::env::var("USERPROFILE") {
            return PathBuf::from(home).join(".crumb").join("config.toml");
        }
    }
    #[cfg(not(target_os = "windows"))]
    {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".crumb").join("config.toml");
        }
    }
    PathBuf::from("config.toml")
}
