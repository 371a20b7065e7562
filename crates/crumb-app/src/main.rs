//! Crumb application binary - composition root.
//!
//! Ties the crumb crates together into a single server process:
//! 1. Parse CLI arguments and load configuration from TOML
//! 2. Validate the chat knowledge base (fatal on failure)
//! 3. Build the feed client and shared application state
//! 4. Start the chat session expiry sweeper
//! 5. Start the axum REST API server

mod cli;

use clap::Parser;
use std::sync::Arc;

use crumb_api::AppState;
use crumb_core::config::CrumbConfig;
use crumb_feed::Feed;

use cli::CliArgs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config loads before tracing init since the log level may come from
    // the file. The outcome is logged once the subscriber is up.
    let config_file = args.resolve_config_path();
    let (mut config, load_err) = match CrumbConfig::load(&config_file) {
        Ok(config) => (config, None),
        Err(e) => (CrumbConfig::default(), Some(e)),
    };
    config.server.port = args.resolve_port(config.server.port);

    // Tracing. The --log-level flag wins over RUST_LOG, which wins over
    // the config file.
    let filter = match args.resolve_log_level() {
        Some(level) => tracing_subscriber::EnvFilter::new(level),
        None => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.general.log_level)),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting crumb v{}", env!("CARGO_PKG_VERSION"));
    match load_err {
        None => tracing::info!(path = %config_file.display(), "Configuration loaded"),
        Some(e) => {
            tracing::warn!(path = %config_file.display(), error = %e, "Config not loaded, using defaults");
        }
    }

    // Knowledge base validation is startup-fatal.
    let knowledge = crumb_chat::builtin();
    if let Err(e) = knowledge.validate() {
        tracing::error!(error = %e, "Knowledge base validation failed");
        return Err(e.into());
    }
    tracing::info!(topics = knowledge.topics.len(), "Knowledge base validated");
    tracing::info!(products = crumb_catalog::all().len(), "Catalog loaded");

    // Feed client. Serves an empty feed when no endpoint is configured.
    let feed = Feed::from_config(config.feed.clone())?;

    let state = AppState::new(config.clone(), feed);

    // Sweep expired chat sessions at half the session TTL, at least once
    // a minute.
    let sweep_secs = (u64::from(config.chat.session_ttl_minutes) * 60 / 2).max(60);
    let chat = Arc::clone(&state.chat);
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(std::time::Duration::from_secs(sweep_secs));
        loop {
            ticker.tick().await;
            if let Err(e) = chat.purge_expired() {
                tracing::warn!(error = %e, "Session sweep failed");
            }
        }
    });

    tracing::info!("Chat widget at http://127.0.0.1:{}/ui", config.server.port);

    crumb_api::start_server(&config, state).await?;

    Ok(())
}
