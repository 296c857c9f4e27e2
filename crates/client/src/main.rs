//! Dungeon bot binary.
//!
//! ```bash
//! dungeon-bot API_KEY            # play until interrupted
//! dungeon-bot API_KEY respawn    # respawn the character and exit
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use dungeon_client::{ClientConfig, HttpGameApi, RunMode, logging};
use runtime::{Agent, AgentConfig, DriverConfig, TickDriver};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env().with_args(std::env::args().skip(1));
    logging::setup_logging(config.log_dir.as_deref())?;

    let api_key = config
        .api_key
        .clone()
        .context("USAGE: dungeon-bot API_KEY [respawn] (or set DUNGEON_API_KEY)")?;

    let agent_config = match &config.agent_config {
        Some(path) => load_agent_config(path)?,
        None => AgentConfig::default(),
    };

    let api = HttpGameApi::new(&config.base_url, api_key);
    let driver_config = DriverConfig::new(config.retry_delay, DriverConfig::DEFAULT_IDLE_DELAY);
    let mut driver = TickDriver::new(api, Agent::new(agent_config), driver_config);

    tracing::info!("Server: {}", config.base_url);

    match config.mode {
        RunMode::Respawn => {
            driver.respawn().await?;
            tracing::info!("Respawn requested");
        }
        RunMode::Play => {
            tokio::select! {
                _ = driver.run() => {}
                _ = tokio::signal::ctrl_c() => tracing::info!("Interrupted, shutting down"),
            }
        }
    }
    Ok(())
}

fn load_agent_config(path: &Path) -> Result<AgentConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read agent config {}", path.display()))?;
    let config = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse agent config {}", path.display()))?;
    tracing::info!("Agent config loaded from {}", path.display());
    Ok(config)
}
