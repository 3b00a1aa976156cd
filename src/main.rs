//! Salary Engine HTTP server.
//!
//! Usage: `salary-engine [CONFIG_DIR]`. Without an argument the directory is
//! taken from `SALARY_ENGINE_CONFIG`, falling back to `./config/default`.

use std::env;
use std::path::PathBuf;

use anyhow::Context;
use tracing::info;

use salary_engine::api::{AppState, create_router};
use salary_engine::config::ConfigLoader;

const CONFIG_ENV: &str = "SALARY_ENGINE_CONFIG";
const DEFAULT_CONFIG_DIR: &str = "./config/default";

fn config_dir() -> PathBuf {
    env::args_os()
        .nth(1)
        .or_else(|| env::var_os(CONFIG_ENV))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,salary_engine=debug".into()),
        )
        .init();

    let dir = config_dir();
    let config = ConfigLoader::load(&dir)
        .with_context(|| format!("loading configuration from {}", dir.display()))?;
    info!(
        config_dir = %dir.display(),
        payday = config.payday(),
        members = config.members().len(),
        "Configuration loaded"
    );

    let state = AppState::from_config(&config)?;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("binding {}", config.bind_address()))?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
