//! `srcpack-server` binary entrypoint.
//!
//! Loads configuration from environment variables and starts the HTTP
//! server.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

use anyhow::Result;

use srcpack_core::BundleConfig;
use srcpack_server::AppState;
use srcpack_server::ServerConfig;
use srcpack_server::app_router;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let config = ServerConfig::from_env()?;
    let addr = config.bind_addr()?;

    let bundle_config = BundleConfig::rooted_at(&config.project_dir);
    bundle_config.validate()?;
    tracing::info!(
        project_dir = %config.project_dir,
        archive_root = %bundle_config.archive_root,
        "serving project bundle"
    );

    let app = app_router(AppState::new(bundle_config));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
