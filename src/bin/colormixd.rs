//! colormixd, the colormix daemon.
//!
//! Serves the catalog and recipe endpoints over HTTP for the frontend.

use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use colormix::server::config::{Config, Secrets};
use colormix::server::{build_gateway, serve};

/// colormix daemon: paint catalog and recipe backend.
#[derive(Parser)]
#[command(name = "colormixd")]
#[command(version = colormix::PKG_VERSION)]
#[command(about = "Colormix backend-for-frontend daemon")]
struct Args {
    /// Path to configuration file.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Override the bind address from the config file.
    #[arg(short, long, env = "COLORMIX_ADDRESS")]
    address: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // Load configuration
    let mut config = Config::load(args.config.as_deref())?;
    if let Some(address) = args.address {
        config.server.address = address;
    }
    let secrets = Secrets::load()?;

    let gateway = build_gateway(&config, &secrets)?;

    info!(
        version = colormix::version_string(),
        address = %config.server.address,
        "colormixd starting"
    );

    serve(&config, Arc::new(gateway)).await?;

    Ok(())
}
