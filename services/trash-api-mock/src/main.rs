//! Trash API mock CLI
//!
//! Command-line interface for the local detection API stand-in.

use std::path::PathBuf;

use clap::Parser;
use tracing::Level;
use trash_api_mock::{load_config, Config};

#[derive(Parser)]
#[command(name = "trash-api-mock")]
#[command(about = "Local stand-in for the trash detection API")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to listen on (overrides config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, port={:?}, log_level={:?}",
        args.config,
        args.port,
        args.log_level
    );

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    if let Some(port) = args.port {
        config.port = port;
    }

    tracing::info!("Starting trash API mock");
    tracing::debug!(
        "Status: {:?}, count: {}, faults: {:?}, delay: {}ms",
        config.status,
        config.count,
        config.faults,
        config.response_delay_ms
    );

    trash_api_mock::run(config).await?;

    Ok(())
}
