//! upkeep - storage-retention enforcement for upload directories
//!
//! Reads the run configuration, then processes each configured folder
//! strictly in order: expired files are deleted during the scan, storage
//! thresholds are evaluated, and oldest-first eviction runs when usage is
//! over the cap. All actions are reported to Slack or the console.

mod cli;
mod error;

use crate::cli::Cli;
use crate::error::CliError;
use clap::Parser;
use std::process;
use tracing::{error, info};
use upkeep_config::RunConfig;
use upkeep_notify::{Notifier, NotifyConfig};
use upkeep_retention::{process_folder, MaintenanceCtx};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    if let Err(e) = run(cli).await {
        error!("run failed: {}", e);
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Main application logic
async fn run(cli: Cli) -> Result<(), CliError> {
    info!("Starting upkeep v{}", env!("CARGO_PKG_VERSION"));

    // Any configuration failure aborts here, before any folder is touched
    let config = RunConfig::load_from_file(&cli.config).await?;

    let notifier = Notifier::new(config.slack.clone(), NotifyConfig::default())?;
    let ctx = MaintenanceCtx::new(notifier);

    for folder in &config.folders {
        let outcome = process_folder(&ctx, folder).await?;
        info!(
            folder = %folder.name,
            expired_deleted = outcome.expired_deleted,
            evicted = outcome.evicted,
            remaining_bytes = outcome.remaining_bytes,
            "folder processed"
        );
    }

    info!("All folders processed");
    Ok(())
}

/// Initialize tracing/logging
fn init_tracing(debug_enabled: bool) {
    let default_filter = if debug_enabled {
        "info,upkeep=debug,upkeep_retention=debug,upkeep_config=debug"
    } else {
        "warn,upkeep=info,upkeep_retention=info"
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();
}
