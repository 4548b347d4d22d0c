//! Command line interface definition

use clap::Parser;
use std::path::PathBuf;

/// upkeep - storage-retention enforcement for upload directories
#[derive(Parser)]
#[command(name = "upkeep")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Check that uploads usage is within configured parameters")]
#[command(long_about = None)]
pub struct Cli {
    /// Path to the JSON configuration file
    #[arg(long, value_name = "PATH", default_value = "config.json")]
    pub config: PathBuf,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
