use clap::Parser;
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_FILE;

/// Personal task scheduler with recurring tasks, served over HTTP
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the TOML config file
    #[clap(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
    /// Interface to bind (overrides config)
    #[clap(long)]
    pub host: Option<String>,
    /// Port to listen on (overrides config)
    #[clap(short, long)]
    pub port: Option<u16>,
    /// SQLite database file (overrides config)
    #[clap(short, long)]
    pub database: Option<String>,
}
