use std::path::PathBuf;

use clap::Parser;

/// Errata error-normalization server
#[derive(Debug, Parser)]
#[command(name = "errata", about = "Serve JSON error envelopes for HTTP APIs")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "errata.toml", env = "ERRATA_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "ERRATA_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,

    /// Log filter used when `RUST_LOG` is not set
    #[arg(long, default_value = "info", env = "ERRATA_LOG")]
    pub log_filter: String,
}
