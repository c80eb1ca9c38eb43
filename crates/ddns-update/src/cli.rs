//! Command-line arguments and logging setup

use anyhow::Result;
use clap::Parser;
use ddns_core::config::Target;
use std::path::PathBuf;
use tracing::Level;

/// Environment variable selecting the log level
pub const LOG_LEVEL_ENV: &str = "DDNS_LOG_LEVEL";

/// Update a GoDaddy A record to this machine's public IP address
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "ddns-update", version)]
pub struct Args {
    /// Path to a file containing the GoDaddy API key and secret
    #[arg(long, default_value = "secrets.json")]
    pub secrets_file: PathBuf,

    /// The root GoDaddy domain
    #[arg(long, default_value = "domain.com")]
    pub root_domain: String,

    /// The subdomain to update
    #[arg(long, default_value = "sub")]
    pub sub_domain: String,
}

impl Args {
    /// Record targeted by these arguments
    pub fn target(&self) -> Target {
        Target::new(self.root_domain.clone(), self.sub_domain.clone())
    }
}

/// Parse a log level name (case-insensitive)
pub fn parse_log_level(value: &str) -> Result<Level> {
    match value.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => anyhow::bail!(
            "{} '{}' is not valid. \
            Valid levels: trace, debug, info, warn, error",
            LOG_LEVEL_ENV,
            value
        ),
    }
}
