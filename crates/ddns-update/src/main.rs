// # ddns-update - one-shot GoDaddy DDNS updater
//
// Runs a single cycle and exits:
// 1. Load the API credentials and compose the record endpoint
// 2. Look up the public IP
// 3. Read the published A record
// 4. Replace it only if it differs
//
// Periodic execution is left to an external scheduler (cron, systemd timer).
//
// ## Configuration
//
// - `--secrets-file <PATH>`: JSON `{"apiKey": "...", "apiSecret": "..."}`
//   (default `secrets.json`)
// - `--root-domain <DOMAIN>`: default `domain.com`
// - `--sub-domain <NAME>`: default `sub`
// - `DDNS_LOG_LEVEL`: trace, debug, info, warn, error (default info)
//
// ## Example
//
// ```bash
// ddns-update --secrets-file /etc/ddns/secrets.json \
//     --root-domain example.com --sub-domain home
// ```

use clap::Parser;
use ddns_core::config::UpdaterConfig;
use ddns_update::cli::{self, Args};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::FmtSubscriber;

/// Exit codes for different termination scenarios
///
/// - 0: No-op or successful update
/// - 1: Configuration or startup error
/// - 2: Runtime error (network, registrar)
#[derive(Debug, Clone, Copy)]
enum DdnsExitCode {
    /// Run completed
    Success = 0,
    /// Configuration error or startup failure
    ConfigError = 1,
    /// Runtime error
    RuntimeError = 2,
}

impl From<DdnsExitCode> for ExitCode {
    fn from(code: DdnsExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize tracing
    let log_level = match std::env::var(cli::LOG_LEVEL_ENV) {
        Ok(value) => match cli::parse_log_level(&value) {
            Ok(level) => level,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                return DdnsExitCode::ConfigError.into();
            }
        },
        Err(_) => tracing::Level::INFO,
    };

    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return DdnsExitCode::ConfigError.into();
    }

    let config = match UpdaterConfig::load(&args.secrets_file, args.target()) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Invalid config: {}", e);
            return DdnsExitCode::ConfigError.into();
        }
    };

    // Single-threaded runtime: every request is awaited before the next
    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return DdnsExitCode::RuntimeError.into();
        }
    };

    let result = rt.block_on(async {
        match ddns_update::run(&config).await {
            Ok(_) => DdnsExitCode::Success,
            // Step failures were already logged by the engine
            Err(e) if e.is_config() => {
                error!("Invalid config: {}", e);
                DdnsExitCode::ConfigError
            }
            Err(_) => DdnsExitCode::RuntimeError,
        }
    });

    result.into()
}
