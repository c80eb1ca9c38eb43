//! Wiring for the `ddns-update` binary
//!
//! Kept as a library so the whole run can be exercised against mock servers.

pub mod cli;

use ddns_core::config::UpdaterConfig;
use ddns_core::{DdnsEngine, Result, UpdateResult};
use ddns_ip_http::HttpIpSource;
use ddns_provider_godaddy::GoDaddyProvider;

/// Build the engine for `config`
///
/// Fails only with configuration errors (invalid target, HTTP client
/// construction); no request is sent.
pub fn build_engine(config: &UpdaterConfig) -> Result<DdnsEngine> {
    config.validate()?;

    let ip_source = HttpIpSource::new(config.endpoints.ip_service_url.clone(), &config.http)?;
    let provider = GoDaddyProvider::from_config(config)?;

    tracing::debug!(
        "Managing {}.{} via {}",
        config.target.sub_domain,
        config.target.root_domain,
        provider.record_url()
    );

    Ok(DdnsEngine::new(Box::new(ip_source), Box::new(provider)))
}

/// Build the engine and run one update cycle
pub async fn run(config: &UpdaterConfig) -> Result<UpdateResult> {
    build_engine(config)?.run_once().await
}
