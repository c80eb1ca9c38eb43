//! Core DDNS engine
//!
//! The DdnsEngine performs exactly one update cycle:
//! - Resolve the public address via IpSource
//! - Read the published record via DnsProvider
//! - Replace the record only if the two differ
//!
//! ## Flow
//!
//! ```text
//! ┌─────────────┐  public ip  ┌──────────────┐  get_record   ┌─────────────┐
//! │  IpSource   │────────────▶│  DdnsEngine  │──────────────▶│ DnsProvider │
//! └─────────────┘             └──────────────┘               └─────────────┘
//!                                     │        equal? stop
//!                                     └─────── update_record ──────▶
//! ```
//!
//! The first error aborts the cycle; nothing after the failing step runs.

use crate::error::Result;
use crate::traits::{DnsProvider, IpSource};
use tracing::{debug, error, info};

/// Steps of an update cycle, named in failure logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Public address lookup
    ResolvePublicIp,
    /// Registrar read
    ReadRecord,
    /// Registrar write
    UpdateRecord,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Step::ResolvePublicIp => "resolve public IP",
            Step::ReadRecord => "read DNS record",
            Step::UpdateRecord => "update DNS record",
        };
        f.write_str(name)
    }
}

fn log_failure(step: Step) -> impl FnOnce(&crate::Error) {
    move |e| error!("{} failed: {}", step, e)
}

/// Outcome of a successful cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateResult {
    /// Record was replaced
    Updated {
        /// Value published before the update
        previous_ip: String,
        /// Value written
        new_ip: String,
    },
    /// Record already had the public address (no-op)
    Unchanged {
        /// The public address, equal to the published value
        current_ip: String,
    },
}

/// One-shot DDNS engine
///
/// Holds the two components for the run; owns no other state.
pub struct DdnsEngine {
    /// IP source for the public address
    ip_source: Box<dyn IpSource>,

    /// DNS provider for the managed record
    provider: Box<dyn DnsProvider>,
}

impl DdnsEngine {
    /// Create a new DDNS engine
    pub fn new(ip_source: Box<dyn IpSource>, provider: Box<dyn DnsProvider>) -> Self {
        Self {
            ip_source,
            provider,
        }
    }

    /// Run one update cycle
    ///
    /// # Returns
    ///
    /// - `Ok(UpdateResult::Unchanged)`: Published value already matches
    /// - `Ok(UpdateResult::Updated)`: Exactly one update was issued
    /// - `Err(Error)`: The first failure, unmodified (already logged with
    ///   the failing [`Step`])
    pub async fn run_once(&self) -> Result<UpdateResult> {
        let public_ip = self
            .ip_source
            .current()
            .await
            .inspect_err(log_failure(Step::ResolvePublicIp))?;
        debug!(
            "Public IP from {}: {}",
            self.ip_source.source_name(),
            public_ip
        );

        let record = self
            .provider
            .get_record()
            .await
            .inspect_err(log_failure(Step::ReadRecord))?;
        let current_ip = record.data;
        debug!(
            "Published IP from {}: {}",
            self.provider.provider_name(),
            current_ip
        );

        if current_ip == public_ip {
            info!("Nothing to update (publicIP = DNS = {})", public_ip);
            return Ok(UpdateResult::Unchanged {
                current_ip: public_ip,
            });
        }

        info!("Update DNS from {} to {}", current_ip, public_ip);
        self.provider
            .update_record(&public_ip)
            .await
            .inspect_err(log_failure(Step::UpdateRecord))?;
        info!("Update successful");

        Ok(UpdateResult::Updated {
            previous_ip: current_ip,
            new_ip: public_ip,
        })
    }
}
