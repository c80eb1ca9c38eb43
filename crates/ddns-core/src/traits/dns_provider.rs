// # DNS Provider Trait
//
// Defines the interface for reading and replacing the managed DNS record via
// a registrar API.
//
// ## Implementations
//
// - GoDaddy: `ddns-provider-godaddy` crate
//
// ## Usage
//
// ```rust,ignore
// use ddns_core::DnsProvider;
//
// #[tokio::main]
// async fn main() -> anyhow::Result<()> {
//     let provider = /* DnsProvider implementation */;
//
//     let current = provider.get_record().await?;
//     if current.data != "1.2.3.4" {
//         provider.update_record("1.2.3.4").await?;
//     }
//
//     Ok(())
// }
// ```

use crate::record::DnsRecord;
use async_trait::async_trait;

/// Trait for DNS provider implementations
///
/// A provider is bound to one record (credentials and endpoint are given at
/// construction) and exposes exactly the two registrar round-trips the
/// engine needs.
///
/// # Contract
///
/// - One HTTP request per call
/// - No retry logic, no caching, no background tasks
/// - Never decides whether an update is needed (owned by `DdnsEngine`)
/// - Never logs credentials
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// Read the record as currently published
    ///
    /// Only the first record returned by the registrar is consulted.
    ///
    /// # Returns
    ///
    /// - `Ok(DnsRecord)`: The first published record
    /// - `Err(Error::EmptyResult)`: The registrar returned no records
    /// - `Err(Error)`: Network, Upstream or Parse failure
    async fn get_record(&self) -> Result<DnsRecord, crate::Error>;

    /// Replace the record's value with `new_ip`
    ///
    /// # Returns
    ///
    /// - `Ok(())`: The registrar answered 200
    /// - `Err(Error)`: Network or Upstream failure
    async fn update_record(&self, new_ip: &str) -> Result<(), crate::Error>;

    /// Get the provider name (for logging/debugging)
    fn provider_name(&self) -> &'static str;
}
