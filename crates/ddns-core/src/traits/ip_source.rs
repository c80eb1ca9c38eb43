// # IP Source Trait
//
// Defines the interface for discovering the caller's public address.
//
// ## Implementations
//
// - HTTP echo service: `ddns-ip-http` crate
//
// ## Usage
//
// ```rust,ignore
// use ddns_core::IpSource;
//
// #[tokio::main]
// async fn main() -> anyhow::Result<()> {
//     let source = /* IpSource implementation */;
//
//     let public_ip = source.current().await?;
//     println!("Public IP: {}", public_ip);
//
//     Ok(())
// }
// ```

use async_trait::async_trait;

/// Trait for IP source implementations
///
/// # Contract
///
/// - One lookup per call, no retries, no caching between calls
/// - The address is returned as the source reports it (trimmed), without
///   syntax validation; comparison against the registrar value is textual
/// - Must not spawn tasks
#[async_trait]
pub trait IpSource: Send + Sync {
    /// Get the current public address
    ///
    /// # Returns
    ///
    /// - `Ok(String)`: The address as reported by the source
    /// - `Err(Error)`: Network or Upstream error if the lookup failed
    async fn current(&self) -> Result<String, crate::Error>;

    /// Source name (for logging)
    fn source_name(&self) -> &'static str;
}
