//! Core traits for the DDNS updater
//!
//! - [`IpSource`]: Discover the public address
//! - [`DnsProvider`]: Read and replace the managed record

pub mod ip_source;
pub mod dns_provider;

pub use ip_source::IpSource;
pub use dns_provider::DnsProvider;
