// # ddns-core
//
// Core library for the one-shot GoDaddy DDNS updater.
//
// ## Architecture Overview
//
// - **IpSource**: Trait for discovering the public address
// - **DnsProvider**: Trait for reading and replacing the managed record
// - **DdnsEngine**: Runs one resolve → read → compare → (update) cycle
// - **UpdaterConfig**: Credentials, target and transport settings, built once
//
// ## Design Principles
//
// 1. **Fail fast**: The first error ends the run; nothing is retried
// 2. **No hidden state**: Components receive their configuration explicitly
// 3. **Bounded time**: Every HTTP client carries a timeout

pub mod config;
pub mod engine;
pub mod error;
pub mod http;
pub mod record;
pub mod traits;

// Re-export core types for convenience
pub use config::{Credentials, Endpoints, HttpConfig, Target, UpdaterConfig};
pub use engine::{DdnsEngine, Step, UpdateResult};
pub use error::{Error, Result};
pub use record::DnsRecord;
pub use traits::{DnsProvider, IpSource};
