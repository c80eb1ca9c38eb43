//! DNS record as exchanged with the registrar

use serde::{Deserialize, Serialize};

/// TTL written on every update (seconds)
pub const UPDATE_TTL: u32 = 60;

/// A single DNS record
///
/// `type` and `name` are optional: the registrar fills them on read, and
/// updates omit them entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    /// Record type (e.g. "A")
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,

    /// Record name (e.g. "home")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Record value, the IP address
    pub data: String,

    /// Time-to-live in seconds
    pub ttl: u32,
}

impl DnsRecord {
    /// Record body for an update: only `data` and the fixed TTL
    pub fn update(data: impl Into<String>) -> Self {
        Self {
            record_type: None,
            name: None,
            data: data.into(),
            ttl: UPDATE_TTL,
        }
    }
}
