//! Configuration types for the DDNS updater
//!
//! Everything the run needs is gathered into an [`UpdaterConfig`] once at
//! startup and handed to the components by value or reference.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default IP echo service, returns the caller's address as plain text
pub const DEFAULT_IP_SERVICE_URL: &str = "http://myexternalip.com/raw";

/// Default GoDaddy API base
pub const DEFAULT_REGISTRAR_API_BASE: &str = "https://api.godaddy.com";

/// Default per-request timeout
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Record type managed by the updater
pub const RECORD_TYPE: &str = "A";

/// Registrar API credentials
///
/// The Debug implementation does NOT expose either value.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// API key
    #[serde(rename = "apiKey")]
    pub key: String,

    /// API secret
    /// ⚠️ NEVER log this value
    #[serde(rename = "apiSecret")]
    pub secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &"<REDACTED>")
            .field("secret", &"<REDACTED>")
            .finish()
    }
}

impl Credentials {
    /// Create credentials from a key and secret
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }

    /// Load credentials from a JSON secrets file
    ///
    /// The file must hold an object with string fields `apiKey` and
    /// `apiSecret`. Unknown fields are ignored.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, crate::Error> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            crate::Error::config(format!(
                "Failed to read secrets file {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_json(&contents).map_err(|e| {
            crate::Error::config(format!(
                "Failed to parse secrets file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Parse credentials from JSON text
    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }

    /// Value for the registrar `Authorization` header
    pub fn authorization_header(&self) -> String {
        format!("sso-key {}:{}", self.key, self.secret)
    }
}

/// The record being kept up to date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// Root domain (e.g. "example.com")
    pub root_domain: String,

    /// Subdomain (e.g. "home")
    pub sub_domain: String,
}

impl Target {
    /// Create a new target
    pub fn new(root_domain: impl Into<String>, sub_domain: impl Into<String>) -> Self {
        Self {
            root_domain: root_domain.into(),
            sub_domain: sub_domain.into(),
        }
    }

    /// Validate the target
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.root_domain.is_empty() {
            return Err(crate::Error::config("Root domain cannot be empty"));
        }
        if self.sub_domain.is_empty() {
            return Err(crate::Error::config("Subdomain cannot be empty"));
        }
        Ok(())
    }

    /// Compose the A-record endpoint under the given API base
    ///
    /// Both names are used verbatim.
    pub fn record_url(&self, api_base: &str) -> String {
        format!(
            "{}/v1/domains/{}/records/{}/{}",
            api_base.trim_end_matches('/'),
            self.root_domain,
            RECORD_TYPE,
            self.sub_domain
        )
    }
}

impl Default for Target {
    fn default() -> Self {
        Self::new("domain.com", "sub")
    }
}

/// External endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    /// URL of the plain-text IP echo service
    #[serde(default = "default_ip_service_url")]
    pub ip_service_url: String,

    /// Registrar API base (scheme + host)
    #[serde(default = "default_registrar_api_base")]
    pub registrar_api_base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            ip_service_url: default_ip_service_url(),
            registrar_api_base: default_registrar_api_base(),
        }
    }
}

fn default_ip_service_url() -> String {
    DEFAULT_IP_SERVICE_URL.to_string()
}

fn default_registrar_api_base() -> String {
    DEFAULT_REGISTRAR_API_BASE.to_string()
}

/// HTTP transport settings shared by every outbound call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Per-request timeout in seconds
    #[serde(default = "default_http_timeout_secs")]
    pub timeout_secs: u64,
}

impl HttpConfig {
    /// Timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the transport settings
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.timeout_secs == 0 {
            return Err(crate::Error::config("HTTP timeout must be > 0"));
        }
        Ok(())
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_http_timeout_secs(),
        }
    }
}

fn default_http_timeout_secs() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECS
}

/// Main updater configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdaterConfig {
    /// Registrar credentials
    pub credentials: Credentials,

    /// Record to manage
    pub target: Target,

    /// External endpoints
    #[serde(default)]
    pub endpoints: Endpoints,

    /// Transport settings
    #[serde(default)]
    pub http: HttpConfig,
}

impl UpdaterConfig {
    /// Create a configuration with default endpoints and transport settings
    pub fn new(credentials: Credentials, target: Target) -> Self {
        Self {
            credentials,
            target,
            endpoints: Endpoints::default(),
            http: HttpConfig::default(),
        }
    }

    /// Load credentials from `secrets_file` and combine them with the target
    pub fn load(secrets_file: impl AsRef<Path>, target: Target) -> Result<Self, crate::Error> {
        let credentials = Credentials::from_file(secrets_file)?;
        let config = Self::new(credentials, target);
        config.validate()?;
        Ok(config)
    }

    /// Override the external endpoints
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Override the transport settings
    pub fn with_http(mut self, http: HttpConfig) -> Self {
        self.http = http;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        self.target.validate()?;
        self.http.validate()?;
        Ok(())
    }

    /// Fully composed record endpoint
    pub fn record_url(&self) -> String {
        self.target.record_url(&self.endpoints.registrar_api_base)
    }
}
