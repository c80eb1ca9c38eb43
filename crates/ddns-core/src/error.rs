//! Error types for the DDNS updater
//!
//! Every failure aborts the run, so the variants exist to tell the operator
//! which step failed and why, not to drive recovery.

use thiserror::Error;

/// Result type alias for DDNS operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the DDNS updater
#[derive(Error, Debug)]
pub enum Error {
    /// Credentials file unreadable or malformed, or invalid target
    #[error("Configuration error: {0}")]
    Config(String),

    /// The request never produced a response (DNS, connect, timeout, body read)
    #[error("http failed on {method} {url}: {message}")]
    Network {
        /// HTTP method of the failed request
        method: String,
        /// Target URL of the failed request
        url: String,
        /// Transport error description
        message: String,
    },

    /// The endpoint answered with something other than 200 OK
    #[error("unexpected response on {method} {url}: {status}")]
    Upstream {
        /// HTTP method of the request
        method: String,
        /// Target URL of the request
        url: String,
        /// Status code returned by the endpoint
        status: u16,
    },

    /// Registrar response body is not the expected JSON
    #[error("malformed response on {method} {url}: {message}")]
    Parse {
        /// HTTP method of the request
        method: String,
        /// Target URL of the request
        url: String,
        /// Decoder error description
        message: String,
    },

    /// Registrar read returned zero records
    #[error("got empty records response from {url}")]
    EmptyResult {
        /// Record endpoint that was queried
        url: String,
    },
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a transport-level error
    pub fn network(
        method: impl Into<String>,
        url: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Network {
            method: method.into(),
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a non-200 status error
    pub fn upstream(method: impl Into<String>, url: impl Into<String>, status: u16) -> Self {
        Self::Upstream {
            method: method.into(),
            url: url.into(),
            status,
        }
    }

    /// Create a response decoding error
    pub fn parse(
        method: impl Into<String>,
        url: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Parse {
            method: method.into(),
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create an empty read result error
    pub fn empty_result(url: impl Into<String>) -> Self {
        Self::EmptyResult { url: url.into() }
    }

    /// Whether this error was raised before any network traffic
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
