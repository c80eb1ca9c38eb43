//! Shared HTTP plumbing
//!
//! Every outbound call goes through [`execute`] so that transport failures,
//! status checks and body handling behave the same for the IP source and the
//! registrar provider.

use crate::config::HttpConfig;
use crate::error::{Error, Result};
use reqwest::StatusCode;

/// Build an HTTP client with the configured timeout
pub fn build_client(config: &HttpConfig) -> Result<reqwest::Client> {
    config.validate()?;

    reqwest::Client::builder()
        .timeout(config.timeout())
        .build()
        .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))
}

/// Send a request and return its trimmed body
///
/// - Transport failure → [`Error::Network`] (no response is inspected)
/// - Status other than 200 → [`Error::Upstream`]
/// - Body read failure → [`Error::Network`]
///
/// The response is consumed here and dropped before returning.
pub async fn execute(client: &reqwest::Client, request: reqwest::Request) -> Result<String> {
    let method = request.method().to_string();
    let url = request.url().to_string();

    tracing::debug!("{} {}", method, url);

    let response = client
        .execute(request)
        .await
        .map_err(|e| Error::network(&method, &url, e.to_string()))?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(Error::upstream(&method, &url, status.as_u16()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| Error::network(&method, &url, format!("Failed to read response: {}", e)))?;

    Ok(body.trim().to_string())
}
