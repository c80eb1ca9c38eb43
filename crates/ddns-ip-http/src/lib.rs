// # HTTP IP Source
//
// This crate provides the public-address lookup for the DDNS updater.
//
// ## Architecture
//
// Performs a single unauthenticated GET against a plain-text IP echo service
// (default `http://myexternalip.com/raw`) and returns the trimmed body.
// The answer is not parsed: whatever the service reports is what gets
// compared against, and possibly written to, the DNS record.

use ddns_core::config::{DEFAULT_IP_SERVICE_URL, HttpConfig};
use ddns_core::traits::IpSource;
use ddns_core::{Error, Result};

/// IP source backed by a plain-text echo service
#[derive(Debug)]
pub struct HttpIpSource {
    /// URL to fetch the address from
    url: String,

    /// HTTP client
    client: reqwest::Client,
}

impl HttpIpSource {
    /// Create a new HTTP IP source
    ///
    /// # Parameters
    ///
    /// - `url`: Echo service URL (e.g., "http://myexternalip.com/raw")
    /// - `http`: Transport settings (timeout)
    pub fn new(url: impl Into<String>, http: &HttpConfig) -> Result<Self> {
        let url = url.into();
        if url.is_empty() {
            return Err(Error::config("IP service URL cannot be empty"));
        }

        Ok(Self {
            url,
            client: ddns_core::http::build_client(http)?,
        })
    }

    /// Create a source for the default echo service
    pub fn with_defaults() -> Result<Self> {
        Self::new(DEFAULT_IP_SERVICE_URL, &HttpConfig::default())
    }

    /// URL this source queries
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl IpSource for HttpIpSource {
    async fn current(&self) -> Result<String> {
        let request = self
            .client
            .get(&self.url)
            .build()
            .map_err(|e| Error::network("GET", &self.url, e.to_string()))?;

        let ip = ddns_core::http::execute(&self.client, request).await?;
        tracing::debug!("Echo service reported {}", ip);
        Ok(ip)
    }

    fn source_name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn source_for(server: &MockServer) -> HttpIpSource {
        HttpIpSource::new(format!("{}/raw", server.uri()), &HttpConfig::default()).unwrap()
    }

    #[test]
    fn test_default_url() {
        let source = HttpIpSource::with_defaults().unwrap();
        assert_eq!(source.url(), "http://myexternalip.com/raw");
        assert_eq!(source.source_name(), "http");
    }

    #[test]
    fn test_empty_url_rejected() {
        let err = HttpIpSource::new("", &HttpConfig::default()).unwrap_err();
        assert!(err.is_config());
    }

    #[tokio::test]
    async fn test_returns_trimmed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/raw"))
            .respond_with(ResponseTemplate::new(200).set_body_string("1.2.3.4\n"))
            .expect(1)
            .mount(&server)
            .await;

        let ip = source_for(&server).current().await.unwrap();
        assert_eq!(ip, "1.2.3.4");
    }

    #[tokio::test]
    async fn test_body_is_passed_through_unvalidated() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("  not-an-ip  "))
            .mount(&server)
            .await;

        let ip = source_for(&server).current().await.unwrap();
        assert_eq!(ip, "not-an-ip");
    }

    #[tokio::test]
    async fn test_non_200_is_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let err = source_for(&server).current().await.unwrap_err();
        match err {
            Error::Upstream { method, url, status } => {
                assert_eq!(method, "GET");
                assert!(url.ends_with("/raw"));
                assert_eq!(status, 503);
            }
            other => panic!("expected upstream error, got {:?}", other),
        }
    }
}
