// # GoDaddy DNS Provider
//
// This crate provides a GoDaddy DNS provider implementation for the DDNS
// updater.
//
// ## Behavior
//
// - One HTTP request per call (GET to read, PUT to replace)
// - Full error propagation to the engine; no retry, no backoff
// - HTTP timeout taken from `HttpConfig`
// - Only the first returned record is consulted; an empty list is an error
// - Updates always send `[{"data": <ip>, "ttl": 60}]`
//
// ## Security Requirements
//
// - Key and secret NEVER appear in logs or Debug output
// - They are only ever sent inside the `Authorization` header
//
// ## API Reference
//
// - Get records: GET `/v1/domains/:domain/records/A/:name`
// - Replace records: PUT `/v1/domains/:domain/records/A/:name`
// - Auth header: `Authorization: sso-key <key>:<secret>`

use async_trait::async_trait;
use ddns_core::config::{Credentials, HttpConfig, UpdaterConfig};
use ddns_core::record::DnsRecord;
use ddns_core::traits::DnsProvider;
use ddns_core::{Error, Result};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, Request};

/// Content type sent with every registrar request
const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// GoDaddy DNS provider bound to a single A record
pub struct GoDaddyProvider {
    /// API credentials
    /// ⚠️ NEVER log these values
    credentials: Credentials,

    /// Fully composed record endpoint
    record_url: String,

    /// HTTP client for API requests
    client: reqwest::Client,
}

// Custom Debug implementation that hides the credentials
impl std::fmt::Debug for GoDaddyProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoDaddyProvider")
            .field("credentials", &"<REDACTED>")
            .field("record_url", &self.record_url)
            .finish()
    }
}

impl GoDaddyProvider {
    /// Create a new GoDaddy provider
    ///
    /// # Parameters
    ///
    /// - `credentials`: API key and secret
    /// - `record_url`: The record endpoint, as built by `Target::record_url`
    /// - `http`: Transport settings (timeout)
    pub fn new(
        credentials: Credentials,
        record_url: impl Into<String>,
        http: &HttpConfig,
    ) -> Result<Self> {
        let record_url = record_url.into();
        if record_url.is_empty() {
            return Err(Error::config("Record URL cannot be empty"));
        }

        Ok(Self {
            credentials,
            record_url,
            client: ddns_core::http::build_client(http)?,
        })
    }

    /// Create a provider from the updater configuration
    pub fn from_config(config: &UpdaterConfig) -> Result<Self> {
        Self::new(
            config.credentials.clone(),
            config.record_url(),
            &config.http,
        )
    }

    /// Record endpoint this provider talks to
    pub fn record_url(&self) -> &str {
        &self.record_url
    }

    /// Headers sent with every registrar request
    fn build_headers(&self) -> Result<HeaderMap> {
        let mut auth = HeaderValue::from_str(&self.credentials.authorization_header())
            .map_err(|_| Error::config("API key or secret contains invalid header characters"))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        Ok(headers)
    }

    /// Build an authenticated request against the record endpoint
    fn build_request(&self, method: Method, body: Option<Vec<u8>>) -> Result<Request> {
        let mut builder = self
            .client
            .request(method.clone(), &self.record_url)
            .headers(self.build_headers()?);

        if let Some(body) = body {
            builder = builder.body(body);
        }

        builder
            .build()
            .map_err(|e| Error::network(method.as_str(), &self.record_url, e.to_string()))
    }
}

#[async_trait]
impl DnsProvider for GoDaddyProvider {
    /// Read the first published record
    ///
    /// # API Call
    ///
    /// ```http
    /// GET /v1/domains/example.com/records/A/home
    /// Authorization: sso-key <key>:<secret>
    /// ```
    async fn get_record(&self) -> Result<DnsRecord> {
        let request = self.build_request(Method::GET, None)?;
        let body = ddns_core::http::execute(&self.client, request).await?;

        let records: Vec<DnsRecord> = serde_json::from_str(&body)
            .map_err(|e| Error::parse("GET", &self.record_url, e.to_string()))?;

        let record = records
            .into_iter()
            .next()
            .ok_or_else(|| Error::empty_result(&self.record_url))?;

        tracing::debug!("Found record: {} (ttl: {})", record.data, record.ttl);
        Ok(record)
    }

    /// Replace the record's value
    ///
    /// # API Call
    ///
    /// ```http
    /// PUT /v1/domains/example.com/records/A/home
    /// Authorization: sso-key <key>:<secret>
    ///
    /// [{"data": "1.2.3.4", "ttl": 60}]
    /// ```
    async fn update_record(&self, new_ip: &str) -> Result<()> {
        let payload = serde_json::to_vec(&[DnsRecord::update(new_ip)])
            .map_err(|e| Error::parse("PUT", &self.record_url, e.to_string()))?;

        let request = self.build_request(Method::PUT, Some(payload))?;

        // Any 200 is success; the body is discarded
        ddns_core::http::execute(&self.client, request).await?;

        tracing::debug!("Record {} now points to {}", self.record_url, new_ip);
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "godaddy"
    }
}
