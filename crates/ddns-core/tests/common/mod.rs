//! Test doubles and common utilities for engine contract tests
//!
//! The doubles count calls and record what was written so tests can assert
//! on the exact registrar traffic an update cycle produces.

#![allow(dead_code)]

use ddns_core::error::{Error, Result};
use ddns_core::record::DnsRecord;
use ddns_core::traits::{DnsProvider, IpSource};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// An IP source returning a fixed answer
pub struct FixedIpSource {
    answer: std::result::Result<String, u16>,
    call_count: Arc<AtomicUsize>,
}

impl FixedIpSource {
    /// Source that reports `ip`
    pub fn new(ip: &str) -> Self {
        Self {
            answer: Ok(ip.to_string()),
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Source whose echo service answers with `status`
    pub fn failing(status: u16) -> Self {
        Self {
            answer: Err(status),
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get the number of times current() was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Create a new FixedIpSource that shares counters with an existing one
    pub fn sharing_counters_with(other: &Self) -> Self {
        Self {
            answer: other.answer.clone(),
            call_count: Arc::clone(&other.call_count),
        }
    }
}

#[async_trait::async_trait]
impl IpSource for FixedIpSource {
    async fn current(&self) -> Result<String> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        match &self.answer {
            Ok(ip) => Ok(ip.clone()),
            Err(status) => Err(Error::upstream("GET", "http://ip.test/raw", *status)),
        }
    }

    fn source_name(&self) -> &'static str {
        "fixed"
    }
}

/// What the mock registrar answers on read
#[derive(Clone)]
pub enum ReadBehavior {
    /// Return these records (first one is used)
    Records(Vec<DnsRecord>),
    /// Fail with this status
    Status(u16),
}

/// A mock registrar that tracks calls
///
/// With `echo` enabled, every successful update becomes the value returned
/// by the next read, like a real registrar.
pub struct MockDnsProvider {
    read: Arc<Mutex<ReadBehavior>>,
    update_status: Option<u16>,
    echo: bool,
    get_call_count: Arc<AtomicUsize>,
    written: Arc<Mutex<Vec<String>>>,
}

impl MockDnsProvider {
    /// Registrar publishing a single record with `data`
    pub fn publishing(data: &str) -> Self {
        Self::with_read(ReadBehavior::Records(vec![DnsRecord {
            record_type: Some("A".to_string()),
            name: Some("home".to_string()),
            data: data.to_string(),
            ttl: 600,
        }]))
    }

    /// Registrar with an explicit read behavior
    pub fn with_read(read: ReadBehavior) -> Self {
        Self {
            read: Arc::new(Mutex::new(read)),
            update_status: None,
            echo: false,
            get_call_count: Arc::new(AtomicUsize::new(0)),
            written: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Make updates fail with `status`
    pub fn failing_updates(mut self, status: u16) -> Self {
        self.update_status = Some(status);
        self
    }

    /// Make successful updates visible to subsequent reads
    pub fn echoing(mut self) -> Self {
        self.echo = true;
        self
    }

    /// Get the number of times get_record() was called
    pub fn get_call_count(&self) -> usize {
        self.get_call_count.load(Ordering::SeqCst)
    }

    /// Values passed to update_record(), in call order
    pub fn written(&self) -> Vec<String> {
        self.written.lock().unwrap().clone()
    }

    /// Create a new MockDnsProvider that shares state with an existing one
    pub fn sharing_counters_with(other: &Self) -> Self {
        Self {
            read: Arc::clone(&other.read),
            update_status: other.update_status,
            echo: other.echo,
            get_call_count: Arc::clone(&other.get_call_count),
            written: Arc::clone(&other.written),
        }
    }
}

#[async_trait::async_trait]
impl DnsProvider for MockDnsProvider {
    async fn get_record(&self) -> Result<DnsRecord> {
        self.get_call_count.fetch_add(1, Ordering::SeqCst);
        let url = "https://api.test/v1/domains/example.com/records/A/home";
        match &*self.read.lock().unwrap() {
            ReadBehavior::Records(records) => records
                .first()
                .cloned()
                .ok_or_else(|| Error::empty_result(url)),
            ReadBehavior::Status(status) => Err(Error::upstream("GET", url, *status)),
        }
    }

    async fn update_record(&self, new_ip: &str) -> Result<()> {
        self.written.lock().unwrap().push(new_ip.to_string());

        if let Some(status) = self.update_status {
            return Err(Error::upstream(
                "PUT",
                "https://api.test/v1/domains/example.com/records/A/home",
                status,
            ));
        }

        if self.echo {
            *self.read.lock().unwrap() =
                ReadBehavior::Records(vec![DnsRecord::update(new_ip)]);
        }
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}
