//! Contract Test: Idempotency Across Runs
//!
//! The updater keeps no state between runs; idempotency comes from the
//! registrar itself. Against a registrar that serves back the last write,
//! repeated runs with the same public IP must settle after one update.

mod common;

use common::*;
use ddns_core::{DdnsEngine, UpdateResult};

#[tokio::test]
async fn second_run_with_same_ip_does_not_update() {
    let registrar = MockDnsProvider::publishing("10.0.0.1").echoing();

    // First run: stale record gets replaced
    {
        let engine = DdnsEngine::new(
            Box::new(FixedIpSource::new("192.168.1.1")),
            Box::new(MockDnsProvider::sharing_counters_with(&registrar)),
        );
        let result = engine.run_once().await.expect("first run succeeds");
        assert!(matches!(result, UpdateResult::Updated { .. }));
    }

    // Second run: fresh engine, same public IP
    {
        let engine = DdnsEngine::new(
            Box::new(FixedIpSource::new("192.168.1.1")),
            Box::new(MockDnsProvider::sharing_counters_with(&registrar)),
        );
        let result = engine.run_once().await.expect("second run succeeds");
        assert!(matches!(result, UpdateResult::Unchanged { .. }));
    }

    assert_eq!(
        registrar.written(),
        vec!["192.168.1.1".to_string()],
        "Expected exactly 1 update across 2 runs"
    );
    assert_eq!(registrar.get_call_count(), 2);
}

#[tokio::test]
async fn ip_change_between_runs_triggers_update() {
    let registrar = MockDnsProvider::publishing("192.168.1.1").echoing();

    let engine = DdnsEngine::new(
        Box::new(FixedIpSource::new("192.168.1.1")),
        Box::new(MockDnsProvider::sharing_counters_with(&registrar)),
    );
    engine.run_once().await.expect("first run succeeds");
    assert!(registrar.written().is_empty());

    let engine = DdnsEngine::new(
        Box::new(FixedIpSource::new("10.0.0.1")),
        Box::new(MockDnsProvider::sharing_counters_with(&registrar)),
    );
    engine.run_once().await.expect("second run succeeds");

    assert_eq!(registrar.written(), vec!["10.0.0.1".to_string()]);
}
