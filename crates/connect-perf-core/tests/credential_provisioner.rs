// crates/connect-perf-core/tests/credential_provisioner.rs
// ============================================================================
// Module: Credential Provisioner Tests
// Description: Conflict tolerance, ordering, and retry of HEC token creation.
// ============================================================================
//! ## Overview
//! Drives [`CredentialProvisioner`] against the fake management API.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

mod common;

use std::num::NonZeroU32;
use std::num::NonZeroUsize;
use std::time::Duration;

use connect_perf_core::ClusterTopology;
use connect_perf_core::CredentialProvisioner;
use connect_perf_core::HecCredential;
use connect_perf_core::ProvisionOutcome;
use connect_perf_core::RetryError;
use connect_perf_core::RetryPolicy;

use crate::common::Event;
use crate::common::EventLog;
use crate::common::FakeManagementApi;
use crate::common::RecordingSleeper;
use crate::common::refused;
use crate::common::status;

fn three_members() -> ClusterTopology {
    ClusterTopology::new("idx", NonZeroUsize::new(3).unwrap())
}

#[test]
fn provisions_every_member_in_index_order() {
    let log = EventLog::default();
    let api = FakeManagementApi::new(&log);
    let provisioner =
        CredentialProvisioner::new(&api, RetryPolicy::default(), RecordingSleeper::new(&log));

    let report = provisioner
        .ensure_ack_credential(&three_members().management_endpoints(), &HecCredential::ack_token())
        .unwrap();

    assert_eq!(
        log.events(),
        vec![
            Event::Credential("https://idx1:8089".to_string()),
            Event::Credential("https://idx2:8089".to_string()),
            Event::Credential("https://idx3:8089".to_string()),
        ]
    );
    assert!(report.outcomes.iter().all(|(_, outcome)| *outcome == ProvisionOutcome::Created));
    assert_eq!(api.tokens().len(), 3);
}

#[test]
fn provisioning_twice_succeeds_both_times() {
    let log = EventLog::default();
    let api = FakeManagementApi::new(&log);
    let provisioner =
        CredentialProvisioner::new(&api, RetryPolicy::default(), RecordingSleeper::new(&log));
    let endpoints = three_members().management_endpoints();
    let credential = HecCredential::ack_token();

    provisioner.ensure_ack_credential(&endpoints, &credential).unwrap();
    let second = provisioner.ensure_ack_credential(&endpoints, &credential).unwrap();

    assert_eq!(second.outcomes.len(), 3);
    assert!(second.outcomes.iter().all(|(_, outcome)| *outcome == ProvisionOutcome::AlreadyExists));
    assert!(log.sleeps().is_empty());
}

#[test]
fn transient_failures_retry_on_the_same_member() {
    let log = EventLog::default();
    let api = FakeManagementApi::new(&log);
    api.fail_next([refused(), status(503, "splunkd restarting")]);
    let provisioner =
        CredentialProvisioner::new(&api, RetryPolicy::default(), RecordingSleeper::new(&log));
    let endpoints = ClusterTopology::new("idx", NonZeroUsize::new(2).unwrap()).management_endpoints();

    provisioner.ensure_ack_credential(&endpoints, &HecCredential::ack_token()).unwrap();

    let first = "https://idx1:8089".to_string();
    assert_eq!(
        log.events(),
        vec![
            Event::Credential(first.clone()),
            Event::Sleep(Duration::from_secs(2)),
            Event::Credential(first.clone()),
            Event::Sleep(Duration::from_secs(2)),
            Event::Credential(first),
            Event::Credential("https://idx2:8089".to_string()),
        ]
    );
}

#[test]
fn authorization_failures_are_retried_not_accepted() {
    let log = EventLog::default();
    let api = FakeManagementApi::new(&log);
    api.fail_next([status(401, "Unauthorized")]);
    let provisioner =
        CredentialProvisioner::new(&api, RetryPolicy::default(), RecordingSleeper::new(&log));
    let endpoints = ClusterTopology::new("idx", NonZeroUsize::new(1).unwrap()).management_endpoints();

    let report = provisioner.ensure_ack_credential(&endpoints, &HecCredential::ack_token()).unwrap();

    assert_eq!(report.outcomes, vec![("https://idx1:8089".to_string(), ProvisionOutcome::Created)]);
    assert_eq!(log.sleeps().len(), 1);
}

#[test]
fn capped_policy_stops_before_later_members() {
    let log = EventLog::default();
    let api = FakeManagementApi::new(&log);
    api.fail_next([refused(), refused()]);
    let policy = RetryPolicy::default().with_max_attempts(NonZeroU32::new(2).unwrap());
    let provisioner = CredentialProvisioner::new(&api, policy, RecordingSleeper::new(&log));

    let err = provisioner
        .ensure_ack_credential(&three_members().management_endpoints(), &HecCredential::ack_token())
        .unwrap_err();

    let RetryError::Exhausted {
        target,
        attempts,
        ..
    } = err;
    assert_eq!(target, "https://idx1:8089");
    assert_eq!(attempts, 2);
    assert!(api.tokens().is_empty());
}
