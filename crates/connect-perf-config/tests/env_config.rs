// crates/connect-perf-config/tests/env_config.rs
// ============================================================================
// Module: Environment Config Tests
// Description: Defaults, overrides, and fail-fast validation of PerfConfig.
// ============================================================================
//! ## Overview
//! Loads [`PerfConfig`] from in-memory maps so the process environment is
//! never touched.

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

use std::collections::BTreeMap;
use std::num::NonZeroU32;
use std::time::Duration;

use connect_perf_config::ConfigError;
use connect_perf_config::PerfConfig;
use connect_perf_config::env_keys;
use connect_perf_core::AckMode;
use connect_perf_core::AckSelection;
use connect_perf_core::TransportMode;
use connect_perf_core::TransportSelection;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn env(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs.iter().map(|(key, value)| ((*key).to_string(), (*value).to_string())).collect()
}

fn minimal() -> BTreeMap<String, String> {
    env(&[(env_keys::INDEX_CLUSTER_SIZE, "3")])
}

fn load_with(key: &str, value: &str) -> Result<PerfConfig, ConfigError> {
    let mut values = minimal();
    values.insert(key.to_string(), value.to_string());
    PerfConfig::from_map(&values)
}

// ============================================================================
// SECTION: Defaults
// ============================================================================

#[test]
fn defaults_apply_when_only_cluster_size_is_set() {
    let config = PerfConfig::from_map(&minimal()).unwrap();

    assert_eq!(config.connector_uri.as_str(), "http://kafkaconnect1:8083/connectors");
    assert_eq!(config.transport, TransportSelection::Both);
    assert_eq!(config.ack, AckSelection::Both);
    assert_eq!(config.topic, "perf");
    assert_eq!(config.observation_window, Duration::from_secs(3600));
    assert_eq!(config.line_breaker, "@@@@");
    assert_eq!(config.jvm_heap_size, "8G");
    assert_eq!(config.cluster.hostname_prefix(), "idx");
    assert_eq!(config.cluster.size().get(), 3);
    assert_eq!(config.auth.username, "admin");
    assert_eq!(config.auth.password, "changed");
    assert_eq!(config.retry.delay, Duration::from_secs(2));
    assert_eq!(config.retry.max_attempts, None);
    assert_eq!(config.http.connect_timeout, Duration::from_secs(10));
    assert_eq!(config.http.timeout, Duration::from_secs(30));
}

#[test]
fn empty_values_count_as_unset() {
    let mut values = minimal();
    values.insert(env_keys::TOPICS.to_string(), String::new());
    values.insert(env_keys::HEC_MODE.to_string(), String::new());
    values.insert(env_keys::MAX_ATTEMPTS.to_string(), String::new());
    let config = PerfConfig::from_map(&values).unwrap();
    assert_eq!(config.topic, "perf");
    assert_eq!(config.transport, TransportSelection::Both);
    assert_eq!(config.retry.max_attempts, None);
}

#[test]
fn default_plan_covers_all_four_pairs() {
    let config = PerfConfig::from_map(&minimal()).unwrap();
    assert_eq!(
        config.sweep_plan().pairs(),
        [
            (TransportMode::Raw, AckMode::Enabled),
            (TransportMode::Raw, AckMode::Disabled),
            (TransportMode::Event, AckMode::Enabled),
            (TransportMode::Event, AckMode::Disabled),
        ]
    );
}

// ============================================================================
// SECTION: Overrides
// ============================================================================

#[test]
fn every_override_is_honoured() {
    let values = env(&[
        (env_keys::CONNECTOR_IP, "10.1.2.3"),
        (env_keys::HEC_MODE, "raw"),
        (env_keys::ACK_MODE, "no_ack"),
        (env_keys::TOPICS, "firehose"),
        (env_keys::PERF_DURATION, "60"),
        (env_keys::LINE_BREAKER, "####"),
        (env_keys::INDEX_CLUSTER_SIZE, "5"),
        (env_keys::JVM_HEAP_SIZE, "16G"),
        (env_keys::IDX_HOSTNAME_PREFIX, "indexer-"),
        (env_keys::SPLUNK_USER, "perf"),
        (env_keys::SPLUNK_PASS, "s3cret"),
        (env_keys::RETRY_DELAY_MS, "250"),
        (env_keys::MAX_ATTEMPTS, "7"),
        (env_keys::HTTP_CONNECT_TIMEOUT_MS, "1500"),
        (env_keys::HTTP_TIMEOUT_MS, "4000"),
    ]);
    let config = PerfConfig::from_map(&values).unwrap();

    assert_eq!(config.connector_uri.as_str(), "http://10.1.2.3:8083/connectors");
    assert_eq!(config.sweep_plan().pairs(), [(TransportMode::Raw, AckMode::Disabled)]);
    assert_eq!(config.observation_window, Duration::from_secs(60));
    assert_eq!(
        config.cluster.management_endpoints().as_slice().first().map(String::as_str),
        Some("https://indexer-1:8089")
    );
    assert_eq!(config.auth.password, "s3cret");
    assert_eq!(config.retry.delay, Duration::from_millis(250));
    assert_eq!(config.retry.max_attempts, NonZeroU32::new(7));
    assert_eq!(config.http.connect_timeout, Duration::from_millis(1500));
    assert_eq!(config.http.timeout, Duration::from_millis(4000));

    let settings = config.descriptor_settings();
    assert_eq!(settings.topic, "firehose");
    assert_eq!(settings.jvm_heap_size, "16G");
    assert_eq!(settings.line_breaker, "####");
}

#[test]
fn event_and_ack_selectors_narrow_the_plan() {
    let mut values = minimal();
    values.insert(env_keys::HEC_MODE.to_string(), "event".to_string());
    values.insert(env_keys::ACK_MODE.to_string(), "ack".to_string());
    let config = PerfConfig::from_map(&values).unwrap();
    assert_eq!(config.sweep_plan().pairs(), [(TransportMode::Event, AckMode::Enabled)]);
}

// ============================================================================
// SECTION: Validation
// ============================================================================

#[test]
fn missing_cluster_size_is_rejected() {
    let err = PerfConfig::from_map(&BTreeMap::new()).unwrap_err();
    assert_eq!(
        err,
        ConfigError::Missing {
            key: env_keys::INDEX_CLUSTER_SIZE,
        }
    );
}

#[test]
fn zero_cluster_size_is_rejected() {
    let err = load_with(env_keys::INDEX_CLUSTER_SIZE, "0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key, .. } if key == env_keys::INDEX_CLUSTER_SIZE));
}

#[test]
fn unknown_selectors_are_rejected() {
    let err = load_with(env_keys::HEC_MODE, "both").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key, .. } if key == env_keys::HEC_MODE));
    let err = load_with(env_keys::ACK_MODE, "yes").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key, .. } if key == env_keys::ACK_MODE));
}

#[test]
fn non_numeric_and_zero_durations_are_rejected() {
    for (key, value) in [
        (env_keys::PERF_DURATION, "an hour"),
        (env_keys::PERF_DURATION, "-1"),
        (env_keys::RETRY_DELAY_MS, "-5"),
        (env_keys::MAX_ATTEMPTS, "0"),
        (env_keys::HTTP_TIMEOUT_MS, "1.5"),
    ] {
        let err = load_with(key, value).unwrap_err();
        assert!(
            matches!(&err, ConfigError::Invalid { key: rejected, .. } if *rejected == key),
            "{key}={value} gave {err}"
        );
    }
}

#[test]
fn zero_observation_window_is_accepted() {
    let config = load_with(env_keys::PERF_DURATION, "0").unwrap();
    assert_eq!(config.observation_window, Duration::ZERO);
}

#[test]
fn hostname_prefix_that_cannot_form_a_url_is_rejected() {
    for prefix in ["bad host", "idx/extra"] {
        let err = load_with(env_keys::IDX_HOSTNAME_PREFIX, prefix).unwrap_err();
        assert!(
            matches!(
                &err,
                ConfigError::Invalid { key, value, .. }
                    if *key == env_keys::IDX_HOSTNAME_PREFIX && value == prefix
            ),
            "{prefix} gave {err}"
        );
    }
}

#[test]
fn error_message_names_the_variable() {
    let err = load_with(env_keys::PERF_DURATION, "soon").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("KAFKA_CONNECT_PERF_DURATION"));
    assert!(message.contains("soon"));
}
