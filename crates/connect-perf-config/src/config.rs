// crates/connect-perf-config/src/config.rs
// ============================================================================
// Module: Perf Configuration
// Description: Environment-driven configuration model and validation.
// Purpose: Produce a validated PerfConfig or a precise ConfigError.
// Dependencies: connect-perf-core, thiserror, url
// ============================================================================

//! ## Overview
//! Every setting comes from an environment variable listed in [`env_keys`].
//! An empty value counts as unset. Defaults mirror the reference perf
//! environment; the indexer cluster size has no default and must be given.
//! Security posture: credentials are held in [`BasicAuth`], whose `Debug`
//! output never includes the password.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::env;
use std::fmt;
use std::num::NonZeroU32;
use std::num::NonZeroU64;
use std::num::NonZeroUsize;
use std::str::FromStr;
use std::time::Duration;

use connect_perf_core::AckSelection;
use connect_perf_core::ClusterTopology;
use connect_perf_core::DescriptorSettings;
use connect_perf_core::RetryPolicy;
use connect_perf_core::SweepPlan;
use connect_perf_core::TransportSelection;
use thiserror::Error;
use url::Url;

// ============================================================================
// SECTION: Environment Keys
// ============================================================================

/// Environment variable names read by [`PerfConfig::from_env`].
pub mod env_keys {
    /// Kafka Connect REST host.
    pub const CONNECTOR_IP: &str = "KAFKA_CONNECTOR_IP";
    /// Transport selector: `raw`, `event`, or unset for both.
    /// Matched case-insensitively after trimming; any other value is rejected
    /// instead of falling back to both.
    pub const HEC_MODE: &str = "KAFKA_CONNECT_HEC_MODE";
    /// Ack selector: `ack`, `no_ack`, or unset for both.
    /// Matched like [`HEC_MODE`]; unknown values are rejected.
    pub const ACK_MODE: &str = "KAFKA_CONNECT_ACK_MODE";
    /// Kafka topic consumed by the connector.
    pub const TOPICS: &str = "KAFKA_CONNECT_TOPICS";
    /// Observation window in seconds; `0` creates and deletes with no wait.
    pub const PERF_DURATION: &str = "KAFKA_CONNECT_PERF_DURATION";
    /// Raw endpoint line breaker.
    pub const LINE_BREAKER: &str = "KAFKA_CONNECT_LINE_BREAKER";
    /// Indexer cluster size.
    pub const INDEX_CLUSTER_SIZE: &str = "INDEX_CLUSTER_SIZE";
    /// JVM heap label recorded in sourcetypes.
    pub const JVM_HEAP_SIZE: &str = "JVM_HEAP_SIZE";
    /// Indexer hostname prefix.
    pub const IDX_HOSTNAME_PREFIX: &str = "IDX_HOSTNAME_PREFIX";
    /// Management API user.
    pub const SPLUNK_USER: &str = "SPLUNK_USER";
    /// Management API password.
    pub const SPLUNK_PASS: &str = "SPLUNK_PASS";
    /// Delay between retry attempts, milliseconds.
    pub const RETRY_DELAY_MS: &str = "KAFKA_CONNECT_PERF_RETRY_DELAY_MS";
    /// Optional cap on attempts per control-plane call.
    pub const MAX_ATTEMPTS: &str = "KAFKA_CONNECT_PERF_MAX_ATTEMPTS";
    /// HTTP connect timeout, milliseconds.
    pub const HTTP_CONNECT_TIMEOUT_MS: &str = "KAFKA_CONNECT_PERF_HTTP_CONNECT_TIMEOUT_MS";
    /// HTTP whole-request timeout, milliseconds.
    pub const HTTP_TIMEOUT_MS: &str = "KAFKA_CONNECT_PERF_HTTP_TIMEOUT_MS";
}

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default Kafka Connect host.
const DEFAULT_CONNECTOR_IP: &str = "kafkaconnect1";
/// Kafka Connect REST port.
const CONNECT_REST_PORT: u16 = 8083;
/// HEC port used to check that indexer hostnames form valid URLs.
const HEC_PORT: u16 = 8088;
/// Default topic.
const DEFAULT_TOPIC: &str = "perf";
/// Default observation window, seconds.
const DEFAULT_PERF_DURATION_SECS: u64 = 3600;
/// Default line breaker.
const DEFAULT_LINE_BREAKER: &str = "@@@@";
/// Default JVM heap label.
const DEFAULT_JVM_HEAP_SIZE: &str = "8G";
/// Default indexer hostname prefix.
const DEFAULT_IDX_HOSTNAME_PREFIX: &str = "idx";
/// Default management user.
const DEFAULT_SPLUNK_USER: &str = "admin";
/// Default management password.
const DEFAULT_SPLUNK_PASS: &str = "changed";
/// Default retry delay, milliseconds.
const DEFAULT_RETRY_DELAY_MS: u64 = 2000;
/// Default HTTP connect timeout, milliseconds.
const DEFAULT_HTTP_CONNECT_TIMEOUT_MS: u64 = 10_000;
/// Default HTTP request timeout, milliseconds.
const DEFAULT_HTTP_TIMEOUT_MS: u64 = 30_000;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors, raised before any network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("missing required environment variable {key}")]
    Missing {
        /// Variable name.
        key: &'static str,
    },
    /// A variable holds a value that cannot be used.
    #[error("invalid value '{value}' for {key}: {reason}")]
    Invalid {
        /// Variable name.
        key: &'static str,
        /// Raw value as read.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },
}

// ============================================================================
// SECTION: Model
// ============================================================================

/// Management API basic-auth credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuth {
    /// User name.
    pub username: String,
    /// Password.
    pub password: String,
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// HTTP client timeouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpSettings {
    /// TCP/TLS connect timeout.
    pub connect_timeout: Duration,
    /// Whole-request timeout.
    pub timeout: Duration,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_millis(DEFAULT_HTTP_CONNECT_TIMEOUT_MS),
            timeout: Duration::from_millis(DEFAULT_HTTP_TIMEOUT_MS),
        }
    }
}

/// Validated run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerfConfig {
    /// Kafka Connect connector collection URI.
    pub connector_uri: Url,
    /// Transport modes to sweep.
    pub transport: TransportSelection,
    /// Ack modes to sweep.
    pub ack: AckSelection,
    /// Topic consumed by every connector.
    pub topic: String,
    /// How long each connector runs.
    pub observation_window: Duration,
    /// Raw endpoint line breaker.
    pub line_breaker: String,
    /// Indexer cluster.
    pub cluster: ClusterTopology,
    /// JVM heap label.
    pub jvm_heap_size: String,
    /// Management API credentials.
    pub auth: BasicAuth,
    /// Retry policy for every control-plane call.
    pub retry: RetryPolicy,
    /// HTTP client timeouts.
    pub http: HttpSettings,
}

impl PerfConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or any
    /// value is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration from an explicit key/value map.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] under the same rules as [`Self::from_env`].
    pub fn from_map(values: &BTreeMap<String, String>) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| values.get(key).cloned())
    }

    /// Loads configuration through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or any
    /// value is malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let connector_ip =
            read(env_keys::CONNECTOR_IP).unwrap_or_else(|| DEFAULT_CONNECTOR_IP.to_string());
        let connector_uri = connector_collection_uri(&connector_ip)?;

        let transport = match read(env_keys::HEC_MODE) {
            Some(value) => parse_transport(&value)?,
            None => TransportSelection::Both,
        };
        let ack = match read(env_keys::ACK_MODE) {
            Some(value) => parse_ack(&value)?,
            None => AckSelection::Both,
        };

        let size_raw =
            read(env_keys::INDEX_CLUSTER_SIZE).ok_or(ConfigError::Missing {
                key: env_keys::INDEX_CLUSTER_SIZE,
            })?;
        let size: NonZeroUsize = parse_number(env_keys::INDEX_CLUSTER_SIZE, &size_raw)?;
        let prefix = read(env_keys::IDX_HOSTNAME_PREFIX)
            .unwrap_or_else(|| DEFAULT_IDX_HOSTNAME_PREFIX.to_string());
        validate_hostname_prefix(&prefix)?;

        let window_secs = read_number::<u64, _>(&read, env_keys::PERF_DURATION)?
            .unwrap_or(DEFAULT_PERF_DURATION_SECS);
        let retry_delay_ms = read_number::<NonZeroU64, _>(&read, env_keys::RETRY_DELAY_MS)?
            .map_or(DEFAULT_RETRY_DELAY_MS, NonZeroU64::get);
        let max_attempts: Option<NonZeroU32> = read_number(&read, env_keys::MAX_ATTEMPTS)?;
        let connect_timeout_ms: Option<NonZeroU64> =
            read_number(&read, env_keys::HTTP_CONNECT_TIMEOUT_MS)?;
        let timeout_ms: Option<NonZeroU64> = read_number(&read, env_keys::HTTP_TIMEOUT_MS)?;

        let mut retry = RetryPolicy::unbounded(Duration::from_millis(retry_delay_ms));
        if let Some(max_attempts) = max_attempts {
            retry = retry.with_max_attempts(max_attempts);
        }
        let defaults = HttpSettings::default();
        let http = HttpSettings {
            connect_timeout: connect_timeout_ms
                .map_or(defaults.connect_timeout, |ms| Duration::from_millis(ms.get())),
            timeout: timeout_ms.map_or(defaults.timeout, |ms| Duration::from_millis(ms.get())),
        };

        Ok(Self {
            connector_uri,
            transport,
            ack,
            topic: read(env_keys::TOPICS).unwrap_or_else(|| DEFAULT_TOPIC.to_string()),
            observation_window: Duration::from_secs(window_secs),
            line_breaker: read(env_keys::LINE_BREAKER)
                .unwrap_or_else(|| DEFAULT_LINE_BREAKER.to_string()),
            cluster: ClusterTopology::new(prefix, size),
            jvm_heap_size: read(env_keys::JVM_HEAP_SIZE)
                .unwrap_or_else(|| DEFAULT_JVM_HEAP_SIZE.to_string()),
            auth: BasicAuth {
                username: read(env_keys::SPLUNK_USER)
                    .unwrap_or_else(|| DEFAULT_SPLUNK_USER.to_string()),
                password: read(env_keys::SPLUNK_PASS)
                    .unwrap_or_else(|| DEFAULT_SPLUNK_PASS.to_string()),
            },
            retry,
            http,
        })
    }

    /// Returns the run-wide descriptor settings.
    #[must_use]
    pub fn descriptor_settings(&self) -> DescriptorSettings {
        DescriptorSettings {
            topic: self.topic.clone(),
            jvm_heap_size: self.jvm_heap_size.clone(),
            line_breaker: self.line_breaker.clone(),
        }
    }

    /// Returns the (transport, ack) pairs to sweep.
    #[must_use]
    pub fn sweep_plan(&self) -> SweepPlan {
        SweepPlan::new(self.transport, self.ack)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Builds `http://{ip}:8083/connectors`.
fn connector_collection_uri(ip: &str) -> Result<Url, ConfigError> {
    let raw = format!("http://{ip}:{CONNECT_REST_PORT}/connectors");
    let url = Url::parse(&raw).map_err(|err| ConfigError::Invalid {
        key: env_keys::CONNECTOR_IP,
        value: ip.to_string(),
        reason: err.to_string(),
    })?;
    if url.host_str().is_none() || url.path() != "/connectors" {
        return Err(ConfigError::Invalid {
            key: env_keys::CONNECTOR_IP,
            value: ip.to_string(),
            reason: "expected a bare host name or address".to_string(),
        });
    }
    Ok(url)
}

/// Checks that `{prefix}1` forms a valid indexer URL host.
fn validate_hostname_prefix(prefix: &str) -> Result<(), ConfigError> {
    let host = format!("{prefix}1");
    let invalid = |reason: String| ConfigError::Invalid {
        key: env_keys::IDX_HOSTNAME_PREFIX,
        value: prefix.to_string(),
        reason,
    };
    let url = Url::parse(&format!("https://{host}:{HEC_PORT}"))
        .map_err(|err| invalid(err.to_string()))?;
    let same_host = url.host_str().is_some_and(|parsed| parsed.eq_ignore_ascii_case(&host));
    if !same_host || url.path() != "/" {
        return Err(invalid("expected a bare host name prefix".to_string()));
    }
    Ok(())
}

/// Parses the transport selector.
fn parse_transport(value: &str) -> Result<TransportSelection, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "raw" => Ok(TransportSelection::Raw),
        "event" => Ok(TransportSelection::Event),
        _ => Err(ConfigError::Invalid {
            key: env_keys::HEC_MODE,
            value: value.to_string(),
            reason: "expected raw or event".to_string(),
        }),
    }
}

/// Parses the ack selector.
fn parse_ack(value: &str) -> Result<AckSelection, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "ack" => Ok(AckSelection::Ack),
        "no_ack" => Ok(AckSelection::NoAck),
        _ => Err(ConfigError::Invalid {
            key: env_keys::ACK_MODE,
            value: value.to_string(),
            reason: "expected ack or no_ack".to_string(),
        }),
    }
}

/// Parses an integer value; the target type decides whether zero is allowed.
fn parse_number<T>(key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    value.trim().parse::<T>().map_err(|err| ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason: format!("expected a whole number ({err})"),
    })
}

/// Reads and parses an optional integer.
fn read_number<T, R>(read: &R, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
    R: Fn(&str) -> Option<String>,
{
    read(key).map(|value| parse_number(key, &value)).transpose()
}

// ============================================================================
// SECTION: Tests
// ============================================================================
