// crates/connect-perf-core/src/core/model.rs
// ============================================================================
// Module: Connect Perf Data Model
// Description: Cluster endpoints, tuning cases, transport/ack modes, credentials.
// Purpose: Provide the typed vocabulary shared by the builder and runtime.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Types in this module describe *what* a sweep exercises: the indexer cluster
//! the connector writes to, the tuning case applied to the connector, and the
//! HEC transport/acknowledgment combination under test. All values are
//! immutable once constructed and compare structurally.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::num::NonZeroUsize;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// HEC token used by connectors running with acknowledgment disabled.
pub const TOKEN_WITHOUT_ACK: &str = "00000000-0000-0000-0000-000000000000";

/// HEC token used by connectors running with acknowledgment enabled.
pub const TOKEN_WITH_ACK: &str = "00000000-0000-0000-0000-000000000001";

/// Port of the HEC ingestion endpoint on each indexer.
pub const HEC_PORT: u16 = 8088;

/// Port of the management API on each indexer.
pub const MANAGEMENT_PORT: u16 = 8089;

/// Connector parameter key for task parallelism.
pub const TASKS_MAX_KEY: &str = "tasks.max";

/// Connector parameter key for HEC worker threads.
pub const HEC_THREADS_KEY: &str = "splunk.hec.threads";

/// Connector parameter key for the HEC batch size.
pub const MAX_BATCH_SIZE_KEY: &str = "splunk.hec.max.batch.size";

// ============================================================================
// SECTION: Transport and Ack Modes
// ============================================================================

/// HEC payload transport used by the connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportMode {
    /// Raw byte stream split on the configured line breaker.
    Raw,
    /// Structured event envelopes.
    Event,
}

impl TransportMode {
    /// Returns the `splunk.hec.raw` flag value for this mode.
    #[must_use]
    pub const fn raw_flag(self) -> &'static str {
        match self {
            Self::Raw => "true",
            Self::Event => "false",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw => f.write_str("raw"),
            Self::Event => f.write_str("event"),
        }
    }
}

/// HEC end-to-end acknowledgment setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AckMode {
    /// Acknowledgment enabled.
    Enabled,
    /// Acknowledgment disabled.
    Disabled,
}

impl AckMode {
    /// Returns the `splunk.hec.ack.enabled` flag value for this mode.
    #[must_use]
    pub const fn ack_flag(self) -> &'static str {
        match self {
            Self::Enabled => "true",
            Self::Disabled => "false",
        }
    }

    /// Returns the reserved HEC token connectors use under this mode.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Enabled => TOKEN_WITH_ACK,
            Self::Disabled => TOKEN_WITHOUT_ACK,
        }
    }
}

impl fmt::Display for AckMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enabled => f.write_str("ack"),
            Self::Disabled => f.write_str("no_ack"),
        }
    }
}

/// Transport modes selected for a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportSelection {
    /// Only raw transport.
    Raw,
    /// Only event transport.
    Event,
    /// Raw transport first, then event.
    #[default]
    Both,
}

impl TransportSelection {
    /// Returns the selected modes in sweep order.
    #[must_use]
    pub fn modes(self) -> Vec<TransportMode> {
        match self {
            Self::Raw => vec![TransportMode::Raw],
            Self::Event => vec![TransportMode::Event],
            Self::Both => vec![TransportMode::Raw, TransportMode::Event],
        }
    }
}

/// Ack modes selected for a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AckSelection {
    /// Only acknowledgment enabled.
    Ack,
    /// Only acknowledgment disabled.
    NoAck,
    /// Enabled first, then disabled.
    #[default]
    Both,
}

impl AckSelection {
    /// Returns the selected modes in sweep order.
    #[must_use]
    pub fn modes(self) -> Vec<AckMode> {
        match self {
            Self::Ack => vec![AckMode::Enabled],
            Self::NoAck => vec![AckMode::Disabled],
            Self::Both => vec![AckMode::Enabled, AckMode::Disabled],
        }
    }
}

// ============================================================================
// SECTION: Test Cases
// ============================================================================

/// One tuning-parameter combination from the perf matrix.
///
/// # Invariants
/// - Identity is structural; two cases with equal values are the same case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TestCase {
    /// Connector task parallelism (`tasks.max`).
    pub tasks_max: u32,
    /// HEC worker threads per task (`splunk.hec.threads`).
    pub hec_threads: u32,
    /// Maximum events per HEC batch (`splunk.hec.max.batch.size`).
    pub max_batch_size: u32,
}

impl TestCase {
    /// Creates a test case from its three tuning values.
    #[must_use]
    pub const fn new(tasks_max: u32, hec_threads: u32, max_batch_size: u32) -> Self {
        Self {
            tasks_max,
            hec_threads,
            max_batch_size,
        }
    }

    /// Returns the parameters as connector key/value pairs in canonical order.
    #[must_use]
    pub fn params(&self) -> [(&'static str, String); 3] {
        [
            (TASKS_MAX_KEY, self.tasks_max.to_string()),
            (HEC_THREADS_KEY, self.hec_threads.to_string()),
            (MAX_BATCH_SIZE_KEY, self.max_batch_size.to_string()),
        ]
    }
}

// ============================================================================
// SECTION: Cluster Endpoints
// ============================================================================

/// Indexer cluster addressed by hostname prefix and member count.
///
/// # Invariants
/// - Member hostnames are `{prefix}1` through `{prefix}{size}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterTopology {
    /// Hostname prefix shared by every member.
    hostname_prefix: String,
    /// Number of cluster members.
    size: NonZeroUsize,
}

impl ClusterTopology {
    /// Creates a topology description.
    #[must_use]
    pub fn new(hostname_prefix: impl Into<String>, size: NonZeroUsize) -> Self {
        Self {
            hostname_prefix: hostname_prefix.into(),
            size,
        }
    }

    /// Returns the hostname prefix.
    #[must_use]
    pub fn hostname_prefix(&self) -> &str {
        &self.hostname_prefix
    }

    /// Returns the member count.
    #[must_use]
    pub const fn size(&self) -> NonZeroUsize {
        self.size
    }

    /// Returns `https://{prefix}{i}:{port}` for every member, in index order.
    #[must_use]
    pub fn endpoints(&self, port: u16) -> ClusterEndpoints {
        let urls = (1..=self.size.get())
            .map(|index| format!("https://{}{index}:{port}", self.hostname_prefix))
            .collect();
        ClusterEndpoints(urls)
    }

    /// Returns the HEC ingestion endpoints.
    #[must_use]
    pub fn hec_endpoints(&self) -> ClusterEndpoints {
        self.endpoints(HEC_PORT)
    }

    /// Returns the management API endpoints.
    #[must_use]
    pub fn management_endpoints(&self) -> ClusterEndpoints {
        self.endpoints(MANAGEMENT_PORT)
    }
}

/// Ordered list of cluster member base URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterEndpoints(Vec<String>);

impl ClusterEndpoints {
    /// Wraps an explicit endpoint list, preserving order.
    #[must_use]
    pub const fn new(urls: Vec<String>) -> Self {
        Self(urls)
    }

    /// Returns the endpoints as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Returns the number of endpoints.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when no endpoints are present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates endpoints in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns the comma-joined form used by `splunk.hec.uri`.
    #[must_use]
    pub fn joined(&self) -> String {
        self.0.join(",")
    }
}

// ============================================================================
// SECTION: Credentials
// ============================================================================

/// HEC token definition provisioned on every indexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HecCredential {
    /// Input name on the indexer.
    pub name: String,
    /// Token value.
    pub token: String,
    /// Default index for events sent with the token.
    pub index: String,
    /// Indexes the token may write to.
    pub indexes: String,
    /// Whether the token requires acknowledgment tracking.
    pub use_ack: bool,
    /// Whether the input is disabled.
    pub disabled: bool,
}

impl HecCredential {
    /// Returns the ack-enabled token the ack-mode connectors authenticate with.
    #[must_use]
    pub fn ack_token() -> Self {
        Self {
            name: "hec-token-ack".to_string(),
            token: TOKEN_WITH_ACK.to_string(),
            index: "main".to_string(),
            indexes: "main".to_string(),
            use_ack: true,
            disabled: false,
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
