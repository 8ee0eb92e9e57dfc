// crates/connect-perf-core/src/core/descriptor.rs
// ============================================================================
// Module: Connector Descriptor Builder
// Description: Builds the Kafka Connect payload for one sweep iteration.
// Purpose: Turn (endpoints, transport, ack, test case) into a connector config.
// Dependencies: serde, serde_json, crate::core::{model, naming}
// ============================================================================

//! ## Overview
//! [`ConnectorConfigBuilder`] produces the `{name, config}` document POSTed to
//! the Kafka Connect REST API. Apart from the name, the output is a pure
//! function of its inputs, so two builds with the same inputs serialize to
//! identical bytes once names are equal.
//! Invariants:
//! - Every config value is a string, as the Connect REST API expects.
//! - `splunk.sources` and `splunk.sourcetypes` are `:`-separated `key=value`
//!   labels that result dashboards split back into parameters.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;

use crate::core::model::AckMode;
use crate::core::model::ClusterEndpoints;
use crate::core::model::TestCase;
use crate::core::model::TransportMode;
use crate::core::naming::NameSequence;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Connector class deployed by every sweep iteration.
pub const CONNECTOR_CLASS: &str = "com.splunk.kafka.connect.SplunkSinkConnector";

/// Index the connector writes to.
pub const TARGET_INDEX: &str = "main";

/// Common prefix of the source and sourcetype labels.
const LABEL_PREFIX: &str = "connector-perf";

// ============================================================================
// SECTION: Descriptor Types
// ============================================================================

/// Connector creation payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectorDescriptor {
    /// Unique connector name.
    pub name: String,
    /// Connector configuration map.
    pub config: ConnectorConfig,
}

impl ConnectorDescriptor {
    /// Serializes the descriptor to the JSON body sent to the control plane.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] when serialization fails.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

/// Splunk sink connector configuration.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectorConfig {
    /// Connector implementation class.
    #[serde(rename = "connector.class")]
    pub connector_class: String,
    /// Source topic(s).
    pub topics: String,
    /// Task parallelism.
    #[serde(rename = "tasks.max")]
    pub tasks_max: String,
    /// Target index.
    #[serde(rename = "splunk.indexes")]
    pub indexes: String,
    /// Source label encoding transport and ack mode.
    #[serde(rename = "splunk.sources")]
    pub sources: String,
    /// Sourcetype label encoding tuning parameters and heap size.
    #[serde(rename = "splunk.sourcetypes")]
    pub sourcetypes: String,
    /// Comma-joined HEC endpoints.
    #[serde(rename = "splunk.hec.uri")]
    pub hec_uri: String,
    /// HEC token.
    #[serde(rename = "splunk.hec.token")]
    pub hec_token: String,
    /// Ack flag.
    #[serde(rename = "splunk.hec.ack.enabled")]
    pub ack_enabled: String,
    /// Raw transport flag.
    #[serde(rename = "splunk.hec.raw")]
    pub raw: String,
    /// HEC batch size.
    #[serde(rename = "splunk.hec.max.batch.size")]
    pub max_batch_size: String,
    /// Data tracking flag.
    #[serde(rename = "splunk.hec.track.data")]
    pub track_data: String,
    /// Certificate validation flag.
    #[serde(rename = "splunk.hec.ssl.validate.certs")]
    pub validate_certs: String,
    /// Raw-mode event delimiter.
    #[serde(rename = "splunk.hec.raw.line.breaker")]
    pub line_breaker: String,
    /// Connector name, repeated inside the config.
    pub name: String,
}

/// Run-wide inputs to the builder that do not change between iterations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorSettings {
    /// Kafka topic the connector consumes.
    pub topic: String,
    /// JVM heap label embedded in sourcetypes.
    pub jvm_heap_size: String,
    /// Raw-mode line breaker.
    pub line_breaker: String,
}

impl Default for DescriptorSettings {
    fn default() -> Self {
        Self {
            topic: "perf".to_string(),
            jvm_heap_size: "8G".to_string(),
            line_breaker: "@@@@".to_string(),
        }
    }
}

// ============================================================================
// SECTION: Builder
// ============================================================================

/// Builds connector descriptors with unique names.
pub struct ConnectorConfigBuilder<N> {
    /// Run-wide settings.
    settings: DescriptorSettings,
    /// Name source.
    names: N,
}

impl<N: NameSequence> ConnectorConfigBuilder<N> {
    /// Creates a builder.
    #[must_use]
    pub const fn new(settings: DescriptorSettings, names: N) -> Self {
        Self {
            settings,
            names,
        }
    }

    /// Returns the run-wide settings.
    #[must_use]
    pub const fn settings(&self) -> &DescriptorSettings {
        &self.settings
    }

    /// Builds the descriptor for one sweep iteration.
    #[must_use]
    pub fn build(
        &self,
        endpoints: &ClusterEndpoints,
        transport: TransportMode,
        ack: AckMode,
        case: &TestCase,
    ) -> ConnectorDescriptor {
        let name = self.names.next_name();
        let config = ConnectorConfig {
            connector_class: CONNECTOR_CLASS.to_string(),
            topics: self.settings.topic.clone(),
            tasks_max: case.tasks_max.to_string(),
            indexes: TARGET_INDEX.to_string(),
            sources: source_label(transport, ack),
            sourcetypes: sourcetype_label(case, &self.settings.jvm_heap_size),
            hec_uri: endpoints.joined(),
            hec_token: ack.token().to_string(),
            ack_enabled: ack.ack_flag().to_string(),
            raw: transport.raw_flag().to_string(),
            max_batch_size: case.max_batch_size.to_string(),
            track_data: "true".to_string(),
            validate_certs: "false".to_string(),
            line_breaker: self.settings.line_breaker.clone(),
            name: name.clone(),
        };
        ConnectorDescriptor {
            name,
            config,
        }
    }
}

// ============================================================================
// SECTION: Labels
// ============================================================================

/// Returns the `splunk.sources` label for a transport/ack pair.
#[must_use]
pub fn source_label(transport: TransportMode, ack: AckMode) -> String {
    format!(
        "{LABEL_PREFIX}:raw_endpoint={}:use_ack={}",
        transport.raw_flag(),
        ack.ack_flag()
    )
}

/// Returns the `splunk.sourcetypes` label for a test case and heap size.
#[must_use]
pub fn sourcetype_label(case: &TestCase, jvm_heap_size: &str) -> String {
    let params = case
        .params()
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join(":");
    format!("{LABEL_PREFIX}:{params}:jvm_heap={jvm_heap_size}")
}

// ============================================================================
// SECTION: Tests
// ============================================================================
