// crates/connect-perf-core/src/core/mod.rs
// ============================================================================
// Module: Connect Perf Core Types
// Description: Data model, tuning matrix, descriptor builder, and naming.
// Purpose: Group the side-effect free building blocks of a perf sweep.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Everything in this module is pure data or a pure function of its inputs
//! (plus the injected clock used for connector names).

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod descriptor;
pub mod matrix;
pub mod model;
pub mod naming;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use descriptor::ConnectorConfig;
pub use descriptor::ConnectorConfigBuilder;
pub use descriptor::ConnectorDescriptor;
pub use descriptor::DescriptorSettings;
pub use descriptor::source_label;
pub use descriptor::sourcetype_label;
pub use matrix::PERF_MATRIX;
pub use matrix::perf_matrix;
pub use model::AckMode;
pub use model::AckSelection;
pub use model::ClusterEndpoints;
pub use model::ClusterTopology;
pub use model::HecCredential;
pub use model::TOKEN_WITH_ACK;
pub use model::TOKEN_WITHOUT_ACK;
pub use model::TestCase;
pub use model::TransportMode;
pub use model::TransportSelection;
pub use naming::Clock;
pub use naming::MillisNameSequence;
pub use naming::NameSequence;
pub use naming::SystemClock;
