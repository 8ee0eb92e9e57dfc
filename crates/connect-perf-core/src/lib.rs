// crates/connect-perf-core/src/lib.rs
// ============================================================================
// Module: Connect Perf Core Library
// Description: Public API surface for the connector performance sweep core.
// Purpose: Expose the data model, control-plane interfaces, and runtime drivers.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Connect Perf core drives a sink connector through a fixed matrix of tuning
//! parameters. It builds connector descriptors, provisions the HEC token the
//! connectors authenticate with, and sequences create/observe/delete cycles
//! against an eventually-consistent control plane. Network access happens
//! only through the traits in [`interfaces`], so every component runs against
//! in-process fakes in tests.
//! Invariants:
//! - At most one connector is active at any time during a sweep.
//! - Control-plane calls retry under an explicit [`RetryPolicy`].
//! - Connector names are unique within a process.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::*;

pub use interfaces::ApiError;
pub use interfaces::ConnectorApi;
pub use interfaces::CredentialApi;
pub use interfaces::Sleeper;
pub use runtime::CompletedCycle;
pub use runtime::ConnectorState;
pub use runtime::CredentialProvisioner;
pub use runtime::DeleteOutcome;
pub use runtime::LifecycleManager;
pub use runtime::ProvisionOutcome;
pub use runtime::ProvisionReport;
pub use runtime::RetryError;
pub use runtime::RetryPolicy;
pub use runtime::Step;
pub use runtime::SweepDriver;
pub use runtime::SweepError;
pub use runtime::SweepPlan;
pub use runtime::SweepReport;
pub use runtime::SweepSettings;
pub use runtime::ThreadSleeper;
