// crates/connect-perf-core/src/runtime/mod.rs
// ============================================================================
// Module: Connect Perf Runtime
// Description: Retry policy, connector lifecycle, provisioning, and the sweep.
// Purpose: Drive the control plane through the interfaces layer.
// Dependencies: crate::{core, interfaces}, tracing
// ============================================================================

//! ## Overview
//! Runtime components are strictly sequential and blocking. Each one receives
//! its collaborators (API clients, [`RetryPolicy`], [`crate::Sleeper`]) at
//! construction; none reads process-global state.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod lifecycle;
pub mod provisioner;
pub mod retry;
pub mod sweep;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use lifecycle::ConnectorState;
pub use lifecycle::DeleteOutcome;
pub use lifecycle::LifecycleManager;
pub use provisioner::CredentialProvisioner;
pub use provisioner::ProvisionOutcome;
pub use provisioner::ProvisionReport;
pub use retry::RetryError;
pub use retry::RetryPolicy;
pub use retry::Step;
pub use retry::ThreadSleeper;
pub use sweep::CompletedCycle;
pub use sweep::SweepDriver;
pub use sweep::SweepError;
pub use sweep::SweepPlan;
pub use sweep::SweepReport;
pub use sweep::SweepSettings;
