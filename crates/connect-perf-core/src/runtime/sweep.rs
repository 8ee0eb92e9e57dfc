// crates/connect-perf-core/src/runtime/sweep.rs
// ============================================================================
// Module: Sweep Driver
// Description: Outer loop over transport/ack pairs and the tuning matrix.
// Purpose: Run one create/observe/delete cycle per configuration, in order.
// Dependencies: thiserror, tracing, crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! [`SweepDriver`] iterates the [`SweepPlan`] pairs and, within each pair,
//! the matrix in order. Each cycle builds a fresh descriptor, creates the
//! connector, leaves it running for the observation window, and deletes it
//! before the next cycle starts.
//! Invariants:
//! - Cycles never overlap; at most one connector exists at a time.
//! - There is no resume cursor; every run starts from the first pair.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use thiserror::Error;
use tracing::info;

use crate::core::descriptor::ConnectorConfigBuilder;
use crate::core::model::AckMode;
use crate::core::model::AckSelection;
use crate::core::model::ClusterEndpoints;
use crate::core::model::TestCase;
use crate::core::model::TransportMode;
use crate::core::model::TransportSelection;
use crate::core::naming::NameSequence;
use crate::interfaces::ConnectorApi;
use crate::interfaces::Sleeper;
use crate::runtime::lifecycle::LifecycleManager;
use crate::runtime::retry::RetryError;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Sweep failures. Only reachable with a capped retry policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SweepError {
    /// Connector creation exhausted its retries.
    #[error("failed to create connector {connector}: {source}")]
    Create {
        /// Connector name.
        connector: String,
        /// Underlying retry failure.
        source: RetryError,
    },
    /// Connector deletion exhausted its retries.
    #[error("failed to delete connector {connector}: {source}")]
    Delete {
        /// Connector name.
        connector: String,
        /// Underlying retry failure.
        source: RetryError,
    },
}

// ============================================================================
// SECTION: Plan
// ============================================================================

/// Ordered (transport, ack) pairs to sweep.
///
/// # Invariants
/// - The ack selection is repeated under every selected transport mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepPlan {
    /// Pairs in sweep order.
    pairs: Vec<(TransportMode, AckMode)>,
}

impl SweepPlan {
    /// Expands the selections as nested iteration (transport outer).
    #[must_use]
    pub fn new(transport: TransportSelection, ack: AckSelection) -> Self {
        let ack_modes = ack.modes();
        let pairs = transport
            .modes()
            .into_iter()
            .flat_map(|mode| ack_modes.iter().map(move |ack| (mode, *ack)))
            .collect();
        Self {
            pairs,
        }
    }

    /// Returns the pairs in sweep order.
    #[must_use]
    pub fn pairs(&self) -> &[(TransportMode, AckMode)] {
        &self.pairs
    }
}

/// Run-wide sweep inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepSettings {
    /// Pairs to sweep.
    pub plan: SweepPlan,
    /// Tuning cases in sweep order.
    pub matrix: Vec<TestCase>,
    /// HEC endpoints embedded in every descriptor.
    pub hec_endpoints: ClusterEndpoints,
    /// How long each connector runs before deletion.
    pub observation_window: Duration,
}

// ============================================================================
// SECTION: Report
// ============================================================================

/// One finished create/observe/delete cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedCycle {
    /// Connector name.
    pub connector: String,
    /// Transport mode.
    pub transport: TransportMode,
    /// Ack mode.
    pub ack: AckMode,
    /// Tuning case.
    pub case: TestCase,
}

/// Cycles completed by a sweep, in execution order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SweepReport {
    /// Completed cycles.
    pub cycles: Vec<CompletedCycle>,
}

// ============================================================================
// SECTION: Driver
// ============================================================================

/// Sequences the perf sweep.
pub struct SweepDriver<N, A, S, W> {
    /// Run-wide settings.
    settings: SweepSettings,
    /// Descriptor builder.
    builder: ConnectorConfigBuilder<N>,
    /// Connector lifecycle manager.
    lifecycle: LifecycleManager<A, S>,
    /// Sleeper for the observation window.
    waiter: W,
}

impl<N, A, S, W> SweepDriver<N, A, S, W>
where
    N: NameSequence,
    A: ConnectorApi,
    S: Sleeper,
    W: Sleeper,
{
    /// Creates a driver.
    #[must_use]
    pub const fn new(
        settings: SweepSettings,
        builder: ConnectorConfigBuilder<N>,
        lifecycle: LifecycleManager<A, S>,
        waiter: W,
    ) -> Self {
        Self {
            settings,
            builder,
            lifecycle,
            waiter,
        }
    }

    /// Returns the lifecycle manager.
    #[must_use]
    pub const fn lifecycle(&self) -> &LifecycleManager<A, S> {
        &self.lifecycle
    }

    /// Runs every cycle of the sweep.
    ///
    /// # Errors
    ///
    /// Returns [`SweepError`] when a capped retry policy gives up; the sweep
    /// stops at that cycle.
    pub fn run(&self) -> Result<SweepReport, SweepError> {
        let mut report = SweepReport::default();
        for &(transport, ack) in self.settings.plan.pairs() {
            for case in &self.settings.matrix {
                let descriptor =
                    self.builder.build(&self.settings.hec_endpoints, transport, ack, case);
                info!(
                    source = %descriptor.config.sources,
                    sourcetype = %descriptor.config.sourcetypes,
                    "handling perf case"
                );
                self.lifecycle.create(&descriptor).map_err(|source| SweepError::Create {
                    connector: descriptor.name.clone(),
                    source,
                })?;
                self.waiter.sleep(self.settings.observation_window);
                self.lifecycle.delete(&descriptor.name).map_err(|source| SweepError::Delete {
                    connector: descriptor.name.clone(),
                    source,
                })?;
                report.cycles.push(CompletedCycle {
                    connector: descriptor.name,
                    transport,
                    ack,
                    case: *case,
                });
            }
        }
        info!(cycles = report.cycles.len(), "perf sweep finished");
        Ok(report)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
