// crates/connect-perf-core/src/runtime/lifecycle.rs
// ============================================================================
// Module: Connector Lifecycle Manager
// Description: Retrying create/delete against the Kafka Connect REST API.
// Purpose: Move a connector Absent -> Creating -> Active -> Deleting -> Absent.
// Dependencies: tracing, crate::{core, interfaces, runtime::retry}
// ============================================================================

//! ## Overview
//! [`LifecycleManager`] wraps a [`ConnectorApi`] with the sweep's success
//! rules. Creation succeeds only on a 2xx response. Deletion also accepts
//! 404, because a connector that is already gone is the desired end state.
//! Every other outcome is retried under the injected [`RetryPolicy`].
//! Invariants:
//! - The tracked [`ConnectorState`] is `Active` only between a confirmed
//!   create and the start of the matching delete.
//! - Name uniqueness is the caller's concern; the manager never renames.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::sync::Mutex;
use std::sync::PoisonError;

use tracing::debug;
use tracing::info;

use crate::core::descriptor::ConnectorDescriptor;
use crate::interfaces::ConnectorApi;
use crate::interfaces::Sleeper;
use crate::runtime::retry::RetryError;
use crate::runtime::retry::RetryPolicy;
use crate::runtime::retry::Step;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Status returned by Kafka Connect for an unknown connector.
const STATUS_NOT_FOUND: u16 = 404;

/// Operation label for creation.
const CREATE_OPERATION: &str = "create connector";

/// Operation label for deletion.
const DELETE_OPERATION: &str = "delete connector";

// ============================================================================
// SECTION: State
// ============================================================================

/// Lifecycle state of the connector managed by a [`LifecycleManager`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConnectorState {
    /// No connector is known to exist.
    #[default]
    Absent,
    /// A create request is in flight or being retried.
    Creating {
        /// Connector name.
        name: String,
    },
    /// The control plane confirmed creation.
    Active {
        /// Connector name.
        name: String,
    },
    /// A delete request is in flight or being retried.
    Deleting {
        /// Connector name.
        name: String,
    },
}

impl fmt::Display for ConnectorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("absent"),
            Self::Creating {
                name,
            } => write!(f, "creating({name})"),
            Self::Active {
                name,
            } => write!(f, "active({name})"),
            Self::Deleting {
                name,
            } => write!(f, "deleting({name})"),
        }
    }
}

/// Terminal outcome of a delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The control plane removed the connector.
    Deleted,
    /// The control plane reported the connector as unknown (404).
    AlreadyAbsent,
}

// ============================================================================
// SECTION: Manager
// ============================================================================

/// Issues retrying create/delete calls for one connector at a time.
pub struct LifecycleManager<A, S> {
    /// Connector collection client.
    api: A,
    /// Retry policy for both operations.
    policy: RetryPolicy,
    /// Sleeper used between attempts.
    sleeper: S,
    /// Tracked lifecycle state.
    state: Mutex<ConnectorState>,
}

impl<A: ConnectorApi, S: Sleeper> LifecycleManager<A, S> {
    /// Creates a manager.
    #[must_use]
    pub const fn new(api: A, policy: RetryPolicy, sleeper: S) -> Self {
        Self {
            api,
            policy,
            sleeper,
            state: Mutex::new(ConnectorState::Absent),
        }
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> ConnectorState {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Creates the connector, retrying until the control plane confirms it.
    ///
    /// # Errors
    ///
    /// Returns [`RetryError`] only when the retry policy is capped and every
    /// attempt failed; the state then reverts to `Absent`.
    pub fn create(&self, descriptor: &ConnectorDescriptor) -> Result<(), RetryError> {
        let name = descriptor.name.as_str();
        info!(connector = name, "create connector");
        self.transition(ConnectorState::Creating {
            name: name.to_string(),
        });
        let result = self.policy.run(&self.sleeper, CREATE_OPERATION, name, || {
            match self.api.create(descriptor) {
                Ok(()) => Step::Done(()),
                Err(err) => Step::Retry(err),
            }
        });
        match result {
            Ok(()) => {
                self.transition(ConnectorState::Active {
                    name: name.to_string(),
                });
                Ok(())
            }
            Err(err) => {
                self.transition(ConnectorState::Absent);
                Err(err)
            }
        }
    }

    /// Deletes the named connector, treating 404 as success.
    ///
    /// # Errors
    ///
    /// Returns [`RetryError`] only when the retry policy is capped and every
    /// attempt failed; the connector is then assumed to still exist.
    pub fn delete(&self, name: &str) -> Result<DeleteOutcome, RetryError> {
        info!(connector = name, "delete connector");
        self.transition(ConnectorState::Deleting {
            name: name.to_string(),
        });
        let result = self.policy.run(&self.sleeper, DELETE_OPERATION, name, || {
            match self.api.delete(name) {
                Ok(()) => Step::Done(DeleteOutcome::Deleted),
                Err(err) if err.status() == Some(STATUS_NOT_FOUND) => {
                    info!(connector = name, "connector already absent");
                    Step::Done(DeleteOutcome::AlreadyAbsent)
                }
                Err(err) => Step::Retry(err),
            }
        });
        match result {
            Ok(outcome) => {
                self.transition(ConnectorState::Absent);
                Ok(outcome)
            }
            Err(err) => {
                self.transition(ConnectorState::Active {
                    name: name.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Records a state change.
    fn transition(&self, next: ConnectorState) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let current: &ConnectorState = &state;
        debug!(from = %current, to = %next, "connector state transition");
        *state = next;
    }
}
