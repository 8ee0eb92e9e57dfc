// crates/connect-perf-core/tests/common/mod.rs
// ============================================================================
// Module: Common Test Utilities
// Description: In-process fakes for the control plane, clock, and sleeper.
// Purpose: Exercise runtime components without network or real waiting.
// Dependencies: connect-perf-core
// ============================================================================

//! ## Overview
//! [`FakeConnectCluster`] behaves like a Kafka Connect collection: creating an
//! existing name answers 409 and deleting an unknown name answers 404. Scripted
//! failures are returned before the simulated behaviour applies. Every call and
//! every sleep is appended to a shared [`EventLog`] so tests can assert order.

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
    dead_code,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::collections::BTreeSet;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use connect_perf_core::ApiError;
use connect_perf_core::Clock;
use connect_perf_core::ConnectorApi;
use connect_perf_core::ConnectorDescriptor;
use connect_perf_core::CredentialApi;
use connect_perf_core::HecCredential;
use connect_perf_core::Sleeper;

// ============================================================================
// SECTION: Event Log
// ============================================================================

/// Observable side effect recorded by the fakes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Create request for a connector name.
    Create(String),
    /// Delete request for a connector name.
    Delete(String),
    /// Credential request for an endpoint.
    Credential(String),
    /// Sleep of the given duration.
    Sleep(Duration),
}

/// Shared, ordered record of events.
#[derive(Debug, Clone, Default)]
pub struct EventLog(Arc<Mutex<Vec<Event>>>);

impl EventLog {
    /// Appends an event.
    pub fn push(&self, event: Event) {
        self.0.lock().unwrap().push(event);
    }

    /// Returns a snapshot of all events.
    pub fn events(&self) -> Vec<Event> {
        self.0.lock().unwrap().clone()
    }

    /// Returns only the recorded sleep durations.
    pub fn sleeps(&self) -> Vec<Duration> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Sleep(duration) => Some(duration),
                _ => None,
            })
            .collect()
    }
}

// ============================================================================
// SECTION: Sleeper and Clock
// ============================================================================

/// Sleeper that records instead of blocking.
#[derive(Debug, Clone, Default)]
pub struct RecordingSleeper {
    pub log: EventLog,
}

impl RecordingSleeper {
    /// Creates a sleeper appending to `log`.
    pub fn new(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
        }
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) {
        self.log.push(Event::Sleep(duration));
    }
}

/// Clock stuck at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FrozenClock(pub u64);

impl Clock for FrozenClock {
    fn now_millis(&self) -> u64 {
        self.0
    }
}

// ============================================================================
// SECTION: Fake Connect Cluster
// ============================================================================

/// In-memory Kafka Connect connector collection.
#[derive(Debug, Default)]
pub struct FakeConnectCluster {
    log: EventLog,
    create_failures: Mutex<VecDeque<ApiError>>,
    delete_failures: Mutex<VecDeque<ApiError>>,
    running: Mutex<BTreeSet<String>>,
    created: Mutex<Vec<ConnectorDescriptor>>,
    peak_running: Mutex<usize>,
}

impl FakeConnectCluster {
    /// Creates an empty cluster appending to `log`.
    pub fn new(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            ..Self::default()
        }
    }

    /// Queues errors returned by the next create calls.
    pub fn fail_creates(&self, errors: impl IntoIterator<Item = ApiError>) {
        self.create_failures.lock().unwrap().extend(errors);
    }

    /// Queues errors returned by the next delete calls.
    pub fn fail_deletes(&self, errors: impl IntoIterator<Item = ApiError>) {
        self.delete_failures.lock().unwrap().extend(errors);
    }

    /// Returns names of connectors currently running.
    pub fn running(&self) -> BTreeSet<String> {
        self.running.lock().unwrap().clone()
    }

    /// Returns every descriptor accepted so far.
    pub fn created(&self) -> Vec<ConnectorDescriptor> {
        self.created.lock().unwrap().clone()
    }

    /// Returns the largest number of simultaneously running connectors.
    pub fn peak_running(&self) -> usize {
        *self.peak_running.lock().unwrap()
    }
}

impl ConnectorApi for FakeConnectCluster {
    fn create(&self, descriptor: &ConnectorDescriptor) -> Result<(), ApiError> {
        self.log.push(Event::Create(descriptor.name.clone()));
        if let Some(err) = self.create_failures.lock().unwrap().pop_front() {
            return Err(err);
        }
        let mut running = self.running.lock().unwrap();
        if !running.insert(descriptor.name.clone()) {
            return Err(status(409, "connector already exists"));
        }
        let mut peak = self.peak_running.lock().unwrap();
        *peak = (*peak).max(running.len());
        self.created.lock().unwrap().push(descriptor.clone());
        Ok(())
    }

    fn delete(&self, name: &str) -> Result<(), ApiError> {
        self.log.push(Event::Delete(name.to_string()));
        if let Some(err) = self.delete_failures.lock().unwrap().pop_front() {
            return Err(err);
        }
        if self.running.lock().unwrap().remove(name) {
            Ok(())
        } else {
            Err(status(404, "connector not found"))
        }
    }
}

// ============================================================================
// SECTION: Fake Management API
// ============================================================================

/// In-memory indexer management API keyed by endpoint.
#[derive(Debug, Default)]
pub struct FakeManagementApi {
    log: EventLog,
    failures: Mutex<VecDeque<ApiError>>,
    tokens: Mutex<BTreeSet<(String, String)>>,
}

impl FakeManagementApi {
    /// Creates an API with no tokens appending to `log`.
    pub fn new(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            ..Self::default()
        }
    }

    /// Queues errors returned by the next credential calls.
    pub fn fail_next(&self, errors: impl IntoIterator<Item = ApiError>) {
        self.failures.lock().unwrap().extend(errors);
    }

    /// Returns `(endpoint, token name)` pairs created so far.
    pub fn tokens(&self) -> BTreeSet<(String, String)> {
        self.tokens.lock().unwrap().clone()
    }
}

impl CredentialApi for FakeManagementApi {
    fn create_credential(
        &self,
        endpoint: &str,
        credential: &HecCredential,
    ) -> Result<(), ApiError> {
        self.log.push(Event::Credential(endpoint.to_string()));
        if let Some(err) = self.failures.lock().unwrap().pop_front() {
            return Err(err);
        }
        let inserted =
            self.tokens.lock().unwrap().insert((endpoint.to_string(), credential.name.clone()));
        if inserted { Ok(()) } else { Err(status(409, "An object with name already exists")) }
    }
}

// ============================================================================
// SECTION: Error Helpers
// ============================================================================

/// Builds a non-2xx status error.
pub fn status(code: u16, body: &str) -> ApiError {
    ApiError::Status {
        status: code,
        body: body.to_string(),
    }
}

/// Builds a connection-refused transport error.
pub fn refused() -> ApiError {
    ApiError::Transport("connection refused".to_string())
}
