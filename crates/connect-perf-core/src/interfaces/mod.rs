// crates/connect-perf-core/src/interfaces/mod.rs
// ============================================================================
// Module: Connect Perf Interfaces
// Description: Backend-agnostic surfaces for the control plane and waiting.
// Purpose: Define the contracts the runtime drives without embedding HTTP.
// Dependencies: thiserror, crate::core
// ============================================================================

//! ## Overview
//! The runtime talks to two remote APIs (the Kafka Connect REST API and the
//! indexer management API) and blocks between attempts. All three concerns
//! are traits so the runtime can be exercised with in-process fakes.
//! Implementations report outcomes verbatim: any non-2xx status becomes
//! [`ApiError::Status`]. Deciding which statuses count as success (409 on
//! credential creation, 404 on deletion) belongs to the runtime.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use thiserror::Error;

use crate::core::descriptor::ConnectorDescriptor;
use crate::core::model::HecCredential;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Control-plane call failures.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (connect, DNS, timeout, TLS).
    #[error("transport failure: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("unexpected status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly truncated.
        body: String,
    },
}

impl ApiError {
    /// Returns the HTTP status for status errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Transport(_) => None,
            Self::Status {
                status, ..
            } => Some(*status),
        }
    }
}

// ============================================================================
// SECTION: Control Plane
// ============================================================================

/// Kafka Connect connector collection.
pub trait ConnectorApi: Send + Sync {
    /// Creates a connector from the descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or any non-2xx status.
    fn create(&self, descriptor: &ConnectorDescriptor) -> Result<(), ApiError>;

    /// Deletes the named connector.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or any non-2xx status,
    /// including 404.
    fn delete(&self, name: &str) -> Result<(), ApiError>;
}

/// Indexer management API for HEC tokens.
pub trait CredentialApi: Send + Sync {
    /// Creates the HEC token input on the member at `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or any non-2xx status,
    /// including 409.
    fn create_credential(&self, endpoint: &str, credential: &HecCredential)
    -> Result<(), ApiError>;
}

// ============================================================================
// SECTION: Waiting
// ============================================================================

/// Blocks the calling thread.
pub trait Sleeper: Send + Sync {
    /// Sleeps for `duration`.
    fn sleep(&self, duration: Duration);
}

impl<T: Sleeper + ?Sized> Sleeper for &T {
    fn sleep(&self, duration: Duration) {
        (**self).sleep(duration);
    }
}

impl<T: ConnectorApi + ?Sized> ConnectorApi for &T {
    fn create(&self, descriptor: &ConnectorDescriptor) -> Result<(), ApiError> {
        (**self).create(descriptor)
    }

    fn delete(&self, name: &str) -> Result<(), ApiError> {
        (**self).delete(name)
    }
}

impl<T: CredentialApi + ?Sized> CredentialApi for &T {
    fn create_credential(
        &self,
        endpoint: &str,
        credential: &HecCredential,
    ) -> Result<(), ApiError> {
        (**self).create_credential(endpoint, credential)
    }
}
