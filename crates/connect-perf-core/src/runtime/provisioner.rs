// crates/connect-perf-core/src/runtime/provisioner.rs
// ============================================================================
// Module: Credential Provisioner
// Description: Ensures the ack-enabled HEC token exists on every indexer.
// Purpose: Prepare cluster credentials once before any connector is created.
// Dependencies: tracing, crate::{core, interfaces, runtime::retry}
// ============================================================================

//! ## Overview
//! Provisioning walks the management endpoints in cluster order and creates
//! the HEC token on each one. A 409 means the token already exists and counts
//! as success, so reruns against a prepared cluster are no-ops. Everything
//! else is retried; the sweep cannot start without the token.

// ============================================================================
// SECTION: Imports
// ============================================================================

use tracing::info;

use crate::core::model::ClusterEndpoints;
use crate::core::model::HecCredential;
use crate::interfaces::CredentialApi;
use crate::interfaces::Sleeper;
use crate::runtime::retry::RetryError;
use crate::runtime::retry::RetryPolicy;
use crate::runtime::retry::Step;

/// Status returned by the management API for a duplicate input.
const STATUS_CONFLICT: u16 = 409;

/// Operation label used in logs and errors.
const PROVISION_OPERATION: &str = "create hec token";

// ============================================================================
// SECTION: Outcomes
// ============================================================================

/// Terminal outcome of provisioning on one endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionOutcome {
    /// The token was created.
    Created,
    /// The token already existed (409).
    AlreadyExists,
}

/// Per-endpoint provisioning results in cluster order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProvisionReport {
    /// `(endpoint, outcome)` pairs.
    pub outcomes: Vec<(String, ProvisionOutcome)>,
}

// ============================================================================
// SECTION: Provisioner
// ============================================================================

/// Creates HEC tokens across the cluster with retry.
pub struct CredentialProvisioner<C, S> {
    /// Management API client.
    api: C,
    /// Retry policy per endpoint.
    policy: RetryPolicy,
    /// Sleeper used between attempts.
    sleeper: S,
}

impl<C: CredentialApi, S: Sleeper> CredentialProvisioner<C, S> {
    /// Creates a provisioner.
    #[must_use]
    pub const fn new(api: C, policy: RetryPolicy, sleeper: S) -> Self {
        Self {
            api,
            policy,
            sleeper,
        }
    }

    /// Ensures `credential` exists on every endpoint, in order.
    ///
    /// # Errors
    ///
    /// Returns [`RetryError`] only when the retry policy is capped and an
    /// endpoint exhausted its attempts; later endpoints are not attempted.
    pub fn ensure_ack_credential(
        &self,
        endpoints: &ClusterEndpoints,
        credential: &HecCredential,
    ) -> Result<ProvisionReport, RetryError> {
        let mut report = ProvisionReport::default();
        for endpoint in endpoints.iter() {
            info!(endpoint, token = %credential.name, "creating hec token with ack");
            let outcome = self.policy.run(&self.sleeper, PROVISION_OPERATION, endpoint, || {
                match self.api.create_credential(endpoint, credential) {
                    Ok(()) => Step::Done(ProvisionOutcome::Created),
                    Err(err) if err.status() == Some(STATUS_CONFLICT) => {
                        info!(endpoint, "hec token already exists");
                        Step::Done(ProvisionOutcome::AlreadyExists)
                    }
                    Err(err) => Step::Retry(err),
                }
            })?;
            report.outcomes.push((endpoint.to_string(), outcome));
        }
        Ok(report)
    }
}
