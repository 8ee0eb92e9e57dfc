// crates/connect-perf-core/src/runtime/retry.rs
// ============================================================================
// Module: Retry Policy
// Description: Fixed-interval retry loop for control-plane operations.
// Purpose: Keep retrying transient failures until success or an opt-in bound.
// Dependencies: thiserror, tracing, crate::interfaces
// ============================================================================

//! ## Overview
//! A perf run lasts many hours and every later step depends on earlier
//! control-plane calls landing, so the default policy never gives up: it
//! waits a fixed delay (2 s) between attempts, forever. Operators can set
//! [`RetryPolicy::max_attempts`] to turn a permanently unreachable control
//! plane into a reported [`RetryError::Exhausted`] instead of a silent hang.
//!
//! Callers classify each attempt into a [`Step`]; the loop only decides
//! whether and when to try again.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::num::NonZeroU32;
use std::time::Duration;

use thiserror::Error;
use tracing::info;
use tracing::warn;

use crate::interfaces::ApiError;
use crate::interfaces::Sleeper;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default delay between attempts.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(2);

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Terminal retry failures.
///
/// # Invariants
/// - Only produced when a maximum attempt count is configured.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RetryError {
    /// All permitted attempts failed.
    #[error("{operation} {target} gave up after {attempts} attempts: {last_error}")]
    Exhausted {
        /// Operation label (for example `create connector`).
        operation: String,
        /// Operation target (connector name or endpoint).
        target: String,
        /// Attempts made.
        attempts: u32,
        /// Error from the final attempt.
        last_error: ApiError,
    },
}

// ============================================================================
// SECTION: Policy
// ============================================================================

/// Outcome of one attempt as classified by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<T> {
    /// Terminal success; stop retrying.
    Done(T),
    /// Transient failure; retry after the policy delay.
    Retry(ApiError),
}

/// Fixed-delay retry policy.
///
/// # Invariants
/// - `max_attempts = None` retries without bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Delay between consecutive attempts.
    pub delay: Duration,
    /// Optional cap on total attempts.
    pub max_attempts: Option<NonZeroU32>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            delay: DEFAULT_RETRY_DELAY,
            max_attempts: None,
        }
    }
}

impl RetryPolicy {
    /// Creates an unbounded policy with the given delay.
    #[must_use]
    pub const fn unbounded(delay: Duration) -> Self {
        Self {
            delay,
            max_attempts: None,
        }
    }

    /// Returns a copy of the policy capped at `max_attempts`.
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: NonZeroU32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// Runs `attempt` until it reports [`Step::Done`] or the cap is reached.
    ///
    /// The sleeper is invoked exactly once between consecutive attempts and
    /// never after the final one.
    ///
    /// # Errors
    ///
    /// Returns [`RetryError::Exhausted`] when a cap is configured and every
    /// permitted attempt asked to retry.
    pub fn run<T, S, F>(
        &self,
        sleeper: &S,
        operation: &str,
        resource: &str,
        mut attempt: F,
    ) -> Result<T, RetryError>
    where
        S: Sleeper + ?Sized,
        F: FnMut() -> Step<T>,
    {
        let mut attempts: u32 = 0;
        loop {
            attempts = attempts.saturating_add(1);
            let error = match attempt() {
                Step::Done(value) => {
                    if attempts > 1 {
                        info!(operation, resource, attempts, "control-plane call recovered");
                    }
                    return Ok(value);
                }
                Step::Retry(error) => error,
            };
            warn!(
                operation,
                resource,
                attempt = attempts,
                error = %error,
                "control-plane call failed"
            );
            if let Some(max) = self.max_attempts
                && attempts >= max.get()
            {
                return Err(RetryError::Exhausted {
                    operation: operation.to_string(),
                    target: resource.to_string(),
                    attempts,
                    last_error: error,
                });
            }
            sleeper.sleep(self.delay);
        }
    }
}

// ============================================================================
// SECTION: Sleepers
// ============================================================================

/// Sleeper backed by [`std::thread::sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
