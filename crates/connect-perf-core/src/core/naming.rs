// crates/connect-perf-core/src/core/naming.rs
// ============================================================================
// Module: Connector Naming
// Description: Clock abstraction and unique connector name sequences.
// Purpose: Guarantee collision-free connector names within a process.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Connector names carry a millisecond timestamp so operators can line them
//! up with ingestion dashboards. The control plane rejects duplicate names,
//! so [`MillisNameSequence`] clamps each value to at least one past the
//! previous value; names stay strictly increasing even when the clock is
//! frozen or slower than the build rate.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

// ============================================================================
// SECTION: Clock
// ============================================================================

/// Source of wall-clock milliseconds.
pub trait Clock: Send + Sync {
    /// Returns milliseconds since the Unix epoch.
    fn now_millis(&self) -> u64;
}

/// Clock backed by [`SystemTime`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        let elapsed = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default();
        u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
    }
}

// ============================================================================
// SECTION: Name Sequences
// ============================================================================

/// Produces connector names that never repeat within one sequence.
pub trait NameSequence: Send + Sync {
    /// Returns the next unique name.
    fn next_name(&self) -> String;
}

/// Default connector name prefix.
pub const DEFAULT_NAME_PREFIX: &str = "splunk-sink";

/// Name sequence of the form `{prefix}-{millis}` with a monotonic clamp.
///
/// # Invariants
/// - Emitted millisecond values are strictly increasing.
/// - Values track the clock whenever the clock is ahead of the sequence.
#[derive(Debug)]
pub struct MillisNameSequence<C> {
    /// Clock read on every call.
    clock: C,
    /// Name prefix.
    prefix: String,
    /// Last emitted value (0 before the first call).
    last: AtomicU64,
}

impl<C: Clock> MillisNameSequence<C> {
    /// Creates a sequence using the default `splunk-sink` prefix.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self::with_prefix(clock, DEFAULT_NAME_PREFIX)
    }

    /// Creates a sequence with a custom prefix.
    #[must_use]
    pub fn with_prefix(clock: C, prefix: impl Into<String>) -> Self {
        Self {
            clock,
            prefix: prefix.into(),
            last: AtomicU64::new(0),
        }
    }

    /// Reserves the next millisecond value.
    fn next_value(&self) -> u64 {
        let now = self.clock.now_millis();
        let mut current = self.last.load(Ordering::Acquire);
        loop {
            let candidate = now.max(current.saturating_add(1));
            match self.last.compare_exchange_weak(
                current,
                candidate,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return candidate,
                Err(observed) => current = observed,
            }
        }
    }
}

impl<C: Clock> NameSequence for MillisNameSequence<C> {
    fn next_name(&self) -> String {
        format!("{}-{}", self.prefix, self.next_value())
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
