// crates/connect-perf-core/src/core/matrix.rs
// ============================================================================
// Module: Perf Matrix
// Description: Fixed ordered list of tuning cases swept by every run.
// Purpose: Keep sweep order reproducible across runs.
// Dependencies: crate::core::model
// ============================================================================

//! ## Overview
//! The matrix first scales HEC threads at batch sizes 500 and 1000 with a
//! single task, then scales task parallelism with a single thread. Order is
//! sweep order and carries no other meaning.

use crate::core::model::TestCase;

/// Tuning cases in sweep order.
pub const PERF_MATRIX: [TestCase; 15] = [
    TestCase::new(1, 1, 500),
    TestCase::new(1, 2, 500),
    TestCase::new(1, 4, 500),
    TestCase::new(1, 8, 500),
    TestCase::new(1, 16, 500),
    TestCase::new(1, 1, 1000),
    TestCase::new(1, 2, 1000),
    TestCase::new(1, 4, 1000),
    TestCase::new(1, 8, 1000),
    TestCase::new(1, 16, 1000),
    TestCase::new(2, 1, 500),
    TestCase::new(4, 1, 500),
    TestCase::new(8, 1, 500),
    TestCase::new(16, 1, 500),
    TestCase::new(32, 1, 500),
];

/// Returns the perf matrix as a slice.
#[must_use]
pub const fn perf_matrix() -> &'static [TestCase] {
    &PERF_MATRIX
}
