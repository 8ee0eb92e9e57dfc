// crates/connect-perf-config/src/lib.rs
// ============================================================================
// Module: Connect Perf Config Library
// Description: Run configuration for the connector performance sweep.
// Purpose: Load every tunable once, validate it, and hand it out by reference.
// Dependencies: connect-perf-core, thiserror, url
// ============================================================================

//! ## Overview
//! [`PerfConfig`] is built once at startup from the process environment (or
//! any key lookup in tests) and passed by reference to the wiring code. Bad
//! values fail before any network call is made.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::BasicAuth;
pub use config::ConfigError;
pub use config::HttpSettings;
pub use config::PerfConfig;
pub use config::env_keys;
