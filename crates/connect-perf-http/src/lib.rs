// crates/connect-perf-http/src/lib.rs
// ============================================================================
// Module: Connect Perf HTTP Library
// Description: Blocking REST clients behind the core control-plane traits.
// Purpose: Translate connector and credential calls into HTTP requests.
// Dependencies: connect-perf-core, reqwest, thiserror, tracing, url
// ============================================================================

//! ## Overview
//! [`ConnectRestClient`] implements [`connect_perf_core::ConnectorApi`] over
//! the Kafka Connect REST API and [`HecTokenClient`] implements
//! [`connect_perf_core::CredentialApi`] over the indexer management API.
//! Neither client retries; every non-2xx response and every transport failure
//! is handed back as an [`connect_perf_core::ApiError`] for the runtime to
//! classify.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod client;
pub mod connect;
pub mod hec;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use client::ClientBuildError;
pub use client::HttpClientConfig;
pub use connect::ConnectRestClient;
pub use hec::HecTokenClient;
