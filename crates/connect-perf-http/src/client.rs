// crates/connect-perf-http/src/client.rs
// ============================================================================
// Module: HTTP Client Plumbing
// Description: Shared reqwest client construction and response mapping.
// Purpose: Give every REST client the same timeouts and error shape.
// Dependencies: reqwest, thiserror, connect-perf-core
// ============================================================================

//! ## Overview
//! Clients are built with an explicit connect timeout and whole-request
//! timeout so a hung peer always surfaces as a transport error. Redirects are
//! never followed. Error bodies are read up to a byte limit and kept only as
//! log context.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Read;
use std::time::Duration;

use connect_perf_core::ApiError;
use reqwest::blocking::Client;
use reqwest::blocking::Response;
use reqwest::redirect::Policy;
use thiserror::Error;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Default connect timeout.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
/// Default whole-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Default cap on error body bytes kept for logging.
const DEFAULT_MAX_ERROR_BODY_BYTES: usize = 4096;

/// Transport settings shared by the REST clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// TCP/TLS connect timeout.
    pub connect_timeout: Duration,
    /// Whole-request timeout.
    pub timeout: Duration,
    /// User agent header value.
    pub user_agent: String,
    /// Maximum error body bytes captured into [`ApiError::Status`].
    pub max_error_body_bytes: usize,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("connect-perf/", env!("CARGO_PKG_VERSION")).to_string(),
            max_error_body_bytes: DEFAULT_MAX_ERROR_BODY_BYTES,
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Client construction failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientBuildError {
    /// reqwest rejected the client settings.
    #[error("http client build failed: {0}")]
    Build(String),
    /// A base URL cannot carry path segments.
    #[error("invalid base url {0}")]
    InvalidBaseUrl(String),
}

// ============================================================================
// SECTION: Construction
// ============================================================================

/// Builds a blocking client from the shared settings.
///
/// `accept_invalid_certs` disables certificate validation; the indexer
/// management API runs with self-signed certificates in perf clusters.
pub(crate) fn build_client(
    config: &HttpClientConfig,
    accept_invalid_certs: bool,
) -> Result<Client, ClientBuildError> {
    Client::builder()
        .connect_timeout(config.connect_timeout)
        .timeout(config.timeout)
        .user_agent(config.user_agent.clone())
        .redirect(Policy::none())
        .danger_accept_invalid_certs(accept_invalid_certs)
        .build()
        .map_err(|err| ClientBuildError::Build(err.to_string()))
}

// ============================================================================
// SECTION: Response Mapping
// ============================================================================

/// Maps a send result onto the control-plane error model.
///
/// 2xx is `Ok`; any other status becomes [`ApiError::Status`] with a bounded
/// body excerpt; send failures become [`ApiError::Transport`].
pub(crate) fn into_api_result(
    sent: reqwest::Result<Response>,
    max_body_bytes: usize,
) -> Result<(), ApiError> {
    let mut response = sent.map_err(|err| ApiError::Transport(describe_transport(&err)))?;
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    Err(ApiError::Status {
        status: status.as_u16(),
        body: read_body_excerpt(&mut response, max_body_bytes),
    })
}

/// Reads at most `max_bytes` of the body as lossy UTF-8.
fn read_body_excerpt(response: &mut Response, max_bytes: usize) -> String {
    let limit = u64::try_from(max_bytes).unwrap_or(u64::MAX);
    let mut buf = Vec::new();
    if response.take(limit).read_to_end(&mut buf).is_err() {
        return String::new();
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Renders a transport error with its classification.
fn describe_transport(err: &reqwest::Error) -> String {
    let kind = if err.is_timeout() {
        "timeout"
    } else if err.is_connect() {
        "connect"
    } else {
        "request"
    };
    format!("{kind} error: {err}")
}
