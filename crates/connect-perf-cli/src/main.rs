// crates/connect-perf-cli/src/main.rs
// ============================================================================
// Module: Connect Perf CLI Entry Point
// Description: Wires configuration, HTTP clients, and the perf sweep.
// Purpose: Run one full connector performance sweep and report via exit code.
// Dependencies: connect-perf-{config,core,http}, thiserror, tracing
// ============================================================================

//! ## Overview
//! `connect-perf` takes no arguments. It loads [`PerfConfig`] from the
//! environment, makes sure the acknowledged HEC token exists on every indexer,
//! then runs the sweep to completion. A natural finish exits 0; a
//! configuration error, client build failure, or retry exhaustion (only
//! possible with a configured attempt cap) exits non-zero.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod logging;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::process::ExitCode;

use connect_perf_config::ConfigError;
use connect_perf_config::PerfConfig;
use connect_perf_core::ConnectorConfigBuilder;
use connect_perf_core::CredentialProvisioner;
use connect_perf_core::HecCredential;
use connect_perf_core::LifecycleManager;
use connect_perf_core::MillisNameSequence;
use connect_perf_core::RetryError;
use connect_perf_core::SweepDriver;
use connect_perf_core::SweepError;
use connect_perf_core::SweepReport;
use connect_perf_core::SweepSettings;
use connect_perf_core::SystemClock;
use connect_perf_core::ThreadSleeper;
use connect_perf_core::perf_matrix;
use connect_perf_http::ClientBuildError;
use connect_perf_http::ConnectRestClient;
use connect_perf_http::HecTokenClient;
use connect_perf_http::HttpClientConfig;
use thiserror::Error;
use tracing::error;
use tracing::info;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Failures that end the run with a non-zero exit code.
#[derive(Debug, Error)]
enum CliError {
    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    /// An HTTP client could not be built.
    #[error(transparent)]
    Client(#[from] ClientBuildError),
    /// HEC token provisioning gave up.
    #[error("hec token provisioning failed: {0}")]
    Provision(#[from] RetryError),
    /// The sweep gave up on a connector.
    #[error("perf sweep failed: {0}")]
    Sweep(#[from] SweepError),
}

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    logging::init();
    match run() {
        Ok(report) => {
            info!(cycles = report.cycles.len(), "connector perf run complete");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "connector perf run aborted");
            ExitCode::FAILURE
        }
    }
}

/// Loads configuration, provisions the HEC token, and runs the sweep.
fn run() -> Result<SweepReport, CliError> {
    let config = PerfConfig::from_env()?;
    info!(
        connector_uri = %config.connector_uri,
        cluster_size = config.cluster.size().get(),
        hostname_prefix = config.cluster.hostname_prefix(),
        observation_secs = config.observation_window.as_secs(),
        pairs = config.sweep_plan().pairs().len(),
        "starting connector perf run"
    );

    let http = http_client_config(&config);
    provision_hec_token(&config, &http)?;

    let connect = ConnectRestClient::new(config.connector_uri.clone(), &http)?;
    let settings = SweepSettings {
        plan: config.sweep_plan(),
        matrix: perf_matrix().to_vec(),
        hec_endpoints: config.cluster.hec_endpoints(),
        observation_window: config.observation_window,
    };
    let builder =
        ConnectorConfigBuilder::new(config.descriptor_settings(), MillisNameSequence::new(SystemClock));
    let lifecycle = LifecycleManager::new(connect, config.retry, ThreadSleeper);
    let driver = SweepDriver::new(settings, builder, lifecycle, ThreadSleeper);
    Ok(driver.run()?)
}

/// Ensures the acknowledged HEC token exists on every indexer.
fn provision_hec_token(config: &PerfConfig, http: &HttpClientConfig) -> Result<(), CliError> {
    let client = HecTokenClient::new(http, config.auth.username.clone(), config.auth.password.clone())?;
    let provisioner = CredentialProvisioner::new(client, config.retry, ThreadSleeper);
    let report = provisioner
        .ensure_ack_credential(&config.cluster.management_endpoints(), &HecCredential::ack_token())?;
    info!(indexers = report.outcomes.len(), "hec token provisioned");
    Ok(())
}

/// Maps configured timeouts onto the shared HTTP client settings.
fn http_client_config(config: &PerfConfig) -> HttpClientConfig {
    HttpClientConfig {
        connect_timeout: config.http.connect_timeout,
        timeout: config.http.timeout,
        ..HttpClientConfig::default()
    }
}
