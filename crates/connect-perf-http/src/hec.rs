// crates/connect-perf-http/src/hec.rs
// ============================================================================
// Module: HEC Token Client
// Description: HEC token creation over the indexer management API.
// Purpose: Implement CredentialApi with one form POST per indexer.
// Dependencies: reqwest, tracing, url, connect-perf-core
// ============================================================================

//! ## Overview
//! Posts a form-encoded token definition to
//! `{endpoint}/servicesNS/nobody/splunk_httpinput/data/inputs/http` with HTTP
//! basic auth. Certificate validation is disabled because perf indexers serve
//! self-signed certificates. A 409 for an existing token is returned like any
//! other status; the provisioner decides it means success.

use std::fmt;

use connect_perf_core::ApiError;
use connect_perf_core::CredentialApi;
use connect_perf_core::HecCredential;
use reqwest::blocking::Client;
use tracing::debug;
use url::Url;

use crate::client::ClientBuildError;
use crate::client::HttpClientConfig;
use crate::client::build_client;
use crate::client::into_api_result;

/// Management API path of the HTTP input collection.
const HTTP_INPUTS_PATH: &str = "/servicesNS/nobody/splunk_httpinput/data/inputs/http";

/// Indexer management API client.
#[derive(Clone)]
pub struct HecTokenClient {
    /// Underlying HTTP client.
    client: Client,
    /// Basic-auth user.
    username: String,
    /// Basic-auth password.
    password: String,
    /// Error body capture limit.
    max_error_body_bytes: usize,
}

impl HecTokenClient {
    /// Creates a client authenticating as `username`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientBuildError`] when the HTTP client cannot be built.
    pub fn new(
        config: &HttpClientConfig,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ClientBuildError> {
        Ok(Self {
            client: build_client(config, true)?,
            username: username.into(),
            password: password.into(),
            max_error_body_bytes: config.max_error_body_bytes,
        })
    }
}

impl fmt::Debug for HecTokenClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HecTokenClient")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish_non_exhaustive()
    }
}

/// Builds the token collection URL for one management endpoint.
fn inputs_url(endpoint: &str) -> Result<Url, ApiError> {
    let mut url = Url::parse(&format!("{}{HTTP_INPUTS_PATH}", endpoint.trim_end_matches('/')))
        .map_err(|err| ApiError::Transport(format!("invalid management endpoint {endpoint}: {err}")))?;
    url.query_pairs_mut().append_pair("output_mode", "json");
    Ok(url)
}

/// Renders a boolean as the management API expects.
const fn flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

impl CredentialApi for HecTokenClient {
    fn create_credential(
        &self,
        endpoint: &str,
        credential: &HecCredential,
    ) -> Result<(), ApiError> {
        let url = inputs_url(endpoint)?;
        debug!(endpoint, token_name = %credential.name, "POST hec token");
        let form = [
            ("name", credential.name.as_str()),
            ("token", credential.token.as_str()),
            ("index", credential.index.as_str()),
            ("indexes", credential.indexes.as_str()),
            ("useACK", flag(credential.use_ack)),
            ("disabled", flag(credential.disabled)),
        ];
        let sent = self
            .client
            .post(url)
            .basic_auth(&self.username, Some(&self.password))
            .form(&form)
            .send();
        into_api_result(sent, self.max_error_body_bytes)
    }
}
