// crates/connect-perf-http/src/connect.rs
// ============================================================================
// Module: Kafka Connect REST Client
// Description: Connector create/delete over the Kafka Connect REST API.
// Purpose: Implement ConnectorApi with one HTTP request per call.
// Dependencies: reqwest, tracing, url, connect-perf-core
// ============================================================================

//! ## Overview
//! Creation posts the descriptor as JSON to the connector collection; deletion
//! issues `DELETE {collection}/{name}` with the name percent-encoded as a
//! single path segment.

use connect_perf_core::ApiError;
use connect_perf_core::ConnectorApi;
use connect_perf_core::ConnectorDescriptor;
use reqwest::blocking::Client;
use tracing::debug;
use url::Url;

use crate::client::ClientBuildError;
use crate::client::HttpClientConfig;
use crate::client::build_client;
use crate::client::into_api_result;

/// Kafka Connect connector collection client.
#[derive(Debug, Clone)]
pub struct ConnectRestClient {
    /// Underlying HTTP client.
    client: Client,
    /// Connector collection URI, for example `http://host:8083/connectors`.
    collection: Url,
    /// Error body capture limit.
    max_error_body_bytes: usize,
}

impl ConnectRestClient {
    /// Creates a client for the given connector collection.
    ///
    /// # Errors
    ///
    /// Returns [`ClientBuildError`] when the collection URI cannot carry path
    /// segments or the HTTP client cannot be built.
    pub fn new(collection: Url, config: &HttpClientConfig) -> Result<Self, ClientBuildError> {
        if collection.cannot_be_a_base() {
            return Err(ClientBuildError::InvalidBaseUrl(collection.to_string()));
        }
        Ok(Self {
            client: build_client(config, false)?,
            collection,
            max_error_body_bytes: config.max_error_body_bytes,
        })
    }

    /// Returns the connector collection URI.
    #[must_use]
    pub const fn collection(&self) -> &Url {
        &self.collection
    }

    /// Returns the URI of one connector resource.
    #[must_use]
    pub fn connector_url(&self, name: &str) -> Url {
        let mut url = self.collection.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(name);
        }
        url
    }
}

impl ConnectorApi for ConnectRestClient {
    fn create(&self, descriptor: &ConnectorDescriptor) -> Result<(), ApiError> {
        debug!(connector = %descriptor.name, url = %self.collection, "POST connector");
        let sent = self.client.post(self.collection.clone()).json(descriptor).send();
        into_api_result(sent, self.max_error_body_bytes)
    }

    fn delete(&self, name: &str) -> Result<(), ApiError> {
        let url = self.connector_url(name);
        debug!(connector = name, url = %url, "DELETE connector");
        let sent = self.client.delete(url).send();
        into_api_result(sent, self.max_error_body_bytes)
    }
}
