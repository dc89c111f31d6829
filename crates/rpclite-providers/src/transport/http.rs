//! HTTP transport
//!
//! POSTs the serialized request envelope to the provider address and returns
//! the response body. Any failure before a complete body is read, including a
//! non-success status, is a transport error.

use std::sync::Arc;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use rpclite_application::ports::registry::{TRANSPORT_PROVIDERS, TransportProviderEntry};
use rpclite_domain::error::{Error, Result};
use rpclite_domain::ports::providers::Transport;
use tracing::debug;

/// Implementation identifier of [`HttpTransport`]
pub const HTTP_TRANSPORT_ID: &str = "rpclite.transport.HttpTransport";

/// Request timeout applied by the default construction
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

const CONTENT_TYPE_BINARY: &str = "application/octet-stream";

/// Blocking HTTP transport
///
/// Receives its HTTP client via constructor injection.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport using `client`
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a transport with its own client and the given request timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::transport_with_source("", "Failed to build HTTP client", e))?;
        Ok(Self::new(client))
    }
}

impl Transport for HttpTransport {
    fn send(&self, address: &str, payload: &[u8]) -> Result<Vec<u8>> {
        debug!(address, bytes = payload.len(), "POST request");
        let response = self
            .client
            .post(address)
            .header(CONTENT_TYPE, CONTENT_TYPE_BINARY)
            .body(payload.to_vec())
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    Error::transport_with_source(address, "request timed out", e)
                } else {
                    Error::transport_with_source(address, "HTTP request failed", e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::transport(
                address,
                format!("provider answered with HTTP status {status}"),
            ));
        }

        let body = response
            .bytes()
            .map_err(|e| Error::transport_with_source(address, "Failed to read response body", e))?;
        debug!(address, bytes = body.len(), "Response received");
        Ok(body.to_vec())
    }

    fn transport_name(&self) -> &str {
        "http"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(TRANSPORT_PROVIDERS)]
static HTTP_TRANSPORT: TransportProviderEntry = TransportProviderEntry {
    name: HTTP_TRANSPORT_ID,
    description: "Blocking HTTP POST transport (reqwest)",
    factory: || {
        HttpTransport::with_timeout(DEFAULT_HTTP_TIMEOUT)
            .map(|transport| Arc::new(transport) as Arc<dyn Transport>)
            .map_err(|e| e.to_string())
    },
};
