//! HTTP sink - posts batches to the local receiver endpoint.

use async_trait::async_trait;
use tracing::debug;

use crate::error::{SinkError, SinkResult};
use crate::traits::sink::{DeliveryReceipt, SyncSink};
use crate::types::record::SyncRecord;

/// Default receiver endpoint of the companion tool.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/sync-material";

/// Sink that POSTs the batch as a JSON array.
///
/// One request per delivery, `Content-Type: application/json`. The
/// response body is not consumed; a non-success status maps to
/// [`SinkError::Status`].
///
/// # Example
///
/// ```rust,ignore
/// use material_sync::sinks::HttpSink;
///
/// let sink = HttpSink::new(); // default local endpoint
/// sink.deliver(&records).await?;
/// ```
pub struct HttpSink {
    client: reqwest::Client,
    endpoint: String,
}

impl Default for HttpSink {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpSink {
    /// Create a sink pointed at [`DEFAULT_ENDPOINT`].
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Create a sink pointed at a custom endpoint.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
            endpoint: endpoint.into(),
        }
    }

    /// Set a custom HTTP client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// The configured endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SyncSink for HttpSink {
    async fn deliver(&self, batch: &[SyncRecord]) -> SinkResult<DeliveryReceipt> {
        debug!(endpoint = %self.endpoint, records = batch.len(), "delivering sync batch");

        let response = self
            .client
            .post(&self.endpoint)
            .json(batch)
            .send()
            .await
            .map_err(|e| SinkError::Request(Box::new(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SinkError::Status {
                code: status.as_u16(),
            });
        }

        Ok(DeliveryReceipt::new(batch.len()).with_status(status.as_u16()))
    }

    fn name(&self) -> &str {
        "http"
    }
}
