//! Sink contract for delivering sync batches.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::SinkResult;
use crate::types::record::SyncRecord;

/// Outcome of a successful delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryReceipt {
    /// Records in the delivered batch.
    pub records: usize,

    /// Protocol status code, when the sink has one.
    pub status: Option<u16>,

    /// When the delivery completed.
    pub completed_at: DateTime<Utc>,
}

impl DeliveryReceipt {
    /// Create a receipt stamped with the current time.
    pub fn new(records: usize) -> Self {
        Self {
            records,
            status: None,
            completed_at: Utc::now(),
        }
    }

    /// Set the protocol status code.
    pub fn with_status(mut self, code: u16) -> Self {
        self.status = Some(code);
        self
    }
}

/// A destination for sync batches.
///
/// Implementations deliver one batch per call:
/// - `HttpSink` - POST to the local receiver endpoint
/// - `MockSink` - records batches for test assertions
///
/// An empty batch is still a delivery; sinks must accept it.
#[async_trait]
pub trait SyncSink: Send + Sync {
    /// Deliver a batch.
    async fn deliver(&self, batch: &[SyncRecord]) -> SinkResult<DeliveryReceipt>;

    /// Get the sink name (for logging/debugging).
    fn name(&self) -> &str {
        "unknown"
    }
}
