//! Mock sink for testing.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::error::{SinkError, SinkResult};
use crate::traits::sink::{DeliveryReceipt, SyncSink};
use crate::types::record::SyncRecord;

/// Mock sink that records delivered batches.
///
/// # Example
///
/// ```rust,ignore
/// use material_sync::sinks::MockSink;
///
/// let sink = MockSink::new();
/// // ... drive a Syncer against it ...
/// assert_eq!(sink.delivery_count(), 1);
/// ```
#[derive(Default)]
pub struct MockSink {
    /// Successfully delivered batches, in order.
    deliveries: Arc<RwLock<Vec<Vec<SyncRecord>>>>,
    /// Delivery attempts, including failed ones.
    attempts: Arc<RwLock<usize>>,
    /// When set, every delivery fails with this status code.
    fail_status: Arc<RwLock<Option<u16>>>,
}

impl MockSink {
    /// Create a sink that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent delivery fail with the given status code.
    pub fn fail_with_status(&self, code: u16) {
        *self.fail_status.write().unwrap() = Some(code);
    }

    /// Make deliveries succeed again.
    pub fn succeed(&self) {
        *self.fail_status.write().unwrap() = None;
    }

    /// Number of successful deliveries.
    pub fn delivery_count(&self) -> usize {
        self.deliveries.read().unwrap().len()
    }

    /// Number of delivery attempts, including failures.
    pub fn attempt_count(&self) -> usize {
        *self.attempts.read().unwrap()
    }

    /// All successfully delivered batches, in delivery order.
    pub fn deliveries(&self) -> Vec<Vec<SyncRecord>> {
        self.deliveries.read().unwrap().clone()
    }

    /// The most recently delivered batch.
    pub fn last_delivery(&self) -> Option<Vec<SyncRecord>> {
        self.deliveries.read().unwrap().last().cloned()
    }
}

impl Clone for MockSink {
    fn clone(&self) -> Self {
        Self {
            deliveries: Arc::clone(&self.deliveries),
            attempts: Arc::clone(&self.attempts),
            fail_status: Arc::clone(&self.fail_status),
        }
    }
}

#[async_trait]
impl SyncSink for MockSink {
    async fn deliver(&self, batch: &[SyncRecord]) -> SinkResult<DeliveryReceipt> {
        *self.attempts.write().unwrap() += 1;

        if let Some(code) = *self.fail_status.read().unwrap() {
            return Err(SinkError::Status { code });
        }

        self.deliveries.write().unwrap().push(batch.to_vec());
        Ok(DeliveryReceipt::new(batch.len()).with_status(200))
    }

    fn name(&self) -> &str {
        "mock"
    }
}
