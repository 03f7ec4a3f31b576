//! Detached delivery - fire-and-forget with an observable outcome.
//!
//! The editor's event loop must never block on the network. Deliveries
//! run as spawned tasks; the outcome is logged either way and remains
//! observable through the returned handle for callers that care.

use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::error::{SinkError, SinkResult};
use crate::traits::sink::{DeliveryReceipt, SyncSink};
use crate::types::record::SyncRecord;

/// Handle to an in-flight detached delivery.
pub struct DeliveryHandle {
    inner: JoinHandle<SinkResult<DeliveryReceipt>>,
}

impl DeliveryHandle {
    /// Wait for the delivery and return its outcome.
    pub async fn join(self) -> SinkResult<DeliveryReceipt> {
        match self.inner.await {
            Ok(result) => result,
            Err(e) => Err(SinkError::Request(Box::new(e))),
        }
    }

    /// Let the delivery finish on its own.
    ///
    /// The task keeps running; its outcome has already been logged by the
    /// dispatcher, so dropping the handle loses nothing but the value.
    pub fn detach(self) {}

    /// Whether the delivery has completed.
    pub fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }
}

/// Spawn a delivery without awaiting it.
///
/// Rapid consecutive dispatches may complete out of order on the wire;
/// that is accepted, not mitigated.
pub fn dispatch_detached<K: SyncSink + 'static>(
    sink: Arc<K>,
    batch: Vec<SyncRecord>,
) -> DeliveryHandle {
    let inner = tokio::spawn(async move {
        let records = batch.len();
        match sink.deliver(&batch).await {
            Ok(receipt) => {
                debug!(
                    sink = sink.name(),
                    records,
                    status = ?receipt.status,
                    "sync batch delivered"
                );
                Ok(receipt)
            }
            Err(e) => {
                warn!(sink = sink.name(), records, error = %e, "sync delivery failed");
                Err(e)
            }
        }
    });

    DeliveryHandle { inner }
}
