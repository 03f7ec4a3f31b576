//! Syncer - orchestrates the gate, trigger wiring, and per-activation
//! pipeline runs.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::GateError;
use crate::gate::await_readiness;
use crate::pipeline::collect::collect_sync_records;
use crate::sinks::dispatch::{dispatch_detached, DeliveryHandle};
use crate::traits::host::EditorHost;
use crate::traits::sink::SyncSink;
use crate::traits::surface::{ActivationStream, ControlSurface};
use crate::types::config::SyncConfig;

/// Ties a host and a sink together under one configuration.
///
/// Each activation runs the pipeline once: read the selection, transform
/// it, dispatch the batch. Runs are independent and stateless; nothing is
/// retained between them.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use material_sync::{HttpSink, Syncer};
///
/// let syncer = Syncer::new(Arc::new(host), Arc::new(HttpSink::new()));
/// syncer.run(&surface).await?;
/// ```
pub struct Syncer<H, K> {
    host: Arc<H>,
    sink: Arc<K>,
    config: SyncConfig,
}

impl<H, K> Syncer<H, K>
where
    H: EditorHost + 'static,
    K: SyncSink + 'static,
{
    /// Create a syncer with the default configuration.
    pub fn new(host: Arc<H>, sink: Arc<K>) -> Self {
        Self {
            host,
            sink,
            config: SyncConfig::new(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: SyncConfig) -> Self {
        self.config = config;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Run the pipeline once over the current selection.
    ///
    /// The assembled batch is traced for local inspection, then handed to
    /// the sink without blocking; delivery failures are logged, never
    /// raised. The returned handle exposes the delivery outcome to
    /// callers that want it.
    pub async fn sync_once(&self) -> DeliveryHandle {
        let records = collect_sync_records(self.host.as_ref(), &self.config.pipeline).await;

        match serde_json::to_string(&records) {
            Ok(json) => debug!(records = records.len(), batch = %json, "sync batch assembled"),
            Err(e) => warn!(error = %e, "sync batch not serializable for trace"),
        }

        dispatch_detached(Arc::clone(&self.sink), records)
    }

    /// Check eligibility, wait for host readiness, install the trigger.
    ///
    /// Returns the activation stream on success. The gate runs once per
    /// attach; it never re-polls after the host is ready.
    pub async fn attach<C: ControlSurface>(
        &self,
        surface: &C,
    ) -> Result<ActivationStream, GateError> {
        let location = surface.location().await?;
        if !self.config.activation.matches(&location) {
            return Err(GateError::NotEligible {
                location: location.to_string(),
            });
        }

        await_readiness(self.host.as_ref(), &self.config.readiness).await?;
        info!(host = self.host.name(), "host ready, installing trigger");

        let stream = surface.install_trigger(&self.config.trigger_label).await?;
        Ok(stream)
    }

    /// Attach and service activations until the host drops the control.
    ///
    /// Activations are serialized: one pipeline run per activation, in
    /// order. Only the delivery is detached, so a slow sink never delays
    /// the next activation's extraction.
    pub async fn run<C: ControlSurface>(&self, surface: &C) -> Result<(), GateError> {
        let mut activations = self.attach(surface).await?;

        while let Some(activation) = activations.recv().await {
            debug!(at = %activation.at, "trigger activated");
            self.sync_once().await.detach();
        }

        info!("activation stream closed, sync loop ending");
        Ok(())
    }
}
