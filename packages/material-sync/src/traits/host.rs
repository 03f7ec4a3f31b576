//! Editor host contract - the command-dispatch capability surface.
//!
//! The editor owns its live object graph and UI and is versioned
//! independently; this trait is the narrow, read-only view the pipeline
//! takes of it. Implementations adapt whatever dispatch mechanism the
//! host actually exposes; the library ships [`MockEditor`] for tests.
//!
//! [`MockEditor`]: crate::testing::MockEditor

use async_trait::async_trait;

use crate::error::HostResult;
use crate::types::entity::{EntitySnapshot, ResolvedReference};
use crate::types::value::ReferenceId;

/// Capability presence reported by a host probe.
///
/// The editor constructs its globals some time after page load; until all
/// three capabilities are present there is nothing to attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HostProbe {
    /// The UI-widget construction capability is present.
    pub ui_controls: bool,

    /// The command-dispatch capability is present.
    pub command_dispatch: bool,

    /// The viewport layout container is reachable through dispatch.
    pub viewport: bool,
}

impl HostProbe {
    /// A probe with every capability present.
    pub fn ready() -> Self {
        Self {
            ui_controls: true,
            command_dispatch: true,
            viewport: true,
        }
    }

    /// Whether every required capability is present.
    pub fn is_ready(&self) -> bool {
        self.ui_controls && self.command_dispatch && self.viewport
    }

    /// Names of the capabilities still missing.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.ui_controls {
            missing.push("ui-controls");
        }
        if !self.command_dispatch {
            missing.push("command-dispatch");
        }
        if !self.viewport {
            missing.push("viewport");
        }
        missing
    }
}

/// Read access to the editor's selection and registry.
#[async_trait]
pub trait EditorHost: Send + Sync {
    /// Probe which host capabilities are currently present.
    async fn probe(&self) -> HostProbe;

    /// The current selection, in the editor's selection order.
    ///
    /// Returns [`HostError::SelectionUnavailable`] when the host exposes
    /// no selection capability; the pipeline treats that as "nothing to
    /// do", not as a runtime failure.
    ///
    /// [`HostError::SelectionUnavailable`]: crate::error::HostError::SelectionUnavailable
    async fn selection(&self) -> HostResult<Vec<EntitySnapshot>>;

    /// Look a reference id up in the host's registry.
    ///
    /// `Ok(None)` is the defined outcome for a dangling reference; it is
    /// not an error and must not fail the caller's batch.
    async fn resolve_reference(&self, id: &ReferenceId)
        -> HostResult<Option<ResolvedReference>>;

    /// Get the host name (for logging/debugging).
    fn name(&self) -> &str {
        "unknown"
    }
}
