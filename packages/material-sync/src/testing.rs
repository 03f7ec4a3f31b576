//! Testing utilities including a mock editor host.
//!
//! Useful for testing applications that use the sync library without a
//! live editor session. The mock implements both host-side traits and
//! tracks calls for assertions.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tokio::sync::mpsc;
use url::Url;

use crate::error::{HostError, HostResult};
use crate::traits::host::{EditorHost, HostProbe};
use crate::traits::surface::{Activation, ActivationStream, ControlSurface};
use crate::types::entity::{EntitySnapshot, ResolvedReference};
use crate::types::value::ReferenceId;

/// Location the mock reports by default - an eligible scene view.
pub const DEFAULT_LOCATION: &str = "https://playcanvas.com/editor/scene/12345";

/// A mock editor host for testing.
///
/// Clones share state, so a clone handed to a `Syncer` can be driven and
/// inspected through the original.
///
/// # Example
///
/// ```rust,ignore
/// use material_sync::testing::MockEditor;
/// use material_sync::types::entity::EntitySnapshot;
///
/// let editor = MockEditor::new()
///     .with_asset("tex-1", "brick.png")
///     .with_entity(EntitySnapshot::new("material", "Red"));
/// ```
pub struct MockEditor {
    /// Canned selection, in order.
    selection: Arc<RwLock<Vec<EntitySnapshot>>>,
    /// Registry entries by reference id.
    registry: Arc<RwLock<HashMap<String, String>>>,
    /// Probes answering "not ready" before the mock reports ready.
    probes_until_ready: Arc<RwLock<u32>>,
    /// Reported page location.
    location: Arc<RwLock<String>>,
    /// Whether the selection capability is present.
    selection_available: Arc<RwLock<bool>>,
    /// Reference ids looked up, in order.
    resolve_calls: Arc<RwLock<Vec<ReferenceId>>>,
    /// Probe calls made.
    probe_calls: Arc<RwLock<u32>>,
    /// Labels of installed trigger controls.
    triggers: Arc<RwLock<Vec<String>>>,
    /// Sender half of the most recently installed trigger.
    activation_tx: Arc<RwLock<Option<mpsc::Sender<Activation>>>>,
}

impl Default for MockEditor {
    fn default() -> Self {
        Self {
            selection: Arc::new(RwLock::new(Vec::new())),
            registry: Arc::new(RwLock::new(HashMap::new())),
            probes_until_ready: Arc::new(RwLock::new(0)),
            location: Arc::new(RwLock::new(DEFAULT_LOCATION.to_string())),
            selection_available: Arc::new(RwLock::new(true)),
            resolve_calls: Arc::new(RwLock::new(Vec::new())),
            probe_calls: Arc::new(RwLock::new(0)),
            triggers: Arc::new(RwLock::new(Vec::new())),
            activation_tx: Arc::new(RwLock::new(None)),
        }
    }
}

impl MockEditor {
    /// Create a ready mock at an eligible location with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity to the selection (builder pattern).
    pub fn with_entity(self, entity: EntitySnapshot) -> Self {
        self.selection.write().unwrap().push(entity);
        self
    }

    /// Add a registry entry (builder pattern).
    pub fn with_asset(self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.registry.write().unwrap().insert(id.into(), name.into());
        self
    }

    /// Answer "not ready" for the first `probes` probe calls.
    pub fn ready_after(self, probes: u32) -> Self {
        *self.probes_until_ready.write().unwrap() = probes;
        self
    }

    /// Report a different page location.
    pub fn at_location(self, url: impl Into<String>) -> Self {
        *self.location.write().unwrap() = url.into();
        self
    }

    /// Drop the selection capability.
    pub fn without_selection(self) -> Self {
        *self.selection_available.write().unwrap() = false;
        self
    }

    /// Reference ids looked up so far, in order.
    pub fn resolve_calls(&self) -> Vec<ReferenceId> {
        self.resolve_calls.read().unwrap().clone()
    }

    /// Probe calls made so far.
    pub fn probe_count(&self) -> u32 {
        *self.probe_calls.read().unwrap()
    }

    /// Labels of trigger controls installed so far.
    pub fn installed_triggers(&self) -> Vec<String> {
        self.triggers.read().unwrap().clone()
    }

    /// Simulate a user activation of the installed trigger.
    ///
    /// Returns `false` when no trigger is installed (or its stream is
    /// gone).
    pub async fn activate(&self) -> bool {
        let tx = self.activation_tx.read().unwrap().clone();
        match tx {
            Some(tx) => tx.send(Activation::now()).await.is_ok(),
            None => false,
        }
    }

    /// Tear the trigger control down, ending its activation stream.
    pub fn remove_trigger(&self) {
        *self.activation_tx.write().unwrap() = None;
    }
}

impl Clone for MockEditor {
    fn clone(&self) -> Self {
        Self {
            selection: Arc::clone(&self.selection),
            registry: Arc::clone(&self.registry),
            probes_until_ready: Arc::clone(&self.probes_until_ready),
            location: Arc::clone(&self.location),
            selection_available: Arc::clone(&self.selection_available),
            resolve_calls: Arc::clone(&self.resolve_calls),
            probe_calls: Arc::clone(&self.probe_calls),
            triggers: Arc::clone(&self.triggers),
            activation_tx: Arc::clone(&self.activation_tx),
        }
    }
}

#[async_trait]
impl EditorHost for MockEditor {
    async fn probe(&self) -> HostProbe {
        *self.probe_calls.write().unwrap() += 1;

        let mut remaining = self.probes_until_ready.write().unwrap();
        if *remaining == 0 {
            HostProbe::ready()
        } else {
            *remaining = remaining.saturating_sub(1);
            HostProbe::default()
        }
    }

    async fn selection(&self) -> HostResult<Vec<EntitySnapshot>> {
        if !*self.selection_available.read().unwrap() {
            return Err(HostError::SelectionUnavailable);
        }
        Ok(self.selection.read().unwrap().clone())
    }

    async fn resolve_reference(
        &self,
        id: &ReferenceId,
    ) -> HostResult<Option<ResolvedReference>> {
        self.resolve_calls.write().unwrap().push(id.clone());

        Ok(self
            .registry
            .read()
            .unwrap()
            .get(id.as_str())
            .map(|name| ResolvedReference::new(id.clone(), name.clone())))
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[async_trait]
impl ControlSurface for MockEditor {
    async fn location(&self) -> HostResult<Url> {
        let location = self.location.read().unwrap().clone();
        Url::parse(&location).map_err(|e| HostError::Dispatch(e.to_string()))
    }

    async fn install_trigger(&self, label: &str) -> HostResult<ActivationStream> {
        self.triggers.write().unwrap().push(label.to_string());

        let (tx, stream) = ActivationStream::channel(16);
        *self.activation_tx.write().unwrap() = Some(tx);
        Ok(stream)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_probe_countdown() {
        let editor = MockEditor::new().ready_after(2);

        assert!(!editor.probe().await.is_ready());
        assert!(!editor.probe().await.is_ready());
        assert!(editor.probe().await.is_ready());
        assert_eq!(editor.probe_count(), 3);
    }

    #[tokio::test]
    async fn test_registry_lookup_and_tracking() {
        let editor = MockEditor::new().with_asset("tex-1", "brick.png");

        let hit = editor
            .resolve_reference(&ReferenceId::new("tex-1"))
            .await
            .unwrap();
        let miss = editor
            .resolve_reference(&ReferenceId::new("tex-2"))
            .await
            .unwrap();

        assert_eq!(hit.unwrap().name, "brick.png");
        assert!(miss.is_none());
        assert_eq!(
            editor.resolve_calls(),
            vec![ReferenceId::new("tex-1"), ReferenceId::new("tex-2")]
        );
    }

    #[tokio::test]
    async fn test_activation_round_trip() {
        let editor = MockEditor::new();
        assert!(!editor.activate().await); // nothing installed yet

        let mut stream = editor.install_trigger("Sync Materials").await.unwrap();
        assert!(editor.activate().await);
        assert!(stream.recv().await.is_some());

        editor.remove_trigger();
        assert!(stream.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let editor = MockEditor::new();
        let clone = editor.clone();

        clone.install_trigger("Sync Materials").await.unwrap();

        assert_eq!(editor.installed_triggers(), vec!["Sync Materials"]);
    }
}
