//! Entity snapshots read from the host's live object graph.

use serde::{Deserialize, Serialize};

use crate::types::value::{AttrValue, AttributeBag, ReferenceId};

/// Point-in-time read of a selected entity.
///
/// The host owns the live object; this is the one read the pipeline takes
/// per trigger event. Snapshots are constructed fresh per trigger and
/// discarded after transmission, so no state survives between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    /// The entity's declared kind (e.g. "material", "texture").
    pub kind: String,

    /// Host-assigned display name.
    pub name: String,

    /// The entity's attribute data, in the host's key order.
    #[serde(default)]
    pub attributes: AttributeBag,
}

impl EntitySnapshot {
    /// Create a snapshot with an empty attribute bag.
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            attributes: AttributeBag::new(),
        }
    }

    /// Add an attribute (builder pattern).
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Replace the whole attribute bag.
    pub fn with_attributes(mut self, attributes: AttributeBag) -> Self {
        self.attributes = attributes;
        self
    }

    /// Whether this entity is of the given kind.
    pub fn is_kind(&self, kind: &str) -> bool {
        self.kind == kind
    }
}

/// A registry entry a reference id resolved to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedReference {
    /// The id that was looked up.
    pub id: ReferenceId,

    /// The target entity's display name.
    pub name: String,
}

impl ResolvedReference {
    /// Create a resolved reference.
    pub fn new(id: impl Into<ReferenceId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
