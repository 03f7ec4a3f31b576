//! Sync records - the unit of output handed to a sink.

use serde::{Deserialize, Serialize};

use crate::types::value::AttributeBag;

/// One transformed entity, ready for transmission.
///
/// Records are independent; a batch carries no cross-record relationships
/// and keeps the same relative order as the input selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncRecord {
    /// The entity's display name.
    pub name: String,

    /// The transformed attribute bag. Reference-suffixed keys hold the
    /// resolved display name (or null); everything else is the host's
    /// value unchanged.
    pub data: AttributeBag,
}

impl SyncRecord {
    /// Create a sync record.
    pub fn new(name: impl Into<String>, data: AttributeBag) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}
