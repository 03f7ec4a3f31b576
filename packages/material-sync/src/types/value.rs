//! Attribute values and the open-shaped attribute bag.
//!
//! The editor's attribute schema is not controlled by this library and can
//! change without notice (different material subtypes expose different key
//! sets). The bag is therefore an ordered map of string keys to a small
//! tagged value union, never a fixed struct that would silently drop
//! host-added fields.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier stored in an attribute value that points at another
/// entity in the host's registry (e.g. a texture asset).
///
/// The host assigns these; the library never inspects their structure
/// beyond using them as lookup keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceId(String);

impl ReferenceId {
    /// Create a reference id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReferenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ReferenceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ReferenceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A single attribute value as exposed by the host.
///
/// Serialized untagged so the wire shape is plain JSON: `Null` becomes
/// `null`, numbers stay numbers, and `Reference` serializes as its raw id
/// string. On deserialization a reference is indistinguishable from a
/// string; host adapters that know an attribute holds a reference should
/// construct the `Reference` variant explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Absent or cleared attribute. A valid, representable value
    /// throughout the pipeline, never an error.
    Null,

    /// Boolean flag.
    Bool(bool),

    /// Numeric value. `serde_json::Number` preserves integer/float
    /// fidelity across a round trip.
    Number(serde_json::Number),

    /// Plain text value.
    String(String),

    /// Reference to another entity in the host registry.
    Reference(ReferenceId),
}

impl AttrValue {
    /// Whether this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, AttrValue::Null)
    }

    /// Derive a reference id from this value, if one can be.
    ///
    /// The host schema stores texture ids as plain scalars (numbers in
    /// practice), so `String` and `Number` values yield an id alongside
    /// the explicit `Reference` variant. `Null` and `Bool` carry nothing
    /// a registry could be keyed on.
    pub fn reference_id(&self) -> Option<ReferenceId> {
        match self {
            AttrValue::Reference(id) => Some(id.clone()),
            AttrValue::String(s) => Some(ReferenceId::new(s.clone())),
            AttrValue::Number(n) => Some(ReferenceId::new(n.to_string())),
            AttrValue::Null | AttrValue::Bool(_) => None,
        }
    }

    /// The value as a string slice, if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Number(serde_json::Number::from(value))
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        // Non-finite floats have no JSON representation; they collapse to
        // null the same way serde_json renders them.
        serde_json::Number::from_f64(value)
            .map(AttrValue::Number)
            .unwrap_or(AttrValue::Null)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::String(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::String(value)
    }
}

impl From<ReferenceId> for AttrValue {
    fn from(id: ReferenceId) -> Self {
        AttrValue::Reference(id)
    }
}

/// An entity's attribute data: ordered mapping from attribute key to
/// value, with unknown keys preserved verbatim.
pub type AttributeBag = IndexMap<String, AttrValue>;
