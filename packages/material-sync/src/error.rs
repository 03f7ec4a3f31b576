//! Typed errors for the sync library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling. The taxonomy is
//! deliberately shallow: dangling references and non-target entities are
//! not errors at all, and delivery failures are observable but never
//! propagate into the editor's event loop.

use thiserror::Error;

use crate::traits::host::HostProbe;

/// Errors surfaced by a host implementation.
#[derive(Debug, Error)]
pub enum HostError {
    /// The host exposes no selection capability.
    #[error("selection capability unavailable")]
    SelectionUnavailable,

    /// The host exposes no control surface to install a trigger on.
    #[error("control surface unavailable: {0}")]
    ControlUnavailable(String),

    /// A host command dispatch failed.
    #[error("host dispatch failed: {0}")]
    Dispatch(String),
}

/// Errors that can occur delivering a batch to a sink.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The delivery request itself failed (connection, timeout, ...).
    #[error("delivery request failed: {0}")]
    Request(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The sink answered with a non-success status.
    #[error("sink responded with HTTP {code}")]
    Status { code: u16 },

    /// The batch could not be serialized.
    #[error("failed to serialize batch: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors that can occur while attaching to the editor.
#[derive(Debug, Error)]
pub enum GateError {
    /// The current page is not an eligible editor view.
    #[error("location not eligible for attachment: {location}")]
    NotEligible { location: String },

    /// The host never became ready within the configured attempts.
    #[error("host not ready after {attempts} attempts, missing: {}", .last.missing().join(", "))]
    TimedOut {
        /// Probe attempts made.
        attempts: u32,
        /// Capability state observed on the last attempt.
        last: HostProbe,
    },

    /// The host failed while installing the trigger.
    #[error("host error: {0}")]
    Host(#[from] HostError),
}

/// Result type alias for host operations.
pub type HostResult<T> = std::result::Result<T, HostError>;

/// Result type alias for sink operations.
pub type SinkResult<T> = std::result::Result<T, SinkError>;

/// Result type alias for gate operations.
pub type GateResult<T> = std::result::Result<T, GateError>;
