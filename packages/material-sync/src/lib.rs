//! Editor Material Extraction and Sync Library
//!
//! Extracts "material" entities from a live web-editor session,
//! transforms their attribute data, and forwards the result to a local
//! HTTP endpoint for a companion tool to consume.
//!
//! # Design Philosophy
//!
//! **"The host owns the schema"**
//!
//! - Schema-agnostic: unknown attribute keys pass through verbatim
//! - One convention rule: reference-suffixed keys resolve to display names
//! - Dangling references are data (null), not errors
//! - The editor's event loop never blocks on the network
//! - Library handles mechanics, host adapters handle integration
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use material_sync::{HttpSink, Syncer};
//!
//! // `host` and `surface` come from your editor adapter
//! let syncer = Syncer::new(Arc::new(host), Arc::new(HttpSink::new()));
//!
//! // Eligibility check -> readiness gate -> trigger install -> one
//! // pipeline run per activation, until the host drops the control.
//! syncer.run(&surface).await?;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Host and sink contracts (EditorHost, ControlSurface, SyncSink)
//! - [`types`] - Attribute values, snapshots, records, configuration
//! - [`pipeline`] - Extraction pipeline and the Syncer orchestrator
//! - [`gate`] - Bounded readiness polling
//! - [`sinks`] - Sink implementations (HttpSink, MockSink) and dispatch
//! - [`testing`] - Mock editor host for tests

pub mod error;
pub mod gate;
pub mod pipeline;
pub mod sinks;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{GateError, GateResult, HostError, HostResult, SinkError, SinkResult};
pub use traits::{
    host::{EditorHost, HostProbe},
    sink::{DeliveryReceipt, SyncSink},
    surface::{Activation, ActivationStream, ControlSurface},
};
pub use types::{
    config::{ActivationConfig, PipelineConfig, ReadinessConfig, SyncConfig},
    entity::{EntitySnapshot, ResolvedReference},
    record::SyncRecord,
    value::{AttrValue, AttributeBag, ReferenceId},
};

// Re-export pipeline components
pub use pipeline::{collect_sync_records, transform_attributes, Syncer};

// Re-export the readiness gate
pub use gate::await_readiness;

// Re-export sinks
pub use sinks::{dispatch_detached, DeliveryHandle, HttpSink, MockSink, DEFAULT_ENDPOINT};

// Re-export testing utilities
pub use testing::MockEditor;
