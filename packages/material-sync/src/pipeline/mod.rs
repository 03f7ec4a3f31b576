//! Extraction pipeline - the core of the library.
//!
//! One run per trigger activation:
//! - read the current selection from the host
//! - keep entities of the target kind, in selection order
//! - transform each attribute bag (resolve reference-suffixed keys,
//!   pass everything else through)
//! - trace the assembled batch, then dispatch it without blocking

pub mod collect;
pub mod runner;
pub mod transform;

pub use collect::collect_sync_records;
pub use runner::Syncer;
pub use transform::transform_attributes;
