//! Core trait abstractions for the sync library.
//!
//! These traits define the seams between the library and its external
//! collaborators: the editor host (selection, registry, UI surface) and
//! the delivery sink.

pub mod host;
pub mod sink;
pub mod surface;
