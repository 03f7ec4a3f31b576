//! Sink implementations.
//!
//! - [`HttpSink`] - delivery to the local receiver endpoint
//! - [`MockSink`] - canned sink for tests
//! - [`dispatch_detached`] - fire-and-forget dispatch with an observable
//!   outcome

pub mod dispatch;
pub mod http;
pub mod mock;

pub use dispatch::{dispatch_detached, DeliveryHandle};
pub use http::{HttpSink, DEFAULT_ENDPOINT};
pub use mock::MockSink;
