//! Control surface contract - the UI-construction capability.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use url::Url;

use crate::error::HostResult;

/// One user activation of the installed trigger control.
#[derive(Debug, Clone, PartialEq)]
pub struct Activation {
    /// When the activation was observed.
    pub at: DateTime<Utc>,
}

impl Activation {
    /// An activation stamped with the current time.
    pub fn now() -> Self {
        Self { at: Utc::now() }
    }
}

/// Stream of trigger activations, delivered by the host's event dispatch.
///
/// Activations are serialized: the consumer handles one at a time, in
/// order. The stream ends when the host drops the control (page
/// teardown).
#[derive(Debug)]
pub struct ActivationStream {
    rx: mpsc::Receiver<Activation>,
}

impl ActivationStream {
    /// Create a stream and the sender half a host implementation feeds.
    pub fn channel(buffer: usize) -> (mpsc::Sender<Activation>, Self) {
        let (tx, rx) = mpsc::channel(buffer);
        (tx, Self { rx })
    }

    /// Receive the next activation, or `None` when the control is gone.
    pub async fn recv(&mut self) -> Option<Activation> {
        self.rx.recv().await
    }
}

/// The host surface a trigger control can be installed on.
#[async_trait]
pub trait ControlSurface: Send + Sync {
    /// The current page location, used for the attachment eligibility
    /// check.
    async fn location(&self) -> HostResult<Url>;

    /// Install the trigger control, once.
    ///
    /// Activations of the control arrive on the returned stream. The
    /// gate calls this a single time per session; re-installation is the
    /// host adapter's concern if its page reloads.
    async fn install_trigger(&self, label: &str) -> HostResult<ActivationStream>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stream_delivers_in_order_and_closes() {
        let (tx, mut stream) = ActivationStream::channel(4);

        let first = Activation::now();
        let second = Activation::now();
        tx.send(first.clone()).await.unwrap();
        tx.send(second.clone()).await.unwrap();
        drop(tx);

        assert_eq!(stream.recv().await, Some(first));
        assert_eq!(stream.recv().await, Some(second));
        assert_eq!(stream.recv().await, None);
    }
}
