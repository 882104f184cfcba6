//! Host task-activation boundary.
//!
//! The host dispatches a short-lived activation and may reclaim it once the
//! work signals completion. The start signal hands out a [`Deferral`] that
//! extends the execution window; the activation must complete it explicitly
//! on every path, success or failure, or the host never learns the slot is
//! free.

use tokio::sync::oneshot;
use tracing::warn;

/// Completion token for one task activation.
///
/// Holds the sending half of a oneshot channel; the host side keeps the
/// receiver and waits on it to reclaim the activation.
#[derive(Debug)]
pub struct Deferral {
    tx: Option<oneshot::Sender<()>>,
}

impl Deferral {
    /// Creates a deferral and the receiver the host waits on.
    pub fn new() -> (Self, oneshot::Receiver<()>) {
        let (tx, rx) = oneshot::channel();
        (Self { tx: Some(tx) }, rx)
    }

    /// Signals the host that this activation is finished.
    pub fn complete(mut self) {
        if let Some(tx) = self.tx.take() {
            // Host may already have given up waiting; nothing to do then.
            let _ = tx.send(());
        }
    }
}

impl Drop for Deferral {
    fn drop(&mut self) {
        if self.tx.is_some() {
            warn!("deferral dropped without explicit completion; host cannot reclaim the activation");
        }
    }
}

/// A host-issued start signal.
pub trait StartSignal: Send + Sync {
    /// Requests a deferral, extending the activation's execution window
    /// until [`Deferral::complete`] is called. Called once per activation.
    fn get_deferral(&self) -> Deferral;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_complete_signals_receiver() {
        let (deferral, rx) = Deferral::new();
        deferral.complete();
        assert!(rx.await.is_ok());
    }

    #[tokio::test]
    async fn test_drop_without_complete_closes_channel() {
        let (deferral, rx) = Deferral::new();
        drop(deferral);
        assert!(rx.await.is_err());
    }

    #[tokio::test]
    async fn test_complete_after_receiver_dropped_is_harmless() {
        let (deferral, rx) = Deferral::new();
        drop(rx);
        deferral.complete();
    }
}
