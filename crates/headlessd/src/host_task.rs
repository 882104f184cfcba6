//! Background-task activation layer.
//!
//! Translates the platform's task-activation mechanism into a plain call to
//! the startup shim: the daemon creates one [`BackgroundTaskInstance`] per
//! activation, hands it to [`StartupShim::run`], and then waits for the
//! deferral to be completed before reclaiming the slot.
//!
//! [`StartupShim::run`]: crate::shim::StartupShim::run

use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::oneshot;
use tokio::time;
use tracing::debug;

use dsb_common::{Deferral, StartSignal};

/// One task activation issued by the host.
///
/// Tracks a single completion receiver: the host model dispatches `run` at
/// most once per activation.
pub struct BackgroundTaskInstance {
    name: String,
    completion: Mutex<Option<oneshot::Receiver<()>>>,
}

impl BackgroundTaskInstance {
    /// Creates a new activation with the given task name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            completion: Mutex::new(None),
        }
    }

    /// Task name, used for logging.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Waits until the issued deferral is completed, up to `timeout`.
    ///
    /// Returns true if completion was signaled. Returns false on timeout,
    /// if the deferral was dropped without completion, or if no deferral
    /// was ever issued.
    pub async fn wait_completed(&self, timeout: Duration) -> bool {
        let rx = self.completion.lock().take();
        match rx {
            Some(rx) => matches!(time::timeout(timeout, rx).await, Ok(Ok(()))),
            None => false,
        }
    }
}

impl StartSignal for BackgroundTaskInstance {
    fn get_deferral(&self) -> Deferral {
        let (deferral, rx) = Deferral::new();
        *self.completion.lock() = Some(rx);
        debug!(task = %self.name, "deferral issued");
        deferral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_completed_deferral_is_observed() {
        let task = BackgroundTaskInstance::new("test-task");
        let deferral = task.get_deferral();
        deferral.complete();

        assert!(task.wait_completed(Duration::from_millis(100)).await);
    }

    #[tokio::test]
    async fn test_dropped_deferral_is_not_completion() {
        let task = BackgroundTaskInstance::new("test-task");
        let deferral = task.get_deferral();
        drop(deferral);

        assert!(!task.wait_completed(Duration::from_millis(100)).await);
    }

    #[tokio::test]
    async fn test_wait_without_deferral_returns_false() {
        let task = BackgroundTaskInstance::new("test-task");
        assert!(!task.wait_completed(Duration::from_millis(10)).await);
    }

    #[tokio::test]
    async fn test_completion_from_another_task() {
        let task = BackgroundTaskInstance::new("test-task");
        let deferral = task.get_deferral();

        tokio::spawn(async move {
            time::sleep(Duration::from_millis(10)).await;
            deferral.complete();
        });

        assert!(task.wait_completed(Duration::from_secs(1)).await);
    }
}
