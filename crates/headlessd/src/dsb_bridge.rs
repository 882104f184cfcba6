//! Bridge facade over a device adapter.
//!
//! Tracks the bridge lifecycle and holds the adapter handle while the bridge
//! is alive. Protocol translation lives below this surface and is not part
//! of the host's contract; initialization here validates the adapter and
//! transitions state.

use async_trait::async_trait;
use tracing::{info, warn};

use dsb_common::{
    AdapterHandle, BridgeFactory, BridgeHandle, BridgeResult, DeviceBridge, DsbStatus,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BridgeState {
    Created,
    Initialized,
    ShutDown,
}

/// The device system bridge.
pub struct DsbBridge {
    adapter: Option<AdapterHandle>,
    state: BridgeState,
}

impl DsbBridge {
    /// Creates a bridge over the given adapter. The bridge is not usable
    /// until [`DeviceBridge::initialize`] succeeds.
    pub fn new(adapter: AdapterHandle) -> Self {
        Self {
            adapter: Some(adapter),
            state: BridgeState::Created,
        }
    }

    /// Returns true once initialization has succeeded.
    pub fn is_initialized(&self) -> bool {
        self.state == BridgeState::Initialized
    }
}

#[async_trait]
impl DeviceBridge for DsbBridge {
    async fn initialize(&mut self) -> DsbStatus {
        match self.state {
            BridgeState::Created => {
                let Some(adapter) = &self.adapter else {
                    return DsbStatus::NoDevice;
                };
                let adapter_name = adapter.lock().await.name().to_string();
                self.state = BridgeState::Initialized;
                info!(adapter = %adapter_name, "bridge initialized");
                DsbStatus::Ok
            }
            // Initialization is one-shot per construction.
            BridgeState::Initialized => DsbStatus::Ok,
            BridgeState::ShutDown => {
                warn!("initialize called on a shut-down bridge");
                DsbStatus::Uninitialized
            }
        }
    }

    async fn shutdown(&mut self) {
        // The adapter handle is released, not shut down: adapter teardown
        // is the caller's responsibility and follows bridge teardown.
        self.adapter = None;
        self.state = BridgeState::ShutDown;
        info!("bridge shut down");
    }
}

/// Factory producing [`DsbBridge`] instances.
pub struct DsbBridgeFactory;

#[async_trait]
impl BridgeFactory for DsbBridgeFactory {
    async fn create(&self, adapter: AdapterHandle) -> BridgeResult<BridgeHandle> {
        Ok(Box::new(DsbBridge::new(adapter)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mock_adapter::MockAdapterFactory;

    use dsb_common::AdapterFactory;

    async fn adapter() -> AdapterHandle {
        MockAdapterFactory::default()
            .create()
            .await
            .expect("mock adapter construction should succeed")
    }

    #[tokio::test]
    async fn test_initialize_transitions_to_initialized() {
        let mut bridge = DsbBridge::new(adapter().await);
        assert!(!bridge.is_initialized());

        let status = bridge.initialize().await;
        assert!(status.is_success());
        assert!(bridge.is_initialized());
    }

    #[tokio::test]
    async fn test_initialize_after_shutdown_fails() {
        let mut bridge = DsbBridge::new(adapter().await);
        bridge.shutdown().await;

        let status = bridge.initialize().await;
        assert_eq!(status, DsbStatus::Uninitialized);
        assert!(!bridge.is_initialized());
    }

    #[tokio::test]
    async fn test_shutdown_releases_adapter_handle() {
        let handle = adapter().await;
        let mut bridge = DsbBridge::new(std::sync::Arc::clone(&handle));
        bridge.initialize().await;
        bridge.shutdown().await;

        // Only the test's clone remains.
        assert_eq!(std::sync::Arc::strong_count(&handle), 1);
    }
}
