//! End-to-end activation tests for headlessd.
//!
//! Exercises the startup shim with the real mock adapter, the real bridge
//! facade, and the real activation layer, covering both the success path
//! and rollback.

use std::time::Duration;

use async_trait::async_trait;
use pretty_assertions::assert_eq;

use dsb_common::{AdapterHandle, BridgeError, BridgeFactory, BridgeHandle, BridgeResult};
use dsb_headlessd::{BackgroundTaskInstance, DsbBridgeFactory, ShimState, StartupShim};
use mock_adapter::MockAdapterFactory;

/// Bridge factory that refuses to construct, for the rollback path.
struct BrokenBridgeFactory;

#[async_trait]
impl BridgeFactory for BrokenBridgeFactory {
    async fn create(&self, _adapter: AdapterHandle) -> BridgeResult<BridgeHandle> {
        Err(BridgeError::bridge_construction("simulated wiring fault"))
    }
}

fn production_shim() -> StartupShim {
    StartupShim::new(
        Box::new(MockAdapterFactory::default()),
        Box::new(DsbBridgeFactory),
    )
}

#[tokio::test]
async fn test_activation_brings_bridge_up_and_signals_completion() {
    let task = BackgroundTaskInstance::new("headlessd-test");
    let mut shim = production_shim();

    let state = shim.run(&task).await;

    assert_eq!(state, ShimState::Running);
    assert!(shim.has_adapter());
    assert!(shim.has_bridge());
    assert!(task.wait_completed(Duration::from_secs(1)).await);
}

#[tokio::test]
async fn test_failed_activation_rolls_back_and_still_completes() {
    let task = BackgroundTaskInstance::new("headlessd-test");
    let mut shim = StartupShim::new(
        Box::new(MockAdapterFactory::default()),
        Box::new(BrokenBridgeFactory),
    );

    let state = shim.run(&task).await;

    assert_eq!(state, ShimState::RolledBack);
    assert!(!shim.has_adapter());
    assert!(!shim.has_bridge());
    assert!(task.wait_completed(Duration::from_secs(1)).await);
}

#[tokio::test]
async fn test_graceful_stop_after_successful_activation() {
    let task = BackgroundTaskInstance::new("headlessd-test");
    let mut shim = production_shim();

    shim.run(&task).await;
    shim.shutdown().await;

    assert_eq!(shim.state(), ShimState::Idle);
    assert!(!shim.has_adapter());
    assert!(!shim.has_bridge());
}

#[tokio::test]
async fn test_custom_adapter_name_flows_through() {
    let task = BackgroundTaskInstance::new("headlessd-test");
    let mut shim = StartupShim::new(
        Box::new(MockAdapterFactory::new("Lab Bench Adapter")),
        Box::new(DsbBridgeFactory),
    );

    let state = shim.run(&task).await;
    assert_eq!(state, ShimState::Running);
}
