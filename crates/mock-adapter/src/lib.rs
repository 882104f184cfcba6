//! Simulated hardware adapter.
//!
//! Stands in for a real device-facing adapter so the headless host can be
//! brought up on machines with no hardware attached. Only the lifecycle
//! surface exists: construct, name, shut down. Device simulation beyond
//! that is not this crate's job.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info};

use dsb_common::{AdapterFactory, AdapterHandle, BridgeResult, DeviceAdapter};

/// Default adapter display name.
pub const DEFAULT_ADAPTER_NAME: &str = "Mock Adapter";

/// Vendor string reported alongside the adapter name.
pub const VENDOR_NAME: &str = "MockDevices";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdapterState {
    Created,
    ShutDown,
}

/// A lifecycle-only simulated adapter.
pub struct MockAdapter {
    name: String,
    state: AdapterState,
}

impl MockAdapter {
    /// Creates a new adapter with the default name.
    pub fn new() -> Self {
        Self::with_name(DEFAULT_ADAPTER_NAME)
    }

    /// Creates a new adapter with a custom display name.
    pub fn with_name(name: impl Into<String>) -> Self {
        let name = name.into();
        debug!(adapter = %name, vendor = VENDOR_NAME, "mock adapter created");
        Self {
            name,
            state: AdapterState::Created,
        }
    }

    /// Returns the vendor string.
    pub fn vendor(&self) -> &'static str {
        VENDOR_NAME
    }

    /// Returns true once the adapter has been shut down.
    pub fn is_shut_down(&self) -> bool {
        self.state == AdapterState::ShutDown
    }
}

impl Default for MockAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DeviceAdapter for MockAdapter {
    fn name(&self) -> &str {
        &self.name
    }

    async fn shutdown(&mut self) {
        if self.state == AdapterState::ShutDown {
            debug!(adapter = %self.name, "shutdown on already shut-down adapter ignored");
            return;
        }
        self.state = AdapterState::ShutDown;
        info!(adapter = %self.name, "mock adapter shut down");
    }
}

/// Factory producing [`MockAdapter`] instances.
pub struct MockAdapterFactory {
    name: String,
}

impl MockAdapterFactory {
    /// Creates a factory producing adapters with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for MockAdapterFactory {
    fn default() -> Self {
        Self::new(DEFAULT_ADAPTER_NAME)
    }
}

#[async_trait]
impl AdapterFactory for MockAdapterFactory {
    async fn create(&self) -> BridgeResult<AdapterHandle> {
        let adapter = MockAdapter::with_name(self.name.clone());
        Ok(Arc::new(Mutex::new(adapter)))
    }
}
