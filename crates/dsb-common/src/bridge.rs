//! Bridge contract.
//!
//! A bridge wraps one adapter and translates its device model to an external
//! protocol. Its internals are opaque to the host: the visible surface is
//! construction (through a factory), one initialization call reporting a raw
//! status, and shutdown.

use async_trait::async_trait;

use crate::adapter::AdapterHandle;
use crate::error::BridgeResult;
use crate::status::DsbStatus;

/// Lifecycle contract for a device bridge.
#[async_trait]
pub trait DeviceBridge: Send {
    /// Initializes the bridge over its adapter.
    ///
    /// Returns a raw status code; callers treat any non-success value as a
    /// failed startup.
    async fn initialize(&mut self) -> DsbStatus;

    /// Shuts the bridge down, releasing its adapter handle.
    async fn shutdown(&mut self);
}

/// Owned, opaque handle to a constructed bridge.
pub type BridgeHandle = Box<dyn DeviceBridge + Send>;

/// Fallible bridge constructor taking the adapter the bridge will wrap.
#[async_trait]
pub trait BridgeFactory: Send + Sync {
    /// Constructs a new bridge over the given adapter.
    async fn create(&self, adapter: AdapterHandle) -> BridgeResult<BridgeHandle>;
}
