//! Hardware adapter contract.
//!
//! The host never looks inside an adapter; it only constructs one (through a
//! factory), hands it to the bridge, and shuts it down on rollback. The
//! handle is shared because both the shim and the bridge hold it while the
//! bridge is alive.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::BridgeResult;

/// Lifecycle contract for a hardware adapter.
#[async_trait]
pub trait DeviceAdapter: Send {
    /// Human-readable adapter name, used for logging.
    fn name(&self) -> &str;

    /// Shuts the adapter down, releasing any simulated device resources.
    ///
    /// Implementations must tolerate repeated calls.
    async fn shutdown(&mut self);
}

/// Shared, opaque handle to a constructed adapter.
pub type AdapterHandle = Arc<Mutex<dyn DeviceAdapter + Send>>;

/// Fallible adapter constructor.
///
/// Factories let the shim be exercised with implementations that fail
/// construction deterministically.
#[async_trait]
pub trait AdapterFactory: Send + Sync {
    /// Constructs a new adapter instance.
    async fn create(&self) -> BridgeResult<AdapterHandle>;
}
