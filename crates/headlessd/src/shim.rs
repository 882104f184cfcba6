//! Startup shim.
//!
//! Drives one activation of the host: acquire the deferral, construct the
//! adapter, construct the bridge over it, initialize, and on any failure
//! tear the partial construction down in reverse order (bridge first, then
//! adapter). Failures are handled here and never propagated to the host;
//! the deferral is completed on both paths.

use std::sync::Arc;

use tracing::{error, info};

use dsb_common::{
    AdapterFactory, AdapterHandle, BridgeFactory, BridgeHandle, BridgeResult, StartSignal,
};

/// Lifecycle states of one activation.
///
/// `Running` and `RolledBack` are terminal for a single [`StartupShim::run`]
/// invocation; the shim never returns to `Idle` on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShimState {
    Idle,
    Initializing,
    Running,
    RolledBack,
}

impl ShimState {
    /// Returns the state name for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShimState::Idle => "idle",
            ShimState::Initializing => "initializing",
            ShimState::Running => "running",
            ShimState::RolledBack => "rolled-back",
        }
    }
}

/// Brings the adapter and bridge up, and owns both handles afterwards.
pub struct StartupShim {
    adapters: Box<dyn AdapterFactory>,
    bridges: Box<dyn BridgeFactory>,
    adapter: Option<AdapterHandle>,
    bridge: Option<BridgeHandle>,
    state: ShimState,
}

impl StartupShim {
    /// Creates a shim wiring the given factories.
    pub fn new(adapters: Box<dyn AdapterFactory>, bridges: Box<dyn BridgeFactory>) -> Self {
        Self {
            adapters,
            bridges,
            adapter: None,
            bridge: None,
            state: ShimState::Idle,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ShimState {
        self.state
    }

    /// Returns true while the shim retains an adapter handle.
    pub fn has_adapter(&self) -> bool {
        self.adapter.is_some()
    }

    /// Returns true while the shim retains a bridge handle.
    pub fn has_bridge(&self) -> bool {
        self.bridge.is_some()
    }

    /// Runs one activation.
    ///
    /// The deferral is requested before any construction so the host cannot
    /// reclaim the activation mid-startup, and completed before returning on
    /// both the success and failure paths. On success both handles stay
    /// owned by the shim; on failure both end up cleared.
    pub async fn run(&mut self, signal: &dyn StartSignal) -> ShimState {
        let deferral = signal.get_deferral();
        self.state = ShimState::Initializing;
        info!("starting DSB bridge");

        match self.try_initialize().await {
            Ok(()) => {
                self.state = ShimState::Running;
                info!("DSB bridge running");
            }
            Err(err) => {
                // Handled locally: the host sees only the completed
                // deferral, never the error itself.
                error!(%err, "DSB bridge startup failed, rolling back");
                self.rollback().await;
                self.state = ShimState::RolledBack;
            }
        }

        deferral.complete();
        self.state
    }

    /// Tears down a running activation in reverse construction order.
    ///
    /// Intended for graceful daemon stop after a successful [`run`]; a no-op
    /// when nothing was constructed.
    ///
    /// [`run`]: StartupShim::run
    pub async fn shutdown(&mut self) {
        if self.adapter.is_none() && self.bridge.is_none() {
            return;
        }
        info!("shutting down DSB bridge");
        self.rollback().await;
        self.state = ShimState::Idle;
    }

    async fn try_initialize(&mut self) -> BridgeResult<()> {
        let adapter = self.adapters.create().await?;
        self.adapter = Some(Arc::clone(&adapter));

        let mut bridge = self.bridges.create(adapter).await?;
        let status = bridge.initialize().await;
        // Stored before the status check: a bridge that failed to
        // initialize still gets its shutdown during rollback.
        self.bridge = Some(bridge);

        status.into_result()
    }

    /// Shuts down whatever was constructed, bridge before adapter, and
    /// clears both handles. Never touches an object that was not built.
    async fn rollback(&mut self) {
        if let Some(mut bridge) = self.bridge.take() {
            bridge.shutdown().await;
        }
        if let Some(adapter) = self.adapter.take() {
            adapter.lock().await.shutdown().await;
        }
    }
}
