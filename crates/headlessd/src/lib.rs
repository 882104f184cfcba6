//! headlessd - headless host for the Device System Bridge.
//!
//! Brings a device bridge online over a simulated hardware adapter on a
//! host-issued start signal: construct the adapter, wrap it in the bridge,
//! initialize, and roll back in reverse order if anything fails.

pub mod config;
pub mod dsb_bridge;
pub mod host_task;
pub mod shim;

pub use config::HeadlessConfig;
pub use dsb_bridge::{DsbBridge, DsbBridgeFactory};
pub use host_task::BackgroundTaskInstance;
pub use shim::{ShimState, StartupShim};
