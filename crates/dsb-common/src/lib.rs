//! Shared types for the DSB (Device System Bridge) headless adapter host.
//!
//! This crate defines the seams between the three parties involved in
//! bringing a bridge online:
//!
//! - [`adapter`]: the hardware adapter contract and its factory
//! - [`bridge`]: the bridge contract (initialize/shutdown) and its factory
//! - [`host`]: the task-activation boundary (start signal and deferral)
//! - [`status`]: the raw status-code domain returned by bridge initialization
//! - [`error`]: error types shared by all members
//!
//! The daemon crate wires concrete implementations into these seams; tests
//! substitute recording mocks.

pub mod adapter;
pub mod bridge;
pub mod error;
pub mod host;
pub mod status;

pub use adapter::{AdapterFactory, AdapterHandle, DeviceAdapter};
pub use bridge::{BridgeFactory, BridgeHandle, DeviceBridge};
pub use error::{BridgeError, BridgeResult};
pub use host::{Deferral, StartSignal};
pub use status::DsbStatus;
