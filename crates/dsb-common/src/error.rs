//! Error types for the DSB host.
//!
//! All errors implement `std::error::Error` via `thiserror`. The startup
//! path distinguishes exactly one failure kind beyond construction errors:
//! a failing bridge initialization status.

use std::io;

use thiserror::Error;

use crate::status::DsbStatus;

/// Result type alias for DSB host operations.
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Errors that can occur while bringing the bridge online.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Bridge initialization returned a failing status code.
    #[error("DSB Bridge initialization failed! ({status})")]
    InitFailed {
        /// The status code reported by the bridge.
        status: DsbStatus,
    },

    /// The adapter factory failed to produce an adapter.
    #[error("Adapter construction failed: {message}")]
    AdapterConstruction {
        /// Error message.
        message: String,
    },

    /// The bridge factory failed to produce a bridge.
    #[error("Bridge construction failed: {message}")]
    BridgeConstruction {
        /// Error message.
        message: String,
    },

    /// Configuration parsing or validation error.
    #[error("Invalid configuration: {message}")]
    Config {
        /// Error message.
        message: String,
    },

    /// IO error (e.g. reading a configuration file).
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl BridgeError {
    /// Creates an initialization failure carrying the bridge status.
    pub fn init_failed(status: DsbStatus) -> Self {
        Self::InitFailed { status }
    }

    /// Creates an adapter construction error.
    pub fn adapter_construction(message: impl Into<String>) -> Self {
        Self::AdapterConstruction {
            message: message.into(),
        }
    }

    /// Creates a bridge construction error.
    pub fn bridge_construction(message: impl Into<String>) -> Self {
        Self::BridgeConstruction {
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Returns the underlying bridge status, if this error carries one.
    pub fn status(&self) -> Option<DsbStatus> {
        match self {
            BridgeError::InitFailed { status } => Some(*status),
            _ => None,
        }
    }
}
