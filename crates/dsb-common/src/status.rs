//! DSB status codes.
//!
//! Bridge initialization reports its outcome as a raw status code rather
//! than a structured error. Only the success-vs-failure split is load-bearing
//! for callers; the individual failure codes exist for logging.

use std::fmt;

use crate::error::{BridgeError, BridgeResult};

/// Status codes returned by bridge operations.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DsbStatus {
    Ok = 0,
    Failure = -1,
    Uninitialized = -2,
    NoMemory = -3,
    InvalidParameter = -4,
    NoDevice = -5,
    AccessDenied = -6,
    Timeout = -7,
    NotImplemented = -8,
}

impl DsbStatus {
    /// Creates a DsbStatus from a raw i32 value.
    ///
    /// Unknown negative values collapse to `Failure`; unknown positive
    /// values are treated as success per the 0-or-negative convention.
    pub fn from_raw(status: i32) -> Self {
        match status {
            s if s >= 0 => DsbStatus::Ok,
            -1 => DsbStatus::Failure,
            -2 => DsbStatus::Uninitialized,
            -3 => DsbStatus::NoMemory,
            -4 => DsbStatus::InvalidParameter,
            -5 => DsbStatus::NoDevice,
            -6 => DsbStatus::AccessDenied,
            -7 => DsbStatus::Timeout,
            -8 => DsbStatus::NotImplemented,
            _ => DsbStatus::Failure,
        }
    }

    /// Returns true if the status indicates success.
    pub fn is_success(&self) -> bool {
        *self == DsbStatus::Ok
    }

    /// Returns true if the status indicates a failure.
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Converts to a Result, mapping any failing status to
    /// [`BridgeError::InitFailed`].
    pub fn into_result(self) -> BridgeResult<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(BridgeError::init_failed(self))
        }
    }
}

impl fmt::Display for DsbStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DsbStatus::Ok => "DSB_STATUS_OK",
            DsbStatus::Failure => "DSB_STATUS_FAILURE",
            DsbStatus::Uninitialized => "DSB_STATUS_UNINITIALIZED",
            DsbStatus::NoMemory => "DSB_STATUS_NO_MEMORY",
            DsbStatus::InvalidParameter => "DSB_STATUS_INVALID_PARAMETER",
            DsbStatus::NoDevice => "DSB_STATUS_NO_DEVICE",
            DsbStatus::AccessDenied => "DSB_STATUS_ACCESS_DENIED",
            DsbStatus::Timeout => "DSB_STATUS_TIMEOUT",
            DsbStatus::NotImplemented => "DSB_STATUS_NOT_IMPLEMENTED",
        };
        write!(f, "{}", s)
    }
}
