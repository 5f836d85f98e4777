use crate::ErrorCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric status returned across the native boundary.
///
/// The host-side shim only sees an `i32`; these are the values it can
/// receive. `Ok` is zero so the common case is the conventional C success
/// value, and every failure is strictly negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Ok,
    InvalidBuffer,
    EntropyUnavailable,
    Internal,
}

impl Status {
    /// The raw value handed across the C ABI.
    pub fn code(&self) -> i32 {
        match self {
            Status::Ok => 0,
            Status::InvalidBuffer => -1,
            Status::EntropyUnavailable => -2,
            Status::Internal => -3,
        }
    }

    /// Decode a raw boundary value. Unknown values decode to `None` rather
    /// than being folded into `Internal`, so a shim version skew is visible.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Status::Ok),
            -1 => Some(Status::InvalidBuffer),
            -2 => Some(Status::EntropyUnavailable),
            -3 => Some(Status::Internal),
            _ => None,
        }
    }

    /// Map to the platform error code, if this status is a failure.
    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            Status::Ok => None,
            Status::InvalidBuffer => Some(ErrorCode::InvalidBuffer),
            Status::EntropyUnavailable => Some(ErrorCode::EntropyUnavailable),
            Status::Internal => Some(ErrorCode::Internal),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.error_code() {
            Some(code) => write!(f, "{code}"),
            None => write!(f, "OK"),
        }
    }
}
