use serde::{Deserialize, Serialize};
use std::fmt;

/// Platform-wide error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Generic
    Internal,
    InvalidArgument,
    NotFound,

    // Randomness
    EntropyUnavailable,
    RngInitFailed,
    InvalidBuffer,
}

impl ErrorCode {
    /// Returns a short string code suitable for host-facing diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Internal => "INTERNAL",
            ErrorCode::InvalidArgument => "INVALID_ARGUMENT",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::EntropyUnavailable => "ENTROPY_UNAVAILABLE",
            ErrorCode::RngInitFailed => "RNG_INIT_FAILED",
            ErrorCode::InvalidBuffer => "INVALID_BUFFER",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
