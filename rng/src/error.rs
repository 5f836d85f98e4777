use secrand_types::ErrorCode;
use thiserror::Error;

/// Failure to bring up the underlying randomness primitive.
///
/// `Clone` because the subsystem caches the first initialization outcome and
/// replays it to every later caller; a missing entropy source is an
/// environment fault that will not heal within the process lifetime.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InitError {
    #[error("secure entropy source unavailable: {reason}")]
    EntropyUnavailable { reason: String },
}

/// Errors produced by a single fill operation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FillError {
    #[error("invalid buffer: null base with non-zero length {len}")]
    InvalidBuffer { len: usize },

    #[error("random subsystem unavailable: {0}")]
    SubsystemInit(#[from] InitError),
}

impl InitError {
    /// Map to a platform error code.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            InitError::EntropyUnavailable { .. } => ErrorCode::EntropyUnavailable,
        }
    }
}

impl FillError {
    /// Map to a platform error code.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            FillError::InvalidBuffer { .. } => ErrorCode::InvalidBuffer,
            FillError::SubsystemInit(_) => ErrorCode::RngInitFailed,
        }
    }
}

pub type RngResult<T> = Result<T, FillError>;
