//! One-time initialization guard around the underlying CSPRNG.
//!
//! The subsystem wraps an [`EntropySource`] and guarantees its
//! `initialize` runs exactly once per subsystem instance, no matter how many
//! threads race into the first fill. The first outcome, success or failure,
//! is cached and replayed: a process whose entropy source failed to come up
//! is not expected to recover, so later calls fail fast with the same error.

use crate::error::InitError;
use std::sync::OnceLock;

/// The randomness primitive the subsystem drives.
///
/// Implementations must be safe to call from any thread; `fill` is only
/// invoked after `initialize` has returned `Ok` on some thread.
pub trait EntropySource: Send + Sync {
    /// One-time setup of the underlying library. Called at most once per
    /// subsystem instance.
    fn initialize(&self) -> Result<(), InitError>;

    /// Overwrite all of `dest` with cryptographically secure random bytes.
    /// Must write the whole slice or fail without the caller observing a
    /// partial fill.
    fn fill(&self, dest: &mut [u8]) -> Result<(), InitError>;
}

/// Production source backed by the operating system CSPRNG via `getrandom`.
///
/// `getrandom` itself needs no explicit setup, so initialization probes the
/// OS source with a one-byte draw; an environment without a working entropy
/// source fails here, once, instead of on an arbitrary later fill.
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn initialize(&self) -> Result<(), InitError> {
        let mut probe = [0u8; 1];
        getrandom::fill(&mut probe).map_err(|err| InitError::EntropyUnavailable {
            reason: err.to_string(),
        })
    }

    fn fill(&self, dest: &mut [u8]) -> Result<(), InitError> {
        getrandom::fill(dest).map_err(|err| InitError::EntropyUnavailable {
            reason: err.to_string(),
        })
    }
}

/// Process-wide state for the random-fill capability.
///
/// Holds the entropy source and the write-once initialization result. The
/// source is injectable so tests can observe initialization counts or force
/// failures; production code uses [`RandomSubsystem::global`].
pub struct RandomSubsystem {
    source: Box<dyn EntropySource>,
    init: OnceLock<Result<(), InitError>>,
}

impl RandomSubsystem {
    pub fn new(source: Box<dyn EntropySource>) -> Self {
        Self {
            source,
            init: OnceLock::new(),
        }
    }

    /// The process-wide subsystem over the OS CSPRNG, created on first use.
    pub fn global() -> &'static RandomSubsystem {
        static GLOBAL: OnceLock<RandomSubsystem> = OnceLock::new();
        GLOBAL.get_or_init(|| RandomSubsystem::new(Box::new(OsEntropy)))
    }

    /// Idempotent initialization.
    ///
    /// Exactly one caller runs the source's `initialize`; concurrent callers
    /// block until it completes and then observe its outcome. `OnceLock`
    /// provides the happens-before edge, so no caller can see "initialized"
    /// before the underlying call has fully returned.
    pub fn ensure_initialized(&self) -> Result<(), InitError> {
        self.init
            .get_or_init(|| {
                let outcome = self.source.initialize();
                match &outcome {
                    Ok(()) => tracing::debug!("random subsystem initialized"),
                    Err(err) => {
                        tracing::error!(error = %err, "random subsystem initialization failed")
                    }
                }
                outcome
            })
            .clone()
    }

    /// Draw `dest.len()` secure random bytes directly into `dest`.
    pub(crate) fn draw(&self, dest: &mut [u8]) -> Result<(), InitError> {
        self.ensure_initialized()?;
        self.source.fill(dest)
    }
}
