//! C ABI entry point for the managed-runtime shim.
//!
//! The shim hands over the raw base pointer and byte length of the array
//! buffer the managed side wants filled; the return value is a
//! [`Status`](secrand_types::Status) code. Unwinding never crosses the
//! boundary.

use secrand_rng::{BufferDescriptor, FillError, RandomFillService};
use secrand_types::Status;
use std::panic::{self, AssertUnwindSafe};

/// Fill `len` bytes starting at `base` with cryptographically secure random
/// bytes.
///
/// Returns `0` on success and a negative [`Status`](secrand_types::Status)
/// code on failure. A zero `len` is a valid no-op regardless of `base`; a
/// null `base` with non-zero `len` fails without touching memory.
///
/// # Safety
///
/// If `len > 0` and `base` is non-null, `base` must point to memory valid
/// for reads and writes of `len` bytes for the duration of the call, not
/// aliased by any other live reference. The region is owned by the caller;
/// no reference to it is retained past the return.
#[no_mangle]
pub unsafe extern "C" fn secrand_get_random_values(base: *mut u8, len: usize) -> i32 {
    // Contract forwarded verbatim from this function's safety section.
    let descriptor = unsafe { BufferDescriptor::from_raw_parts(base, len) };

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        RandomFillService::global().fill(descriptor)
    }));

    match outcome {
        Ok(Ok(())) => Status::Ok.code(),
        Ok(Err(err)) => {
            tracing::error!(error = %err, len, "getRandomValues failed");
            status_for(&err).code()
        }
        // Unwinding across a C boundary is undefined behavior; convert any
        // panic into an internal status instead.
        Err(_) => {
            tracing::error!(len, "getRandomValues panicked");
            Status::Internal.code()
        }
    }
}

fn status_for(err: &FillError) -> Status {
    match err {
        FillError::InvalidBuffer { .. } => Status::InvalidBuffer,
        FillError::SubsystemInit(_) => Status::EntropyUnavailable,
    }
}
