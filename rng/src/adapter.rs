//! Adapter exposing the subsystem through the `rand_core` traits.
//!
//! Host-side Rust code that wants standard RNG ergonomics (`rand::Rng`
//! methods, generic `R: CryptoRng` APIs) can use this instead of calling the
//! fill service directly.

use crate::service::RandomFillService;
use rand_core::{CryptoRng, Error, RngCore};

/// Cryptographically secure RNG over the process-wide random subsystem.
///
/// # Panics
///
/// The infallible `RngCore` methods panic if the entropy source is
/// unavailable. This is considered unrecoverable -- a system without a
/// working RNG cannot safely perform any cryptographic operation, and
/// returning fabricated values would be worse. Callers that want the error
/// instead should use `try_fill_bytes` or the fill service directly.
#[derive(Clone, Copy, Debug, Default)]
pub struct SubsystemRng;

impl RngCore for SubsystemRng {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        RandomFillService::global()
            .fill_slice(dest)
            .expect("OS entropy source unavailable, cannot proceed safely");
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        RandomFillService::global()
            .fill_slice(dest)
            .map_err(Error::new)
    }
}

// Marker trait: this RNG is cryptographically secure.
impl CryptoRng for SubsystemRng {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn fill_bytes_overwrites_the_buffer() {
        let mut buf = [0u8; 24];
        SubsystemRng.fill_bytes(&mut buf);
        assert_ne!(buf, [0u8; 24]);
    }

    #[test]
    fn try_fill_bytes_succeeds_on_a_healthy_host() {
        let mut buf = [0u8; 24];
        SubsystemRng.try_fill_bytes(&mut buf).unwrap();
    }

    #[test]
    fn usable_through_the_rand_facade() {
        let mut rng = SubsystemRng;
        let a: u64 = rng.gen();
        let b: u64 = rng.gen();
        // A repeated u64 draw is a 2^-64 event.
        assert_ne!(a, b);
    }
}
