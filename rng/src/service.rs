use crate::buffer::BufferDescriptor;
use crate::error::RngResult;
use crate::subsystem::RandomSubsystem;

/// Stateless fill operation over a [`RandomSubsystem`].
///
/// Validates the incoming buffer and writes secure random bytes straight
/// into it. No allocation happens on any path and no reference to the
/// caller's memory survives the call, so the service is suitable for
/// high-frequency use (UUID generation loops and the like).
#[derive(Clone, Copy)]
pub struct RandomFillService<'s> {
    subsystem: &'s RandomSubsystem,
}

impl<'s> RandomFillService<'s> {
    pub fn new(subsystem: &'s RandomSubsystem) -> Self {
        Self { subsystem }
    }

    /// Service over the process-wide subsystem.
    pub fn global() -> RandomFillService<'static> {
        RandomFillService {
            subsystem: RandomSubsystem::global(),
        }
    }

    /// Fill the described region, in place, with secure random bytes.
    ///
    /// Zero-length descriptors succeed without touching memory. A null base
    /// with non-zero length yields [`FillError::InvalidBuffer`] before any
    /// write. On success every byte of the region has been overwritten; a
    /// partial fill is never observable because the underlying primitive
    /// either completes the whole region or fails before writing.
    ///
    /// [`FillError::InvalidBuffer`]: crate::error::FillError::InvalidBuffer
    pub fn fill(&self, buffer: BufferDescriptor<'_>) -> RngResult<()> {
        match buffer.into_slice()? {
            Some(dest) => self.fill_slice(dest),
            None => Ok(()),
        }
    }

    /// Safe-Rust entry point for host-side callers that already hold a
    /// slice.
    pub fn fill_slice(&self, dest: &mut [u8]) -> RngResult<()> {
        if dest.is_empty() {
            return Ok(());
        }
        self.subsystem.draw(dest)?;
        tracing::debug!(len = dest.len(), "buffer filled with secure random bytes");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FillError;
    use crate::subsystem::OsEntropy;
    use std::thread;

    fn service_under_test() -> RandomFillService<'static> {
        let subsystem: &'static RandomSubsystem =
            Box::leak(Box::new(RandomSubsystem::new(Box::new(OsEntropy))));
        RandomFillService::new(subsystem)
    }

    #[test]
    fn fills_a_16_byte_buffer_in_place() {
        let service = service_under_test();
        let mut buf = [0u8; 16];

        service.fill(BufferDescriptor::from(&mut buf[..])).unwrap();

        assert_eq!(buf.len(), 16);
        assert_ne!(buf, [0u8; 16]);
    }

    #[test]
    fn writes_stay_inside_the_described_region() {
        let service = service_under_test();
        let mut arena = [0u8; 64];

        // Describe only the middle 16 bytes.
        service
            .fill(BufferDescriptor::from(&mut arena[24..40]))
            .unwrap();

        assert!(arena[..24].iter().all(|&b| b == 0));
        assert!(arena[40..].iter().all(|&b| b == 0));
        assert_ne!(&arena[24..40], &[0u8; 16]);
    }

    #[test]
    fn zero_length_fill_is_a_no_op() {
        let service = service_under_test();

        let descriptor = unsafe { BufferDescriptor::from_raw_parts(std::ptr::null_mut(), 0) };
        service.fill(descriptor).unwrap();

        service.fill_slice(&mut []).unwrap();
    }

    #[test]
    fn null_base_with_length_is_rejected_without_writing() {
        let service = service_under_test();

        let descriptor = unsafe { BufferDescriptor::from_raw_parts(std::ptr::null_mut(), 128) };
        assert_eq!(
            service.fill(descriptor).unwrap_err(),
            FillError::InvalidBuffer { len: 128 }
        );
    }

    #[test]
    fn repeated_fills_do_not_repeat() {
        let service = service_under_test();
        let mut first = [0u8; 32];
        let mut second = [0u8; 32];

        service.fill_slice(&mut first).unwrap();
        service.fill_slice(&mut second).unwrap();

        // Identical 32-byte draws from a CSPRNG have probability 2^-256.
        assert_ne!(first, second);
    }

    #[test]
    fn concurrent_fills_on_disjoint_buffers() {
        let service = service_under_test();

        let outputs = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    scope.spawn(move || {
                        let mut buf = [0u8; 32];
                        service.fill_slice(&mut buf).unwrap();
                        buf
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .collect::<Vec<_>>()
        });

        for (i, a) in outputs.iter().enumerate() {
            assert_ne!(*a, [0u8; 32]);
            for b in &outputs[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn byte_distribution_is_roughly_uniform() {
        let service = service_under_test();
        let mut buf = vec![0u8; 1 << 16];
        service.fill_slice(&mut buf).unwrap();

        let mut counts = [0u32; 256];
        for &b in &buf {
            counts[b as usize] += 1;
        }

        // Chi-square against the uniform expectation of 256 per bucket.
        // 255 degrees of freedom; 400 is far enough into the tail that a
        // healthy CSPRNG essentially never trips it.
        let expected = (buf.len() / 256) as f64;
        let chi_square: f64 = counts
            .iter()
            .map(|&observed| {
                let delta = observed as f64 - expected;
                delta * delta / expected
            })
            .sum();
        assert!(chi_square < 400.0, "chi-square too high: {chi_square}");
    }
}
