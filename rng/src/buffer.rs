use crate::error::FillError;
use core::marker::PhantomData;
use core::slice;

/// A borrowed view of a contiguous mutable byte region owned by the host
/// runtime.
///
/// The descriptor never owns the memory it points at; it is valid only for
/// the duration of the call it was built for, which the `'a` lifetime
/// enforces. A descriptor with `len == 0` is valid regardless of its base
/// pointer; a null base with a non-zero length is rejected at use.
#[derive(Debug)]
pub struct BufferDescriptor<'a> {
    base: *mut u8,
    len: usize,
    _borrow: PhantomData<&'a mut [u8]>,
}

impl<'a> BufferDescriptor<'a> {
    /// Build a descriptor from a raw base pointer and length coming in from
    /// the host runtime.
    ///
    /// # Safety
    ///
    /// If `len > 0` and `base` is non-null, `base` must point to a region
    /// valid for reads and writes of `len` bytes for the lifetime `'a`, with
    /// no other live reference to it. A null `base` is permitted and is
    /// reported as [`FillError::InvalidBuffer`] when the descriptor is used
    /// with a non-zero length.
    pub unsafe fn from_raw_parts(base: *mut u8, len: usize) -> Self {
        Self {
            base,
            len,
            _borrow: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Resolve the descriptor into the region it describes.
    ///
    /// Returns `Ok(None)` for the zero-length no-op case (before any base
    /// pointer validation, so `(null, 0)` is valid) and
    /// `Err(InvalidBuffer)` for a null base with non-zero length.
    pub(crate) fn into_slice(self) -> Result<Option<&'a mut [u8]>, FillError> {
        if self.len == 0 {
            return Ok(None);
        }
        if self.base.is_null() {
            return Err(FillError::InvalidBuffer { len: self.len });
        }
        // Upheld by the from_raw_parts contract: non-null base, non-zero len.
        let dest = unsafe { slice::from_raw_parts_mut(self.base, self.len) };
        Ok(Some(dest))
    }
}

impl<'a> From<&'a mut [u8]> for BufferDescriptor<'a> {
    fn from(dest: &'a mut [u8]) -> Self {
        Self {
            base: dest.as_mut_ptr(),
            len: dest.len(),
            _borrow: PhantomData,
        }
    }
}
