//! The append-with-compaction byte sink driven by the encoder.
//!
//! Two backends implement [`RlpBuf`]: [`BytesBuf`] over an owned growable
//! array, and [`RawBuf`] over a manually managed native region. Both grow by
//! doubling, keep their storage zero-filled past the logical length, and
//! support the in-place left shift the list writer uses to close the gap left
//! by prefix over-reservation. A buffer belongs to exactly one encoding
//! operation at a time; there is no internal synchronization.

use crate::error::Error;
use bytes::Bytes;
use std::{
    alloc::{self, Layout},
    io,
    ptr::{self, NonNull},
    slice,
};

/// Initial capacity used when a caller does not pick one.
pub const DEFAULT_INITIAL_CAP: usize = 256;

/// A byte sink the encoder writes into.
///
/// `set_len` may move the logical length forward into territory no byte has
/// been written to yet; implementations must have grown (and zero-filled) the
/// backing store before the length advances, so the reservation step of the
/// list writer never exposes uninitialized memory.
pub trait RlpBuf {
    /// Appends one byte.
    fn write_byte(&mut self, b: u8) -> Result<(), Error>;

    /// Appends a slice. The default loops [`RlpBuf::write_byte`]; backends
    /// override it with a block copy.
    fn write_slice(&mut self, bytes: &[u8]) -> Result<(), Error> {
        for &b in bytes {
            self.write_byte(b)?;
        }
        Ok(())
    }

    /// Logical end of written data.
    fn len(&self) -> usize;

    /// Whether nothing has been written.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forces the logical length, growing the backing store if needed.
    fn set_len(&mut self, len: usize) -> Result<(), Error>;

    /// Moves `[offset, offset + size)` left by `amount` bytes in place. The
    /// regions may overlap.
    fn shift_left(&mut self, offset: usize, size: usize, amount: usize);

    /// The written bytes.
    fn as_slice(&self) -> &[u8];

    /// Drains the buffer into an owned byte sequence.
    fn finish(self) -> Bytes
    where
        Self: Sized;

    /// Drains the written bytes into an output sink.
    fn copy_to(&self, out: &mut impl io::Write) -> io::Result<()> {
        out.write_all(self.as_slice())
    }
}

/// Write buffer over an owned, doubling dynamic byte array.
pub struct BytesBuf {
    /// Storage, always kept zero-filled out to its full length (the
    /// capacity).
    bin: Vec<u8>,
    len: usize,
}

impl BytesBuf {
    /// Allocates a buffer with the given initial capacity.
    pub fn with_capacity(cap: usize) -> Self {
        Self { bin: vec![0; cap.max(1)], len: 0 }
    }

    /// Grows storage by doubling until `needed` bytes fit.
    fn ensure(&mut self, needed: usize) -> Result<(), Error> {
        if needed <= self.bin.len() {
            return Ok(());
        }
        let mut cap = self.bin.len();
        while cap < needed {
            cap = cap.checked_mul(2).ok_or(Error::CapacityOverflow)?;
        }
        self.bin.resize(cap, 0);
        Ok(())
    }
}

impl Default for BytesBuf {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_INITIAL_CAP)
    }
}

impl RlpBuf for BytesBuf {
    fn write_byte(&mut self, b: u8) -> Result<(), Error> {
        self.ensure(self.len + 1)?;
        self.bin[self.len] = b;
        self.len += 1;
        Ok(())
    }

    fn write_slice(&mut self, bytes: &[u8]) -> Result<(), Error> {
        let end = self.len.checked_add(bytes.len()).ok_or(Error::CapacityOverflow)?;
        self.ensure(end)?;
        self.bin[self.len..end].copy_from_slice(bytes);
        self.len = end;
        Ok(())
    }

    fn len(&self) -> usize {
        self.len
    }

    fn set_len(&mut self, len: usize) -> Result<(), Error> {
        self.ensure(len)?;
        self.len = len;
        Ok(())
    }

    fn shift_left(&mut self, offset: usize, size: usize, amount: usize) {
        self.bin.copy_within(offset..offset + size, offset - amount);
    }

    fn as_slice(&self) -> &[u8] {
        &self.bin[..self.len]
    }

    fn finish(mut self) -> Bytes {
        self.bin.truncate(self.len);
        Bytes::from(self.bin)
    }
}

/// Write buffer over a manually allocated native memory region.
///
/// The region is acquired on construction and freed by [`RawBuf::release`],
/// which is idempotent and also runs on drop, so every exit path of an encode
/// operation releases the memory. After a release the buffer is empty and
/// usable again; the next write allocates fresh storage.
pub struct RawBuf {
    ptr: NonNull<u8>,
    /// Allocated bytes; zero exactly when no region is held.
    cap: usize,
    len: usize,
}

// Safety: RawBuf exclusively owns the allocation behind `ptr`.
unsafe impl Send for RawBuf {}

impl RawBuf {
    /// Allocates a zero-filled region with the given initial capacity.
    pub fn with_capacity(cap: usize) -> Self {
        let cap = cap.max(1);
        let layout = Layout::array::<u8>(cap).expect("initial capacity too large");
        let ptr = unsafe { alloc::alloc_zeroed(layout) };
        let ptr = NonNull::new(ptr).unwrap_or_else(|| alloc::handle_alloc_error(layout));
        Self { ptr, cap, len: 0 }
    }

    /// Grows the region by doubling until `needed` bytes fit, zero-filling
    /// everything past the old capacity.
    fn ensure(&mut self, needed: usize) -> Result<(), Error> {
        if needed <= self.cap {
            return Ok(());
        }
        let mut new_cap = self.cap.max(1);
        while new_cap < needed {
            new_cap = new_cap.checked_mul(2).ok_or(Error::CapacityOverflow)?;
        }
        let new_layout = Layout::array::<u8>(new_cap).map_err(|_| Error::CapacityOverflow)?;
        let new_ptr = if self.cap == 0 {
            unsafe { alloc::alloc(new_layout) }
        } else {
            // Safety: `cap` and align 1 are the layout the region was
            // allocated with.
            let old_layout = unsafe { Layout::from_size_align_unchecked(self.cap, 1) };
            unsafe { alloc::realloc(self.ptr.as_ptr(), old_layout, new_cap) }
        };
        let new_ptr = NonNull::new(new_ptr).unwrap_or_else(|| alloc::handle_alloc_error(new_layout));
        // Realloc leaves the extension uninitialized; `set_len` may expose it.
        unsafe {
            ptr::write_bytes(new_ptr.as_ptr().add(self.cap), 0, new_cap - self.cap);
        }
        self.ptr = new_ptr;
        self.cap = new_cap;
        Ok(())
    }

    /// Frees the native region. Safe to call any number of times.
    pub fn release(&mut self) {
        if self.cap == 0 {
            return;
        }
        // Safety: `cap > 0` means we still own an allocation of exactly
        // `cap` bytes.
        unsafe {
            alloc::dealloc(self.ptr.as_ptr(), Layout::from_size_align_unchecked(self.cap, 1));
        }
        self.ptr = NonNull::dangling();
        self.cap = 0;
        self.len = 0;
    }
}

impl Default for RawBuf {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_INITIAL_CAP)
    }
}

impl Drop for RawBuf {
    fn drop(&mut self) {
        self.release();
    }
}

impl RlpBuf for RawBuf {
    fn write_byte(&mut self, b: u8) -> Result<(), Error> {
        self.ensure(self.len + 1)?;
        // Safety: `ensure` guarantees `len < cap`.
        unsafe {
            *self.ptr.as_ptr().add(self.len) = b;
        }
        self.len += 1;
        Ok(())
    }

    fn write_slice(&mut self, bytes: &[u8]) -> Result<(), Error> {
        let end = self.len.checked_add(bytes.len()).ok_or(Error::CapacityOverflow)?;
        self.ensure(end)?;
        // Safety: the region holds at least `end` bytes and cannot overlap a
        // caller-provided slice.
        unsafe {
            ptr::copy_nonoverlapping(bytes.as_ptr(), self.ptr.as_ptr().add(self.len), bytes.len());
        }
        self.len = end;
        Ok(())
    }

    fn len(&self) -> usize {
        self.len
    }

    fn set_len(&mut self, len: usize) -> Result<(), Error> {
        self.ensure(len)?;
        self.len = len;
        Ok(())
    }

    fn shift_left(&mut self, offset: usize, size: usize, amount: usize) {
        debug_assert!(offset + size <= self.cap && amount <= offset);
        // Safety: both ranges lie inside the allocation; `ptr::copy` permits
        // overlap.
        unsafe {
            let src = self.ptr.as_ptr().add(offset);
            let dst = self.ptr.as_ptr().add(offset - amount);
            ptr::copy(src, dst, size);
        }
    }

    fn as_slice(&self) -> &[u8] {
        // Safety: `len <= cap` always; a released buffer has `len == 0`, for
        // which a dangling pointer is valid.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    fn finish(self) -> Bytes {
        Bytes::copy_from_slice(self.as_slice())
    }
}
