//! Raw heap primitives with single-owner move semantics.
//!
//! A handle slot is an `Option<OwnedBuf>`; `None` is the absent handle.
//! Buffers move between slots through [`take`], which always leaves the
//! source slot empty. [`resize`] follows the same rule: the caller's slot is
//! cleared before the outcome is known, and the return value is the only
//! handle that may be used afterwards.
//!
//! Every buffer is aligned to [`MAX_ALIGN`] and zero-filled, so a byte buffer
//! can back any `Pod` element type with alignment up to 16.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::fmt;
use std::mem::ManuallyDrop;
use std::ptr::NonNull;
use std::slice;

use tracing::{trace, warn};

use crate::error::AllocError;

#[repr(align(16))]
struct MaxAlign;

/// Alignment of every buffer handed out by [`allocate`] and [`resize`].
pub const MAX_ALIGN: usize = std::mem::align_of::<MaxAlign>();

fn layout_for(size: usize) -> Result<Layout, AllocError> {
    Layout::from_size_align(size, MAX_ALIGN).map_err(|_| AllocError::LayoutOverflow { size })
}

/// A uniquely owned heap region.
///
/// Not `Clone`: the only way to hand a buffer to another variable is to move
/// it, which the compiler tracks, or to [`take`] it out of a slot. Dropping the
/// handle releases the region.
pub struct OwnedBuf {
    ptr: NonNull<u8>,
    len: usize,
}

// SAFETY: `OwnedBuf` is the sole owner of its region, exactly like `Box<[u8]>`.
unsafe impl Send for OwnedBuf {}
// SAFETY: shared access only hands out `&[u8]`.
unsafe impl Sync for OwnedBuf {}

impl OwnedBuf {
    /// A zero-length buffer. Owns no heap memory; its pointer is dangling but
    /// aligned to [`MAX_ALIGN`].
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            ptr: NonNull::<MaxAlign>::dangling().cast(),
            len: 0,
        }
    }

    /// Size of the region in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the region is zero bytes long.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Address of the first byte.
    #[must_use]
    pub fn as_ptr(&self) -> *const u8 {
        self.ptr.as_ptr()
    }

    /// Mutable address of the first byte.
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.ptr.as_ptr()
    }

    /// View the whole region.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        // SAFETY: `ptr` is valid for `len` initialized bytes (zero-filled on
        // allocation and on growth), or dangling-but-aligned when `len == 0`.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// Mutable view of the whole region.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        // SAFETY: as in `as_slice`; `&mut self` guarantees exclusivity.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    fn layout(&self) -> Layout {
        // SAFETY: `len` was validated by `layout_for` when the region was
        // obtained and never changes afterwards.
        unsafe { Layout::from_size_align_unchecked(self.len, MAX_ALIGN) }
    }

    fn reallocate(self, new_size: usize) -> Result<Self, AllocError> {
        let old_len = self.len;
        trace!(old_len, new_size, "resizing heap buffer");

        if old_len == 0 {
            return try_allocate(new_size);
        }
        if new_size == 0 {
            drop(self);
            return Ok(Self::empty());
        }
        layout_for(new_size)?;

        let old_layout = self.layout();
        let this = ManuallyDrop::new(self);
        // SAFETY: `this.ptr` came from the global allocator with `old_layout`,
        // `new_size` is nonzero and valid for `MAX_ALIGN`, and `this` is never
        // dropped, so the old pointer is not reused after a successful call.
        let raw = unsafe { alloc::realloc(this.ptr.as_ptr(), old_layout, new_size) };
        match NonNull::new(raw) {
            Some(ptr) => {
                if new_size > old_len {
                    // SAFETY: `old_len..new_size` lies inside the new region.
                    unsafe { ptr.as_ptr().add(old_len).write_bytes(0, new_size - old_len) };
                }
                Ok(Self { ptr, len: new_size })
            }
            None => {
                // A failed realloc leaves the original region allocated.
                drop(ManuallyDrop::into_inner(this));
                Err(AllocError::Exhausted { size: new_size })
            }
        }
    }
}

impl Drop for OwnedBuf {
    fn drop(&mut self) {
        if self.len != 0 {
            // SAFETY: non-empty buffers always come from the global allocator
            // with exactly this layout, and drop runs once.
            unsafe { alloc::dealloc(self.ptr.as_ptr(), self.layout()) };
        }
    }
}

impl fmt::Debug for OwnedBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnedBuf")
            .field("ptr", &self.ptr)
            .field("len", &self.len)
            .finish()
    }
}

/// Request `size` bytes from the heap, reporting failure as an error.
///
/// A zero-byte request succeeds with [`OwnedBuf::empty`].
pub fn try_allocate(size: usize) -> Result<OwnedBuf, AllocError> {
    if size == 0 {
        return Ok(OwnedBuf::empty());
    }
    let layout = layout_for(size).inspect_err(|err| warn!(size, %err, "rejected allocation"))?;
    // SAFETY: `layout` has a nonzero size.
    let raw = unsafe { alloc::alloc_zeroed(layout) };
    NonNull::new(raw)
        .map(|ptr| OwnedBuf { ptr, len: size })
        .ok_or_else(|| {
            warn!(size, "heap allocation failed");
            AllocError::Exhausted { size }
        })
}

/// Request `size` bytes from the heap. `None` means the allocator could not
/// satisfy the request; the process is never aborted.
#[must_use]
pub fn allocate(size: usize) -> Option<OwnedBuf> {
    try_allocate(size).ok()
}

/// Return a buffer to the heap. Releasing `None` does nothing.
pub fn release(handle: Option<OwnedBuf>) {
    drop(handle);
}

/// Move the handle out of `slot`, leaving `None` behind.
///
/// Returns whatever the slot held, present or absent.
pub fn take<T>(slot: &mut Option<T>) -> Option<T> {
    slot.take()
}

/// Grow or shrink the buffer in `slot` to `new_size` bytes.
///
/// The slot is cleared unconditionally. On success the returned buffer holds
/// the first `min(old, new)` bytes of the original followed by zeroes. On
/// failure the return is `None` and the original region has been released.
/// An empty slot behaves like [`allocate`].
#[must_use]
pub fn resize(slot: &mut Option<OwnedBuf>, new_size: usize) -> Option<OwnedBuf> {
    let Some(buf) = take(slot) else {
        return allocate(new_size);
    };
    match buf.reallocate(new_size) {
        Ok(resized) => Some(resized),
        Err(err) => {
            warn!(new_size, %err, "resize failed, original buffer released");
            None
        }
    }
}
