//! The bundle shape: an owned array, an element count, and flag bits.
//!
//! `Bundle<T>` attaches no growth or release policy of its own. Callers size
//! the backing buffer with the primitives in [`crate::raw`], converting element
//! counts to byte counts through [`Bundle::elem_size`].

use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ops::{BitOr, BitOrAssign};

use bytemuck::Pod;

use crate::raw::{self, OwnedBuf};

/// A 32-bit flag set. Bit 0 is reserved for [`Flags::NULLT`]; the remaining
/// bits belong to whichever specialization uses the bundle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Flags(u32);

impl Flags {
    /// No bits set.
    pub const EMPTY: Self = Self(0);
    /// A zero byte follows the last counted element.
    pub const NULLT: Self = Self(1);

    /// Wrap raw bits; every bit is preserved.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Raw bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Whether every bit of `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Set the bits of `other`.
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Clear the bits of `other`.
    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }
}

impl BitOr for Flags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Field-compatible view `{ data, length, flags }` for code that reads the
/// bundle layout directly. `data` is null when the bundle holds no buffer.
#[repr(C)]
pub struct RawBundle<T> {
    /// First element, or null.
    pub data: *const T,
    /// Element count.
    pub length: u32,
    /// Flag bits.
    pub flags: u32,
}

/// The byte-element instantiation used by strings.
pub type RawStr = RawBundle<u8>;

impl<T> Clone for RawBundle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RawBundle<T> {}

impl<T> fmt::Debug for RawBundle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawBundle")
            .field("data", &self.data)
            .field("length", &self.length)
            .field("flags", &format_args!("{:#x}", self.flags))
            .finish()
    }
}

/// An owned array of `T` with a 32-bit element count and flag bits.
pub struct Bundle<T> {
    data: Option<OwnedBuf>,
    length: u32,
    flags: Flags,
    _elem: PhantomData<T>,
}

impl<T> Bundle<T> {
    /// Byte size of one element.
    pub const ELEM_SIZE: usize = mem::size_of::<T>();

    /// An empty bundle with no buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            data: None,
            length: 0,
            flags: Flags::EMPTY,
            _elem: PhantomData,
        }
    }

    /// Assemble a bundle from a buffer the caller sized for `length` elements.
    #[must_use]
    pub fn from_parts(data: Option<OwnedBuf>, length: u32, flags: Flags) -> Self {
        debug_assert!(
            data.as_ref().map_or(length == 0, |buf| buf.len()
                >= length as usize * Self::ELEM_SIZE),
            "buffer too small for {length} elements"
        );
        Self {
            data,
            length,
            flags,
            _elem: PhantomData,
        }
    }

    /// Byte size of one element, for converting element counts into the byte
    /// counts [`raw::allocate`] and [`raw::resize`] expect.
    #[must_use]
    pub const fn elem_size() -> usize {
        Self::ELEM_SIZE
    }

    /// Element count.
    #[must_use]
    pub fn len(&self) -> u32 {
        self.length
    }

    /// Whether the element count is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Bytes covered by the counted elements.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.length as usize * Self::ELEM_SIZE
    }

    /// Flag bits.
    #[must_use]
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Replace the flag bits.
    pub fn set_flags(&mut self, flags: Flags) {
        self.flags = flags;
    }

    /// The backing buffer, if any.
    #[must_use]
    pub fn data(&self) -> Option<&OwnedBuf> {
        self.data.as_ref()
    }

    /// Move the buffer out, leaving an empty bundle behind.
    pub fn take_data(&mut self) -> Option<OwnedBuf> {
        self.length = 0;
        self.flags = Flags::EMPTY;
        raw::take(&mut self.data)
    }

    /// Split into buffer, element count, and flags.
    #[must_use]
    pub fn into_parts(mut self) -> (Option<OwnedBuf>, u32, Flags) {
        let (length, flags) = (self.length, self.flags);
        (self.take_data(), length, flags)
    }

    /// Field-compatible view of this bundle.
    #[must_use]
    pub fn as_raw(&self) -> RawBundle<T> {
        RawBundle {
            data: self
                .data
                .as_ref()
                .map_or(std::ptr::null(), |buf| buf.as_ptr().cast()),
            length: self.length,
            flags: self.flags.bits(),
        }
    }
}

impl<T: Pod> Bundle<T> {
    /// The counted elements.
    ///
    /// # Panics
    ///
    /// Panics if the buffer holds fewer than `len()` elements, or if `T` is
    /// zero-sized or aligned beyond [`raw::MAX_ALIGN`].
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        match &self.data {
            Some(buf) => bytemuck::cast_slice(&buf.as_slice()[..self.byte_len()]),
            None => &[],
        }
    }

    /// The counted elements, mutably.
    ///
    /// # Panics
    ///
    /// Same conditions as [`Bundle::as_slice`].
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let byte_len = self.byte_len();
        match &mut self.data {
            Some(buf) => bytemuck::cast_slice_mut(&mut buf.as_mut_slice()[..byte_len]),
            None => &mut [],
        }
    }
}

impl<T> Default for Bundle<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Bundle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bundle")
            .field("data", &self.data)
            .field("length", &self.length)
            .field("flags", &self.flags)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::{allocate, resize};

    #[test]
    fn elem_size_matches_type() {
        assert_eq!(Bundle::<u8>::elem_size(), 1);
        assert_eq!(Bundle::<u32>::elem_size(), 4);
        assert_eq!(Bundle::<[f64; 3]>::elem_size(), 24);
    }

    #[test]
    fn empty_bundle_has_no_data() {
        let bundle: Bundle<u64> = Bundle::new();
        assert!(bundle.is_empty());
        assert!(bundle.data().is_none());
        assert!(bundle.as_slice().is_empty());
        assert!(bundle.as_raw().data.is_null());
    }

    #[test]
    fn caller_driven_growth() {
        let size = Bundle::<u32>::elem_size();
        let mut bundle = Bundle::<u32>::from_parts(allocate(4 * size), 4, Flags::EMPTY);
        bundle.as_mut_slice().copy_from_slice(&[1, 2, 3, 4]);

        let (mut data, length, flags) = bundle.into_parts();
        let grown = resize(&mut data, 8 * size);
        assert!(data.is_none());
        let mut bundle = Bundle::<u32>::from_parts(grown, length + 4, flags);
        bundle.as_mut_slice()[4..].copy_from_slice(&[5, 6, 7, 8]);

        assert_eq!(bundle.as_slice(), &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(bundle.byte_len(), 32);
    }

    #[test]
    fn take_data_empties_bundle() {
        let mut bundle = Bundle::<u16>::from_parts(allocate(6), 3, Flags::from_bits(0b100));
        let addr = bundle.data().unwrap().as_ptr();
        let data = bundle.take_data();
        assert_eq!(data.unwrap().as_ptr(), addr);
        assert!(bundle.data().is_none());
        assert_eq!(bundle.len(), 0);
        assert_eq!(bundle.flags(), Flags::EMPTY);
    }

    #[test]
    fn raw_view_matches_fields() {
        let bundle = Bundle::<u8>::from_parts(allocate(3), 2, Flags::NULLT);
        let raw = bundle.as_raw();
        assert_eq!(raw.data, bundle.data().unwrap().as_ptr());
        assert_eq!(raw.length, 2);
        assert_eq!(raw.flags, 1);
    }

    #[test]
    fn raw_layout_is_pointer_then_two_u32() {
        assert_eq!(mem::offset_of!(RawStr, data), 0);
        assert_eq!(mem::offset_of!(RawStr, length), mem::size_of::<usize>());
        assert_eq!(mem::offset_of!(RawStr, flags), mem::size_of::<usize>() + 4);
    }

    #[test]
    fn flags_ops() {
        let mut flags = Flags::EMPTY;
        flags.insert(Flags::NULLT);
        assert!(flags.contains(Flags::NULLT));
        flags |= Flags::from_bits(0x80);
        assert_eq!(flags.bits(), 0x81);
        flags.remove(Flags::NULLT);
        assert_eq!(flags, Flags::from_bits(0x80));
        assert_eq!((Flags::NULLT | Flags::from_bits(2)).bits(), 3);
    }
}
