//! Length-prefixed byte strings with explicit ownership.
//!
//! A [`JoStr`] is the byte instantiation of the bundle shape: data, a 32-bit
//! length, and [`Flags`]. Where the data lives is part of the value
//! ([`Ownership`]), and borrowed forms carry the lifetime of what they borrow,
//! so an alias cannot outlive its owner and only owned storage is ever freed.

use std::ffi::CStr;
use std::fmt;

use jo_memory::raw::{self, OwnedBuf};
use jo_memory::{AllocError, Flags, RawStr};
use tracing::trace;

/// Where a string's bytes live.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Ownership {
    /// No data.
    Empty,
    /// Borrowed from memory this string does not own, such as a literal.
    Literal,
    /// A heap buffer released together with this string.
    Owned,
    /// Shares another string's bytes; that string keeps ownership.
    Alias,
}

enum Storage<'a> {
    Literal(&'a [u8]),
    Alias(&'a [u8]),
    Owned(OwnedBuf),
}

impl Storage<'_> {
    /// Counted bytes followed by the terminator when there is one.
    fn bytes(&self) -> &[u8] {
        match self {
            Self::Literal(bytes) | Self::Alias(bytes) => bytes,
            Self::Owned(buf) => buf.as_slice(),
        }
    }
}

fn clamp_len(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

/// A byte string: data, a length that never counts the terminator, and flags.
pub struct JoStr<'a> {
    data: Option<Storage<'a>>,
    length: u32,
    flags: Flags,
}

impl<'a> JoStr<'a> {
    /// A string with absent data, zero length, and no flags.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            data: None,
            length: 0,
            flags: Flags::EMPTY,
        }
    }

    /// Wrap a NUL-terminated literal without copying.
    ///
    /// The length excludes the terminator and [`Flags::NULLT`] is set. The
    /// data address is the literal's own address.
    #[must_use]
    pub fn from_literal(lit: &'a CStr) -> Self {
        let bytes = lit.to_bytes_with_nul();
        match u32::try_from(bytes.len() - 1) {
            Ok(length) => Self {
                data: Some(Storage::Literal(bytes)),
                length,
                flags: Flags::NULLT,
            },
            Err(_) => Self::from_bytes(lit.to_bytes()),
        }
    }

    /// Wrap borrowed bytes without copying. No terminator is assumed.
    ///
    /// Inputs longer than `u32::MAX` bytes are cut to that length.
    #[must_use]
    pub fn from_bytes(bytes: &'a [u8]) -> Self {
        let length = clamp_len(bytes.len());
        Self {
            data: Some(Storage::Literal(&bytes[..length as usize])),
            length,
            flags: Flags::EMPTY,
        }
    }

    /// Move the contents of `src` into a new string, leaving `src` empty.
    pub fn take_from(src: &mut JoStr<'a>) -> JoStr<'a> {
        JoStr {
            data: raw::take(&mut src.data),
            length: std::mem::take(&mut src.length),
            flags: std::mem::take(&mut src.flags),
        }
    }

    /// A non-owning view of `src` with the same data, length, and flags.
    #[must_use]
    pub fn alias_of<'b>(src: &'b JoStr<'_>) -> JoStr<'b> {
        JoStr {
            data: src.data.as_ref().map(|storage| Storage::Alias(storage.bytes())),
            length: src.length,
            flags: src.flags,
        }
    }

    /// An independently owned copy of `src`.
    ///
    /// Allocates exactly `len` bytes, plus one for the terminator when `src`
    /// is NUL-terminated. Copying an empty string without a terminator
    /// allocates nothing and yields absent data.
    pub fn copy_of(src: &JoStr<'_>) -> Result<JoStr<'static>, AllocError> {
        let len = src.length as usize;
        let nul = usize::from(src.is_nul_terminated());
        if len + nul == 0 {
            return Ok(JoStr {
                data: None,
                length: 0,
                flags: src.flags,
            });
        }

        trace!(len, nul_terminated = nul == 1, "copying string");
        let mut buf = raw::try_allocate(len + nul)?;
        let dst = buf.as_mut_slice();
        dst[..len].copy_from_slice(src.as_bytes());
        if nul == 1 {
            dst[len] = 0;
        }
        Ok(JoStr {
            data: Some(Storage::Owned(buf)),
            length: src.length,
            flags: src.flags,
        })
    }

    /// Dispose of the string. Owned storage goes back to the heap; borrowed
    /// and aliased bytes are left untouched.
    pub fn release(self) {
        drop(self);
    }

    /// Byte count, excluding any terminator.
    #[must_use]
    pub fn len(&self) -> u32 {
        self.length
    }

    /// Whether the length is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Flag bits.
    #[must_use]
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Whether a zero byte follows the counted bytes.
    #[must_use]
    pub fn is_nul_terminated(&self) -> bool {
        self.flags.contains(Flags::NULLT)
    }

    /// Where the bytes live.
    #[must_use]
    pub fn ownership(&self) -> Ownership {
        match &self.data {
            None => Ownership::Empty,
            Some(Storage::Literal(_)) => Ownership::Literal,
            Some(Storage::Alias(_)) => Ownership::Alias,
            Some(Storage::Owned(_)) => Ownership::Owned,
        }
    }

    /// The counted bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match &self.data {
            Some(storage) => &storage.bytes()[..self.length as usize],
            None => &[],
        }
    }

    /// The counted bytes plus the terminator, when the string has one.
    #[must_use]
    pub fn as_bytes_with_nul(&self) -> Option<&[u8]> {
        match &self.data {
            Some(storage) if self.is_nul_terminated() => {
                Some(&storage.bytes()[..=self.length as usize])
            }
            _ => None,
        }
    }

    /// Address of the first byte, or null when data is absent.
    #[must_use]
    pub fn as_ptr(&self) -> *const u8 {
        self.data
            .as_ref()
            .map_or(std::ptr::null(), |storage| storage.bytes().as_ptr())
    }

    /// Field-compatible `{ data, length, flags }` view.
    #[must_use]
    pub fn as_raw(&self) -> RawStr {
        RawStr {
            data: self.as_ptr(),
            length: self.length,
            flags: self.flags.bits(),
        }
    }
}

impl Default for JoStr<'_> {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for JoStr<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for JoStr<'_> {}

impl fmt::Debug for JoStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JoStr")
            .field("ownership", &self.ownership())
            .field("length", &self.length)
            .field("flags", &self.flags)
            .field("bytes", &format_args!("\"{}\"", self.as_bytes().escape_ascii()))
            .finish()
    }
}
