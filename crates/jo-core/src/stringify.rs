//! Allocation-free conversion of integers, floats, and booleans to text.
//!
//! Each function writes into a caller-supplied buffer and returns the number
//! of bytes written. No terminator is appended.
//!
//! Floats use the shortest text that parses back to the identical value:
//! fixed notation when `1e-4 <= |x| < 1e16` (`1.0`, `0.1`, `-2.5`), exponent
//! notation otherwise (`1e300`, `5e-324`), and `NaN`, `inf`, `-inf` for
//! non-finite values.
//!
//! # Panics
//!
//! All three functions panic if `buf` is shorter than the output. The
//! capacities in [`crate::constants`] are always sufficient.

use std::fmt::{self, Write};

use crate::constants::{FLOAT_BUF_LEN, INT_BUF_LEN};

/// Fixed-capacity scratch space for `core::fmt` output.
struct StackText<const N: usize> {
    bytes: [u8; N],
    len: usize,
}

impl<const N: usize> StackText<N> {
    fn new() -> Self {
        Self {
            bytes: [0; N],
            len: 0,
        }
    }

    fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl<const N: usize> Write for StackText<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len + s.len();
        let dst = self.bytes.get_mut(self.len..end).ok_or(fmt::Error)?;
        dst.copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

fn emit(text: &[u8], buf: &mut [u8]) -> usize {
    buf[..text.len()].copy_from_slice(text);
    text.len()
}

/// Write `value` in minimal decimal form, with a leading `-` when negative.
pub fn stringify_int(value: i64, buf: &mut [u8]) -> usize {
    let mut text = StackText::<INT_BUF_LEN>::new();
    // Cannot fail: the widest i64 is 20 bytes.
    let _ = write!(text, "{value}");
    emit(text.as_bytes(), buf)
}

/// Write `value` in shortest round-trip form.
pub fn stringify_float(value: f64, buf: &mut [u8]) -> usize {
    let mut text = StackText::<FLOAT_BUF_LEN>::new();
    // Cannot fail: shortest f64 output is at most 24 bytes.
    let _ = write!(text, "{value:?}");
    emit(text.as_bytes(), buf)
}

/// Write `true` or `false`.
pub fn stringify_bool(value: bool, buf: &mut [u8]) -> usize {
    let text: &[u8] = if value { b"true" } else { b"false" };
    emit(text, buf)
}
