//! # jo-memory
//!
//! Single-owner heap primitives and the generic bundle shape built on them.
//!
//! Ownership of a heap region moves between variables only through
//! [`raw::take`] (or a plain Rust move), so a released handle can never be
//! released again.
#![warn(missing_docs)]

pub mod bundle;
pub mod error;
pub mod raw;

pub use bundle::{Bundle, Flags, RawBundle, RawStr};
pub use error::AllocError;
pub use raw::{allocate, release, resize, take, try_allocate, OwnedBuf, MAX_ALIGN};
