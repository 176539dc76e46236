//! # jo-core
//!
//! Byte strings with explicit ownership modes (literal, owned, alias) built on
//! `jo-memory`, allocation-free stringify helpers, and a tokenizer for jo
//! source text.
//!
//! ```
//! use jo_core::{JoStr, Ownership};
//!
//! let lit = JoStr::from_literal(c"hi");
//! let copy = JoStr::copy_of(&lit).unwrap();
//! assert_eq!(copy.as_bytes(), b"hi");
//! assert_eq!(copy.ownership(), Ownership::Owned);
//! ```
#![warn(missing_docs)]

pub mod constants;
pub mod string;
pub mod stringify;
pub mod token;

pub use jo_memory::AllocError;

pub use constants::{BOOL_BUF_LEN, FLOAT_BUF_LEN, INT_BUF_LEN};
pub use string::{JoStr, Ownership};
pub use stringify::{stringify_bool, stringify_float, stringify_int};
pub use token::{tokenize, Token, TokenKind, Tokenizer};
