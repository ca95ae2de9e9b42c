//! Roman numeral conversion for Vinculum.
//!
//! This crate provides:
//! - [`validate`] - Checks text against the numeral grammar
//! - [`decode`] - Roman numeral to integer
//! - [`encode`] - Integer to Roman numeral
//! - [`Numeral`] - A validated numeral with its value
//! - [`Error`] - Format and range errors
//!
//! Values above 3999 use vinculum notation, written with an underscore
//! prefix: `_V` is five thousand and `_M` one million. The largest value
//! that can be encoded is [`MAX_VALUE`].
//!
//! Everything here is pure: the symbol table is static, no operation logs,
//! and all functions are safe to call from any thread.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod decode;
pub mod encode;
pub mod error;
pub mod glyph;
pub mod grammar;
pub mod numeral;
pub mod table;

pub use decode::decode;
pub use encode::encode;
pub use error::{Error, ErrorKind, Result};
pub use glyph::{Glyph, Letter, Lexer, VINCULUM_MARKER};
pub use grammar::validate;
pub use numeral::Numeral;
pub use table::Symbol;

/// The largest value a numeral can represent.
pub const MAX_VALUE: u32 = 3_999_999;
