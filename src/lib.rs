//! Vinculum - Roman numeral converter
//!
//! This crate re-exports both layers of the Vinculum system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: vinculum_runtime  — REPL, line editing, CLI
//! Layer 0: vinculum_numeral  — Numeral table, grammar, decode, encode, Error
//! ```
//!
//! # Example
//!
//! ```
//! use vinculum::numeral::{decode, encode};
//!
//! assert_eq!(encode(3724).unwrap(), "MMMDCCXXIV");
//! assert_eq!(decode("mmmdccxxiv").unwrap(), 3724);
//! ```

pub use vinculum_numeral as numeral;
pub use vinculum_runtime as runtime;
