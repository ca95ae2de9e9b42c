//! REPL, line editing, and CLI support for Vinculum.
//!
//! This crate provides:
//! - [`Repl`] - Interactive menu loop over the numeral engine
//! - [`LineEditor`] - Swappable line input, rustyline by default
//! - [`ReplConfig`] - Prompt, banner, and color settings

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod highlight;
pub mod repl;

pub use config::ReplConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use highlight::NumeralHighlighter;
pub use repl::{Mode, Repl};
