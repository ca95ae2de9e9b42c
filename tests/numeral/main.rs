//! Integration tests for Layer 0: Numeral
//!
//! Tests for the numeral table, grammar, both conversion directions, and errors.

mod errors;
mod grammar;
mod table;
