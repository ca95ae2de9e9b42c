//! Integration tests for the numeral table
//!
//! Tests ordering, coverage, and that the table drives both directions.

use vinculum_numeral::table::{compound_value, symbols, value_of};
use vinculum_numeral::{Glyph, Letter, decode, encode};

#[test]
fn table_has_twenty_five_symbols() {
    assert_eq!(symbols().len(), 25);
}

#[test]
fn table_is_strictly_descending() {
    assert!(symbols().windows(2).all(|w| w[0].value > w[1].value));
}

#[test]
fn every_symbol_encodes_to_itself() {
    for symbol in symbols() {
        assert_eq!(encode(i64::from(symbol.value)).unwrap(), symbol.to_string());
    }
}

#[test]
fn every_symbol_decodes_to_its_value() {
    for symbol in symbols() {
        assert_eq!(decode(&symbol.to_string()).unwrap(), symbol.value);
    }
}

#[test]
fn lookups() {
    assert_eq!(value_of(Glyph::std(Letter::M)), 1_000);
    assert_eq!(value_of(Glyph::ext(Letter::M)), 1_000_000);
    assert_eq!(
        compound_value(Glyph::ext(Letter::I), Glyph::ext(Letter::V)),
        Some(4_000)
    );
    assert_eq!(
        compound_value(Glyph::std(Letter::V), Glyph::std(Letter::I)),
        None
    );
}
