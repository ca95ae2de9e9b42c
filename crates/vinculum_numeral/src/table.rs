//! The numeral table: every symbol the encoder may emit, in descending value.
//!
//! The table is the single source of truth for both directions. The encoder
//! walks it greedily; the decoder uses it to recognize subtractive compounds.

use std::fmt;

use crate::glyph::{Glyph, Letter};
use Letter::{C, D, I, L, M, V, X};

/// An immutable (value, glyphs) pair.
///
/// The glyph sequence is either one glyph or a two-glyph subtractive
/// compound such as `CM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    /// The symbol's value.
    pub value: u32,
    /// The glyphs spelling the symbol.
    pub glyphs: &'static [Glyph],
}

impl Symbol {
    /// Returns true if this symbol is a two-glyph subtractive compound.
    #[must_use]
    pub const fn is_compound(&self) -> bool {
        self.glyphs.len() == 2
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for glyph in self.glyphs {
            write!(f, "{glyph}")?;
        }
        Ok(())
    }
}

const fn s(letter: Letter) -> Glyph {
    Glyph::std(letter)
}

const fn e(letter: Letter) -> Glyph {
    Glyph::ext(letter)
}

/// All symbols, strictly descending by value.
#[rustfmt::skip]
static SYMBOLS: [Symbol; 25] = [
    Symbol { value: 1_000_000, glyphs: &[e(M)] },
    Symbol { value: 900_000, glyphs: &[e(C), e(M)] },
    Symbol { value: 500_000, glyphs: &[e(D)] },
    Symbol { value: 400_000, glyphs: &[e(C), e(D)] },
    Symbol { value: 100_000, glyphs: &[e(C)] },
    Symbol { value: 90_000, glyphs: &[e(X), e(C)] },
    Symbol { value: 50_000, glyphs: &[e(L)] },
    Symbol { value: 40_000, glyphs: &[e(X), e(L)] },
    Symbol { value: 10_000, glyphs: &[e(X)] },
    Symbol { value: 9_000, glyphs: &[e(I), e(X)] },
    Symbol { value: 5_000, glyphs: &[e(V)] },
    Symbol { value: 4_000, glyphs: &[e(I), e(V)] },
    Symbol { value: 1_000, glyphs: &[s(M)] },
    Symbol { value: 900, glyphs: &[s(C), s(M)] },
    Symbol { value: 500, glyphs: &[s(D)] },
    Symbol { value: 400, glyphs: &[s(C), s(D)] },
    Symbol { value: 100, glyphs: &[s(C)] },
    Symbol { value: 90, glyphs: &[s(X), s(C)] },
    Symbol { value: 50, glyphs: &[s(L)] },
    Symbol { value: 40, glyphs: &[s(X), s(L)] },
    Symbol { value: 10, glyphs: &[s(X)] },
    Symbol { value: 9, glyphs: &[s(I), s(X)] },
    Symbol { value: 5, glyphs: &[s(V)] },
    Symbol { value: 4, glyphs: &[s(I), s(V)] },
    Symbol { value: 1, glyphs: &[s(I)] },
];

/// Returns the full table in descending value order.
#[must_use]
pub fn symbols() -> &'static [Symbol] {
    &SYMBOLS
}

/// Returns the value of a single glyph.
///
/// `_I` has no table entry of its own (`M` spells 1000) but is still a
/// legal glyph worth 1000.
#[must_use]
pub fn value_of(glyph: Glyph) -> u32 {
    SYMBOLS
        .iter()
        .find(|symbol| symbol.glyphs == [glyph])
        .map_or_else(|| glyph.value(), |symbol| symbol.value)
}

/// Returns the value of `first` followed by `second` if the pair is a
/// subtractive compound in the table.
#[must_use]
pub fn compound_value(first: Glyph, second: Glyph) -> Option<u32> {
    SYMBOLS
        .iter()
        .filter(|symbol| symbol.is_compound())
        .find(|symbol| symbol.glyphs == [first, second])
        .map(|symbol| symbol.value)
}
