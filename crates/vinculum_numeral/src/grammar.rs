//! The structural grammar of well-formed numerals.
//!
//! A numeral is a sequence of magnitude tiers, highest first. Each tier
//! offers a few alternatives, and each alternative is a short sequence of
//! bounded glyph repetitions. Matching tracks every position reachable
//! after each tier, so no alternative is committed to early.

use std::collections::BTreeSet;

use crate::glyph::{Glyph, Lexer, Letter};
use Letter::{C, D, I, L, M, V, X};

/// `glyph{min,max}`: a bounded run of one glyph.
#[derive(Debug, Clone, Copy)]
struct Repeat {
    glyph: Glyph,
    min: usize,
    max: usize,
}

impl Repeat {
    /// Positions reachable by consuming this run starting at `start`.
    fn ends(self, glyphs: &[Glyph], start: usize) -> impl Iterator<Item = usize> {
        let run = glyphs[start..]
            .iter()
            .take(self.max)
            .take_while(|&&glyph| glyph == self.glyph)
            .count();
        (self.min..=run).map(move |n| start + n)
    }
}

const fn one(glyph: Glyph) -> Repeat {
    Repeat {
        glyph,
        min: 1,
        max: 1,
    }
}

const fn opt(glyph: Glyph) -> Repeat {
    Repeat {
        glyph,
        min: 0,
        max: 1,
    }
}

const fn up_to_three(glyph: Glyph) -> Repeat {
    Repeat {
        glyph,
        min: 0,
        max: 3,
    }
}

const fn s(letter: Letter) -> Glyph {
    Glyph::std(letter)
}

const fn e(letter: Letter) -> Glyph {
    Glyph::ext(letter)
}

/// One magnitude tier and its alternatives.
struct Tier {
    alternatives: &'static [&'static [Repeat]],
}

impl Tier {
    /// Positions reachable after this tier from any of `starts`.
    fn advance(&self, glyphs: &[Glyph], starts: &BTreeSet<usize>) -> BTreeSet<usize> {
        let mut ends = BTreeSet::new();
        for &start in starts {
            for alternative in self.alternatives {
                ends.extend(match_sequence(alternative, glyphs, start));
            }
        }
        ends
    }
}

fn match_sequence(sequence: &[Repeat], glyphs: &[Glyph], start: usize) -> BTreeSet<usize> {
    let mut positions = BTreeSet::from([start]);
    for repeat in sequence {
        positions = positions
            .into_iter()
            .flat_map(|p| repeat.ends(glyphs, p))
            .collect();
        if positions.is_empty() {
            break;
        }
    }
    positions
}

/// Tiers from highest to lowest magnitude.
///
/// The thousands tier spells its unit as `_I` or `M`, and also admits an
/// `_X` before a run of `M`. That `_X` may follow three `_X` from the
/// ten-thousands tier, so `_X_X_X_X` is well formed.
#[rustfmt::skip]
static TIERS: [Tier; 7] = [
    // millions
    Tier {
        alternatives: &[&[up_to_three(e(M))]],
    },
    // hundred-thousands
    Tier {
        alternatives: &[
            &[one(e(C)), one(e(M))],
            &[one(e(C)), one(e(D))],
            &[opt(e(D)), up_to_three(e(C))],
        ],
    },
    // ten-thousands
    Tier {
        alternatives: &[
            &[one(e(X)), one(e(C))],
            &[one(e(X)), one(e(L))],
            &[opt(e(L)), up_to_three(e(X))],
        ],
    },
    // thousands
    Tier {
        alternatives: &[
            &[one(e(I)), one(e(X))],
            &[one(e(I)), one(e(V))],
            &[opt(e(V)), up_to_three(e(I))],
            &[opt(e(X)), up_to_three(s(M))],
            &[opt(e(V)), up_to_three(s(M))],
        ],
    },
    // hundreds
    Tier {
        alternatives: &[
            &[one(s(C)), one(s(M))],
            &[one(s(C)), one(s(D))],
            &[opt(s(D)), up_to_three(s(C))],
        ],
    },
    // tens
    Tier {
        alternatives: &[
            &[one(s(X)), one(s(C))],
            &[one(s(X)), one(s(L))],
            &[opt(s(L)), up_to_three(s(X))],
        ],
    },
    // units
    Tier {
        alternatives: &[
            &[one(s(I)), one(s(X))],
            &[one(s(I)), one(s(V))],
            &[opt(s(V)), up_to_three(s(I))],
        ],
    },
];

/// Returns true if the glyph sequence is a well-formed numeral.
///
/// The empty sequence is not a numeral.
#[must_use]
pub fn is_well_formed(glyphs: &[Glyph]) -> bool {
    if glyphs.is_empty() {
        return false;
    }
    let reachable = TIERS
        .iter()
        .fold(BTreeSet::from([0]), |starts, tier| tier.advance(glyphs, &starts));
    reachable.contains(&glyphs.len())
}

/// Checks whether text is a well-formed numeral, ignoring case.
///
/// Never fails: empty text, garbage, and malformed numerals all yield
/// `false`.
#[must_use]
pub fn validate(text: &str) -> bool {
    Lexer::tokenize(text).is_ok_and(|glyphs| is_well_formed(&glyphs))
}
