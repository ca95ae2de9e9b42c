//! Glyphs and the lexer that produces them.
//!
//! A glyph is one base letter, optionally carrying the vinculum marker. In
//! text the marker is written as a `_` prefix: `_X` is ten thousand.

use std::fmt;
use std::vec;

use crate::error::{Error, Result};

/// Prefix marking an extended (×1000) glyph.
pub const VINCULUM_MARKER: char = '_';

/// One of the seven base Roman letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Letter {
    /// 1
    I,
    /// 5
    V,
    /// 10
    X,
    /// 50
    L,
    /// 100
    C,
    /// 500
    D,
    /// 1000
    M,
}

impl Letter {
    /// Returns the letter's standalone value.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Self::I => 1,
            Self::V => 5,
            Self::X => 10,
            Self::L => 50,
            Self::C => 100,
            Self::D => 500,
            Self::M => 1000,
        }
    }

    /// Maps an uppercase character to its letter.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(Self::I),
            'V' => Some(Self::V),
            'X' => Some(Self::X),
            'L' => Some(Self::L),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            'M' => Some(Self::M),
            _ => None,
        }
    }

    /// Returns the uppercase character for this letter.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::I => 'I',
            Self::V => 'V',
            Self::X => 'X',
            Self::L => 'L',
            Self::C => 'C',
            Self::D => 'D',
            Self::M => 'M',
        }
    }
}

/// A single numeral glyph: a letter, standard or extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Glyph {
    /// The base letter.
    pub letter: Letter,
    /// Whether the glyph carries the vinculum (×1000).
    pub extended: bool,
}

impl Glyph {
    /// Creates a standard glyph.
    #[must_use]
    pub const fn std(letter: Letter) -> Self {
        Self {
            letter,
            extended: false,
        }
    }

    /// Creates an extended (×1000) glyph.
    #[must_use]
    pub const fn ext(letter: Letter) -> Self {
        Self {
            letter,
            extended: true,
        }
    }

    /// Returns the glyph's value.
    #[must_use]
    pub const fn value(self) -> u32 {
        if self.extended {
            self.letter.value() * 1000
        } else {
            self.letter.value()
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.extended {
            write!(f, "{VINCULUM_MARKER}")?;
        }
        write!(f, "{}", self.letter.as_char())
    }
}

/// Lexer for numeral text.
///
/// Text is normalized to uppercase before lexing, so `_x` and `_X` are the
/// same glyph. Anything that is not a letter or a marker followed by a
/// letter is a format error.
pub struct Lexer<'src> {
    /// Original text, kept for error reporting.
    source: &'src str,
    /// Uppercased characters still to be lexed.
    chars: vec::IntoIter<char>,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let upper: Vec<char> = source.chars().flat_map(char::to_uppercase).collect();
        Self {
            source,
            chars: upper.into_iter(),
        }
    }

    /// Lexes the whole text into glyphs.
    ///
    /// # Errors
    ///
    /// Returns a format error on the first character that cannot start or
    /// finish a glyph.
    pub fn tokenize(source: &'src str) -> Result<Vec<Glyph>> {
        Self::new(source).collect()
    }

    fn next_glyph(&mut self) -> Option<Result<Glyph>> {
        let c = self.chars.next()?;
        let glyph = if c == VINCULUM_MARKER {
            self.chars
                .next()
                .and_then(Letter::from_char)
                .map(Glyph::ext)
        } else {
            Letter::from_char(c).map(Glyph::std)
        };
        Some(glyph.ok_or_else(|| Error::format(self.source)))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Glyph>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_glyph()
    }
}
