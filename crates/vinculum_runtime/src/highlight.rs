//! Syntax highlighting for the REPL.

use std::borrow::Cow;

use vinculum_numeral::{Letter, VINCULUM_MARKER};

/// Highlighter for numeral and number input.
///
/// Standard glyphs are bold, extended glyphs cyan, digits magenta, and any
/// character that can appear in neither a numeral nor a number red.
pub struct NumeralHighlighter;

impl NumeralHighlighter {
    /// Creates a new highlighter.
    pub const fn new() -> Self {
        Self
    }

    /// Highlight a line of input.
    #[allow(clippy::unused_self)]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.is_empty() {
            return Cow::Borrowed(line);
        }

        let mut result = String::with_capacity(line.len() * 4);
        let mut chars = line.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                // Extended glyph: marker plus letter
                VINCULUM_MARKER => match chars.peek().copied() {
                    Some(next) if is_letter(next) => {
                        chars.next();
                        result.push_str("\x1b[1;36m"); // bold cyan
                        result.push(c);
                        result.push(next);
                        result.push_str("\x1b[0m");
                    }
                    _ => push_invalid(&mut result, c),
                },

                c if is_letter(c) => {
                    result.push_str("\x1b[1m");
                    result.push(c);
                    result.push_str("\x1b[0m");
                }

                c if c.is_ascii_digit() || c == '-' || c == '+' => {
                    result.push_str("\x1b[35m"); // magenta
                    result.push(c);
                    result.push_str("\x1b[0m");
                }

                c if c.is_whitespace() => result.push(c),

                _ => push_invalid(&mut result, c),
            }
        }

        Cow::Owned(result)
    }
}

impl Default for NumeralHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

fn is_letter(c: char) -> bool {
    Letter::from_char(c.to_ascii_uppercase()).is_some()
}

fn push_invalid(result: &mut String, c: char) {
    result.push_str("\x1b[31m"); // red
    result.push(c);
    result.push_str("\x1b[0m");
}
