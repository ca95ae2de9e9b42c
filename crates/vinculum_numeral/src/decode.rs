//! Roman to Arabic conversion.

use crate::MAX_VALUE;
use crate::error::{Error, Result};
use crate::glyph::{Glyph, Lexer};
use crate::grammar::is_well_formed;
use crate::table;

/// Decodes a numeral into its value, ignoring case.
///
/// # Errors
///
/// Returns a format error if `text` is not a well-formed numeral; nothing is
/// decoded in that case. Returns a range error carrying the decoded total if
/// it exceeds [`MAX_VALUE`].
///
/// # Examples
///
/// ```
/// use vinculum_numeral::decode;
///
/// assert_eq!(decode("DCLXVIII").unwrap(), 668);
/// assert_eq!(decode("_m_d_c_l_x_vmdclxvi").unwrap(), 1_666_666);
/// ```
pub fn decode(text: &str) -> Result<u32> {
    let glyphs = Lexer::tokenize(text)?;
    if !is_well_formed(&glyphs) {
        return Err(Error::format(text));
    }

    let total = sum(&glyphs);
    if total > MAX_VALUE {
        return Err(Error::value_out_of_range(i64::from(total)));
    }
    Ok(total)
}

/// Sums a well-formed glyph sequence, reading subtractive compounds as one
/// symbol.
fn sum(glyphs: &[Glyph]) -> u32 {
    let mut total = 0;
    let mut cursor = 0;
    while cursor < glyphs.len() {
        let compound = glyphs
            .get(cursor + 1)
            .and_then(|&next| table::compound_value(glyphs[cursor], next));
        match compound {
            Some(value) => {
                total += value;
                cursor += 2;
            }
            None => {
                total += table::value_of(glyphs[cursor]);
                cursor += 1;
            }
        }
    }
    total
}
