//! Arabic to Roman conversion.

use crate::MAX_VALUE;
use crate::error::{Error, Result};
use crate::table;

/// Encodes a value as a numeral by greedy subtraction over the table.
///
/// Zero and negative values encode to the empty string without error;
/// callers that need a positive value should check before calling, or use
/// [`Numeral::try_from`](crate::Numeral).
///
/// # Errors
///
/// Returns a range error, and no partial output, if `value` exceeds
/// [`MAX_VALUE`].
///
/// # Examples
///
/// ```
/// use vinculum_numeral::encode;
///
/// assert_eq!(encode(71_000).unwrap(), "_L_X_XM");
/// assert!(encode(4_000_000).is_err());
/// ```
pub fn encode(value: i64) -> Result<String> {
    if value > i64::from(MAX_VALUE) {
        return Err(Error::value_out_of_range(value));
    }
    let Ok(mut remaining) = u32::try_from(value) else {
        return Ok(String::new());
    };

    let mut numeral = String::new();
    for symbol in table::symbols() {
        while remaining >= symbol.value {
            numeral.push_str(&symbol.to_string());
            remaining -= symbol.value;
        }
    }
    Ok(numeral)
}
