//! A validated numeral paired with its value.

use std::fmt;
use std::str::FromStr;

use crate::decode::decode;
use crate::encode::encode;
use crate::error::{Error, Result};

/// A well-formed numeral denoting a positive value in range.
///
/// Parsing normalizes the text to uppercase, so `"xiv".parse::<Numeral>()`
/// displays as `XIV`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Numeral {
    text: String,
    value: u32,
}

impl Numeral {
    /// Returns the numeral's value.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Returns the numeral text, uppercase.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl FromStr for Numeral {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let value = decode(text)?;
        Ok(Self {
            text: text.to_uppercase(),
            value,
        })
    }
}

impl TryFrom<i64> for Numeral {
    type Error = Error;

    /// Encodes `value`. Unlike [`encode`], zero and negative values are
    /// rejected with a range error since they have no numeral.
    fn try_from(value: i64) -> Result<Self> {
        if value < 1 {
            return Err(Error::value_out_of_range(value));
        }
        let text = encode(value)?;
        Ok(Self {
            text,
            // In range: encode rejected anything above the limit.
            value: u32::try_from(value).map_err(|_| Error::value_out_of_range(value))?,
        })
    }
}

impl From<Numeral> for u32 {
    fn from(numeral: Numeral) -> Self {
        numeral.value
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
