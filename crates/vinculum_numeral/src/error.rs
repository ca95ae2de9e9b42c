//! Error types for the Vinculum system.
//!
//! Uses `thiserror` for ergonomic error definition. The conversion engine only
//! ever produces [`ErrorKind::Format`] and [`ErrorKind::ValueRange`]; the other
//! kinds belong to the interactive shell.

use thiserror::Error;

use crate::MAX_VALUE;

/// The main error type for Vinculum operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a format error for text that is not a well-formed numeral.
    #[must_use]
    pub fn format(input: impl Into<String>) -> Self {
        Self::new(ErrorKind::Format {
            input: input.into(),
        })
    }

    /// Creates a range error for a value above [`MAX_VALUE`].
    #[must_use]
    pub fn value_out_of_range(value: i64) -> Self {
        Self::new(ErrorKind::ValueRange {
            value,
            max: MAX_VALUE,
        })
    }

    /// Returns the offending value of a range error.
    ///
    /// For a numeral that decoded past the limit this is the full decoded
    /// total, not a clamped one.
    #[must_use]
    pub fn value(&self) -> Option<i64> {
        match self.kind {
            ErrorKind::ValueRange { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Returns true if the input text was not a well-formed numeral.
    #[must_use]
    pub fn is_format(&self) -> bool {
        matches!(self.kind, ErrorKind::Format { .. })
    }

    /// Returns true if a value fell outside the representable range.
    #[must_use]
    pub fn is_value_range(&self) -> bool {
        matches!(self.kind, ErrorKind::ValueRange { .. })
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(err))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Text does not match the Roman numeral grammar.
    #[error("invalid roman format: {input:?}")]
    Format {
        /// The rejected text, as supplied.
        input: String,
    },

    /// Value is, or decodes to, something outside `0..=max`.
    #[error("value {value} out of range, expected 0 to {max}")]
    ValueRange {
        /// The offending value.
        value: i64,
        /// The largest representable value.
        max: u32,
    },

    /// Terminal or output stream failure in the shell.
    #[error("i/o error: {0}")]
    Io(#[source] std::io::Error),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result alias used throughout Vinculum.
pub type Result<T> = std::result::Result<T, Error>;
