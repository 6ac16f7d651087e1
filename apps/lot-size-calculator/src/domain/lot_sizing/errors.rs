//! Error types for lot sizing calculations.

use std::fmt;

/// Error raised while turning raw inputs into a lot size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LotSizingError {
    /// A required numeric field was absent or blank.
    MissingField {
        /// Wire name of the field.
        field: String,
    },
    /// A numeric field did not contain a decimal number.
    InvalidNumber {
        /// Wire name of the field.
        field: String,
        /// The text that failed to parse.
        value: String,
    },
    /// A numeric field holds a finite number beyond the decimal range
    /// (magnitude above `Decimal::MAX` or more precision than 28 places can hold).
    OutOfRange {
        /// Wire name of the field.
        field: String,
        /// The text as submitted.
        value: String,
    },
    /// An intermediate value left the representable decimal range.
    ArithmeticOverflow {
        /// Calculation step that overflowed.
        stage: &'static str,
    },
}

impl LotSizingError {
    /// Wire name of the offending field, if the error is tied to one.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField { field }
            | Self::InvalidNumber { field, .. }
            | Self::OutOfRange { field, .. } => Some(field),
            Self::ArithmeticOverflow { .. } => None,
        }
    }
}

impl fmt::Display for LotSizingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "Missing value for '{field}'"),
            Self::InvalidNumber { field, value } => {
                write!(f, "Invalid number for '{field}': {value:?}")
            }
            Self::OutOfRange { field, value } => {
                write!(f, "Number out of supported range for '{field}': {value:?}")
            }
            Self::ArithmeticOverflow { stage } => {
                write!(f, "Arithmetic overflow while computing {stage}")
            }
        }
    }
}

impl std::error::Error for LotSizingError {}
