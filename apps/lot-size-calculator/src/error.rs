//! Structured error handling for the lot size calculator.
//!
//! Errors carry a stable code, a human-readable message and key-value
//! context. The HTTP layer turns them into JSON bodies or re-rendered forms.
//!
//! # HTTP Status Codes
//!
//! | Code | Status | Usage |
//! |------|--------|-------|
//! | `INVALID_REQUEST` | 400 | Body could not be decoded |
//! | `MISSING_FIELD` | 422 | A numeric field is absent or blank |
//! | `INVALID_NUMBER` | 422 | A numeric field is not a number |
//! | `OUT_OF_RANGE` | 422 | A numeric field exceeds the decimal range |
//! | `ARITHMETIC_OVERFLOW` | 422 | Inputs too large to compute with |

use std::collections::HashMap;

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::lot_sizing::LotSizingError;

/// Error codes for the calculator service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Request body could not be decoded.
    InvalidRequest,
    /// A required numeric field was missing.
    MissingField,
    /// A numeric field did not parse.
    InvalidNumber,
    /// A numeric field is a number beyond the decimal range.
    OutOfRange,
    /// Calculation overflowed the decimal range.
    ArithmeticOverflow,
}

impl ErrorCode {
    /// HTTP status for this error.
    #[must_use]
    pub const fn http_status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest => StatusCode::BAD_REQUEST,
            Self::MissingField
            | Self::InvalidNumber
            | Self::OutOfRange
            | Self::ArithmeticOverflow => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Stable reason string.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::MissingField => "MISSING_FIELD",
            Self::InvalidNumber => "INVALID_NUMBER",
            Self::OutOfRange => "OUT_OF_RANGE",
            Self::ArithmeticOverflow => "ARITHMETIC_OVERFLOW",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason())
    }
}

/// A service error with context.
#[derive(Debug, Error)]
pub struct ServiceError {
    code: ErrorCode,
    message: String,
    context: Vec<(String, String)>,
}

impl ServiceError {
    /// Create a new service error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: Vec::new(),
        }
    }

    /// Add context to the error.
    #[must_use]
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.push((key.into(), value.into()));
        self
    }

    /// Get the error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the context.
    #[must_use]
    pub fn context(&self) -> &[(String, String)] {
        &self.context
    }

    /// Convert to an HTTP error body.
    #[must_use]
    pub fn to_http_response(&self) -> HttpErrorResponse {
        HttpErrorResponse {
            code: self.code.reason().to_string(),
            message: self.message.clone(),
            status: self.code.http_status().as_u16(),
            details: self.context.iter().cloned().collect(),
        }
    }

    /// Invalid request format.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code.reason(), self.message)
    }
}

impl From<LotSizingError> for ServiceError {
    fn from(err: LotSizingError) -> Self {
        let message = err.to_string();
        match err {
            LotSizingError::MissingField { field } => {
                Self::new(ErrorCode::MissingField, message).with_context("field", field)
            }
            LotSizingError::InvalidNumber { field, value } => {
                Self::new(ErrorCode::InvalidNumber, message)
                    .with_context("field", field)
                    .with_context("value", value)
            }
            LotSizingError::OutOfRange { field, value } => {
                Self::new(ErrorCode::OutOfRange, message)
                    .with_context("field", field)
                    .with_context("value", value)
            }
            LotSizingError::ArithmeticOverflow { stage } => {
                Self::new(ErrorCode::ArithmeticOverflow, message).with_context("stage", stage)
            }
        }
    }
}

/// HTTP error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpErrorResponse {
    /// Error code string.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// HTTP status code.
    pub status: u16,
    /// Additional details.
    pub details: HashMap<String, String>,
}
