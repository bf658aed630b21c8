//! Structured errors for internal fallible steps.
//!
//! [`FetchError`] never crosses the best-effort fetch boundary; it exists so
//! client construction, body reads and response parsing can use `?` and carry
//! a stable [`ErrorCode`] into the log line that replaces them.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Stable failure codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// HTTP 4xx client error.
    Http4xx,
    /// HTTP 5xx server error.
    Http5xx,
    /// Any other non-2xx status (1xx/3xx surfaced as final).
    HttpOther,
    /// Deadline exceeded.
    Timeout,
    /// Network/connection error.
    Network,
    /// URL could not be built or parsed.
    InvalidUrl,
    /// Response body could not be parsed.
    Parse,
    /// Unexpected internal error.
    Internal,
}

impl ErrorCode {
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        match status {
            400..=499 => Self::Http4xx,
            500..=599 => Self::Http5xx,
            _ => Self::HttpOther,
        }
    }
}

/// Error details as key-value pairs, rendered after the message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorDetails(pub Vec<(String, String)>);

impl fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }
        f.write_str(" (")?;
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        f.write_str(")")
    }
}

/// Structured error with a stable code, message and context.
#[derive(Debug, Clone, Error)]
#[error("{message}{details}")]
pub struct FetchError {
    pub code: ErrorCode,
    pub message: String,
    pub details: ErrorDetails,
}

impl FetchError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: ErrorDetails::default(),
        }
    }

    /// Add a detail field.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.0.push((key.into(), value.into()));
        self
    }
}
