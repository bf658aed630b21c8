//! Core domain types for Launchpad.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! The fetch, bootstrap and config crates all build on these.

mod error;

pub use error::{ErrorCode, ErrorDetails, FetchError};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

// ============================================================================
// Requests
// ============================================================================

/// A single timeout-guarded GET.
///
/// The URL is not validated here; a bad URL surfaces as a network failure
/// when the request is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchRequest {
    pub url: String,
    /// Deadline in milliseconds. Zero expires immediately.
    pub timeout_ms: u32,
}

impl FetchRequest {
    pub fn new(url: impl Into<String>, timeout_ms: u32) -> Self {
        Self {
            url: url.into(),
            timeout_ms,
        }
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(u64::from(self.timeout_ms))
    }

    /// True when the deadline has already passed before the request starts.
    #[must_use]
    pub fn expires_immediately(&self) -> bool {
        self.timeout_ms == 0
    }
}

// ============================================================================
// Outcomes
// ============================================================================

/// The result of exactly one [`FetchRequest`].
///
/// Failures are values, not errors: the fetch helper logs them and callers
/// that only care about the body use [`FetchOutcome::into_body`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FetchOutcome {
    /// 2xx response; full body decoded as text.
    Success { body: String },
    /// Response arrived first but with a non-2xx status.
    HttpError { status: u16, status_text: String },
    /// The deadline fired before a response arrived.
    Timeout,
    /// Transport-level failure (DNS, connect, reset, body read).
    NetworkError { message: String },
}

impl FetchOutcome {
    pub fn success(body: impl Into<String>) -> Self {
        Self::Success { body: body.into() }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::NetworkError {
            message: message.into(),
        }
    }

    /// Body text on success, `None` for every failure kind.
    #[must_use]
    pub fn into_body(self) -> Option<String> {
        match self {
            Self::Success { body } => Some(body),
            Self::HttpError { .. } | Self::Timeout | Self::NetworkError { .. } => None,
        }
    }

    /// Stable error code for failure outcomes; `None` on success.
    #[must_use]
    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            Self::Success { .. } => None,
            Self::HttpError { status, .. } => Some(ErrorCode::from_status(*status)),
            Self::Timeout => Some(ErrorCode::Timeout),
            Self::NetworkError { .. } => Some(ErrorCode::Network),
        }
    }
}

impl fmt::Display for FetchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success { body } => write!(f, "success ({} bytes)", body.len()),
            Self::HttpError {
                status,
                status_text,
            } => write!(f, "http error: {status} {status_text}"),
            Self::Timeout => f.write_str("timed out"),
            Self::NetworkError { message } => write!(f, "network error: {message}"),
        }
    }
}
