//! Boundary configuration for the fetch client.

use serde::{Deserialize, Serialize};

/// Fetch settings as they appear in the config file. Every field is optional;
/// see [`crate::resolved`] for the defaults applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Deadline per request in milliseconds. Default: 2000.
    pub timeout_ms: Option<u32>,

    /// User-Agent header for requests. Default: `launchpad/<version>`.
    pub user_agent: Option<String>,
}

impl FetchConfig {
    pub const DEFAULT_TIMEOUT_MS: u32 = 2000;

    #[must_use]
    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms.unwrap_or(Self::DEFAULT_TIMEOUT_MS)
    }
}
