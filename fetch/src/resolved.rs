//! Invariant-safe configuration resolution.
//!
//! Turns the optional, boundary-level [`FetchConfig`] into a
//! [`ResolvedFetchConfig`] with no `Option` fields, so the client code never
//! re-applies defaults.

use crate::types::FetchConfig;

pub(crate) const DEFAULT_USER_AGENT: &str = concat!("launchpad/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedFetchConfig {
    pub user_agent: String,
    pub default_timeout_ms: u32,
}

impl ResolvedFetchConfig {
    pub fn from_config(config: &FetchConfig) -> Self {
        let user_agent = config
            .user_agent
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        Self {
            user_agent,
            default_timeout_ms: config.timeout_ms(),
        }
    }
}
