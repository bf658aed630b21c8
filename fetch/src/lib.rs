//! Timeout-guarded HTTP fetching for Launchpad.
//!
//! Every request is raced against its own deadline and resolves to exactly one
//! [`FetchOutcome`]. Failures never propagate as errors: they are logged via
//! `tracing` where detected and surface to callers as an outcome value (or,
//! through [`fetch_with_timeout`], as `None`).
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`race`] | First-to-complete combinator that drops the loser |
//! | [`http`] | [`TimeoutFetcher`]: reqwest client with per-call deadline |
//! | [`s3`] | `ListObjectsV2` XML parsing |
//! | [`assets`] | Public bucket listing that degrades to empty |
//! | [`types`] | Boundary configuration |
//! | `resolved` | Internal: config resolution eliminating Option handling |
//!
//! # Usage
//!
//! ```ignore
//! use launchpad_fetch::{FetchConfig, FetchRequest, TimeoutFetcher};
//!
//! let fetcher = TimeoutFetcher::new(&FetchConfig::default())?;
//! let outcome = fetcher.fetch(&FetchRequest::new("https://example.com", 2000)).await;
//! if let Some(body) = outcome.into_body() {
//!     println!("{body}");
//! }
//! ```

pub mod assets;
pub mod http;
pub mod race;
mod resolved;
pub mod s3;
pub mod types;

pub use assets::{RemoteAssetOptions, list_public_bucket};
pub use http::TimeoutFetcher;
pub use launchpad_types::{ErrorCode, FetchError, FetchOutcome, FetchRequest};
pub use race::{Raced, race};
pub use types::FetchConfig;

use std::sync::LazyLock;

static SHARED_FETCHER: LazyLock<Result<TimeoutFetcher, FetchError>> =
    LazyLock::new(|| TimeoutFetcher::new(&FetchConfig::default()));

/// Default-configured fetcher shared by every [`fetch_with_timeout`] call, so
/// the client and its connection pool are built once.
fn shared_fetcher() -> Result<&'static TimeoutFetcher, &'static FetchError> {
    SHARED_FETCHER.as_ref()
}

/// Fetch `url` as text, giving up after `timeout_ms`.
///
/// Returns `None` on HTTP error, timeout or transport failure; which one it
/// was is only visible in the log.
pub async fn fetch_with_timeout(url: &str, timeout_ms: u32) -> Option<String> {
    let fetcher = match shared_fetcher() {
        Ok(fetcher) => fetcher,
        Err(e) => {
            tracing::error!(error = %e, "Uncaught error fetching data");
            return None;
        }
    };
    fetcher
        .fetch(&FetchRequest::new(url, timeout_ms))
        .await
        .into_body()
}
