//! HTTP client with a per-request deadline.
//!
//! Every call races the request against its own timer and resolves to exactly
//! one [`FetchOutcome`]. Nothing here returns an error: each failure kind is
//! logged where it is detected and reported as an outcome value.
use super::race::{Raced, race};
use super::resolved::ResolvedFetchConfig;
use super::types::FetchConfig;
use launchpad_types::{ErrorCode, FetchError, FetchOutcome, FetchRequest};
use reqwest::{Client, Response};
use tokio::time::sleep;

/// Reusable fetch client. Clones share the connection pool; per-call state
/// (timer, in-flight request) is owned by the call.
#[derive(Debug, Clone)]
pub struct TimeoutFetcher {
    client: Client,
    default_timeout_ms: u32,
}

impl TimeoutFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let resolved = ResolvedFetchConfig::from_config(config);
        let client = Client::builder()
            .user_agent(resolved.user_agent.as_str())
            .build()
            .map_err(|e| {
                FetchError::new(
                    ErrorCode::Internal,
                    format!("failed to build http client: {e}"),
                )
            })?;

        Ok(Self {
            client,
            default_timeout_ms: resolved.default_timeout_ms,
        })
    }

    /// Deadline used by [`Self::get`] when the caller does not pass one.
    #[must_use]
    pub fn default_timeout_ms(&self) -> u32 {
        self.default_timeout_ms
    }

    /// Fetch `url` with the configured default deadline.
    pub async fn get(&self, url: &str) -> FetchOutcome {
        self.fetch(&FetchRequest::new(url, self.default_timeout_ms))
            .await
    }

    /// Run one request against its deadline.
    pub async fn fetch(&self, request: &FetchRequest) -> FetchOutcome {
        if request.expires_immediately() {
            tracing::error!(url = %request.url, "Failed to download url in time.");
            return FetchOutcome::Timeout;
        }

        let send = self.client.get(request.url.as_str()).send();
        match race(send, sleep(request.timeout())).await {
            Raced::Expired => {
                tracing::error!(
                    url = %request.url,
                    timeout_ms = request.timeout_ms,
                    "Failed to download url in time."
                );
                FetchOutcome::Timeout
            }
            Raced::Finished(Err(e)) => {
                tracing::error!(url = %request.url, error = %e, "Uncaught error fetching data");
                FetchOutcome::network(e.to_string())
            }
            Raced::Finished(Ok(response)) => read_response(response).await,
        }
    }
}

async fn read_response(response: Response) -> FetchOutcome {
    tracing::trace!(
        status = %response.status(),
        url = %response.url(),
        headers = ?response.headers(),
        "Received response"
    );

    let status = response.status();
    if !status.is_success() {
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        tracing::error!(
            "Network response was not ok: {} {}",
            status.as_u16(),
            status_text
        );
        return FetchOutcome::HttpError {
            status: status.as_u16(),
            status_text,
        };
    }

    match response.text().await {
        Ok(body) => FetchOutcome::success(body),
        Err(e) => {
            tracing::error!(error = %e, "Failed to read response body");
            FetchOutcome::network(format!("response body error: {e}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fetcher_uses_default_timeout() {
        let fetcher = TimeoutFetcher::new(&FetchConfig::default()).unwrap();
        assert_eq!(fetcher.default_timeout_ms(), FetchConfig::DEFAULT_TIMEOUT_MS);
    }

    #[tokio::test]
    async fn zero_timeout_never_touches_the_network() {
        let fetcher = TimeoutFetcher::new(&FetchConfig::default()).unwrap();
        // An unroutable address would hang or fail; a zero deadline must win first.
        let outcome = fetcher
            .fetch(&FetchRequest::new("http://10.255.255.1/", 0))
            .await;
        assert_eq!(outcome, FetchOutcome::Timeout);
    }

    #[tokio::test]
    async fn malformed_url_is_a_network_error() {
        let fetcher = TimeoutFetcher::new(&FetchConfig::default()).unwrap();
        let outcome = fetcher
            .fetch(&FetchRequest::new("not a url", 1000))
            .await;
        assert!(matches!(outcome, FetchOutcome::NetworkError { .. }));
    }
}
