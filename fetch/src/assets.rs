//! File listing for a public S3-compatible bucket.
//!
//! Remote assets are optional: every failure is logged and degrades to an
//! empty listing so callers can carry on with what ships locally.
use super::http::TimeoutFetcher;
use super::s3;
use launchpad_types::{ErrorCode, FetchError, FetchRequest};
use serde::{Deserialize, Serialize};
use url::Url;

pub const DEFAULT_BUCKET_BASE_URL: &str = "https://assets.thetawave.metalmancy.tech";
pub const DEFAULT_PREFIX: &str = "free_assets/backgrounds";

/// Where to list from and how long to wait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteAssetOptions {
    /// Base URL of a bucket that answers `ListObjectsV2` requests.
    pub bucket_base_url: String,
    pub prefix: String,
    pub timeout_ms: u32,
}

impl Default for RemoteAssetOptions {
    fn default() -> Self {
        Self {
            bucket_base_url: DEFAULT_BUCKET_BASE_URL.to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
            timeout_ms: crate::FetchConfig::DEFAULT_TIMEOUT_MS,
        }
    }
}

impl RemoteAssetOptions {
    /// `<base>?prefix=<prefix>`.
    pub fn listing_url(&self) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.bucket_base_url).map_err(|e| {
            FetchError::new(ErrorCode::InvalidUrl, format!("invalid bucket url: {e}"))
                .with_detail("url", &self.bucket_base_url)
        })?;
        url.query_pairs_mut().append_pair("prefix", &self.prefix);
        Ok(url)
    }
}

/// List object keys under the configured prefix.
///
/// An empty result means something went wrong (and was logged) or the
/// prefix is genuinely empty.
pub async fn list_public_bucket(
    fetcher: &TimeoutFetcher,
    options: &RemoteAssetOptions,
) -> Vec<String> {
    tracing::info!(prefix = %options.prefix, "Starting to list the remote assets");

    let url = match options.listing_url() {
        Ok(url) => url,
        Err(e) => {
            tracing::error!(error = %e, "Cannot build bucket listing url");
            return Vec::new();
        }
    };

    let request = FetchRequest::new(url.as_str(), options.timeout_ms);
    let Some(body) = fetcher.fetch(&request).await.into_body() else {
        tracing::warn!("Received no data from unsigned S3 list objects request.");
        return Vec::new();
    };

    match s3::parse_list_bucket(&body) {
        Ok(listing) => {
            let keys = listing.keys();
            tracing::info!(count = keys.len(), "Retrieved remote asset paths: {:?}", keys);
            keys
        }
        Err(e) => {
            tracing::error!("Failed to parse s3 list bucket response. Err: {}", e);
            tracing::error!("Bad S3 listBuckets response; {}", body);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_url_appends_prefix() {
        let options = RemoteAssetOptions {
            bucket_base_url: "https://bucket.example.com".to_string(),
            prefix: "free_assets/backgrounds".to_string(),
            timeout_ms: 100,
        };
        let url = options.listing_url().unwrap();
        assert_eq!(url.host_str(), Some("bucket.example.com"));
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![("prefix".to_string(), "free_assets/backgrounds".to_string())]
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let options = RemoteAssetOptions {
            bucket_base_url: "not a url".to_string(),
            ..RemoteAssetOptions::default()
        };
        let err = options.listing_url().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidUrl);
        assert!(err.to_string().ends_with("(url: not a url)"));
    }

    #[test]
    fn defaults_point_at_public_backgrounds() {
        let options = RemoteAssetOptions::default();
        assert_eq!(options.bucket_base_url, DEFAULT_BUCKET_BASE_URL);
        assert_eq!(options.prefix, DEFAULT_PREFIX);
        assert_eq!(options.timeout_ms, 2000);
    }

    #[tokio::test]
    async fn invalid_base_url_lists_nothing() {
        let fetcher = TimeoutFetcher::new(&crate::FetchConfig::default()).unwrap();
        let options = RemoteAssetOptions {
            bucket_base_url: "::".to_string(),
            ..RemoteAssetOptions::default()
        };
        assert!(list_public_bucket(&fetcher, &options).await.is_empty());
    }
}
