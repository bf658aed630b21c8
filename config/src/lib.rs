//! Configuration loading for Launchpad.
//!
//! The config file lives at `~/.launchpad/config.toml` unless
//! `LAUNCHPAD_CONFIG` points elsewhere. Every section and field is optional;
//! the `*_options` accessors fill in defaults.
//!
//! ```toml
//! [fetch]
//! timeout_ms = 2000
//! user_agent = "launchpad/0.1"
//!
//! [assets]
//! bucket_base_url = "${ASSET_BUCKET_URL}"
//! prefix = "free_assets/backgrounds"
//!
//! [page]
//! trigger_id = "trigger_game_button"
//! screen_class = "screen"
//! ```

use launchpad_bootstrap::BootstrapOptions;
use launchpad_fetch::{FetchConfig, RemoteAssetOptions};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::{env, fs};
use thiserror::Error;

const CONFIG_PATH_ENV: &str = "LAUNCHPAD_CONFIG";

#[derive(Debug, Default, Deserialize)]
pub struct LaunchpadConfig {
    pub fetch: Option<FetchConfig>,
    pub assets: Option<AssetsConfig>,
    pub page: Option<PageConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AssetsConfig {
    /// Supports `${VAR}` expansion.
    pub bucket_base_url: Option<String>,
    pub prefix: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PageConfig {
    pub trigger_id: Option<String>,
    pub screen_class: Option<String>,
}

/// Expand `${VAR}` references from the environment. Unset variables become
/// empty strings; an unterminated `${` is kept literally.
pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            out.push_str(&rest[start..]);
            return out;
        };
        let var = &after[..end];
        if !var.is_empty() {
            out.push_str(&env::var(var).unwrap_or_default());
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}

impl LaunchpadConfig {
    /// Load from the default location. A missing file is `Ok(None)`.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn fetch_config(&self) -> FetchConfig {
        self.fetch.clone().unwrap_or_default()
    }

    /// Bucket listing options; the timeout follows `[fetch] timeout_ms`.
    #[must_use]
    pub fn asset_options(&self) -> RemoteAssetOptions {
        let defaults = RemoteAssetOptions::default();
        let assets = self.assets.as_ref();
        RemoteAssetOptions {
            bucket_base_url: assets
                .and_then(|a| a.bucket_base_url.as_deref())
                .map(expand_env_vars)
                .filter(|url| !url.trim().is_empty())
                .unwrap_or(defaults.bucket_base_url),
            prefix: assets
                .and_then(|a| a.prefix.clone())
                .unwrap_or(defaults.prefix),
            timeout_ms: self.fetch_config().timeout_ms(),
        }
    }

    #[must_use]
    pub fn bootstrap_options(&self) -> BootstrapOptions {
        let defaults = BootstrapOptions::default();
        let page = self.page.as_ref();
        BootstrapOptions {
            trigger_id: page
                .and_then(|p| p.trigger_id.clone())
                .unwrap_or(defaults.trigger_id),
            screen_class: page
                .and_then(|p| p.screen_class.clone())
                .unwrap_or(defaults.screen_class),
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    if let Ok(path) = env::var(CONFIG_PATH_ENV)
        && !path.trim().is_empty()
    {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".launchpad").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    // expand_env_vars tests

    #[test]
    fn expand_env_vars_no_vars() {
        assert_eq!(expand_env_vars("hello world"), "hello world");
    }

    #[test]
    fn expand_env_vars_single_var() {
        unsafe {
            env::set_var("LAUNCHPAD_TEST_BUCKET", "https://bucket.example.com");
        }
        let result = expand_env_vars("${LAUNCHPAD_TEST_BUCKET}/assets");
        assert_eq!(result, "https://bucket.example.com/assets");
        unsafe {
            env::remove_var("LAUNCHPAD_TEST_BUCKET");
        }
    }

    #[test]
    fn expand_env_vars_missing_var_becomes_empty() {
        unsafe {
            env::remove_var("LAUNCHPAD_TEST_MISSING");
        }
        assert_eq!(expand_env_vars("a${LAUNCHPAD_TEST_MISSING}b"), "ab");
    }

    #[test]
    fn expand_env_vars_unterminated_is_literal() {
        assert_eq!(expand_env_vars("a${OPEN"), "a${OPEN");
        assert_eq!(expand_env_vars("${}x"), "x");
    }

    // config_path tests

    #[test]
    fn config_path_env_override_and_blank_fallback() {
        unsafe {
            env::set_var(CONFIG_PATH_ENV, "/tmp/launchpad-test/custom.toml");
        }
        assert_eq!(
            config_path(),
            Some(PathBuf::from("/tmp/launchpad-test/custom.toml"))
        );
        assert_eq!(LaunchpadConfig::path(), config_path());

        unsafe {
            env::set_var(CONFIG_PATH_ENV, "   ");
        }
        let fallback = config_path();
        unsafe {
            env::remove_var(CONFIG_PATH_ENV);
        }
        assert_eq!(
            fallback,
            dirs::home_dir().map(|home| home.join(".launchpad").join("config.toml"))
        );
    }

    // loading tests

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = LaunchpadConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn bad_toml_is_parse_error() {
        let file = write_config("[fetch\ntimeout_ms = 1");
        let err = LaunchpadConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert_eq!(err.path(), &file.path().to_path_buf());
    }

    #[test]
    fn wrong_type_is_parse_error() {
        let file = write_config("[fetch]\ntimeout_ms = \"soon\"\n");
        let err = LaunchpadConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn empty_file_resolves_to_defaults() {
        let file = write_config("");
        let config = LaunchpadConfig::load_from(file.path()).unwrap().unwrap();

        assert_eq!(config.fetch_config(), FetchConfig::default());
        assert_eq!(config.asset_options(), RemoteAssetOptions::default());
        assert_eq!(config.bootstrap_options(), BootstrapOptions::default());
    }

    #[test]
    fn sections_override_defaults() {
        let file = write_config(
            r#"
[fetch]
timeout_ms = 750
user_agent = "custom-agent/2.0"

[assets]
bucket_base_url = "https://bucket.example.com"
prefix = "premium_assets"

[page]
trigger_id = "play"
screen_class = "overlay"
"#,
        );
        let config = LaunchpadConfig::load_from(file.path()).unwrap().unwrap();

        assert_eq!(config.fetch_config().timeout_ms(), 750);
        assert_eq!(
            config.fetch_config().user_agent.as_deref(),
            Some("custom-agent/2.0")
        );

        let assets = config.asset_options();
        assert_eq!(assets.bucket_base_url, "https://bucket.example.com");
        assert_eq!(assets.prefix, "premium_assets");
        assert_eq!(assets.timeout_ms, 750);

        let page = config.bootstrap_options();
        assert_eq!(page.trigger_id, "play");
        assert_eq!(page.screen_class, "overlay");
    }

    #[test]
    fn blank_expanded_bucket_url_falls_back() {
        unsafe {
            env::remove_var("LAUNCHPAD_TEST_UNSET_BUCKET");
        }
        let file = write_config("[assets]\nbucket_base_url = \"${LAUNCHPAD_TEST_UNSET_BUCKET}\"\n");
        let config = LaunchpadConfig::load_from(file.path()).unwrap().unwrap();
        assert_eq!(
            config.asset_options().bucket_base_url,
            RemoteAssetOptions::default().bucket_base_url
        );
    }
}
