//! Launchpad CLI - run the timeout fetch and bucket listing from a terminal.
//!
//! ```text
//! main() -> Cli::parse() -> init_tracing() -> LaunchpadConfig::load()
//!                                                     |
//!                                           fetch | list-assets
//! ```
//!
//! Fetch failures are never errors inside the library; here they turn into
//! a non-zero exit status so scripts can tell absence from success.

mod args;

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use args::{Cli, Command};
use launchpad_config::LaunchpadConfig;
use launchpad_fetch::{FetchOutcome, FetchRequest, TimeoutFetcher, list_public_bucket};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // Logs go to stderr so fetched bodies on stdout stay clean.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing();

    let config = match LaunchpadConfig::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(err) => {
            tracing::warn!(path = %err.path().display(), "Ignoring unusable config: {err}");
            LaunchpadConfig::default()
        }
    };
    let fetcher = TimeoutFetcher::new(&config.fetch_config())?;

    match cli.command {
        Command::Fetch { url, timeout_ms } => {
            let timeout_ms = timeout_ms.unwrap_or(fetcher.default_timeout_ms());
            match fetcher.fetch(&FetchRequest::new(url, timeout_ms)).await {
                FetchOutcome::Success { body } => {
                    print!("{body}");
                    Ok(ExitCode::SUCCESS)
                }
                other => {
                    eprintln!("No data: {other}");
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::ListAssets { prefix, timeout_ms } => {
            let mut options = config.asset_options();
            if let Some(prefix) = prefix {
                options.prefix = prefix;
            }
            if let Some(timeout_ms) = timeout_ms {
                options.timeout_ms = timeout_ms;
            }
            for key in list_public_bucket(&fetcher, &options).await {
                println!("{key}");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
