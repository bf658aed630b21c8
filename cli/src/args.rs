//! Command-line parsing.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "launchpad", version)]
#[command(about = "Timeout-guarded fetch and public bucket listing")]
#[command(
    after_help = "Logging is controlled with RUST_LOG (default: info).\n\
                  Config is read from ~/.launchpad/config.toml or $LAUNCHPAD_CONFIG."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Fetch a URL and print its body (exit 1 if no data arrived)
    Fetch {
        /// URL to GET
        url: String,
        /// Deadline in milliseconds; 0 gives up immediately
        #[arg(long)]
        timeout_ms: Option<u32>,
    },
    /// List object keys in the public asset bucket
    ListAssets {
        /// Key prefix to list under
        #[arg(long)]
        prefix: Option<String>,
        /// Deadline in milliseconds
        #[arg(long)]
        timeout_ms: Option<u32>,
    },
}
