//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::defaults;

/// hookexec: execute a templated webhook
///
/// Renders the configured URL, method, headers, and body against the
/// supplied values, sends the request once, and prints the response.
#[derive(Debug, Parser)]
#[command(name = "hookexec")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// URL template
    #[arg(long)]
    pub url: Option<String>,

    /// HTTP method template
    #[arg(long)]
    pub method: Option<String>,

    /// Header value templates in 'Key=Value' or 'Key: Value' format (can be specified multiple times)
    #[arg(long = "header", value_name = "K=V")]
    pub headers: Vec<String>,

    /// Content-Type header
    #[arg(long = "content-type")]
    pub content_type: Option<String>,

    /// Body template
    #[arg(long)]
    pub body: Option<String>,

    /// Template value in 'Key=Value' format (can be specified multiple times)
    #[arg(long = "set", short = 'd', value_name = "K=V")]
    pub values: Vec<String>,

    /// Overall request timeout, e.g. "500ms" or "10s"
    #[arg(long)]
    pub timeout: Option<String>,

    /// Skip TLS certificate verification
    #[arg(long)]
    pub insecure: bool,

    /// Fail when a template references a missing value
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for hookexec
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
