//! Command line of the `traq-writer` binary.

use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};

/// traq-writer: post a message to a traQ webhook
///
/// Sends MESSAGE, or everything read from stdin when MESSAGE is omitted,
/// as one message.
#[derive(Debug, Parser)]
#[command(name = "traq-writer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Message to post (reads stdin if omitted)
    pub message: Option<String>,

    /// Webhook id
    #[arg(long = "webhook-id", env = "TRAQ_WEBHOOK_ID")]
    pub webhook_id: Option<String>,

    /// Webhook secret used to sign messages (unsigned if empty)
    #[arg(long, env = "TRAQ_WEBHOOK_SECRET", hide_env_values = true)]
    pub secret: Option<String>,

    /// Origin of the traQ deployment
    #[arg(long, env = "TRAQ_ORIGIN")]
    pub origin: Option<String>,

    /// Post to this channel instead of the webhook's default channel
    #[arg(long, env = "TRAQ_CHANNEL_ID")]
    pub channel: Option<String>,

    /// Disable embed rendering of the message
    #[arg(long = "no-embed")]
    pub no_embed: bool,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// TOML file with a [webhook] table
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Log request details to stderr
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write a commented configuration template
    Init {
        /// Where to write the template
        #[arg(long, short, default_value = "traq-writer.toml")]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses `std::env::args`, exiting with usage on error.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses an explicit argument list, first item being the program name.
    ///
    /// Only `iter` is consulted: the `TRAQ_*` environment variables are
    /// not read, so the result does not depend on the calling process.
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = Self::command_without_env().get_matches_from(iter);
        Self::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }

    /// The clap command with every environment fallback removed.
    pub(crate) fn command_without_env() -> clap::Command {
        Self::command().mut_args(|arg| arg.env(None::<&str>))
    }
}
