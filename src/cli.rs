// src/cli.rs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use mailhog_inbox::cfg::config::DEFAULT_CONFIG_FILE;

/// Command-line interface options for mailhog-inbox.
#[derive(Parser, Debug)]
#[command(
    name = "mailhog-inbox",
    version,
    about = "Inspect messages captured by a MailHog server",
    long_about = None
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// MailHog base URL, without port
    #[arg(short = 'u', long, env = "MAILHOG_URL")]
    pub url: Option<String>,

    /// MailHog API port
    #[arg(short = 'p', long, env = "MAILHOG_PORT")]
    pub port: Option<u16>,

    #[arg(short, long, help = "turn on debug logging")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the number of captured messages
    Count,

    /// Delete every captured message
    DeleteAll,

    /// List captured messages, newest first
    List {
        /// Only messages addressed to this recipient
        #[arg(long)]
        to: Option<String>,
    },

    /// Open unread messages and print their fields
    Open {
        /// Only messages addressed to this recipient
        #[arg(long)]
        to: Option<String>,

        /// How many messages to open
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },

    /// Extract a pattern from the oldest message sent to a recipient
    Grab {
        #[arg(long)]
        to: String,

        /// Regex, bare or /delimited/flags
        pattern: String,
    },
}
