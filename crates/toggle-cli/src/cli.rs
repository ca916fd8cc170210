//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use toggle_cli::action::Action;
use url::Url;

#[derive(Parser)]
#[command(
    name = "toggle-rows",
    version,
    about = "Edit a small set of toggles and share them as a link",
    long_about = "Edit 3 to 7 labeled toggles, of which at least one always stays OFF,\n\
                  and share the result as a URL-safe link that restores the same state."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log records with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module in log records.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,

    /// Include row labels in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Apply actions to a fresh or restored state and print the share link.
    Edit(EditArgs),

    /// Print the state carried by a share link or token.
    Show(ShowArgs),

    /// Print the "make your own" link for a share link.
    Builder {
        /// Share link to strip.
        #[arg(value_name = "URL")]
        url: Url,
    },
}

#[derive(Parser)]
pub struct EditArgs {
    /// Actions applied in order: add, remove, toggle:N, text:N=VALUE.
    ///
    /// Rows are numbered from 1. Actions naming a row that does not exist
    /// are ignored, as are add past 7 rows and remove below 3.
    #[arg(value_name = "ACTION")]
    pub actions: Vec<Action>,

    /// Start from a share link or bare token instead of the default rows.
    ///
    /// A restored share opens the shared view, where only toggle actions
    /// are available.
    #[arg(long = "from", value_name = "LINK")]
    pub from: Option<String>,

    /// Page the share link points at.
    #[arg(long = "base-url", value_name = "URL", default_value = "https://example.invalid/")]
    pub base_url: Url,

    /// Seed for choosing which toggle is switched off.
    #[arg(long = "seed", value_name = "N")]
    pub seed: Option<u64>,

    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputArg,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Share link or bare token.
    #[arg(value_name = "LINK")]
    pub link: String,

    /// Page a bare token is placed on.
    #[arg(long = "base-url", value_name = "URL", default_value = "https://example.invalid/")]
    pub base_url: Url,

    /// Seed for choosing which toggle is switched off.
    #[arg(long = "seed", value_name = "N")]
    pub seed: Option<u64>,

    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputArg,
}

/// How rows are printed.
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    Table,
    Plain,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
