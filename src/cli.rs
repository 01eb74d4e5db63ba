//! CLI definitions for IGW
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be reached by completion generation and tests.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

/// Build clap styles.
///
/// - Green: headers, usage, command names (accent color)
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "igw")]
#[command(about = "[ Instagram Wrapped ] - your year on Instagram, straight from your data export")]
#[command(
    long_about = "Instagram Wrapped (IGW) - Extract yearly highlights from an Instagram data export.

Request your data from Instagram in HTML format, download the ZIP, and point
igw at it. Nothing leaves your machine: the archive is read in place.

QUICK START:
    igw extract export.zip             Print a summary
    igw extract export.zip --json      Print the full result as JSON
    igw identity export.zip            Show whose export this is

CONFIGURATION:
    igw config show                    Show the effective configuration
    igw config path                    Print the configuration file path"
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract all highlights from an export archive
    #[command(long_about = "Extract all highlights from an Instagram export archive.

Missing pages are not errors: the matching fields are reported as empty or
unknown. Only a file that is not a ZIP archive fails.

EXAMPLES:
    igw extract export.zip
    igw extract export.zip --json > wrapped.json
    igw extract export.zip --today 2024-12-31   Fix the date account age is measured to")]
    Extract {
        /// Path to the export ZIP
        #[arg(help = "Path to the export ZIP")]
        archive: PathBuf,
        /// Print JSON instead of the summary
        #[arg(long, help = "Print the result as JSON")]
        json: bool,
        /// Reference date for account age (YYYY-MM-DD)
        #[arg(long, value_name = "DATE", help = "Reference date for account age (YYYY-MM-DD)")]
        today: Option<NaiveDate>,
    },

    /// Show the account owner of an export archive
    Identity {
        /// Path to the export ZIP
        #[arg(help = "Path to the export ZIP")]
        archive: PathBuf,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    #[command(long_about = "Generate a shell completion script on stdout.

EXAMPLES:
    igw completions bash > ~/.local/share/bash-completion/completions/igw
    igw completions zsh > ~/.zfunc/_igw")]
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Print the configuration file path
    Path,
}
