//! Instagram Wrapped (IGW) - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use igw::cli::{Cli, Commands, ConfigCommands};

/// Route logs to stderr so stdout stays clean for reports and JSON.
///
/// `RUST_LOG` wins over `-v` when set.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "igw=warn",
        1 => "igw=debug",
        _ => "igw=trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Extract {
            archive,
            json,
            today,
        } => commands::extract::handle(&archive, json, today),
        Commands::Identity { archive } => commands::identity::handle(&archive),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
