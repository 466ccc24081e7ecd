//! Command Center CLI - Main entry point

mod cli;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command Center - discover, admit and dispatch commands
#[derive(Parser, Debug)]
#[command(name = "cmdcenter")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Settings file to use instead of the user/project settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Namespace to scan (repeatable, replaces configured namespaces)
    #[arg(short, long = "namespace")]
    namespaces: Vec<String>,

    /// Directory containing <namespace>.json candidate manifests
    #[arg(long)]
    manifest_dir: Option<PathBuf>,

    /// Keep dispatching after a command fails
    #[arg(long)]
    continue_on_error: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Scan namespaces and run every admitted command (default)
    Run,
    /// Scan namespaces and list admitted commands with the scan report
    List,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Load configuration
    let working_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let settings = cli::load_settings(args.config.as_deref(), &working_dir)?;
    let settings = cli::apply_overrides(
        settings,
        &cli::Overrides {
            namespaces: args.namespaces,
            manifest_dir: args.manifest_dir,
            continue_on_error: args.continue_on_error,
        },
    )?;

    match args.command.unwrap_or(Command::Run) {
        Command::Run => cli::run(&settings),
        Command::List => cli::list(&settings),
    }
}
