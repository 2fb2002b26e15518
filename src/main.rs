// ABOUTME: Entry point for the nexus-cleaner CLI application.
// ABOUTME: Parses arguments and dispatches to appropriate command handlers.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use nexus_cleaner::config::{self, Config};
use nexus_cleaner::error::Result;
use nexus_cleaner::output::{Output, OutputMode};
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise the verbose flag picks the level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let mode = if cli.json {
        OutputMode::Json
    } else if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };

    if let Err(e) = run(cli, mode).await {
        Output::new(mode).error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli, mode: OutputMode) -> Result<()> {
    let output = Output::new(mode);
    let cwd = env::current_dir()?;

    match cli.command {
        Commands::Init { url, force } => {
            let path = config::init_config(&cwd, url.as_deref(), force)?;
            output.success(&format!("Wrote {}", path.display()));
            Ok(())
        }
        Commands::Clean(args) => {
            let config = Config::locate(cli.config.as_deref(), &cwd)?;
            commands::clean(config, args, output).await
        }
        Commands::Repos => {
            let config = Config::locate(cli.config.as_deref(), &cwd)?;
            commands::repos(config, output).await
        }
    }
}
