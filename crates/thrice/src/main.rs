//! thrice CLI - run commands with a bounded retry and convert delimited lists
//!
//! This is the main entry point for the thrice command-line interface.

mod cli;
mod commands;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use thrice_core::types::LoggingConfig;
use thrice_core::ConfigLoader;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Parse CLI args
    let cli = Cli::parse();

    // The configured level is not known until loading finishes
    let bootstrap = bootstrap_subscriber(cli.verbose, cli.quiet);
    let config = tracing::subscriber::with_default(bootstrap, || {
        ConfigLoader::new().load(cli.config.as_deref())
    })
    .context("failed to load configuration")?;

    // Initialize tracing
    init_tracing(cli.verbose, cli.quiet, &config.logging);

    // Run command
    match cli.command {
        Commands::Run(args) => commands::run::run(args, &config),
        Commands::Join(args) => commands::join::run(args, &config),
        Commands::Split(args) => commands::split::run(args, &config),
        Commands::Config(args) => commands::config::run(args, &config),
    }
}

/// Subscriber used while the configuration is loaded
fn bootstrap_subscriber(verbose: u8, quiet: bool) -> impl tracing::Subscriber + Send + Sync {
    let filter = match (quiet, verbose) {
        (true, _) => EnvFilter::new("error"),
        (false, 0) => EnvFilter::new("warn"),
        (false, 1) => EnvFilter::new("debug"),
        (false, _) => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
}

/// Initialize tracing with appropriate verbosity
///
/// Logs go to stderr so that command output on stdout stays pipeable.
fn init_tracing(verbose: u8, quiet: bool, logging: &LoggingConfig) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new(logging.level.to_ascii_lowercase()),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(logging.show_target)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
