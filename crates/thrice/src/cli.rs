//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

pub use crate::commands::config::ConfigCommands;
pub use crate::commands::join::JoinArgs;
pub use crate::commands::run::RunArgs;
pub use crate::commands::split::SplitArgs;

/// thrice - bounded retry runner and delimited list tools
#[derive(Parser, Debug)]
#[command(name = "thrice")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a config file (defaults to ~/.config/thrice/config.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a program, retrying it when it fails
    Run(RunArgs),

    /// Join items into one delimited string
    Join(JoinArgs),

    /// Split a delimited string into typed items
    Split(SplitArgs),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_run_keeps_program_flags() {
        let cli = Cli::parse_from(["thrice", "run", "--", "curl", "-fsS", "http://localhost"]);
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.command, vec!["curl", "-fsS", "http://localhost"]);
                assert_eq!(args.attempts, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["thrice", "join", "a", "b", "-vv", "-c", "/tmp/t.yaml"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config.as_deref().map(|p| p.as_str()), Some("/tmp/t.yaml"));
    }
}
