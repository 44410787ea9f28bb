//! Config command

use anyhow::Result;
use clap::{Args, Subcommand};
use thrice_core::{ConfigLoader, ThriceConfig};

use crate::output;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the resolved configuration
    Show(ShowArgs),

    /// Show where the global config file is looked up
    Path,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(command: ConfigCommands, config: &ThriceConfig) -> Result<()> {
    match command {
        ConfigCommands::Show(args) => show(args, config),
        ConfigCommands::Path => path(),
    }
}

fn show(args: ShowArgs, config: &ThriceConfig) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(config)?);
    } else {
        print!("{}", serde_yaml_ng::to_string(config)?);
    }
    Ok(())
}

fn path() -> Result<()> {
    let loader = ConfigLoader::new();
    match loader.default_config_path() {
        Some(path) => {
            let state = if path.exists() { "found" } else { "not found" };
            output::kv(path.as_str(), state);
        }
        None => output::info("no home directory, only --config files are read"),
    }
    Ok(())
}
