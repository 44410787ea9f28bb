//! Join command

use anyhow::Result;
use clap::Args;
use thrice_core::convert::to_delimited_with;
use thrice_core::ThriceConfig;

#[derive(Args, Debug)]
pub struct JoinArgs {
    /// Items to join
    pub items: Vec<String>,

    /// Separator, overriding list.separator from the config
    #[arg(short, long)]
    pub separator: Option<char>,
}

pub fn run(args: JoinArgs, config: &ThriceConfig) -> Result<()> {
    let separator = args.separator.unwrap_or(config.list.separator);
    println!("{}", to_delimited_with(&args.items, separator));
    Ok(())
}
