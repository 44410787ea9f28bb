//! Run command

use anyhow::{anyhow, bail, Result};
use clap::Args;
use std::process::Command;
use thrice_core::retry::{RetryingInvokerBuilder, TracingObserver};
use thrice_core::{RetryPolicy, ThriceConfig};
use tracing::debug;

use crate::output;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Maximum attempts, overriding retry.max-attempts from the config
    #[arg(short = 'n', long)]
    pub attempts: Option<u32>,

    /// Program to run, followed by its arguments
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

pub fn run(args: RunArgs, config: &ThriceConfig) -> Result<()> {
    let policy = match args.attempts {
        Some(attempts) => RetryPolicy::new(attempts)?,
        None => config.retry,
    };

    let Some((program, program_args)) = args.command.split_first() else {
        bail!("no program given");
    };

    debug!(
        program = %program,
        max_attempts = policy.max_attempts(),
        "running command"
    );

    let invoker = RetryingInvokerBuilder::new()
        .with_policy(policy)
        .with_observer(TracingObserver::new(program.as_str()))
        .build();

    match invoker.execute(|| run_once(program, program_args)) {
        Ok(()) => {
            output::success(&format!("{} succeeded", program));
            Ok(())
        }
        Err(exhausted) => {
            output::error(&format!(
                "{} failed after {} attempts",
                program,
                policy.max_attempts()
            ));
            Err(exhausted.into_source())
        }
    }
}

/// A single attempt: spawn the program and wait for it to exit successfully
fn run_once(program: &str, program_args: &[String]) -> Result<()> {
    let status = Command::new(program)
        .args(program_args)
        .status()
        .map_err(|e| anyhow!("failed to start {}: {}", program, e))?;

    if !status.success() {
        bail!("{} exited with {}", program, status);
    }

    Ok(())
}
