//! leafwalk CLI
//!
//! Lists and tests the leaves of JSON documents.

mod cli;
mod commands;
mod output;

use std::process::ExitCode;

use clap::Parser;
use miette::Result;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::{Check, run_check, run_init, run_leaves};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(passed) => {
            if passed {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

/// Runs the selected command. `Ok(false)` means a check did not hold.
fn run(cli: &Cli) -> Result<bool> {
    match &cli.command {
        Commands::Leaves { walk } => run_leaves(cli, walk).map(|_| true),
        Commands::Any { walk, falsey } => run_check(cli, walk, Check::any(*falsey)),
        Commands::All { walk, falsey } => run_check(cli, walk, Check::all(*falsey)),
        Commands::Init { force } => run_init(*force).map(|_| true),
    }
}
