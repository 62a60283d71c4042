//! Command-line interface layer.
//!
//! - `args`: clap argument definitions
//! - `commands`: command handlers returning a `CommandResult`
//! - `report`: printing of command results
//! - `run`: dispatch from arguments to commands

use std::process::ExitCode;

use anyhow::Result;

pub mod args;
pub mod commands;
mod exit_status;
pub mod report;
mod run;

pub use args::{AnalyzeArgs, Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let result = run::run(args)?;
    report::print(&result);

    Ok(ExitStatus::Success.into())
}
