use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, analyze::analyze, init::init},
};

/// Dispatch to the command handler for the parsed arguments.
///
/// With no command, the analysis runs using the top-level arguments.
pub fn run(Arguments { command, analyze: args }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Init) => init(),
        None => analyze(&args),
    }
}
