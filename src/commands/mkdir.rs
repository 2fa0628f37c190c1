use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;
use crate::error::ShellError;

/// mkdir DIRECTORY
/// Simulated: reports success, the tree stays as it was.
pub struct MkdirCommand;

impl Command for MkdirCommand {
    fn execute(&self, args: &[String], _ctx: &mut TerminalContext) -> CommandResult {
        let dir = args.first().ok_or(ShellError::MissingOperand("mkdir"))?;
        Ok(format!("Created directory: {}", dir))
    }
}
