use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;
use crate::error::ShellError;

/// touch FILE
/// Simulated like `mkdir`: silent, and nothing is created.
pub struct TouchCommand;

impl Command for TouchCommand {
    fn execute(&self, args: &[String], _ctx: &mut TerminalContext) -> CommandResult {
        args.first().ok_or(ShellError::MissingOperand("touch"))?;
        Ok(String::new())
    }
}
