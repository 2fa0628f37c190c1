use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;

/// pwd
/// Print the current working directory.
pub struct PwdCommand;

impl Command for PwdCommand {
    fn execute(&self, _args: &[String], ctx: &mut TerminalContext) -> CommandResult {
        Ok(ctx.cwd.clone())
    }
}
