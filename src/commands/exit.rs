use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;

pub struct ExitCommand;

impl Command for ExitCommand {
    fn execute(&self, _args: &[String], ctx: &mut TerminalContext) -> CommandResult {
        log::info!("exit requested from {}", ctx.cwd);
        ctx.request_close();
        Ok("Exiting terminal...".to_string())
    }
}
