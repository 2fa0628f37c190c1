use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;

pub struct ClearCommand;

impl Command for ClearCommand {
    fn execute(&self, _args: &[String], ctx: &mut TerminalContext) -> CommandResult {
        // takes this command's own echo with it
        ctx.scrollback.clear();
        Ok(String::new())
    }
}
