use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;
use chrono::Local;

pub struct DateCommand;

/// `Sun Oct 18 2026 09:30:00 GMT+0200`
const DATE_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

impl Command for DateCommand {
    fn execute(&self, _args: &[String], _ctx: &mut TerminalContext) -> CommandResult {
        Ok(Local::now().format(DATE_FORMAT).to_string())
    }
}
