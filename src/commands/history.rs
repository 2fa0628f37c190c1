use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;

pub struct HistoryCommand;

impl Command for HistoryCommand {
    fn execute(&self, _args: &[String], ctx: &mut TerminalContext) -> CommandResult {
        Ok(ctx.command_history().collect::<Vec<_>>().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ScrollbackEntry;

    #[test]
    fn test_history_skips_output_entries() {
        let mut ctx = TerminalContext::new();
        ctx.scrollback.push(ScrollbackEntry::command("/home/user$ ls".to_string()));
        ctx.scrollback.push(ScrollbackEntry::output("documents".to_string()));
        ctx.scrollback.push(ScrollbackEntry::command("/home/user$ pwd".to_string()));
        assert_eq!(
            HistoryCommand.execute(&[], &mut ctx).unwrap(),
            "/home/user$ ls\n/home/user$ pwd"
        );
    }

    #[test]
    fn test_history_empty_after_clear() {
        let mut ctx = TerminalContext::new();
        ctx.scrollback.clear();
        assert_eq!(HistoryCommand.execute(&[], &mut ctx).unwrap(), "");
    }
}
