use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;

/// echo [STRING]...
/// Write the arguments back, separated by single spaces.
pub struct EchoCommand;

impl Command for EchoCommand {
    fn execute(&self, args: &[String], _ctx: &mut TerminalContext) -> CommandResult {
        Ok(args.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echo_joins_verbatim() {
        let mut ctx = TerminalContext::new();
        let args = vec!["gm".to_string(), "".to_string(), "ser".to_string()];
        assert_eq!(EchoCommand.execute(&args, &mut ctx).unwrap(), "gm  ser");
        assert_eq!(EchoCommand.execute(&[], &mut ctx).unwrap(), "");
    }
}
