use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;
use crate::error::ShellError;
use crate::vfs::VfsNode;

pub struct CdCommand;

impl Command for CdCommand {
    fn execute(&self, args: &[String], ctx: &mut TerminalContext) -> CommandResult {
        // no operand goes home
        let target = args.first().map(String::as_str).unwrap_or("~");
        let new_path = ctx.resolve_path(target);

        // a file and a missing path get the same message
        match ctx.vfs.lookup(&new_path) {
            Some(VfsNode::Directory { .. }) => {
                ctx.cwd = new_path;
                Ok(String::new())
            }
            Some(VfsNode::File { .. }) => Err(ShellError::NotADirectory(format!(
                "cd: {}: No such directory",
                target
            ))),
            None => Err(ShellError::NoSuchPath(format!("cd: {}: No such directory", target))),
        }
    }
}
