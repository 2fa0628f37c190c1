use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;
use crate::error::ShellError;
use crate::vfs::VfsNode;

pub struct CatCommand;

impl Command for CatCommand {
    fn execute(&self, args: &[String], ctx: &mut TerminalContext) -> CommandResult {
        let operand = args.first().ok_or(ShellError::MissingOperand("cat"))?;
        let path = ctx.resolve_path(operand);

        match ctx.vfs.lookup(&path) {
            Some(VfsNode::File { content }) => Ok(content.clone()),
            Some(VfsNode::Directory { .. }) => Err(ShellError::IsADirectory {
                cmd: "cat",
                operand: operand.clone(),
            }),
            None => Err(ShellError::NoSuchPath(format!(
                "cat: {}: No such file or directory",
                operand
            ))),
        }
    }
}
