use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;
use crate::error::ShellError;
use crate::vfs::VfsNode;

/// grep PATTERN FILE
/// Plain substring match, one file, 1-based line numbers.
pub struct GrepCommand;

impl Command for GrepCommand {
    fn execute(&self, args: &[String], ctx: &mut TerminalContext) -> CommandResult {
        let (pattern, filename) = match args {
            [pattern, filename, ..] => (pattern, filename),
            _ => return Err(ShellError::MissingOperand("grep")),
        };
        let path = ctx.resolve_path(filename);

        let content = match ctx.vfs.lookup(&path) {
            Some(VfsNode::File { content }) => content,
            Some(VfsNode::Directory { .. }) => {
                return Err(ShellError::IsADirectory {
                    cmd: "grep",
                    operand: filename.clone(),
                })
            }
            None => {
                return Err(ShellError::NoSuchPath(format!(
                    "grep: {}: No such file or directory",
                    filename
                )))
            }
        };

        let matches: Vec<String> = content
            .split('\n')
            .enumerate()
            .filter(|(_, line)| line.contains(pattern.as_str()))
            .map(|(i, line)| format!("{}: {}", i + 1, line))
            .collect();

        if matches.is_empty() {
            Ok(format!("No matches found for '{}'", pattern))
        } else {
            Ok(matches.join("\n"))
        }
    }
}
