use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;
use crate::error::ShellError;
use crate::vfs::VfsNode;
use chrono::{DateTime, Local};

pub struct LsCommand;

/// `Oct 18, 2026, 09:30 AM`
fn format_time(dt: &DateTime<Local>) -> String {
    dt.format("%b %-d, %Y, %I:%M %p").to_string()
}

fn type_char(node: &VfsNode) -> char {
    match node {
        VfsNode::Directory { .. } => 'd',
        VfsNode::File { .. } => '-',
    }
}

/// One long-listing row. Permissions, link count and owner are fixed.
fn long_line(name: &str, node: &VfsNode, date: &str) -> String {
    format!(
        "{}rw-r--r-- 1 user user {:>8} {} {}",
        type_char(node),
        node.display_size(),
        date,
        name
    )
}

impl Command for LsCommand {
    fn execute(&self, args: &[String], ctx: &mut TerminalContext) -> CommandResult {
        let long = args.iter().any(|a| a == "-l");
        let target = match args.iter().find(|a| !a.starts_with('-')) {
            Some(path) => ctx.resolve_path(path),
            None => ctx.cwd.clone(),
        };

        let entries = match ctx.vfs.list_dir(&target) {
            Some(entries) => entries,
            None => {
                let msg = format!("ls: cannot access '{}': No such directory", target);
                return Err(match ctx.vfs.lookup(&target) {
                    Some(_) => ShellError::NotADirectory(msg),
                    None => ShellError::NoSuchPath(msg),
                });
            }
        };

        if long {
            let date = format_time(&Local::now());
            let lines: Vec<String> = entries
                .iter()
                .map(|(name, node)| long_line(name, node, &date))
                .collect();
            Ok(lines.join("\n"))
        } else {
            let names: Vec<&str> = entries.iter().map(|(name, _)| *name).collect();
            Ok(names.join("  "))
        }
    }
}
