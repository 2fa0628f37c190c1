use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;
use crate::error::ShellError;

pub struct FindCommand;

const MATCH_ALL: &str = "*";

impl Command for FindCommand {
    fn execute(&self, args: &[String], ctx: &mut TerminalContext) -> CommandResult {
        let operand = args.first().ok_or(ShellError::MissingOperand("find"))?;
        let search_path = ctx.resolve_path(operand);
        let pattern = args.get(1).map(String::as_str).unwrap_or(MATCH_ALL);

        let files = ctx.vfs.walk_files(&search_path).ok_or_else(|| {
            ShellError::NoSuchPath(format!("find: '{}': No such file or directory", operand))
        })?;

        let matches: Vec<String> = files
            .into_iter()
            .filter(|path| pattern == MATCH_ALL || path.contains(pattern))
            .collect();

        if matches.is_empty() {
            Ok("No matches found".to_string())
        } else {
            Ok(matches.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(args: &[&str], ctx: &mut TerminalContext) -> CommandResult {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        FindCommand.execute(&args, ctx)
    }

    #[test]
    fn test_find_txt_under_home() {
        let mut ctx = TerminalContext::new();
        let out = find(&["/home/user", ".txt"], &mut ctx).unwrap();
        let mut found: Vec<&str> = out.lines().collect();
        found.sort();
        assert_eq!(
            found,
            vec!["/home/user/documents/notes.txt", "/home/user/documents/readme.txt"]
        );
    }

    #[test]
    fn test_find_everything() {
        let mut ctx = TerminalContext::new();
        assert_eq!(find(&["/etc"], &mut ctx).unwrap(), "/etc/hosts\n/etc/passwd");
        assert_eq!(find(&["/etc", "*"], &mut ctx).unwrap(), "/etc/hosts\n/etc/passwd");
    }

    #[test]
    fn test_find_relative_and_file_start() {
        let mut ctx = TerminalContext::new();
        assert_eq!(find(&["downloads", "pdf"], &mut ctx).unwrap(), "/home/user/downloads/sample.pdf");
        assert_eq!(find(&["/usr/bin/node"], &mut ctx).unwrap(), "/usr/bin/node");
    }

    #[test]
    fn test_find_no_matches() {
        let mut ctx = TerminalContext::new();
        assert_eq!(find(&["/usr", ".rs"], &mut ctx).unwrap(), "No matches found");
        assert_eq!(find(&["/usr/lib"], &mut ctx).unwrap(), "No matches found");
    }

    #[test]
    fn test_find_errors() {
        let mut ctx = TerminalContext::new();
        assert_eq!(find(&[], &mut ctx).unwrap_err().to_string(), "find: missing operand");
        assert_eq!(
            find(&["ghost"], &mut ctx).unwrap_err().to_string(),
            "find: 'ghost': No such file or directory"
        );
    }
}
