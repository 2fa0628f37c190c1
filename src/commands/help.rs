use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;

pub struct HelpCommand;

const HELP_TEXT: &str = "Available commands:
File Operations:
  cat [file]             Display file contents
  mkdir [directory]      Create a directory
  touch [file]           Create an empty file

Navigation & Listing:
  pwd                    Print working directory
  ls [-l] [directory]    List directory contents
  cd [directory]         Change directory

System Information:
  date                   Show current date and time
  ps                     Show process information
  top                    Display system processes
  df                     Show disk usage
  free                   Show memory usage
  whoami                 Show current user

Search & Text:
  grep [pattern] [file]  Search for pattern in file
  find [path] [name]     Find files
  echo [text]            Print text

Terminal Control:
  clear                  Clear terminal screen
  exit                   Exit terminal
  history                Show command history";

impl Command for HelpCommand {
    fn execute(&self, _args: &[String], _ctx: &mut TerminalContext) -> CommandResult {
        Ok(HELP_TEXT.to_string())
    }
}
