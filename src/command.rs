use crate::commands;
use crate::context::{ScrollbackEntry, TerminalContext};
use crate::error::ShellError;
use std::collections::HashMap;

pub type CommandResult = Result<String, ShellError>;

pub trait Command {
    fn execute(&self, args: &[String], ctx: &mut TerminalContext) -> CommandResult;
}

/// The closed set of builtins. Anything not listed here is an unknown command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Builtin {
    Help,
    Pwd,
    Ls,
    Cd,
    Cat,
    Date,
    Ps,
    Top,
    Df,
    Free,
    Whoami,
    Find,
    Grep,
    Clear,
    Exit,
    Mkdir,
    Touch,
    Echo,
    History,
}

impl Builtin {
    pub const ALL: [Builtin; 19] = [
        Builtin::Help,
        Builtin::Pwd,
        Builtin::Ls,
        Builtin::Cd,
        Builtin::Cat,
        Builtin::Date,
        Builtin::Ps,
        Builtin::Top,
        Builtin::Df,
        Builtin::Free,
        Builtin::Whoami,
        Builtin::Find,
        Builtin::Grep,
        Builtin::Clear,
        Builtin::Exit,
        Builtin::Mkdir,
        Builtin::Touch,
        Builtin::Echo,
        Builtin::History,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Help => "help",
            Builtin::Pwd => "pwd",
            Builtin::Ls => "ls",
            Builtin::Cd => "cd",
            Builtin::Cat => "cat",
            Builtin::Date => "date",
            Builtin::Ps => "ps",
            Builtin::Top => "top",
            Builtin::Df => "df",
            Builtin::Free => "free",
            Builtin::Whoami => "whoami",
            Builtin::Find => "find",
            Builtin::Grep => "grep",
            Builtin::Clear => "clear",
            Builtin::Exit => "exit",
            Builtin::Mkdir => "mkdir",
            Builtin::Touch => "touch",
            Builtin::Echo => "echo",
            Builtin::History => "history",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|b| b.name() == name)
    }

    fn handler(self) -> Box<dyn Command> {
        match self {
            Builtin::Help => Box::new(commands::help::HelpCommand),
            Builtin::Pwd => Box::new(commands::pwd::PwdCommand),
            Builtin::Ls => Box::new(commands::ls::LsCommand),
            Builtin::Cd => Box::new(commands::cd::CdCommand),
            Builtin::Cat => Box::new(commands::cat::CatCommand),
            Builtin::Date => Box::new(commands::date::DateCommand),
            Builtin::Ps => Box::new(commands::sysinfo::PsCommand),
            Builtin::Top => Box::new(commands::sysinfo::TopCommand),
            Builtin::Df => Box::new(commands::sysinfo::DfCommand),
            Builtin::Free => Box::new(commands::sysinfo::FreeCommand),
            Builtin::Whoami => Box::new(commands::sysinfo::WhoamiCommand),
            Builtin::Find => Box::new(commands::find::FindCommand),
            Builtin::Grep => Box::new(commands::grep::GrepCommand),
            Builtin::Clear => Box::new(commands::clear::ClearCommand),
            Builtin::Exit => Box::new(commands::exit::ExitCommand),
            Builtin::Mkdir => Box::new(commands::mkdir::MkdirCommand),
            Builtin::Touch => Box::new(commands::touch::TouchCommand),
            Builtin::Echo => Box::new(commands::echo::EchoCommand),
            Builtin::History => Box::new(commands::history::HistoryCommand),
        }
    }

    /// Side effect the front end has to mirror after this builtin ran.
    pub fn special_action(self) -> Option<SpecialAction> {
        match self {
            Builtin::Clear => Some(SpecialAction::ClearScreen),
            Builtin::Exit => Some(SpecialAction::Close),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialAction {
    ClearScreen,
    Close,
}

impl SpecialAction {
    pub fn as_str(self) -> &'static str {
        match self {
            SpecialAction::ClearScreen => "clear_screen",
            SpecialAction::Close => "close",
        }
    }
}

pub struct CommandRegistry {
    commands: HashMap<Builtin, Box<dyn Command>>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::default_commands()
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self { commands: HashMap::new() }
    }

    pub fn register_command(&mut self, builtin: Builtin, cmd: Box<dyn Command>) {
        self.commands.insert(builtin, cmd);
    }

    pub fn get(&self, name: &str) -> Option<(Builtin, &dyn Command)> {
        let builtin = Builtin::from_name(name)?;
        self.commands.get(&builtin).map(|cmd| (builtin, cmd.as_ref()))
    }

    pub fn get_command_names(&self) -> Vec<&'static str> {
        let mut builtins: Vec<Builtin> = self.commands.keys().copied().collect();
        builtins.sort();
        builtins.into_iter().map(Builtin::name).collect()
    }

    pub fn default_commands() -> Self {
        let mut reg = Self::new();
        for builtin in Builtin::ALL {
            reg.register_command(builtin, builtin.handler());
        }
        reg
    }
}

/// What one submitted line did, for callers that render it themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOutcome {
    pub success: bool,
    pub output: String,
    pub action: Option<SpecialAction>,
}

/// Split a trimmed line on single spaces. Runs of spaces leave empty
/// arguments behind, exactly as typed.
fn tokenize(input: &str) -> (&str, Vec<String>) {
    let mut parts = input.split(' ');
    let cmd = parts.next().unwrap_or_default();
    (cmd, parts.map(str::to_string).collect())
}

/// Run one line against the context without touching the scrollback.
pub fn run_command(input: &str, ctx: &mut TerminalContext, registry: &CommandRegistry) -> CommandResult {
    let input = input.trim();
    if input.is_empty() {
        return Ok(String::new());
    }

    let (cmd, args) = tokenize(input);
    match registry.get(cmd) {
        Some((builtin, command)) => {
            log::debug!("dispatching {} with {} arg(s)", builtin.name(), args.len());
            command.execute(&args, ctx)
        }
        None => {
            log::warn!("unknown command: {}", cmd);
            Err(ShellError::UnknownCommand(cmd.to_string()))
        }
    }
}

/// Interpreter entry point: echo the line, run it, append its output.
///
/// Blank input is ignored entirely and yields `None`. Errors land in the
/// scrollback like any other output.
pub fn submit_line(input: &str, ctx: &mut TerminalContext, registry: &CommandRegistry) -> Option<LineOutcome> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let echo = format!("{}$ {}", ctx.cwd, input);
    ctx.scrollback.push(ScrollbackEntry::command(echo));

    let action = registry
        .get(tokenize(input).0)
        .and_then(|(builtin, _)| builtin.special_action());

    let (success, output) = match run_command(input, ctx, registry) {
        Ok(output) => (true, output),
        Err(e) => (false, e.to_string()),
    };
    if !output.is_empty() {
        ctx.scrollback.push(ScrollbackEntry::output(output.clone()));
    }

    Some(LineOutcome { success, output, action })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> (TerminalContext, CommandRegistry) {
        (TerminalContext::new(), CommandRegistry::default_commands())
    }

    fn run(line: &str, ctx: &mut TerminalContext, reg: &CommandRegistry) -> String {
        submit_line(line, ctx, reg).map(|o| o.output).unwrap_or_default()
    }

    #[test]
    fn test_builtin_names_round_trip() {
        for builtin in Builtin::ALL {
            assert_eq!(Builtin::from_name(builtin.name()), Some(builtin));
        }
        assert_eq!(Builtin::from_name("rm"), None);
    }

    #[test]
    fn test_registry_lists_every_builtin() {
        let reg = CommandRegistry::default_commands();
        let names = reg.get_command_names();
        assert_eq!(names.len(), Builtin::ALL.len());
        assert!(names.contains(&"grep"));
    }

    #[test]
    fn test_tokenize_keeps_empty_args() {
        let (cmd, args) = tokenize("echo a  b");
        assert_eq!(cmd, "echo");
        assert_eq!(args, vec!["a", "", "b"]);
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let (mut ctx, reg) = session();
        let before = ctx.scrollback.len();
        assert!(submit_line("   ", &mut ctx, &reg).is_none());
        assert_eq!(ctx.scrollback.len(), before);
    }

    #[test]
    fn test_echo_line_then_output() {
        let (mut ctx, reg) = session();
        run("  pwd  ", &mut ctx, &reg);
        let tail = &ctx.scrollback[ctx.scrollback.len() - 2..];
        assert_eq!(tail[0], ScrollbackEntry::command("/home/user$ pwd".to_string()));
        assert_eq!(tail[1], ScrollbackEntry::output("/home/user".to_string()));
    }

    #[test]
    fn test_unknown_command() {
        let (mut ctx, reg) = session();
        let outcome = submit_line("foobar --x", &mut ctx, &reg).unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.output, "Command not found: foobar. Type 'help' for available commands.");
        assert_eq!(ctx.cwd, "/home/user");
        let last = ctx.scrollback.last().unwrap();
        assert_eq!(last.text, outcome.output);
        assert!(!last.is_command);
        assert!(ctx.scrollback[ctx.scrollback.len() - 2].is_command);
        // still usable afterwards
        assert_eq!(run("pwd", &mut ctx, &reg), "/home/user");
    }

    #[test]
    fn test_empty_output_only_echoes() {
        let (mut ctx, reg) = session();
        let before = ctx.scrollback.len();
        run("cd documents", &mut ctx, &reg);
        assert_eq!(ctx.scrollback.len(), before + 1);
        assert_eq!(ctx.scrollback.last().unwrap().text, "/home/user$ cd documents");
    }

    #[test]
    fn test_navigation_scenario() {
        let (mut ctx, reg) = session();
        run("cd documents", &mut ctx, &reg);
        assert_eq!(run("pwd", &mut ctx, &reg), "/home/user/documents");
        assert_eq!(run("cat notes.txt", &mut ctx, &reg), "Important system notes and configurations.");
        run("cd ..", &mut ctx, &reg);
        assert_eq!(run("pwd", &mut ctx, &reg), "/home/user");
    }

    #[test]
    fn test_clear_empties_everything() {
        let (mut ctx, reg) = session();
        for _ in 0..5 {
            run("ls", &mut ctx, &reg);
        }
        let outcome = submit_line("clear", &mut ctx, &reg).unwrap();
        assert_eq!(outcome.action, Some(SpecialAction::ClearScreen));
        assert!(ctx.scrollback.is_empty());
    }

    #[test]
    fn test_history_lists_echoed_lines() {
        let (mut ctx, reg) = session();
        run("cd /etc", &mut ctx, &reg);
        run("bogus", &mut ctx, &reg);
        let out = run("history", &mut ctx, &reg);
        assert_eq!(out, "/home/user$ cd /etc\n/etc$ bogus\n/etc$ history");
    }

    #[test]
    fn test_exit_reports_close() {
        let (mut ctx, reg) = session();
        let outcome = submit_line("exit", &mut ctx, &reg).unwrap();
        assert_eq!(outcome.action, Some(SpecialAction::Close));
        assert_eq!(outcome.output, "Exiting terminal...");
        assert!(ctx.close_requested());
    }
}
