use thiserror::Error;

/// Errors a builtin can report. They are never fatal: the interpreter renders
/// them through `Display` straight into the scrollback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    /// Nothing exists at the resolved path. Carries the full message, since
    /// each command words it differently.
    #[error("{0}")]
    NoSuchPath(String),
    /// A file was found where a directory was required.
    #[error("{0}")]
    NotADirectory(String),
    #[error("{cmd}: {operand}: Is a directory")]
    IsADirectory { cmd: &'static str, operand: String },
    #[error("{0}: missing operand")]
    MissingOperand(&'static str),
    #[error("Command not found: {0}. Type 'help' for available commands.")]
    UnknownCommand(String),
}
