use thiserror::Error;

/// A compile failure and the 1-based script line that caused it
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {kind}")]
pub struct CompileError {
    pub line: usize,
    pub kind: ErrorKind,
}

impl CompileError {
    pub fn new(line: usize, kind: ErrorKind) -> Self {
        Self { line, kind }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("Unknown command '{command}'")]
    UnknownCommand { command: String },

    #[error("Invalid modifier '{part}'")]
    InvalidModifier { part: String },

    #[error("Empty argument")]
    EmptyArgument,

    #[error("Invalid argument \"{token}\"")]
    InvalidArgument { token: String },

    #[error("Invalid function key \"{token}\" (expected F1-F12)")]
    InvalidFunctionKey { token: String },

    #[error("DELAY without argument before any DEFAULT_DELAY")]
    MissingDefaultDelay,

    #[error("Invalid number \"{value}\" (expected 0-65535)")]
    InvalidNumber { value: String },

    #[error("String of {length} bytes exceeds 65535")]
    TextTooLong { length: usize },

    #[error("Compiled script of {length} bytes exceeds 65535")]
    ScriptTooLarge { length: usize },
}
