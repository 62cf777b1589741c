/// Which keyword set the target firmware understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// Original firmware: characters, ENTER/TAB/ESC/BACKSPACE/SPACE, single
    /// modifiers, STRING, DELAY and DEFAULT_DELAY
    Legacy,
    /// Adds function keys, arrows, MENU, PRINTSCREEN, REPEAT and chained
    /// modifiers such as `CONTROL-ALT`
    #[default]
    Extended,
}

/// What to do with a top-level command that is not a keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownCommandPolicy {
    #[default]
    Reject,
    /// Log a warning and drop the line
    WarnAndSkip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompileOptions {
    pub dialect: Dialect,
    pub unknown_commands: UnknownCommandPolicy,
}

impl CompileOptions {
    pub fn legacy() -> Self {
        Self {
            dialect: Dialect::Legacy,
            ..Self::default()
        }
    }
}
