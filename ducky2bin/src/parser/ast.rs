use ducky_core::{KeyCategory, ModifierSet};

/// A canonicalized script line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement<'a> {
    pub line: usize,
    pub command: Command<'a>,
}

/// Commands after alias resolution and key classification.
///
/// Numeric and string arguments stay raw; the compiler interprets them
/// because their meaning depends on compiler state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    Rem,
    String(Option<&'a str>),
    DefaultDelay(Option<&'a str>),
    Delay(Option<&'a str>),
    Repeat(Option<&'a str>),
    Key {
        modifiers: ModifierSet,
        key: KeyCategory,
    },
}
