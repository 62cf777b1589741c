use ducky_core::ModifierSet;
use logos::Logos;

/// The fixed keyword set of the script language.
///
/// Each variant lists every spelling that canonicalizes to it, so this enum
/// doubles as the alias table. Input must already be lower-cased.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Keyword {
    #[token("rem")]
    Rem,

    #[token("string")]
    String,

    #[token("delay")]
    Delay,

    #[token("default_delay")]
    #[token("defaultdelay")]
    DefaultDelay,

    #[token("repeat")]
    Repeat,

    // Modifiers
    #[token("control")]
    #[token("ctrl")]
    Control,

    #[token("shift")]
    Shift,

    #[token("alt")]
    Alt,

    #[token("windows")]
    #[token("gui")]
    #[token("command")]
    Windows,

    // Special keys
    #[token("enter")]
    Enter,

    #[token("tab")]
    Tab,

    #[token("esc")]
    #[token("escape")]
    Escape,

    #[token("backspace")]
    #[token("back")]
    Backspace,

    #[token("space")]
    Space,

    // Raw keys
    #[token("menu")]
    #[token("app")]
    Menu,

    #[token("printscreen")]
    PrintScreen,

    // Arrows
    #[token("right")]
    #[token("rightarrow")]
    Right,

    #[token("left")]
    #[token("leftarrow")]
    Left,

    #[token("down")]
    #[token("downarrow")]
    Down,

    #[token("up")]
    #[token("uparrow")]
    Up,

    // Function keys; the number is range-checked by the caller
    #[regex(r"f[0-9]+", |lex| lex.slice()[1..].parse::<u8>().ok())]
    Function(Option<u8>),
}

impl Keyword {
    /// Resolve a lower-cased word to its canonical keyword.
    ///
    /// The whole word must be a single token: `"windowsx"` is not `Windows`.
    pub fn canonicalize(word: &str) -> Option<Keyword> {
        let mut lex = Keyword::lexer(word);
        match lex.next() {
            Some(Ok(keyword)) if lex.span() == (0..word.len()) => Some(keyword),
            _ => None,
        }
    }

    /// The modifier bit this keyword stands for, if it is a modifier
    pub fn modifier(self) -> Option<ModifierSet> {
        match self {
            Keyword::Control => Some(ModifierSet::CONTROL),
            Keyword::Shift => Some(ModifierSet::SHIFT),
            Keyword::Alt => Some(ModifierSet::ALT),
            Keyword::Windows => Some(ModifierSet::WINDOWS),
            _ => None,
        }
    }

    /// Keywords the legacy device firmware does not understand
    pub fn is_extended(self) -> bool {
        matches!(
            self,
            Keyword::Repeat
                | Keyword::Menu
                | Keyword::PrintScreen
                | Keyword::Right
                | Keyword::Left
                | Keyword::Down
                | Keyword::Up
                | Keyword::Function(_)
        )
    }
}
