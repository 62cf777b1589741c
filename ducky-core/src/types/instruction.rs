use super::modifiers::ModifierSet;
use std::fmt;

/// One playback step of a compiled script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// Press and release a key while holding `modifiers`
    Key {
        modifiers: ModifierSet,
        key: KeyCategory,
    },
    /// Type raw bytes one character at a time
    Text { content: Vec<u8> },
    Delay { milliseconds: u16 },
    Repeat { count: u16 },
}

impl Instruction {
    /// Unmodified key press
    pub fn key(key: KeyCategory) -> Self {
        Instruction::Key {
            modifiers: ModifierSet::NONE,
            key,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCategory {
    /// A single literal byte, case preserved
    Char(u8),
    Special(SpecialKey),
    Raw(RawKey),
    Arrow(Arrow),
    /// Function key F1..F12
    Function(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialKey {
    Enter,
    Tab,
    Escape,
    Backspace,
}

/// Keys sent by raw HID usage code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawKey {
    Menu,
    PrintScreen,
    /// No key at all; the record only presses its modifiers
    None,
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrow {
    Right = 0,
    Left = 1,
    Down = 2,
    Up = 3,
}

impl Arrow {
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Arrow::Right),
            1 => Some(Arrow::Left),
            2 => Some(Arrow::Down),
            3 => Some(Arrow::Up),
            _ => None,
        }
    }
}

impl fmt::Display for KeyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCategory::Char(b' ') => f.write_str("SPACE"),
            KeyCategory::Char(c) if c.is_ascii_graphic() => write!(f, "{}", *c as char),
            KeyCategory::Char(c) => write!(f, "\\x{:02x}", c),
            KeyCategory::Special(SpecialKey::Enter) => f.write_str("ENTER"),
            KeyCategory::Special(SpecialKey::Tab) => f.write_str("TAB"),
            KeyCategory::Special(SpecialKey::Escape) => f.write_str("ESC"),
            KeyCategory::Special(SpecialKey::Backspace) => f.write_str("BACKSPACE"),
            KeyCategory::Raw(RawKey::Menu) => f.write_str("MENU"),
            KeyCategory::Raw(RawKey::PrintScreen) => f.write_str("PRINTSCREEN"),
            KeyCategory::Raw(RawKey::None) => Ok(()),
            KeyCategory::Arrow(Arrow::Right) => f.write_str("RIGHT"),
            KeyCategory::Arrow(Arrow::Left) => f.write_str("LEFT"),
            KeyCategory::Arrow(Arrow::Down) => f.write_str("DOWN"),
            KeyCategory::Arrow(Arrow::Up) => f.write_str("UP"),
            KeyCategory::Function(n) => write!(f, "F{}", n),
        }
    }
}

/// Renders an instruction back as a script line
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Key { modifiers, key } if modifiers.is_empty() => write!(f, "{}", key),
            Instruction::Key {
                modifiers,
                key: KeyCategory::Raw(RawKey::None),
            } => write!(f, "{}", modifiers),
            Instruction::Key { modifiers, key } => write!(f, "{} {}", modifiers, key),
            Instruction::Text { content } => {
                write!(f, "STRING {}", String::from_utf8_lossy(content))
            }
            Instruction::Delay { milliseconds } => write!(f, "DELAY {}", milliseconds),
            Instruction::Repeat { count } => write!(f, "REPEAT {}", count),
        }
    }
}
