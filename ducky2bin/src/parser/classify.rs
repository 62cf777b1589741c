use crate::lexer::Keyword;
use crate::options::Dialect;
use ducky_core::{Arrow, ErrorKind, KeyCategory, RawKey, SpecialKey};

/// Classify a raw argument token into the key it names.
///
/// A one-byte token is always a literal character with its case kept.
/// Longer tokens are lower-cased and looked up in the keyword table.
pub fn classify_argument(argument: Option<&str>, dialect: Dialect) -> Result<KeyCategory, ErrorKind> {
    let argument = match argument {
        Some(arg) if !arg.is_empty() => arg,
        _ => return Err(ErrorKind::EmptyArgument),
    };

    if let [byte] = argument.as_bytes() {
        return Ok(KeyCategory::Char(*byte));
    }

    let token = argument.to_lowercase();
    let keyword = Keyword::canonicalize(&token)
        .filter(|keyword| dialect == Dialect::Extended || !keyword.is_extended());

    let key = match keyword {
        Some(Keyword::Space) => KeyCategory::Char(b' '),
        Some(Keyword::Enter) => KeyCategory::Special(SpecialKey::Enter),
        Some(Keyword::Tab) => KeyCategory::Special(SpecialKey::Tab),
        Some(Keyword::Escape) => KeyCategory::Special(SpecialKey::Escape),
        Some(Keyword::Backspace) => KeyCategory::Special(SpecialKey::Backspace),
        Some(Keyword::Menu) => KeyCategory::Raw(RawKey::Menu),
        Some(Keyword::PrintScreen) => KeyCategory::Raw(RawKey::PrintScreen),
        Some(Keyword::Right) => KeyCategory::Arrow(Arrow::Right),
        Some(Keyword::Left) => KeyCategory::Arrow(Arrow::Left),
        Some(Keyword::Down) => KeyCategory::Arrow(Arrow::Down),
        Some(Keyword::Up) => KeyCategory::Arrow(Arrow::Up),
        Some(Keyword::Function(Some(n))) if (1..=12).contains(&n) => KeyCategory::Function(n),
        _ if dialect == Dialect::Extended && token.starts_with('f') => {
            return Err(ErrorKind::InvalidFunctionKey { token });
        }
        _ => return Err(ErrorKind::InvalidArgument { token }),
    };

    Ok(key)
}
