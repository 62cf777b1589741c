use super::ast::{Command, Statement};
use super::classify::classify_argument;
use crate::lexer::{Keyword, Lexer, SourceLine};
use crate::options::{CompileOptions, Dialect, UnknownCommandPolicy};
use ducky_core::{CompileError, ErrorKind, KeyCategory, ModifierSet, RawKey};
use log::{debug, warn};

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    options: CompileOptions,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str, options: CompileOptions) -> Self {
        Self {
            lexer: Lexer::new(input),
            options,
        }
    }

    /// Canonicalize every line, stopping at the first error
    pub fn parse(self) -> Result<Vec<Statement<'a>>, CompileError> {
        let mut statements = Vec::new();

        for line in self.lexer {
            match parse_line(&line, self.options) {
                Ok(command) => statements.push(Statement {
                    line: line.number,
                    command,
                }),
                Err(ErrorKind::UnknownCommand { command })
                    if self.options.unknown_commands == UnknownCommandPolicy::WarnAndSkip =>
                {
                    warn!("line {}: skipping unknown command '{}'", line.number, command);
                }
                Err(kind) => return Err(CompileError::new(line.number, kind)),
            }
        }

        Ok(statements)
    }
}

fn parse_line<'a>(line: &SourceLine<'a>, options: CompileOptions) -> Result<Command<'a>, ErrorKind> {
    if line.command.contains('-') {
        return parse_modifier_chain(line, options.dialect);
    }

    let unknown = || ErrorKind::UnknownCommand {
        command: line.command.clone(),
    };

    let keyword = Keyword::canonicalize(&line.command).ok_or_else(unknown)?;
    if options.dialect == Dialect::Legacy && keyword.is_extended() {
        return Err(unknown());
    }

    if let Some(modifier) = keyword.modifier() {
        return Ok(parse_single_modifier(line, modifier, options.dialect));
    }

    let command = match keyword {
        Keyword::Rem => Command::Rem,
        Keyword::String => Command::String(line.argument),
        Keyword::DefaultDelay => Command::DefaultDelay(line.argument),
        Keyword::Delay => Command::Delay(line.argument),
        Keyword::Repeat => Command::Repeat(line.argument),
        // Only the canonical spelling is a keyword: f01 is not F1
        Keyword::Function(Some(n @ 1..=12)) if line.command == format!("f{}", n) => Command::Key {
            modifiers: ModifierSet::NONE,
            key: KeyCategory::Function(n),
        },
        Keyword::Enter | Keyword::Tab | Keyword::Escape
        | Keyword::Backspace | Keyword::Space | Keyword::Menu | Keyword::PrintScreen
        | Keyword::Right | Keyword::Left | Keyword::Down | Keyword::Up => Command::Key {
            modifiers: ModifierSet::NONE,
            key: classify_argument(Some(line.command.as_str()), options.dialect)?,
        },
        // f0, f13 and friends are not keywords
        _ => return Err(unknown()),
    };

    Ok(command)
}

/// `CONTROL-ALT x` or `CONTROL-ALT-x`.
///
/// Every part must be a modifier, except that without an argument the last
/// part may name the key instead.
fn parse_modifier_chain<'a>(line: &SourceLine<'a>, dialect: Dialect) -> Result<Command<'a>, ErrorKind> {
    if dialect == Dialect::Legacy {
        return Err(ErrorKind::UnknownCommand {
            command: line.command.clone(),
        });
    }

    let mut parts: Vec<&str> = line.command.split('-').collect();
    let mut argument = line.argument;
    if argument.is_none() {
        if let Some(&last) = parts.last() {
            if modifier_part(last).is_none() {
                argument = Some(last);
                parts.pop();
            }
        }
    }

    let mut modifiers = ModifierSet::NONE;
    for part in parts {
        modifiers |= modifier_part(part).ok_or_else(|| ErrorKind::InvalidModifier {
            part: part.to_string(),
        })?;
    }

    let key = classify_argument(argument, dialect)?;
    Ok(Command::Key { modifiers, key })
}

fn modifier_part(part: &str) -> Option<ModifierSet> {
    Keyword::canonicalize(part).and_then(Keyword::modifier)
}

/// `SHIFT x`: a missing or unusable argument means the modifier is pressed alone
fn parse_single_modifier<'a>(line: &SourceLine<'a>, modifier: ModifierSet, dialect: Dialect) -> Command<'a> {
    let key = match classify_argument(line.argument, dialect) {
        Ok(key) => key,
        Err(reason) => {
            debug!("line {}: {} pressed alone ({})", line.number, modifier, reason);
            KeyCategory::Raw(RawKey::None)
        }
    };

    Command::Key {
        modifiers: modifier,
        key,
    }
}
