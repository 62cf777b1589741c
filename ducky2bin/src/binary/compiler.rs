use crate::parser::{Command, Statement};
use super::writer::record_size;
use ducky_core::*;
use log::{debug, warn};

/// Walks canonical statements in order and produces the instruction list.
///
/// The only state carried between lines is the default delay, which must be
/// set before a bare `DELAY` reads it.
pub struct Compiler {
    instructions: Vec<Instruction>,
    default_delay: Option<u16>,
    body_len: usize,
}

impl Compiler {
    pub fn new() -> Self {
        Self {
            instructions: Vec::new(),
            default_delay: None,
            body_len: 0,
        }
    }

    pub fn compile(mut self, statements: &[Statement<'_>]) -> Result<Vec<Instruction>, CompileError> {
        for statement in statements {
            self.compile_statement(&statement.command)
                .map_err(|kind| CompileError::new(statement.line, kind))?;
        }

        Ok(self.instructions)
    }

    fn compile_statement(&mut self, command: &Command<'_>) -> Result<(), ErrorKind> {
        match *command {
            Command::Rem => {}
            Command::String(text) => {
                // An empty STRING types nothing
                if let Some(text) = text.filter(|t| !t.is_empty()) {
                    if text.len() > MAX_SCRIPT_BODY {
                        return Err(ErrorKind::TextTooLong { length: text.len() });
                    }
                    self.emit(Instruction::Text {
                        content: text.as_bytes().to_vec(),
                    })?;
                }
            }
            Command::DefaultDelay(value) => {
                let value = parse_number(value)?;
                if let Some(previous) = self.default_delay {
                    warn!("DEFAULT_DELAY changed from {} to {}", previous, value);
                }
                self.default_delay = Some(value);
            }
            Command::Delay(value) => {
                let milliseconds = match value {
                    Some(_) => parse_number(value)?,
                    None => self.default_delay.ok_or(ErrorKind::MissingDefaultDelay)?,
                };
                self.emit(Instruction::Delay { milliseconds })?;
            }
            Command::Repeat(value) => {
                let count = match value {
                    Some(_) => parse_number(value)?,
                    None => 1,
                };
                self.emit(Instruction::Repeat { count })?;
            }
            Command::Key { modifiers, key } => {
                self.emit(Instruction::Key { modifiers, key })?;
            }
        }

        Ok(())
    }

    fn emit(&mut self, instruction: Instruction) -> Result<(), ErrorKind> {
        let body_len = self.body_len + record_size(&instruction);
        if body_len > MAX_SCRIPT_BODY {
            return Err(ErrorKind::ScriptTooLarge { length: body_len });
        }

        debug!("emit {:?}", instruction);
        self.body_len = body_len;
        self.instructions.push(instruction);
        Ok(())
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a 16-bit numeric argument; a missing argument is invalid too
fn parse_number(value: Option<&str>) -> Result<u16, ErrorKind> {
    let value = value.unwrap_or_default();
    value.trim().parse::<u16>().map_err(|_| ErrorKind::InvalidNumber {
        value: value.to_string(),
    })
}
