use crate::types::opcodes::*;
use crate::types::{Arrow, Instruction, KeyCategory, ModifierSet, RawKey, SpecialKey};
use super::error::{LoadError, Result};
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Cursor, Read};

pub struct ScriptLoader;

impl ScriptLoader {
    /// Decode a compiled script back into its instruction list
    pub fn load(data: &[u8]) -> Result<Vec<Instruction>> {
        if data.len() < LENGTH_PREFIX_SIZE {
            return Err(LoadError::TooSmall(data.len()));
        }

        let mut cursor = Cursor::new(data);

        let declared = cursor.read_u16::<LittleEndian>()? as usize;
        let actual = data.len() - LENGTH_PREFIX_SIZE;
        if declared != actual {
            return Err(LoadError::LengthMismatch { declared, actual });
        }

        let mut instructions = Vec::new();
        while (cursor.position() as usize) < data.len() {
            if let Some(instruction) = Self::read_instruction(&mut cursor)? {
                instructions.push(instruction);
            }
        }

        Ok(instructions)
    }

    fn read_instruction(cursor: &mut Cursor<&[u8]>) -> Result<Option<Instruction>> {
        let offset = cursor.position() as usize;
        let opcode = cursor.read_u8()?;

        let instruction = match opcode {
            OP_NOP => {
                // The device skips one argument byte after a NOP
                cursor.read_u8()?;
                return Ok(None);
            }
            OP_KEY => {
                let kind = cursor.read_u8()?;
                let modifiers = ModifierSet::from_bits_truncate(cursor.read_u8()?);
                let code = cursor.read_u8()?;
                let key = Self::decode_key(kind, code)
                    .ok_or(LoadError::InvalidKeyRecord { kind, code, offset })?;
                Instruction::Key { modifiers, key }
            }
            OP_DELAY => Instruction::Delay {
                milliseconds: cursor.read_u16::<LittleEndian>()?,
            },
            OP_STRING => {
                let length = cursor.read_u16::<LittleEndian>()? as usize;
                let mut content = vec![0u8; length];
                cursor.read_exact(&mut content)?;
                Instruction::Text { content }
            }
            OP_REPEAT => Instruction::Repeat {
                count: cursor.read_u16::<LittleEndian>()?,
            },
            _ => return Err(LoadError::InvalidOpcode { opcode, offset }),
        };

        Ok(Some(instruction))
    }

    /// Map a key record's kind and code bytes to a key category
    pub fn decode_key(kind: u8, code: u8) -> Option<KeyCategory> {
        match kind {
            KEY_CHAR => Some(KeyCategory::Char(code)),
            KEY_ENTER => Some(KeyCategory::Special(SpecialKey::Enter)),
            KEY_TAB => Some(KeyCategory::Special(SpecialKey::Tab)),
            KEY_ESC => Some(KeyCategory::Special(SpecialKey::Escape)),
            KEY_BACKSPACE => Some(KeyCategory::Special(SpecialKey::Backspace)),
            KEY_RAW => match code {
                SCAN_NONE => Some(KeyCategory::Raw(RawKey::None)),
                SCAN_MENU => Some(KeyCategory::Raw(RawKey::Menu)),
                SCAN_PRINTSCREEN => Some(KeyCategory::Raw(RawKey::PrintScreen)),
                SCAN_F1..=SCAN_F12 => Some(KeyCategory::Function(code - SCAN_F1 + 1)),
                SCAN_RIGHT..=SCAN_UP => Arrow::from_index(code - SCAN_RIGHT).map(KeyCategory::Arrow),
                _ => None,
            },
            _ => None,
        }
    }
}
