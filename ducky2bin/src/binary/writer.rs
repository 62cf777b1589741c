use ducky_core::*;
use byteorder::{ByteOrder, LittleEndian};

/// Serializes an instruction list into the device byte stream.
///
/// Input is expected to be validated already: string payloads and the total
/// body must each fit in 16 bits.
pub struct ScriptWriter {
    buffer: Vec<u8>,
}

impl ScriptWriter {
    pub fn new() -> Self {
        // Reserve the length prefix, patched in `finish`
        Self {
            buffer: vec![0; LENGTH_PREFIX_SIZE],
        }
    }

    pub fn write_script(mut self, instructions: &[Instruction]) -> Vec<u8> {
        for instruction in instructions {
            self.write_instruction(instruction);
        }

        self.finish()
    }

    fn finish(mut self) -> Vec<u8> {
        let body_len = self.buffer.len() - LENGTH_PREFIX_SIZE;
        debug_assert!(body_len <= MAX_SCRIPT_BODY);
        LittleEndian::write_u16(&mut self.buffer[..LENGTH_PREFIX_SIZE], body_len as u16);
        self.buffer
    }

    fn write_instruction(&mut self, instruction: &Instruction) {
        match instruction {
            Instruction::Key { modifiers, key } => {
                let (kind, code) = key_record(key);
                self.buffer.extend_from_slice(&[OP_KEY, kind, modifiers.bits(), code]);
            }
            Instruction::Text { content } => {
                self.buffer.push(OP_STRING);
                self.write_u16(content.len() as u16);
                self.buffer.extend_from_slice(content);
            }
            Instruction::Delay { milliseconds } => {
                self.buffer.push(OP_DELAY);
                self.write_u16(*milliseconds);
            }
            Instruction::Repeat { count } => {
                self.buffer.push(OP_REPEAT);
                self.write_u16(*count);
            }
        }
    }

    fn write_u16(&mut self, value: u16) {
        let mut bytes = [0u8; 2];
        LittleEndian::write_u16(&mut bytes, value);
        self.buffer.extend_from_slice(&bytes);
    }
}

impl Default for ScriptWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// The kind and code bytes that surround the modifier byte of a key record
fn key_record(key: &KeyCategory) -> (u8, u8) {
    match *key {
        KeyCategory::Char(c) => (KEY_CHAR, c),
        KeyCategory::Special(SpecialKey::Enter) => (KEY_ENTER, 0),
        KeyCategory::Special(SpecialKey::Tab) => (KEY_TAB, 0),
        KeyCategory::Special(SpecialKey::Escape) => (KEY_ESC, 0),
        KeyCategory::Special(SpecialKey::Backspace) => (KEY_BACKSPACE, 0),
        KeyCategory::Function(n) => (KEY_RAW, SCAN_F1 + n.saturating_sub(1)),
        KeyCategory::Arrow(direction) => (KEY_RAW, SCAN_RIGHT + direction as u8),
        KeyCategory::Raw(RawKey::Menu) => (KEY_RAW, SCAN_MENU),
        KeyCategory::Raw(RawKey::PrintScreen) => (KEY_RAW, SCAN_PRINTSCREEN),
        KeyCategory::Raw(RawKey::None) => (KEY_RAW, SCAN_NONE),
    }
}

/// Encoded size of one record in bytes, opcode included
pub fn record_size(instruction: &Instruction) -> usize {
    match instruction {
        Instruction::Key { .. } => 4,
        Instruction::Text { content } => 3 + content.len(),
        Instruction::Delay { .. } | Instruction::Repeat { .. } => 3,
    }
}
