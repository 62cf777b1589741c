mod common;

use common::*;
use ducky_core::{Arrow, Instruction, KeyCategory, LoadError, ModifierSet, RawKey, ScriptLoader, SpecialKey};
use pretty_assertions::assert_eq;

#[test]
fn test_load_compiled_script() {
    let data = compile("GUI r\nDELAY 500\nSTRING cmd\nENTER\nCONTROL-ALT ESC");
    let instructions = ScriptLoader::load(&data).unwrap();

    assert_eq!(
        instructions,
        vec![
            Instruction::Key {
                modifiers: ModifierSet::WINDOWS,
                key: KeyCategory::Char(b'r'),
            },
            Instruction::Delay { milliseconds: 500 },
            Instruction::Text { content: b"cmd".to_vec() },
            Instruction::key(KeyCategory::Special(SpecialKey::Enter)),
            Instruction::Key {
                modifiers: ModifierSet::CONTROL | ModifierSet::ALT,
                key: KeyCategory::Special(SpecialKey::Escape),
            },
        ]
    );
}

#[test]
fn test_load_raw_keys() {
    let data = bytes("1000 01 05 00 45 01 05 00 50 01 05 08 00 01 05 00 76");
    let instructions = ScriptLoader::load(&data).unwrap();

    assert_eq!(
        instructions,
        vec![
            Instruction::key(KeyCategory::Function(12)),
            Instruction::key(KeyCategory::Arrow(Arrow::Left)),
            Instruction::Key {
                modifiers: ModifierSet::WINDOWS,
                key: KeyCategory::Raw(RawKey::None),
            },
            Instruction::key(KeyCategory::Raw(RawKey::Menu)),
        ]
    );
}

#[test]
fn test_length_prefix_must_match() {
    let mut data = compile("STRING abc");
    data.push(0x00);

    assert!(matches!(
        ScriptLoader::load(&data),
        Err(LoadError::LengthMismatch { declared: 6, actual: 7 })
    ));
    assert!(matches!(ScriptLoader::load(&[0x00]), Err(LoadError::TooSmall(1))));
}

#[test]
fn test_truncated_string() {
    // Declares a 5-byte string but only carries 2
    let data = bytes("0500 03 0500 6869");
    assert!(matches!(ScriptLoader::load(&data), Err(LoadError::Io(_))));
}

#[test]
fn test_unknown_scan_code() {
    let data = bytes("0400 01 05 00 99");
    assert!(matches!(
        ScriptLoader::load(&data),
        Err(LoadError::InvalidKeyRecord { kind: 0x05, code: 0x99, offset: 2 })
    ));
}

#[test]
fn test_writer_output_loads_back() {
    let instructions = vec![
        Instruction::Repeat { count: 7 },
        Instruction::Key {
            modifiers: ModifierSet::SHIFT,
            key: KeyCategory::Raw(RawKey::PrintScreen),
        },
        Instruction::Text { content: vec![0x00, 0xFF] },
    ];

    assert_eq!(ScriptLoader::load(&encode(&instructions)).unwrap(), instructions);
}

#[test]
fn test_display_as_script() {
    let data = compile("CTRL-SHIFT F5\nSHIFT\nSTRING hi there\nSPACE\nREPEAT");
    let lines: Vec<String> = ScriptLoader::load(&data)
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect();

    assert_eq!(lines, ["CONTROL-SHIFT F5", "SHIFT", "STRING hi there", "SPACE", "REPEAT 1"]);
}
