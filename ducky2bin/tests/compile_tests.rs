use ducky2bin::{compile, compile_instructions, CompileOptions};
use ducky2bin::{Arrow, Instruction, KeyCategory, ModifierSet, RawKey, SpecialKey};
use pretty_assertions::assert_eq;

fn hex(bytes: &str) -> Vec<u8> {
    hex::decode(bytes.replace(' ', "")).expect("valid hex")
}

/// Strip the length prefix after checking it against the body
fn body(bytes: &[u8]) -> &[u8] {
    let declared = u16::from_le_bytes([bytes[0], bytes[1]]) as usize;
    assert_eq!(declared, bytes.len() - 2, "length prefix");
    &bytes[2..]
}

fn compile_body(script: &str) -> Vec<u8> {
    body(&compile(script).unwrap()).to_vec()
}

fn instructions(script: &str) -> Vec<Instruction> {
    compile_instructions(script, CompileOptions::default()).unwrap()
}

#[test]
fn test_string() {
    assert_eq!(compile("STRING Hello").unwrap(), hex("0800 03 0500 48656c6c6f"));
}

#[test]
fn test_string_keeps_spaces_and_case() {
    assert_eq!(compile_body("string  A b "), hex("03 0500 2041206220"));
}

#[test]
fn test_delay() {
    assert_eq!(compile("DELAY 100").unwrap(), hex("0300 02 6400"));
}

#[test]
fn test_function_keys() {
    assert_eq!(compile_body("F1"), hex("01 05 00 3a"));
    assert_eq!(compile_body("f12"), hex("01 05 00 45"));
}

#[test]
fn test_modifier_chain() {
    assert_eq!(compile_body("CONTROL-ALT-a"), hex("01 00 05 61"));
    assert_eq!(compile_body("CTRL-ALT BACKSPACE"), hex("01 04 05 00"));
    assert_eq!(compile_body("SHIFT-GUI-SHIFT F4"), hex("01 05 0a 3d"));
}

#[test]
fn test_single_modifier() {
    assert_eq!(compile_body("GUI r"), hex("01 00 08 72"));
    assert_eq!(compile_body("ALT F4"), hex("01 05 04 3d"));
    assert_eq!(compile_body("SHIFT TAB"), hex("01 02 02 00"));
    // Modifier pressed on its own
    assert_eq!(compile_body("WINDOWS"), hex("01 05 08 00"));
    assert_eq!(compile_body("CONTROL whatever"), hex("01 05 01 00"));
}

#[test]
fn test_named_keys() {
    assert_eq!(compile_body("ENTER"), hex("01 01 00 00"));
    assert_eq!(compile_body("TAB"), hex("01 02 00 00"));
    assert_eq!(compile_body("ESCAPE"), hex("01 03 00 00"));
    assert_eq!(compile_body("BACK"), hex("01 04 00 00"));
    assert_eq!(compile_body("SPACE"), hex("01 00 00 20"));
    assert_eq!(compile_body("APP"), hex("01 05 00 76"));
    assert_eq!(compile_body("PRINTSCREEN"), hex("01 05 00 46"));
    assert_eq!(
        compile_body("RIGHTARROW\nLEFT\nDOWNARROW\nUP"),
        hex("01 05 00 4f 01 05 00 50 01 05 00 51 01 05 00 52")
    );
}

#[test]
fn test_repeat() {
    assert_eq!(compile("REPEAT").unwrap(), compile("REPEAT 1").unwrap());
    assert_eq!(compile_body("REPEAT 300"), hex("04 2c01"));
}

#[test]
fn test_default_delay() {
    assert_eq!(
        instructions("DEFAULTDELAY 250\nDELAY\nDELAY 5\nDELAY"),
        vec![
            Instruction::Delay { milliseconds: 250 },
            Instruction::Delay { milliseconds: 5 },
            Instruction::Delay { milliseconds: 250 },
        ]
    );
}

#[test]
fn test_silent_lines() {
    assert_eq!(compile("STRING ").unwrap(), hex("0000"));
    assert_eq!(compile("STRING").unwrap(), hex("0000"));
    assert_eq!(compile("REM hello\n\nDEFAULT_DELAY 10\n").unwrap(), hex("0000"));
    assert_eq!(compile("").unwrap(), hex("0000"));
}

#[test]
fn test_instruction_order_follows_lines() {
    assert_eq!(
        instructions("REM start\nGUI r\nDEFAULT_DELAY 20\nDELAY\nSTRING cmd\nCTRL-SHIFT ENTER\nUP\nREPEAT 3"),
        vec![
            Instruction::Key {
                modifiers: ModifierSet::WINDOWS,
                key: KeyCategory::Char(b'r'),
            },
            Instruction::Delay { milliseconds: 20 },
            Instruction::Text { content: b"cmd".to_vec() },
            Instruction::Key {
                modifiers: ModifierSet::CONTROL | ModifierSet::SHIFT,
                key: KeyCategory::Special(SpecialKey::Enter),
            },
            Instruction::key(KeyCategory::Arrow(Arrow::Up)),
            Instruction::Repeat { count: 3 },
        ]
    );
}

#[test]
fn test_synonyms_match_canonical_keywords() {
    let synonyms = "GUI r\nCOMMAND SPACE\nCTRL c\nDEFAULTDELAY 10\nDELAY\nAPP\nLEFTARROW\nRIGHTARROW\nUPARROW\nDOWNARROW\nCTRL-GUI d";
    let canonical = "WINDOWS r\nWINDOWS SPACE\nCONTROL c\nDEFAULT_DELAY 10\nDELAY\nMENU\nLEFT\nRIGHT\nUP\nDOWN\nCONTROL-WINDOWS d";

    assert_eq!(compile(synonyms).unwrap(), compile(canonical).unwrap());
}

#[test]
fn test_commands_are_case_insensitive() {
    assert_eq!(compile("sTrInG x\nEnTeR").unwrap(), compile("STRING x\nENTER").unwrap());
}

#[test]
fn test_deterministic() {
    let script = std::fs::read_to_string("tests/fixtures/hello_world.txt").unwrap();
    assert_eq!(compile(&script).unwrap(), compile(&script).unwrap());
}

#[test]
fn test_hello_world_fixture() {
    let script = std::fs::read_to_string("tests/fixtures/hello_world.txt").unwrap();
    let bytes = compile(&script).unwrap();

    let expected = hex(concat!(
        "01 00 08 72",                             // GUI r
        "02 6400",                                 // DELAY (default 100)
        "03 0700 6e6f7465706164",                  // STRING notepad
        "01 01 00 00",                             // ENTER
        "02 e803",                                 // DELAY 1000
        "03 0d00 48656c6c6f2c20576f726c6421",      // STRING Hello, World!
        "01 00 03 73",                             // CONTROL-SHIFT s
        "04 0200",                                 // REPEAT 2
    ));
    assert_eq!(body(&bytes), &expected[..]);
}

#[test]
fn test_modifier_alone_is_raw_none() {
    assert_eq!(
        instructions("SHIFT"),
        vec![Instruction::Key {
            modifiers: ModifierSet::SHIFT,
            key: KeyCategory::Raw(RawKey::None),
        }]
    );
}
