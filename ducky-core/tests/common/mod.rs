use ducky_core::Instruction;

/// Encodes instructions with the compiler's writer
pub fn encode(instructions: &[Instruction]) -> Vec<u8> {
    ducky2bin::binary::ScriptWriter::new().write_script(instructions)
}

/// Compiles script text, panicking on compile errors
pub fn compile(script: &str) -> Vec<u8> {
    ducky2bin::compile(script).unwrap_or_else(|e| panic!("compile failed: {}", e))
}

pub fn bytes(hex_str: &str) -> Vec<u8> {
    hex::decode(hex_str.replace(' ', "")).expect("valid hex")
}
