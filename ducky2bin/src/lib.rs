pub mod lexer;
pub mod parser;
pub mod binary;
pub mod options;
pub mod render;

pub use ducky_core::*;
pub use options::{CompileOptions, Dialect, UnknownCommandPolicy};

use anyhow::Context;
use std::fs::read_to_string;
use std::path::Path;

/// Compile script text into the device byte stream with default options
pub fn compile(script: &str) -> Result<Vec<u8>, CompileError> {
    compile_with(script, CompileOptions::default())
}

pub fn compile_with(script: &str, options: CompileOptions) -> Result<Vec<u8>, CompileError> {
    let instructions = compile_instructions(script, options)?;
    Ok(binary::ScriptWriter::new().write_script(&instructions))
}

/// Run every stage except encoding
pub fn compile_instructions(script: &str, options: CompileOptions) -> Result<Vec<Instruction>, CompileError> {
    let statements = parser::Parser::new(script, options).parse()?;
    binary::Compiler::new().compile(&statements)
}

pub fn compile_file(input_path: &Path, options: CompileOptions) -> anyhow::Result<Vec<u8>> {
    let input = read_to_string(input_path)
        .with_context(|| format!("failed to read {}", input_path.display()))?;

    // Editors on Windows like to prepend a byte order mark
    let script = input.strip_prefix('\u{FEFF}').unwrap_or(&input);

    compile_with(script, options)
        .with_context(|| format!("failed to compile {}", input_path.display()))
}
