//! Renders a compiled script as a C array for embedding in firmware sources.

use thiserror::Error;

const BYTES_PER_LINE: usize = 8;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RenderError {
    #[error("Invalid C identifier: '{0}'")]
    InvalidIdentifier(String),
}

/// Format `bytes` as `uint8_t name[len] = { ... };`, eight bytes per line
pub fn render_c_array(name: &str, bytes: &[u8]) -> Result<String, RenderError> {
    if !is_c_identifier(name) {
        return Err(RenderError::InvalidIdentifier(name.to_string()));
    }

    let mut out = String::new();
    out.push_str("#include <stdint.h>\n");
    out.push_str(&format!("uint8_t {}[{}] = {{\n", name, bytes.len()));

    for chunk in bytes.chunks(BYTES_PER_LINE) {
        out.push_str("   ");
        for byte in chunk {
            out.push_str(&format!(" 0x{:02x},", byte));
        }
        out.push('\n');
    }

    out.push_str("};\n");
    Ok(out)
}

fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
