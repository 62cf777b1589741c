use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Script too small: {0} bytes")]
    TooSmall(usize),

    #[error("Length prefix says {declared} bytes, body has {actual}")]
    LengthMismatch { declared: usize, actual: usize },

    #[error("Invalid opcode {opcode:#04X} at offset {offset}")]
    InvalidOpcode { opcode: u8, offset: usize },

    #[error("Invalid key record (kind {kind:#04X}, code {code:#04X}) at offset {offset}")]
    InvalidKeyRecord { kind: u8, code: u8, offset: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LoadError>;
