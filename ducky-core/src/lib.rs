//! Instruction model and binary format shared by the Uberducky script
//! compiler and its tooling.
//!
//! A compiled script is `[u16 LE body length][records...]`, where each record
//! starts with one of the `OP_*` opcodes in [`types::opcodes`].

pub mod types;
pub mod script;

pub use types::*;

// Re-export commonly used types
pub use types::instruction::{Arrow, Instruction, KeyCategory, RawKey, SpecialKey};
pub use types::modifiers::ModifierSet;
pub use types::errors::{CompileError, ErrorKind};
pub use script::{LoadError, ScriptLoader};
