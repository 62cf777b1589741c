pub mod instruction;
pub mod modifiers;
pub mod opcodes;
pub mod errors;

pub use instruction::*;
pub use modifiers::*;
pub use opcodes::*;
pub use errors::*;
