pub mod compiler;
pub mod writer;

pub use compiler::Compiler;
pub use writer::ScriptWriter;
