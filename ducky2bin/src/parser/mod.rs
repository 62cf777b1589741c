pub mod ast;
pub mod classify;
pub mod parser;

pub use ast::*;
pub use classify::classify_argument;
pub use parser::Parser;
