pub mod lexer;
pub mod token;

pub use lexer::{Lexer, SourceLine};
pub use token::Keyword;
