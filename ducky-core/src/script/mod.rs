pub mod error;
pub mod loader;

pub use error::{LoadError, Result};
pub use loader::ScriptLoader;
