//! CLI commands module.

mod symbols;
mod tokenize;
mod util;
mod vad;

pub use symbols::{SchemesCommand, SymbolsCommand};
pub use tokenize::TokenizeCommand;
pub use vad::VadCommand;

pub(crate) use util::*;
