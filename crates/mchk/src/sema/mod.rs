//! Shallow semantic checks over the token stream

mod analyzer;
mod symbols;

pub use analyzer::check_semantics;
pub use symbols::{Symbol, SymbolTable, VarType};
