//! Shallow syntax checks over the token stream

mod checker;

pub use checker::check_syntax;
