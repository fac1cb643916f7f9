//! mchk - lexical, syntax, and semantic analyzer for a miniature C-like
//! language fragment
//!
//! The library is a three-stage pipeline over a piece of source text:
//! - **Lexer** (`lexer/`): total, lossless scan into classified tokens
//! - **Syntax** (`syntax/`): shallow checks of `if` constructs and
//!   identifier adjacency over the token stream
//! - **Sema** (`sema/`): flat declaration table, redeclaration and
//!   use-before-declaration checks
//! - **Common** (`common/`): spans, diagnostics, rendering
//! - **Driver** (`driver/`): analysis selection shared by the CLI and the
//!   interactive loop
//!
//! Each stage is a pure function of the input text plus the fixed keyword
//! set. Diagnostics are collected, never thrown: every analysis runs to
//! completion and returns a full report.

pub mod common;
pub mod driver;
pub mod lexer;
pub mod sema;
pub mod syntax;

// Re-exports for convenience
pub use common::{AnalysisError, Diagnostic, DiagnosticReporter, Report, Severity, Span};
pub use lexer::{KEYWORDS, Token, TokenKind, tokenize};
pub use sema::check_semantics;
pub use syntax::check_syntax;
