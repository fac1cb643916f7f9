//! Analysis selection and dispatch
//!
//! Shared by the CLI file mode and the interactive loop. Each run
//! tokenizes the source fresh and hands the tokens to one checker; no
//! state survives between runs.

use std::fmt;
use std::str::FromStr;

use crate::common::{AnalysisError, Report};
use crate::lexer::{self, KEYWORDS, Token};
use crate::sema;
use crate::syntax;

/// One of the three analyses a caller can request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Analysis {
    Lexical,
    Syntax,
    Semantics,
}

impl Analysis {
    /// All analyses, in pipeline order
    pub const ALL: [Analysis; 3] = [Analysis::Lexical, Analysis::Syntax, Analysis::Semantics];

    pub fn name(self) -> &'static str {
        match self {
            Analysis::Lexical => "lexical",
            Analysis::Syntax => "syntax",
            Analysis::Semantics => "semantic",
        }
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Analysis {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "lex" | "lexical" => Ok(Analysis::Lexical),
            "syntax" => Ok(Analysis::Syntax),
            "sema" | "semantic" | "semantics" => Ok(Analysis::Semantics),
            other => Err(AnalysisError::UnknownAnalysis(other.to_string())),
        }
    }
}

/// Result of running one analysis over one source string
#[derive(Debug)]
pub enum Outcome {
    /// Lexical mode: the scanned token sequence
    Tokens(Vec<Token>),
    /// Syntax or semantic mode: the collected diagnostics
    Checked(Report),
}

/// Run `analysis` over `source`
pub fn run(analysis: Analysis, source: &str) -> Outcome {
    let tokens = lexer::tokenize(source);
    match analysis {
        Analysis::Lexical => Outcome::Tokens(tokens),
        Analysis::Syntax => Outcome::Checked(syntax::check_syntax(&tokens, &KEYWORDS)),
        Analysis::Semantics => Outcome::Checked(sema::check_semantics(&tokens)),
    }
}

/// Render tokens one per line for the lexical mode
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut output = String::new();
    for token in tokens {
        output.push_str(&format!(
            "{:<10} {:?} at {}..{}\n",
            token.kind, token.text, token.span.start, token.span.end
        ));
    }
    output
}
