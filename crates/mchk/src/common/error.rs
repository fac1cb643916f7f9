//! Error types and diagnostic rendering

use codespan_reporting::diagnostic::{Diagnostic as RenderDiagnostic, Label};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use thiserror::Error;

use super::report::{Report, Severity};

/// Failures at the analysis boundary
///
/// The checkers themselves never fail; errors only arise while selecting
/// an analysis mode or loading source to analyze.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("unknown analysis mode '{0}' (expected 'lex', 'syntax', or 'sema')")]
    UnknownAnalysis(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Renders collected diagnostics with source labels
pub struct DiagnosticReporter {
    files: SimpleFiles<String, String>,
    writer: StandardStream,
    config: term::Config,
}

impl DiagnosticReporter {
    pub fn new() -> Self {
        Self {
            files: SimpleFiles::new(),
            writer: StandardStream::stderr(ColorChoice::Auto),
            config: term::Config::default(),
        }
    }

    pub fn add_file(&mut self, name: impl Into<String>, source: impl Into<String>) -> usize {
        self.files.add(name.into(), source.into())
    }

    /// Emit every diagnostic in the report against the given file
    pub fn report(&self, file_id: usize, report: &Report) {
        for diagnostic in report.diagnostics() {
            let rendered = match diagnostic.severity {
                Severity::Error => RenderDiagnostic::error(),
                Severity::Note => RenderDiagnostic::note(),
            }
            .with_message(diagnostic.message.clone())
            .with_labels(vec![Label::primary(
                file_id,
                diagnostic.span.start..diagnostic.span.end,
            )]);

            let _ = term::emit(&mut self.writer.lock(), &self.config, &self.files, &rendered);
        }
    }
}

impl Default for DiagnosticReporter {
    fn default() -> Self {
        Self::new()
    }
}
