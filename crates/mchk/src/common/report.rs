//! Diagnostic collection for analysis passes
//!
//! The checkers never fail: anything that would be an error in a stricter
//! system is a diagnostic appended to the report, and the pass always runs
//! to completion. The report is the whole observable result.

use super::span::Span;

/// Severity of a collected diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational outcome, e.g. a recognized construct or declaration
    Note,
    /// A detected syntactic or semantic issue
    Error,
}

/// A single human-readable finding tied to a source location
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub span: Span,
}

/// Ordered diagnostics produced by one analysis pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    diagnostics: Vec<Diagnostic>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, message: impl Into<String>, span: Span) {
        self.diagnostics.push(Diagnostic {
            severity: Severity::Error,
            message: message.into(),
            span,
        });
    }

    pub fn note(&mut self, message: impl Into<String>, span: Span) {
        self.diagnostics.push(Diagnostic {
            severity: Severity::Note,
            message: message.into(),
            span,
        });
    }

    /// True when the pass emitted no error-severity diagnostics
    pub fn ok(&self) -> bool {
        !self
            .diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Message strings in emission order, for callers that only want text
    pub fn messages(&self) -> Vec<&str> {
        self.diagnostics.iter().map(|d| d.message.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_is_ok() {
        let report = Report::new();
        assert!(report.ok());
        assert!(report.is_empty());
    }

    #[test]
    fn notes_do_not_affect_ok() {
        let mut report = Report::new();
        report.note("valid if structure", Span::new(0, 2));
        assert!(report.ok());
        assert_eq!(report.messages(), vec!["valid if structure"]);
    }

    #[test]
    fn any_error_flips_ok() {
        let mut report = Report::new();
        report.note("variable declared: x of type int", Span::new(0, 3));
        report.error("variable 'y' not declared", Span::new(6, 7));
        assert!(!report.ok());
        assert_eq!(report.diagnostics().len(), 2);
    }
}
