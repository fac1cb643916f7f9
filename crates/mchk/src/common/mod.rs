//! Common infrastructure shared across the analysis passes

mod error;
mod report;
mod span;

pub use error::{AnalysisError, DiagnosticReporter};
pub use report::{Diagnostic, Report, Severity};
pub use span::Span;
