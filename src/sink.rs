//! Where diagnostics go. Reporting is append-only and never fails.

use crate::error::Diagnostic;

/// Receives diagnostics as validation produces them.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
