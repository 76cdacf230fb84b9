//! JSON output formatter.
//!
//! Formats lint diagnostics as machine-readable JSON for tooling integration.

use serde::Serialize;
use std::io::Write;

use super::{count, LintFormatter};
use crate::lint::{LintDiagnostic, Severity};

/// Formats lint output as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    diagnostics: &'a [LintDiagnostic],
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    errors: usize,
    warnings: usize,
    hints: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl LintFormatter for JsonFormatter {
    fn format<W: Write>(
        &self,
        diagnostics: &[LintDiagnostic],
        writer: &mut W,
    ) -> std::io::Result<()> {
        let output = JsonOutput {
            diagnostics,
            summary: JsonSummary {
                total: diagnostics.len(),
                errors: count(diagnostics, Severity::Error),
                warnings: count(diagnostics, Severity::Warning),
                hints: count(diagnostics, Severity::Hint),
            },
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)
    }
}
