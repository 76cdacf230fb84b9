//! Human-readable output formatter.
//!
//! Formats lint diagnostics for terminal display with optional color support.

use console::style;
use std::io::Write;

use super::{count, LintFormatter};
use crate::lint::{LintDiagnostic, Severity};

/// Formats lint output for human consumption.
pub struct HumanFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn severity_prefix(&self, severity: Severity) -> String {
        let label = severity.to_string();
        if !self.use_color {
            return label;
        }
        let styled = match severity {
            Severity::Hint => style(label).cyan(),
            Severity::Warning => style(label).yellow(),
            Severity::Error => style(label).red(),
        };
        styled.bold().force_styling(true).to_string()
    }
}

impl LintFormatter for HumanFormatter {
    fn format<W: Write>(
        &self,
        diagnostics: &[LintDiagnostic],
        writer: &mut W,
    ) -> std::io::Result<()> {
        for diag in diagnostics {
            // Header line: error[rule-id]: message
            writeln!(
                writer,
                "{}[{}]: {}",
                self.severity_prefix(diag.severity),
                diag.rule_id,
                diag.message
            )?;

            if let Some(ref id) = diag.exercise {
                writeln!(writer, "  --> {}", id)?;
            }

            if let Some(ref suggestion) = diag.suggestion {
                writeln!(writer, "   = help: {}", suggestion)?;
            }

            for related in &diag.related {
                writeln!(writer, "   = note: {}", related.message)?;
            }

            writeln!(writer)?;
        }

        let error_count = count(diagnostics, Severity::Error);
        let warning_count = count(diagnostics, Severity::Warning);

        if error_count > 0 || warning_count > 0 {
            writeln!(
                writer,
                "Found {} error(s) and {} warning(s)",
                error_count, warning_count
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ExerciseId;
    use crate::lint::RuleId;

    fn render(diagnostics: &[LintDiagnostic]) -> String {
        let mut output = Vec::new();
        HumanFormatter::new(false)
            .format(diagnostics, &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn formats_header_and_exercise() {
        let output = render(&[LintDiagnostic::new(
            RuleId::new("dangling-target"),
            Severity::Error,
            "'b' is not defined",
        )
        .with_exercise(ExerciseId::parse("b").unwrap())]);

        assert!(output.contains("error[dangling-target]: 'b' is not defined"));
        assert!(output.contains("  --> b"));
    }

    #[test]
    fn formats_each_severity() {
        let output = render(&[
            LintDiagnostic::new(RuleId::new("r"), Severity::Warning, "w"),
            LintDiagnostic::new(RuleId::new("r"), Severity::Hint, "h"),
        ]);
        assert!(output.contains("warning[r]"));
        assert!(output.contains("hint[r]"));
    }

    #[test]
    fn formats_help_and_notes() {
        let output = render(&[LintDiagnostic::new(RuleId::new("r"), Severity::Error, "e")
            .with_suggestion("Run `exercat build`")
            .with_related(ExerciseId::parse("a").unwrap(), "progression of 'a'")]);

        assert!(output.contains("= help: Run `exercat build`"));
        assert!(output.contains("= note: progression of 'a'"));
    }

    #[test]
    fn formats_summary_line() {
        let output = render(&[
            LintDiagnostic::new(RuleId::new("r1"), Severity::Error, "err"),
            LintDiagnostic::new(RuleId::new("r2"), Severity::Warning, "warn"),
            LintDiagnostic::new(RuleId::new("r3"), Severity::Warning, "warn2"),
        ]);
        assert!(output.contains("Found 1 error(s) and 2 warning(s)"));
    }

    #[test]
    fn no_summary_when_no_issues() {
        assert!(!render(&[]).contains("Found"));
    }

    #[test]
    fn colored_output_wraps_severity() {
        let formatter = HumanFormatter::new(true);
        let mut output = Vec::new();
        formatter
            .format(
                &[LintDiagnostic::new(RuleId::new("r"), Severity::Error, "e")],
                &mut output,
            )
            .unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("\u{1b}["));
        assert!(output.contains("[r]: e"));
    }
}
