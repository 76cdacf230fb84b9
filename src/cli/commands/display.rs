//! Shared display helpers.
//!
//! Progress reporting for pipeline runs and diagnostic rendering, used by
//! `build`, `generate`, `consolidate`, `analyze` and `lint`.

use crate::lint::{HumanFormatter, JsonFormatter, LintDiagnostic, LintFormatter, OutputFormat};
use crate::loader::LoadIssue;
use crate::pipeline::{PipelineProgress, Stage};
use crate::ui::{SpinnerHandle, UserInterface};

/// Turns pipeline progress events into spinners and messages.
pub struct ProgressReporter<'u> {
    ui: &'u mut dyn UserInterface,
    spinner: Option<Box<dyn SpinnerHandle>>,
    pending: Vec<String>,
}

impl<'u> ProgressReporter<'u> {
    pub fn new(ui: &'u mut dyn UserInterface) -> Self {
        Self {
            ui,
            spinner: None,
            pending: Vec::new(),
        }
    }

    /// Handle one progress event.
    pub fn handle(&mut self, event: PipelineProgress<'_>) {
        match event {
            PipelineProgress::StageStarting(stage) => {
                self.spinner = Some(self.ui.start_spinner(&stage.to_string()));
            }
            PipelineProgress::Issue(issue) => self.pending.push(issue.to_string()),
            PipelineProgress::StageFinished { stage, summary } => {
                if let Some(mut spinner) = self.spinner.take() {
                    spinner.finish_success(&summary);
                }
                if stage == Stage::Load {
                    let pending = std::mem::take(&mut self.pending);
                    show_issue_lines(&mut *self.ui, &pending);
                }
            }
        }
    }

    /// Mark the running stage as failed.
    pub fn abort(&mut self, msg: &str) {
        if let Some(mut spinner) = self.spinner.take() {
            spinner.finish_error(msg);
        }
    }
}

/// Report dropped records: each one in verbose mode, a count otherwise.
pub fn show_issues(ui: &mut dyn UserInterface, issues: &[LoadIssue]) {
    let lines: Vec<String> = issues.iter().map(ToString::to_string).collect();
    show_issue_lines(ui, &lines);
}

fn show_issue_lines(ui: &mut dyn UserInterface, lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    if ui.output_mode().shows_details() {
        for line in lines {
            ui.warning(line);
        }
    } else {
        ui.warning(&format!("{} record(s) dropped while loading", lines.len()));
        ui.show_hint("Run with --verbose to list them");
    }
}

/// Render diagnostics in the requested format.
pub fn format_diagnostics(diagnostics: &[LintDiagnostic], format: OutputFormat) -> String {
    let mut output = Vec::new();

    match format {
        OutputFormat::Json => {
            JsonFormatter::new().format(diagnostics, &mut output).ok();
        }
        OutputFormat::Human => {
            HumanFormatter::new(false).format(diagnostics, &mut output).ok();
        }
    }

    String::from_utf8(output).unwrap_or_default()
}

/// Print diagnostics; human lines are routed by severity.
pub fn show_diagnostics(ui: &mut dyn UserInterface, diagnostics: &[LintDiagnostic], format: OutputFormat) {
    let output = format_diagnostics(diagnostics, format);

    match format {
        OutputFormat::Human => {
            for line in output.lines() {
                if line.starts_with("error") {
                    ui.error(line);
                } else if line.starts_with("warning") {
                    ui.warning(line);
                } else {
                    ui.message(line);
                }
            }
        }
        OutputFormat::Json => ui.message(output.trim_end()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ExerciseId;
    use crate::lint::{RuleId, Severity};
    use crate::loader::LoadIssueKind;
    use crate::ui::{MockUI, OutputMode};

    fn issue() -> LoadIssue {
        LoadIssue::new("exercises", "[2]", LoadIssueKind::MissingRequiredField { field: "id" })
    }

    fn diagnostic(severity: Severity) -> LintDiagnostic {
        LintDiagnostic::new(RuleId::new("dangling-target"), severity, "'b' is not defined")
            .with_exercise(ExerciseId::parse("b").unwrap())
    }

    #[test]
    fn issues_are_summarized_in_normal_mode() {
        let mut ui = MockUI::new();
        show_issues(&mut ui, &[issue(), issue()]);

        assert!(ui.has_warning("2 record(s) dropped"));
        assert!(ui.has_hint("--verbose"));
    }

    #[test]
    fn issues_are_listed_in_verbose_mode() {
        let mut ui = MockUI::with_mode(OutputMode::Verbose);
        show_issues(&mut ui, &[issue()]);

        assert!(ui.has_warning("missing required field 'id'"));
        assert!(ui.hints().is_empty());
    }

    #[test]
    fn human_diagnostics_are_routed_by_severity() {
        let mut ui = MockUI::new();
        show_diagnostics(
            &mut ui,
            &[diagnostic(Severity::Error), diagnostic(Severity::Warning)],
            OutputFormat::Human,
        );

        assert!(ui.has_error("error[dangling-target]"));
        assert!(ui.has_warning("warning[dangling-target]"));
        assert!(ui.has_message("--> b"));
        assert!(ui.has_message("Found 1 error(s) and 1 warning(s)"));
    }

    #[test]
    fn json_diagnostics_are_one_message() {
        let mut ui = MockUI::new();
        show_diagnostics(&mut ui, &[diagnostic(Severity::Error)], OutputFormat::Json);

        assert_eq!(ui.messages().len(), 1);
        let value: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(value["summary"]["errors"], 1);
    }

    #[test]
    fn reporter_finishes_spinners() {
        let mut ui = MockUI::new();
        {
            let mut reporter = ProgressReporter::new(&mut ui);
            reporter.handle(PipelineProgress::StageStarting(Stage::Load));
            let dropped = issue();
            reporter.handle(PipelineProgress::Issue(&dropped));
            reporter.handle(PipelineProgress::StageFinished {
                stage: Stage::Load,
                summary: "Loaded 2 source(s)".to_string(),
            });
            reporter.handle(PipelineProgress::StageStarting(Stage::Write));
            reporter.abort("Write failed");
        }

        assert_eq!(ui.spinners(), &["Loading sources".to_string(), "Writing catalog".to_string()]);
        assert_eq!(
            ui.spinner_outcomes(),
            vec![Ok("Loaded 2 source(s)".to_string()), Err("Write failed".to_string())]
        );
        assert!(ui.has_warning("1 record(s) dropped"));
    }
}
