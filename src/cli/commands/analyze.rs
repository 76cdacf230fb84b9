//! Analyze command implementation.
//!
//! The `exercat analyze` command loads and reconciles every source and
//! prints the coverage report. Nothing is written.

use crate::cli::args::AnalyzeArgs;
use crate::error::Result;
use crate::lint::OutputFormat;
use crate::pipeline::Pipeline;
use crate::ui::UserInterface;

use super::context::{config_failure, CommandContext};
use super::dispatcher::{Command, CommandResult};
use super::display::show_issues;

/// The analyze command implementation.
pub struct AnalyzeCommand {
    context: CommandContext,
    args: AnalyzeArgs,
}

impl AnalyzeCommand {
    /// Create a new analyze command.
    pub fn new(context: CommandContext, args: AnalyzeArgs) -> Self {
        Self { context, args }
    }
}

impl Command for AnalyzeCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match self.context.load_config(ui) {
            Ok(c) => c,
            Err(e) => return config_failure(ui, e),
        };

        let mut store = self.context.store();
        let (reconciliation, issues) = Pipeline::new(&config, &mut store).analyze()?;
        let report = reconciliation.report;

        match self.args.format {
            OutputFormat::Human => {
                ui.show_header("exercat analyze");
                show_issues(ui, &issues);
                for line in report.render_human().lines() {
                    ui.message(line);
                }
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
                ui.message(&json);
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn setup_project() -> TempDir {
        let temp = TempDir::new().unwrap();
        let data = temp.path().join("data");
        fs::create_dir_all(&data).unwrap();
        fs::write(
            data.join("exercises-catalog.json"),
            r#"{"exercises": {"a": {"name": "A"}}}"#,
        )
        .unwrap();
        fs::write(
            data.join("exercises.json"),
            r#"{"exercises": [{"id": "a", "name": "A"}, {"id": "c", "name": "C"}]}"#,
        )
        .unwrap();
        fs::write(
            data.join("exercise-relationships.json"),
            r#"{"relationships": {"a": {"progressions": [{"exerciseId": "b"}]}}}"#,
        )
        .unwrap();
        temp
    }

    #[test]
    fn human_report_lists_missing() {
        let temp = setup_project();
        let mut ui = MockUI::new();

        let result = AnalyzeCommand::new(
            CommandContext::new(temp.path().to_path_buf()),
            AnalyzeArgs::default(),
        )
        .execute(&mut ui)
        .unwrap();

        assert!(result.success);
        assert!(ui.has_message("Missing exercises (1):"));
        assert!(ui.has_message("  - b"));
    }

    #[test]
    fn json_report_is_parseable() {
        let temp = setup_project();
        let mut ui = MockUI::new();

        AnalyzeCommand::new(
            CommandContext::new(temp.path().to_path_buf()),
            AnalyzeArgs {
                format: OutputFormat::Json,
            },
        )
        .execute(&mut ui)
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(value["catalog_total"], 2);
        assert_eq!(value["missing"], serde_json::json!(["b"]));
    }

    #[test]
    fn analyze_never_writes() {
        let temp = setup_project();
        let path = temp.path().join("data/exercises-catalog.json");
        let before = fs::read_to_string(&path).unwrap();

        AnalyzeCommand::new(
            CommandContext::new(temp.path().to_path_buf()),
            AnalyzeArgs::default(),
        )
        .execute(&mut MockUI::new())
        .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }
}
