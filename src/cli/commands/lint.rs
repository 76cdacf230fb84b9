//! Lint command implementation.
//!
//! The `exercat lint` command validates the catalog at `output` against the
//! relationship document using the lint rule system.

use crate::cli::args::LintArgs;
use crate::config::SourceConfig;
use crate::error::Result;
use crate::lint::{has_errors, has_warnings, LintContext, OutputFormat, RuleRegistry};
use crate::loader::{load_relationship_source, load_source, source_name, SourceShape};
use crate::ui::UserInterface;

use super::context::{config_failure, CommandContext};
use super::dispatcher::{Command, CommandResult};
use super::display::{show_diagnostics, show_issues};

/// The lint command implementation.
pub struct LintCommand {
    context: CommandContext,
    args: LintArgs,
}

impl LintCommand {
    /// Create a new lint command.
    pub fn new(context: CommandContext, args: LintArgs) -> Self {
        Self { context, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &LintArgs {
        &self.args
    }
}

impl Command for LintCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match self.context.load_config(ui) {
            Ok(c) => c,
            Err(e) => return config_failure(ui, e),
        };

        let store = self.context.store();
        let catalog_source = SourceConfig {
            name: source_name(&config.output),
            path: config.output.clone(),
            shape: SourceShape::Auto,
        };
        let catalog = load_source(&store, &catalog_source)?;
        let graph = load_relationship_source(&store, &config.relationships)?;

        if self.args.format == OutputFormat::Human {
            show_issues(ui, &catalog.issues);
            show_issues(ui, &graph.issues);
        }

        let registry = RuleRegistry::with_builtins();
        let diagnostics =
            registry.check_all(&LintContext::new(&catalog.value.records, &graph.value));

        let strict = self.args.strict || config.settings.strict;
        let should_fail = has_errors(&diagnostics) || (strict && has_warnings(&diagnostics));

        if diagnostics.is_empty() && self.args.format == OutputFormat::Human {
            ui.success("Catalog is consistent!");
            return Ok(CommandResult::success());
        }

        show_diagnostics(ui, &diagnostics, self.args.format);

        if should_fail {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn setup_project(catalog: &str, relationships: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let data = temp.path().join("data");
        fs::create_dir_all(&data).unwrap();
        fs::write(data.join("exercises-catalog.json"), catalog).unwrap();
        fs::write(data.join("exercise-relationships.json"), relationships).unwrap();
        temp
    }

    fn run(temp: &TempDir, args: LintArgs, ui: &mut MockUI) -> CommandResult {
        LintCommand::new(CommandContext::new(temp.path().to_path_buf()), args)
            .execute(ui)
            .unwrap()
    }

    const COMPLETE: &str = r#"{"exercises": {
        "a": {"name": "A", "cues": ["Go."]},
        "b": {"name": "B", "cues": ["Go."]}
    }}"#;

    #[test]
    fn lint_consistent_catalog() {
        let temp = setup_project(
            COMPLETE,
            r#"{"relationships": {"a": {"progressions": [{"exerciseId": "b"}]}}}"#,
        );
        let mut ui = MockUI::new();

        let result = run(&temp, LintArgs::default(), &mut ui);

        assert!(result.success);
        assert!(ui.has_success("consistent"));
    }

    #[test]
    fn lint_detects_dangling_target() {
        let temp = setup_project(
            COMPLETE,
            r#"{"relationships": {"a": {"progressions": [{"exerciseId": "c"}]}}}"#,
        );
        let mut ui = MockUI::new();

        let result = run(&temp, LintArgs::default(), &mut ui);

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("dangling-target"));
    }

    #[test]
    fn lint_detects_unknown_exercise() {
        let temp = setup_project(
            COMPLETE,
            r#"{"relationships": {"z": {"regressions": [{"exerciseId": "a"}]}}}"#,
        );
        let mut ui = MockUI::new();

        let result = run(&temp, LintArgs::default(), &mut ui);

        assert!(!result.success);
        assert!(ui.has_error("unknown-exercise"));
    }

    #[test]
    fn lint_strict_mode_fails_on_warnings() {
        let temp = setup_project(
            COMPLETE,
            r#"{"relationships": {"a": {"progressions": [{"exerciseId": "a"}]}}}"#,
        );

        let mut ui = MockUI::new();
        assert!(run(&temp, LintArgs::default(), &mut ui).success);
        assert!(ui.has_warning("self-relationship"));

        let strict = LintArgs {
            strict: true,
            ..Default::default()
        };
        assert!(!run(&temp, strict, &mut MockUI::new()).success);
    }

    #[test]
    fn lint_strict_from_settings() {
        let temp = setup_project(
            COMPLETE,
            r#"{"relationships": {"a": {"progressions": [{"exerciseId": "a"}]}}}"#,
        );
        fs::write(temp.path().join("exercat.yml"), "settings:\n  strict: true\n").unwrap();

        assert!(!run(&temp, LintArgs::default(), &mut MockUI::new()).success);
    }

    #[test]
    fn lint_json_format() {
        let temp = setup_project(COMPLETE, r#"{"relationships": {}}"#);
        let mut ui = MockUI::new();

        let result = run(
            &temp,
            LintArgs {
                format: OutputFormat::Json,
                ..Default::default()
            },
            &mut ui,
        );

        assert!(result.success);
        let value: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(value["summary"]["total"], 0);
    }
}
