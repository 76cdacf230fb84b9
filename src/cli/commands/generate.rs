//! Generate command implementation.
//!
//! The `exercat generate` command completes the existing catalog: every id
//! the relationship document names but the catalog lacks gets an inferred
//! record, and the catalog is written back in place.

use crate::cli::args::GenerateArgs;
use crate::error::Result;
use crate::pipeline::{Pipeline, WriteMode};
use crate::ui::UserInterface;

use super::build::summarize;
use super::context::{config_failure, CommandContext};
use super::dispatcher::{Command, CommandResult};
use super::display::ProgressReporter;

/// The generate command implementation.
pub struct GenerateCommand {
    context: CommandContext,
    args: GenerateArgs,
}

impl GenerateCommand {
    /// Create a new generate command.
    pub fn new(context: CommandContext, args: GenerateArgs) -> Self {
        Self { context, args }
    }
}

impl Command for GenerateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match self.context.load_config(ui) {
            Ok(c) => c,
            Err(e) => return config_failure(ui, e),
        };

        ui.show_header("exercat generate");

        let mode = if self.args.dry_run {
            WriteMode::DryRun
        } else {
            WriteMode::Write
        };

        let mut store = self.context.store();
        let mut reporter = ProgressReporter::new(ui);
        let outcome = Pipeline::new(&config, &mut store)
            .generate_with_progress(mode, |event| reporter.handle(event));

        if outcome.is_err() {
            reporter.abort("Generate failed");
        }
        drop(reporter);

        let result = outcome?;
        Ok(summarize(ui, &result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn generate_ignores_other_sources() {
        let temp = TempDir::new().unwrap();
        let data = temp.path().join("data");
        fs::create_dir_all(&data).unwrap();
        fs::write(data.join("exercises-catalog.json"), r#"{"exercises": {}}"#).unwrap();
        // not read by generate, so its malformed content is harmless
        fs::write(data.join("exercises.json"), "not json").unwrap();
        fs::write(
            data.join("exercise-relationships.json"),
            r#"{"relationships": {"push-up": {"regressions": [{"exerciseId": "wall-push-up"}]}}}"#,
        )
        .unwrap();

        let mut ui = MockUI::new();
        let result = GenerateCommand::new(
            CommandContext::new(temp.path().to_path_buf()),
            GenerateArgs::default(),
        )
        .execute(&mut ui)
        .unwrap();

        assert!(result.success);
        let written = fs::read_to_string(data.join("exercises-catalog.json")).unwrap();
        assert!(written.contains("\"wall-push-up\""));
        assert!(written.contains("\"Wall Push Up\""));
    }

    #[test]
    fn generate_requires_existing_catalog() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let result = GenerateCommand::new(
            CommandContext::new(temp.path().to_path_buf()),
            GenerateArgs::default(),
        )
        .execute(&mut ui);

        assert!(result.is_err());
    }
}
