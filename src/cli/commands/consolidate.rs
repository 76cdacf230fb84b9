//! Consolidate command implementation.
//!
//! The `exercat consolidate` command merges the configured sources by
//! precedence and writes the result to `consolidated_output` without
//! inferring anything, then prints the coverage report.

use crate::cli::args::ConsolidateArgs;
use crate::error::Result;
use crate::pipeline::{OutputStatus, Pipeline, WriteMode};
use crate::ui::UserInterface;

use super::context::{config_failure, CommandContext};
use super::dispatcher::{Command, CommandResult};
use super::display::ProgressReporter;

/// The consolidate command implementation.
pub struct ConsolidateCommand {
    context: CommandContext,
    args: ConsolidateArgs,
}

impl ConsolidateCommand {
    /// Create a new consolidate command.
    pub fn new(context: CommandContext, args: ConsolidateArgs) -> Self {
        Self { context, args }
    }
}

impl Command for ConsolidateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match self.context.load_config(ui) {
            Ok(c) => c,
            Err(e) => return config_failure(ui, e),
        };

        ui.show_header("exercat consolidate");

        let mode = if self.args.dry_run {
            WriteMode::DryRun
        } else {
            WriteMode::Write
        };

        let mut store = self.context.store();
        let mut reporter = ProgressReporter::new(ui);
        let outcome = Pipeline::new(&config, &mut store)
            .consolidate_with_progress(mode, |event| reporter.handle(event));

        if outcome.is_err() {
            reporter.abort("Consolidation failed");
        }
        drop(reporter);
        let result = outcome?;

        for line in result.report.render_human().lines() {
            ui.message(line);
        }

        let output = result.output.display();
        match result.status {
            OutputStatus::Skipped => ui.message(&format!("Dry run: {} not written", output)),
            _ => ui.success(&format!(
                "Consolidated {} exercises into {}",
                result.catalog.len(),
                output
            )),
        }
        if !result.report.missing.is_empty() {
            ui.show_hint("Run `exercat build` to infer the missing exercises");
        }

        Ok(CommandResult::success())
    }
}
