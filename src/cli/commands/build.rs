//! Build command implementation.
//!
//! The `exercat build` command runs the full pipeline: load every source,
//! reconcile, infer what is missing, validate and write the catalog.

use crate::cli::args::BuildArgs;
use crate::error::Result;
use crate::lint::{has_errors, OutputFormat, Severity};
use crate::pipeline::{OutputStatus, Pipeline, PipelineResult, WriteMode};
use crate::ui::UserInterface;

use super::context::{config_failure, CommandContext};
use super::dispatcher::{Command, CommandResult};
use super::display::{show_diagnostics, ProgressReporter};

/// The build command implementation.
pub struct BuildCommand {
    context: CommandContext,
    args: BuildArgs,
}

impl BuildCommand {
    /// Create a new build command.
    pub fn new(context: CommandContext, args: BuildArgs) -> Self {
        Self { context, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &BuildArgs {
        &self.args
    }

    fn write_mode(&self) -> WriteMode {
        if self.args.check {
            WriteMode::Check
        } else if self.args.dry_run {
            WriteMode::DryRun
        } else {
            WriteMode::Write
        }
    }
}

impl Command for BuildCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match self.context.load_config(ui) {
            Ok(c) => c,
            Err(e) => return config_failure(ui, e),
        };

        ui.show_header("exercat build");

        let mut store = self.context.store();
        let mut reporter = ProgressReporter::new(ui);
        let outcome = Pipeline::new(&config, &mut store)
            .build_with_progress(self.write_mode(), |event| reporter.handle(event));

        if outcome.is_err() {
            reporter.abort("Build failed");
        }
        drop(reporter);

        let result = outcome?;
        Ok(summarize(ui, &result))
    }
}

/// Report a finished pipeline run and pick the exit code.
pub(super) fn summarize(ui: &mut dyn UserInterface, result: &PipelineResult) -> CommandResult {
    let warnings = result
        .diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Warning)
        .count();

    if has_errors(&result.diagnostics) || ui.output_mode().shows_details() {
        show_diagnostics(ui, &result.diagnostics, OutputFormat::Human);
    } else if warnings > 0 {
        ui.warning(&format!("{} lint warning(s)", warnings));
        ui.show_hint("Run `exercat lint` for details");
    }

    let output = result.output.display();
    let inferred = result.inferred.map(|stats| stats.added).unwrap_or(0);
    match result.status {
        OutputStatus::Written => ui.success(&format!(
            "Wrote {} ({} exercises, {} inferred)",
            output,
            result.catalog.len(),
            inferred
        )),
        OutputStatus::Unchanged => ui.success(&format!(
            "{} is unchanged ({} exercises)",
            output,
            result.catalog.len()
        )),
        OutputStatus::Skipped => ui.message(&format!(
            "Dry run: {} not written ({} exercises, {} inferred)",
            output,
            result.catalog.len(),
            inferred
        )),
        OutputStatus::UpToDate => ui.success(&format!("{} is up to date", output)),
        OutputStatus::Stale => {
            ui.error(&format!("{} is out of date", output));
            ui.show_hint("Run `exercat build` to update it");
        }
    }
    ui.message(&format!("sha256 {}", result.digest));

    if let Some(err) = result.failure() {
        ui.error(&err.to_string());
    }

    if result.is_success() {
        CommandResult::success()
    } else {
        CommandResult::failure(1)
    }
}
