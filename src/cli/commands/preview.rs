//! Preview command implementation.
//!
//! The `exercat preview` command prints the records inference would produce
//! for the given ids, together with the rules that fired. It reads no
//! configuration and touches no files.

use std::collections::BTreeMap;

use crate::catalog::ExerciseId;
use crate::cli::args::PreviewArgs;
use crate::error::Result;
use crate::infer::{explain, Inference};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The preview command implementation.
pub struct PreviewCommand {
    args: PreviewArgs,
}

impl PreviewCommand {
    /// Create a new preview command.
    pub fn new(args: PreviewArgs) -> Self {
        Self { args }
    }
}

impl Command for PreviewCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut previews: BTreeMap<ExerciseId, Inference> = BTreeMap::new();

        for raw in &self.args.ids {
            match ExerciseId::parse(raw.as_str()) {
                Some(id) => {
                    let inference = explain(id.as_str());
                    previews.insert(id, inference);
                }
                None => {
                    ui.error(&format!("'{}' is not a valid exercise id", raw));
                    return Ok(CommandResult::failure(1));
                }
            }
        }

        let json = serde_json::to_string_pretty(&previews).map_err(anyhow::Error::from)?;
        ui.message(&json);

        Ok(CommandResult::success())
    }
}
