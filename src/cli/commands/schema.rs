//! Schema command implementation.
//!
//! The `exercat schema` command prints the JSON Schema of the catalog
//! document that `build` writes.

use crate::catalog::CatalogDocument;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The schema command implementation.
#[derive(Debug, Default)]
pub struct SchemaCommand;

impl SchemaCommand {
    /// Create a new schema command.
    pub fn new() -> Self {
        Self
    }
}

impl Command for SchemaCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let schema = schemars::schema_for!(CatalogDocument);
        let json = serde_json::to_string_pretty(&schema).map_err(anyhow::Error::from)?;
        ui.message(&json);
        Ok(CommandResult::success())
    }
}
