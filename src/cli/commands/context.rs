//! Project context shared by commands.

use std::path::{Path, PathBuf};

use crate::config::{load_config, validate, ExercatConfig};
use crate::error::{CatalogError, Result};
use crate::store::FileStore;
use crate::ui::{OutputMode, UserInterface};

use super::dispatcher::CommandResult;

/// Where a command runs and which config it reads.
#[derive(Debug, Clone)]
pub struct CommandContext {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
}

impl CommandContext {
    /// Create a context for a project root, discovering config files there.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            config_override: None,
        }
    }

    /// Read only this config file instead of discovering layers.
    pub fn with_config(mut self, path: Option<PathBuf>) -> Self {
        self.config_override = path;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// The explicit config file, if any.
    pub fn config_override(&self) -> Option<&Path> {
        self.config_override.as_deref()
    }

    /// A document store rooted at the project.
    pub fn store(&self) -> FileStore {
        FileStore::new(&self.project_root)
    }

    /// Load and validate the configuration.
    ///
    /// Applies `settings.default_output` when no CLI flag changed the
    /// output mode.
    pub fn load_config(&self, ui: &mut dyn UserInterface) -> Result<ExercatConfig> {
        let config = load_config(&self.project_root, self.config_override())?;
        validate(&config)?;

        if ui.output_mode() == OutputMode::Normal {
            ui.set_output_mode(config.settings.default_output.into());
        }

        Ok(config)
    }
}

/// Report a configuration error and pick the exit code.
///
/// A missing config file (only possible with `--config`) exits 2, invalid
/// config exits 1. Other errors propagate.
pub fn config_failure(ui: &mut dyn UserInterface, err: CatalogError) -> Result<CommandResult> {
    match err {
        CatalogError::ConfigNotFound { path } => {
            ui.error(&format!("Configuration not found: {}", path.display()));
            Ok(CommandResult::failure(2))
        }
        e @ (CatalogError::ConfigParseError { .. } | CatalogError::ConfigValidationError { .. }) => {
            ui.error(&e.to_string());
            Ok(CommandResult::failure(1))
        }
        other => Err(other),
    }
}
