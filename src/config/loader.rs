//! Configuration file discovery and loading.
//!
//! This module finds `exercat.yml` and its local override in a project
//! root and merges them over the built-in defaults.

use crate::config::merger::merge_configs;
use crate::config::schema::ExercatConfig;
use crate::error::{CatalogError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Project config file name.
pub const CONFIG_FILE: &str = "exercat.yml";

/// Local (uncommitted) override file name.
pub const LOCAL_CONFIG_FILE: &str = "exercat.local.yml";

/// Paths to configuration files in merge order (later overrides earlier).
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: exercat.yml
    pub project: Option<PathBuf>,

    /// Local overrides: exercat.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            project: existing(project_root.join(CONFIG_FILE)),
            project_local: existing(project_root.join(LOCAL_CONFIG_FILE)),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }

    /// Check if a project config exists.
    pub fn has_project_config(&self) -> bool {
        self.project.is_some()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Find the project root by walking up from `start`.
///
/// Looks for:
/// 1. `exercat.yml` (primary indicator)
/// 2. `.git` directory (fallback)
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_FILE).is_file() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a single config file and parse it into [`ExercatConfig`].
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ExercatConfig> {
    let content = read_config(path)?;
    parse_config(&content, path)
}

/// Parse YAML content into [`ExercatConfig`].
///
/// Empty content yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ExercatConfig> {
    if content.trim().is_empty() {
        return Ok(ExercatConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| CatalogError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a config file as a raw YAML value (for merging).
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = read_config(path)?;

    serde_yaml::from_str(&content).map_err(|e| CatalogError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn read_config(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CatalogError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CatalogError::Io(e)
        }
    })
}

/// Load and merge the config files of a project.
///
/// Missing files are not an error: without any config the defaults apply.
///
/// # Errors
///
/// Returns `ConfigParseError` if any config file is invalid.
pub fn load_merged_config(project_root: &Path) -> Result<ExercatConfig> {
    let paths = ConfigPaths::discover(project_root);

    let mut layers = Vec::new();
    for path in paths.all_existing() {
        let value = load_config_value(path)?;
        // An empty file parses to null; it contributes nothing.
        if !value.is_null() {
            layers.push(value);
        }
    }

    if layers.is_empty() {
        tracing::debug!("No config found in {}, using defaults", project_root.display());
        return Ok(ExercatConfig::default());
    }

    let merged = merge_configs(&layers);
    serde_yaml::from_value(merged).map_err(|e| CatalogError::ConfigParseError {
        path: project_root.join(CONFIG_FILE),
        message: format!("Failed to parse merged config: {}", e),
    })
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads only that file without merging.
/// Otherwise, discovers and merges all config files.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<ExercatConfig> {
    if let Some(override_path) = config_override {
        load_config_file(override_path)
    } else {
        load_merged_config(project_root)
    }
}
