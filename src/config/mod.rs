//! Configuration loading, parsing, and validation for exercat.
//!
//! This module handles all aspects of configuration:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use exercat::config::{load_merged_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("exercat.yml"), "output: build/catalog.json").unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.output, std::path::PathBuf::from("build/catalog.json"));
//! ```
//!
//! # Configuration File Locations
//!
//! exercat discovers and merges configuration in this order:
//! 1. Built-in defaults (the `data/` layout)
//! 2. Project config (`exercat.yml`)
//! 3. Local overrides (`exercat.local.yml`)

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

// Schema re-exports
pub use schema::{ExercatConfig, OutputMode, Settings, SourceConfig};

// Loader re-exports
pub use loader::{
    find_project_root, load_config, load_config_file, load_config_value, load_merged_config,
    parse_config, ConfigPaths, CONFIG_FILE, LOCAL_CONFIG_FILE,
};

// Merger re-exports
pub use merger::{deep_merge, merge_configs};

// Validator re-exports
pub use validator::{validate, validate_config, ValidationError};
