//! Configuration schema definitions for exercat.
//!
//! This module contains the structs that map to the `exercat.yml`
//! file format. Every field has a default, so an absent or empty config
//! file describes the conventional `data/` layout.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::loader::SourceShape;

/// Root configuration structure for exercat.yml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExercatConfig {
    /// Exercise sources in precedence order, highest first
    pub sources: Vec<SourceConfig>,

    /// Relationship document
    pub relationships: PathBuf,

    /// Where the final catalog is written
    pub output: PathBuf,

    /// Where `consolidate` writes the catalog before inference
    pub consolidated_output: PathBuf,

    /// Global settings
    pub settings: Settings,
}

impl Default for ExercatConfig {
    fn default() -> Self {
        Self {
            sources: vec![
                SourceConfig {
                    name: "exercises-catalog".to_string(),
                    path: PathBuf::from("data/exercises-catalog.json"),
                    shape: SourceShape::Mapping,
                },
                SourceConfig {
                    name: "exercises".to_string(),
                    path: PathBuf::from("data/exercises.json"),
                    shape: SourceShape::Array,
                },
            ],
            relationships: PathBuf::from("data/exercise-relationships.json"),
            output: PathBuf::from("data/exercises-catalog.json"),
            consolidated_output: PathBuf::from("data/exercises-catalog-consolidated.json"),
            settings: Settings::default(),
        }
    }
}

/// One exercise source document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Name used in reports
    pub name: String,

    /// Document path (relative to the project root)
    pub path: PathBuf,

    /// Document layout; detected when omitted
    #[serde(default)]
    pub shape: SourceShape,
}

/// Global settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default output mode: verbose, normal, quiet, silent
    pub default_output: OutputMode,

    /// Treat lint warnings as failures
    #[serde(skip_serializing_if = "is_false")]
    pub strict: bool,
}

/// Output verbosity as written in the config file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    #[default]
    Normal,
    Quiet,
    Silent,
}

fn is_false(b: &bool) -> bool {
    !*b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_data_layout() {
        let config = ExercatConfig::default();
        assert_eq!(config.sources.len(), 2);
        assert_eq!(config.sources[0].name, "exercises-catalog");
        assert_eq!(config.sources[0].shape, SourceShape::Mapping);
        assert_eq!(config.sources[1].shape, SourceShape::Array);
        assert_eq!(
            config.relationships,
            PathBuf::from("data/exercise-relationships.json")
        );
        assert_eq!(config.output, PathBuf::from("data/exercises-catalog.json"));
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let config: ExercatConfig = serde_yaml::from_str("output: build/catalog.json").unwrap();
        assert_eq!(config.output, PathBuf::from("build/catalog.json"));
        assert_eq!(config.sources.len(), 2);
        assert_eq!(config.settings.default_output, OutputMode::Normal);
    }

    #[test]
    fn source_shape_defaults_to_auto() {
        let yaml = r#"
sources:
  - name: legacy
    path: legacy.json
"#;
        let config: ExercatConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.sources.len(), 1);
        assert_eq!(config.sources[0].shape, SourceShape::Auto);
    }

    #[test]
    fn settings_parse_output_mode_and_strict() {
        let yaml = r#"
settings:
  default_output: quiet
  strict: true
"#;
        let config: ExercatConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.settings.default_output, OutputMode::Quiet);
        assert!(config.settings.strict);
    }
}
