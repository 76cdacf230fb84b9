//! Configuration validation rules.
//!
//! This module validates configuration for correctness:
//! - At least one exercise source must be configured
//! - Source names must be unique
//! - Source and output paths must not be empty
//! - A source may not use the relationship layout

use crate::config::schema::ExercatConfig;
use crate::error::{CatalogError, Result};
use crate::loader::SourceShape;
use std::collections::HashSet;
use std::path::Path;

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Source name if error is source-specific
    pub source: Option<String>,
}

impl ValidationError {
    fn new(rule: &str, message: String, source: Option<&str>) -> Self {
        Self {
            rule: rule.to_string(),
            message,
            source: source.map(str::to_string),
        }
    }
}

/// Validate a configuration and return all errors.
///
/// This function collects all validation errors rather than stopping
/// at the first one, allowing users to fix multiple issues at once.
pub fn validate_config(config: &ExercatConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_sources(config));
    errors.extend(validate_outputs(config));

    errors
}

fn validate_sources(config: &ExercatConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.sources.is_empty() {
        errors.push(ValidationError::new(
            "no-sources",
            "At least one exercise source must be configured".to_string(),
            None,
        ));
    }

    let mut seen = HashSet::new();
    for source in &config.sources {
        if !seen.insert(source.name.as_str()) {
            errors.push(ValidationError::new(
                "duplicate-source-name",
                format!("Source '{}' is defined more than once", source.name),
                Some(&source.name),
            ));
        }

        if is_blank(&source.path) {
            errors.push(ValidationError::new(
                "empty-path",
                format!("Source '{}' has an empty path", source.name),
                Some(&source.name),
            ));
        }

        if source.shape == SourceShape::Relationships {
            errors.push(ValidationError::new(
                "relationship-source",
                format!(
                    "Source '{}' uses the relationships shape; configure it as 'relationships' instead",
                    source.name
                ),
                Some(&source.name),
            ));
        }
    }

    errors
}

fn validate_outputs(config: &ExercatConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (key, path) in [
        ("relationships", &config.relationships),
        ("output", &config.output),
        ("consolidated_output", &config.consolidated_output),
    ] {
        if is_blank(path) {
            errors.push(ValidationError::new(
                "empty-path",
                format!("'{}' must not be empty", key),
                None,
            ));
        }
    }

    errors
}

fn is_blank(path: &Path) -> bool {
    path.as_os_str().is_empty()
}

/// Validate a configuration, returning a single joined error.
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate(config: &ExercatConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(CatalogError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::SourceConfig;
    use std::path::PathBuf;

    fn source(name: &str, path: &str) -> SourceConfig {
        SourceConfig {
            name: name.to_string(),
            path: PathBuf::from(path),
            shape: SourceShape::Auto,
        }
    }

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&ExercatConfig::default()).is_empty());
        assert!(validate(&ExercatConfig::default()).is_ok());
    }

    #[test]
    fn requires_at_least_one_source() {
        let config = ExercatConfig {
            sources: vec![],
            ..Default::default()
        };
        let errors = validate_config(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "no-sources");
    }

    #[test]
    fn detects_duplicate_source_names() {
        let config = ExercatConfig {
            sources: vec![source("a", "a.json"), source("a", "b.json")],
            ..Default::default()
        };
        let errors = validate_config(&config);
        assert!(errors.iter().any(|e| e.rule == "duplicate-source-name"));
        assert_eq!(errors[0].source.as_deref(), Some("a"));
    }

    #[test]
    fn detects_empty_paths() {
        let config = ExercatConfig {
            sources: vec![source("a", "")],
            output: PathBuf::new(),
            ..Default::default()
        };
        let errors = validate_config(&config);
        assert_eq!(errors.iter().filter(|e| e.rule == "empty-path").count(), 2);
    }

    #[test]
    fn rejects_relationship_shaped_source() {
        let mut rel = source("rel", "rel.json");
        rel.shape = SourceShape::Relationships;
        let config = ExercatConfig {
            sources: vec![rel],
            ..Default::default()
        };
        let errors = validate_config(&config);
        assert_eq!(errors[0].rule, "relationship-source");
    }

    #[test]
    fn validate_joins_messages() {
        let config = ExercatConfig {
            sources: vec![source("a", ""), source("a", "x.json")],
            ..Default::default()
        };
        let err = validate(&config).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("empty path"));
        assert!(msg.contains("more than once"));
        assert!(msg.contains("; "));
    }
}
