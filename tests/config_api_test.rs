//! Integration tests for config module public API.

use exercat::config::{load_config, load_merged_config, validate, ExercatConfig, OutputMode};
use exercat::loader::SourceShape;
use exercat::CatalogError;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn defaults_describe_data_layout() {
    let config = ExercatConfig::default();

    assert_eq!(config.sources.len(), 2);
    assert_eq!(config.sources[0].shape, SourceShape::Mapping);
    assert_eq!(config.sources[1].shape, SourceShape::Array);
    assert_eq!(config.output, PathBuf::from("data/exercises-catalog.json"));
    assert_eq!(config.settings.default_output, OutputMode::Normal);
    validate(&config).unwrap();
}

#[test]
fn local_config_overrides_project_config() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("exercat.yml"),
        r#"
sources:
  - name: primary
    path: raw/primary.json
relationships: raw/relationships.json
output: out/catalog.json
settings:
  strict: true
"#,
    )
    .unwrap();
    fs::write(
        temp.path().join("exercat.local.yml"),
        "output: out/local.json\nsettings:\n  default_output: verbose\n",
    )
    .unwrap();

    let config = load_merged_config(temp.path()).unwrap();

    assert_eq!(config.sources.len(), 1);
    assert_eq!(config.sources[0].shape, SourceShape::Auto);
    assert_eq!(config.output, PathBuf::from("out/local.json"));
    assert_eq!(config.settings.default_output, OutputMode::Verbose);
    // merged, not replaced
    assert!(config.settings.strict);
    validate(&config).unwrap();
}

#[test]
fn explicit_config_skips_discovery() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("exercat.yml"), "output: discovered.json\n").unwrap();
    let alt = temp.path().join("alt.yml");
    fs::write(&alt, "output: explicit.json\n").unwrap();

    let config = load_config(temp.path(), Some(&alt)).unwrap();
    assert_eq!(config.output, PathBuf::from("explicit.json"));

    let err = load_config(temp.path(), Some(&temp.path().join("nope.yml"))).unwrap_err();
    assert!(matches!(err, CatalogError::ConfigNotFound { .. }));
}

#[test]
fn duplicate_source_names_are_rejected() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("exercat.yml"),
        r#"
sources:
  - name: same
    path: a.json
  - name: same
    path: b.json
"#,
    )
    .unwrap();

    let config = load_merged_config(temp.path()).unwrap();
    let err = validate(&config).unwrap_err();
    assert!(err.to_string().contains("same"));
}
