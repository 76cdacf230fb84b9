//! Deep merge of layered YAML configuration values.
//!
//! `exercat.local.yml` overlays `exercat.yml`. This module implements the
//! overlay semantics.
//!
//! # Merge Rules
//!
//! - Mappings are merged recursively
//! - Sequences are replaced entirely (a local `sources:` list replaces the
//!   project list, it does not append to it)
//! - Null values in overlay delete the corresponding key from base
//! - Scalars in overlay replace scalars in base

use serde_yaml::Value;

/// Deep merge two YAML values; `overlay` wins at the point of conflict.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut result = base_map.clone();

            for (key, overlay_value) in overlay_map {
                if overlay_value.is_null() {
                    result.remove(key);
                } else if let Some(base_value) = base_map.get(key) {
                    result.insert(key.clone(), deep_merge(base_value, overlay_value));
                } else {
                    result.insert(key.clone(), overlay_value.clone());
                }
            }

            Value::Mapping(result)
        }

        (_, overlay) => overlay.clone(),
    }
}

/// Merge config layers in order (later overrides earlier).
pub fn merge_configs(configs: &[Value]) -> Value {
    configs
        .iter()
        .fold(Value::Mapping(Default::default()), |acc, config| {
            deep_merge(&acc, config)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn overlay_scalar_replaces_base() {
        let base = yaml("output: data/exercises-catalog.json");
        let overlay = yaml("output: build/catalog.json");

        let result = deep_merge(&base, &overlay);
        assert_eq!(result["output"], "build/catalog.json");
    }

    #[test]
    fn nested_settings_merge_keys() {
        let base = yaml(
            r#"
settings:
  default_output: verbose
  strict: true
"#,
        );
        let overlay = yaml(
            r#"
settings:
  default_output: quiet
"#,
        );

        let result = deep_merge(&base, &overlay);
        assert_eq!(result["settings"]["default_output"], "quiet");
        assert_eq!(result["settings"]["strict"], true);
    }

    #[test]
    fn source_lists_are_replaced_not_appended() {
        let base = yaml(
            r#"
sources:
  - name: catalog
    path: a.json
  - name: legacy
    path: b.json
"#,
        );
        let overlay = yaml(
            r#"
sources:
  - name: staging
    path: c.json
"#,
        );

        let result = deep_merge(&base, &overlay);
        let sources = result["sources"].as_sequence().unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0]["name"], "staging");
    }

    #[test]
    fn null_removes_inherited_value() {
        let base = yaml(
            r#"
settings:
  strict: true
  default_output: quiet
"#,
        );
        let overlay = yaml(
            r#"
settings:
  strict: ~
"#,
        );

        let result = deep_merge(&base, &overlay);
        assert!(result["settings"].get("strict").is_none());
        assert_eq!(result["settings"]["default_output"], "quiet");
    }

    #[test]
    fn merge_configs_applies_layers_in_order() {
        let layers = vec![
            yaml("output: one.json\nrelationships: rel.json"),
            yaml("output: two.json"),
        ];
        let result = merge_configs(&layers);
        assert_eq!(result["output"], "two.json");
        assert_eq!(result["relationships"], "rel.json");
    }

    #[test]
    fn merge_empty_configs_returns_empty() {
        let result = merge_configs(&[]);
        assert!(result.as_mapping().unwrap().is_empty());
    }
}
