//! Persisted document shapes and rendering.

use anyhow::Context;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::Catalog;
use crate::error::Result;

/// Mapping-form catalog document: `{ "exercises": { <id>: <record> } }`.
///
/// This is also the shape of every catalog exercat writes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CatalogDocument {
    pub exercises: Catalog,
}

/// Render a catalog as a pretty-printed mapping-form document.
///
/// Output uses 2-space indentation, sorted ids and a trailing newline, so
/// rendering the same catalog twice yields identical bytes.
///
/// # Errors
///
/// Returns `Other` if a record cannot be serialized; nothing is written then.
pub fn render_catalog(catalog: &Catalog) -> Result<String> {
    #[derive(Serialize)]
    struct Borrowed<'a> {
        exercises: &'a Catalog,
    }

    let mut out = serde_json::to_string_pretty(&Borrowed { exercises: catalog })
        .context("failed to serialize catalog")?;
    out.push('\n');
    Ok(out)
}

/// SHA-256 digest of rendered content, hex-encoded.
pub fn content_digest(content: &str) -> String {
    let hash = Sha256::digest(content.as_bytes());
    hex::encode(&hash[..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ExerciseId, ExerciseRecord};

    fn sample() -> Catalog {
        vec![(
            ExerciseId::parse("plank").unwrap(),
            ExerciseRecord {
                name: "Plank".to_string(),
                equipment: vec!["bodyweight".to_string()],
                target_muscles: vec!["core".to_string()],
                cues: vec!["Hold.".to_string()],
                ..Default::default()
            },
        )]
        .into_iter()
        .collect()
    }

    #[test]
    fn render_uses_two_space_indent_and_trailing_newline() {
        let out = render_catalog(&sample()).unwrap();
        assert!(out.starts_with("{\n  \"exercises\": {\n    \"plank\": {"));
        assert!(out.ends_with("}\n"));
    }

    #[test]
    fn render_round_trips_through_catalog_document() {
        let out = render_catalog(&sample()).unwrap();
        let doc: CatalogDocument = serde_json::from_str(&out).unwrap();
        assert_eq!(doc.exercises, sample());
    }

    #[test]
    fn render_is_deterministic() {
        assert_eq!(render_catalog(&sample()).unwrap(), render_catalog(&sample()).unwrap());
    }

    #[test]
    fn render_empty_catalog() {
        assert_eq!(render_catalog(&Catalog::new()).unwrap(), "{\n  \"exercises\": {}\n}\n");
    }

    #[test]
    fn digest_is_stable_hex() {
        let a = content_digest("abc");
        assert_eq!(a.len(), 64);
        assert_eq!(
            a,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
