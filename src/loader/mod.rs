//! Source loading and normalization.
//!
//! Sources arrive in three layouts (see [`SourceShape`]). Loading turns each
//! into a uniform representation keyed by [`ExerciseId`]:
//!
//! - exercise sources (array or mapping form) become an [`ExerciseSource`]
//! - the relationship source becomes a [`RelationshipGraph`]
//!
//! Document-level problems (invalid JSON, missing top-level key) are errors.
//! Record-level problems are collected as [`LoadIssue`]s and the record is
//! dropped, so one bad entry never sinks a whole batch.
//!
//! # Example
//!
//! ```
//! use exercat::loader::{load_exercises, SourceShape};
//! use serde_json::json;
//!
//! let doc = json!({"exercises": [
//!     {"id": "plank", "name": "Plank", "cues": ["Hold."]},
//!     {"name": "No Id"}
//! ]});
//! let loaded = load_exercises("exercises", &doc, SourceShape::Auto).unwrap();
//! assert_eq!(loaded.value.records.len(), 1);
//! assert_eq!(loaded.issues.len(), 1);
//! ```

pub mod issue;
pub mod shape;

pub use issue::{LoadIssue, LoadIssueKind};
pub use shape::{detect_shape, SourceShape};

use serde_json::{Map, Value};
use std::path::Path;

use crate::catalog::{Catalog, ExerciseId, ExerciseRecord, Relation, Relations, RelationshipGraph};
use crate::config::SourceConfig;
use crate::error::{CatalogError, Result};
use crate::store::DocumentStore;

/// A loaded value together with the records dropped along the way.
#[derive(Debug, Clone)]
pub struct Loaded<T> {
    pub value: T,
    pub issues: Vec<LoadIssue>,
}

/// A normalized exercise source.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseSource {
    /// Source name, used in reports.
    pub name: String,
    /// The shape the document was read as (never `Auto`).
    pub shape: SourceShape,
    /// Records keyed by id.
    pub records: Catalog,
}

/// Normalize an exercise document.
///
/// With [`SourceShape::Auto`] the shape is detected from the document.
///
/// # Errors
///
/// Returns `MalformedDocument` if the `exercises` key is missing or does not
/// match the requested shape, or if `shape` is `Relationships`.
pub fn load_exercises(name: &str, doc: &Value, shape: SourceShape) -> Result<Loaded<ExerciseSource>> {
    let shape = resolve_shape(name, doc, shape)?;
    let mut issues = Vec::new();

    let records = match shape {
        SourceShape::Array => {
            let entries = doc
                .get("exercises")
                .and_then(Value::as_array)
                .ok_or_else(|| {
                    CatalogError::malformed(name, "expected an 'exercises' array")
                })?;
            normalize_array(name, entries, &mut issues)
        }
        SourceShape::Mapping => {
            let entries = doc
                .get("exercises")
                .and_then(Value::as_object)
                .ok_or_else(|| {
                    CatalogError::malformed(name, "expected an 'exercises' object")
                })?;
            normalize_mapping(name, entries, &mut issues)
        }
        SourceShape::Relationships | SourceShape::Auto => {
            return Err(CatalogError::malformed(
                name,
                "expected an exercise document, found a relationship document",
            ));
        }
    };

    tracing::debug!(
        "Loaded {} record(s) from '{}' ({} form), {} dropped",
        records.len(),
        name,
        shape,
        issues.len()
    );

    Ok(Loaded {
        value: ExerciseSource {
            name: name.to_string(),
            shape,
            records,
        },
        issues,
    })
}

/// Normalize a relationship document.
///
/// # Errors
///
/// Returns `MalformedDocument` if the `relationships` object is missing.
pub fn load_relationships(name: &str, doc: &Value) -> Result<Loaded<RelationshipGraph>> {
    let entries = doc
        .get("relationships")
        .and_then(Value::as_object)
        .ok_or_else(|| CatalogError::malformed(name, "missing top-level key 'relationships'"))?;

    let mut issues = Vec::new();
    let mut graph = RelationshipGraph::new();

    for (key, body) in entries {
        let Some(id) = ExerciseId::parse(key.as_str()) else {
            issues.push(LoadIssue::new(
                name,
                format!("'{}'", key),
                LoadIssueKind::MissingRequiredField { field: "id" },
            ));
            continue;
        };
        let Some(body) = body.as_object() else {
            issues.push(LoadIssue::new(
                name,
                format!("'{}'", id),
                LoadIssueKind::InvalidRecord {
                    message: "relationship entry is not an object".to_string(),
                },
            ));
            continue;
        };

        let relations = Relations {
            regressions: read_relations(name, &id, body, "regressions", &mut issues),
            progressions: read_relations(name, &id, body, "progressions", &mut issues),
        };
        graph.insert(id, relations);
    }

    tracing::debug!(
        "Loaded {} relationship source(s) from '{}', {} dropped",
        graph.len(),
        name,
        issues.len()
    );

    Ok(Loaded {
        value: graph,
        issues,
    })
}

/// Read and normalize a configured exercise source through a document store.
pub fn load_source<S: DocumentStore + ?Sized>(
    store: &S,
    source: &SourceConfig,
) -> Result<Loaded<ExerciseSource>> {
    let doc = store.read_json(&source.path, &source.name)?;
    load_exercises(&source.name, &doc, source.shape)
}

/// Read and normalize the relationship document through a document store.
pub fn load_relationship_source<S: DocumentStore + ?Sized>(
    store: &S,
    path: &Path,
) -> Result<Loaded<RelationshipGraph>> {
    let name = source_name(path);
    let doc = store.read_json(path, &name)?;
    load_relationships(&name, &doc)
}

/// Derive a source name from a document path (its file stem).
pub fn source_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

fn resolve_shape(name: &str, doc: &Value, requested: SourceShape) -> Result<SourceShape> {
    match requested {
        SourceShape::Auto => detect_shape(doc).ok_or_else(|| {
            CatalogError::malformed(
                name,
                "missing top-level key 'exercises' or 'relationships'",
            )
        }),
        shape => {
            let key = shape.top_level_key().unwrap_or("exercises");
            if doc.get(key).is_none() {
                return Err(CatalogError::malformed(
                    name,
                    format!("missing top-level key '{}'", key),
                ));
            }
            Ok(shape)
        }
    }
}

fn normalize_array(name: &str, entries: &[Value], issues: &mut Vec<LoadIssue>) -> Catalog {
    let mut records = Catalog::new();

    for (index, entry) in entries.iter().enumerate() {
        let location = format!("[{}]", index);
        let Some(object) = entry.as_object() else {
            issues.push(LoadIssue::new(
                name,
                location,
                LoadIssueKind::InvalidRecord {
                    message: "record is not an object".to_string(),
                },
            ));
            continue;
        };

        let Some(id) = object
            .get("id")
            .and_then(Value::as_str)
            .and_then(ExerciseId::parse)
        else {
            issues.push(LoadIssue::new(
                name,
                location,
                LoadIssueKind::MissingRequiredField { field: "id" },
            ));
            continue;
        };

        if !object.contains_key("name") {
            issues.push(LoadIssue::new(
                name,
                format!("'{}'", id),
                LoadIssueKind::MissingRequiredField { field: "name" },
            ));
            continue;
        }

        // Array records are projected onto the known fields; the id becomes
        // the key.
        let record = match parse_record(object.clone()) {
            Ok(record) => ExerciseRecord {
                extra: Default::default(),
                ..record
            },
            Err(message) => {
                issues.push(LoadIssue::new(
                    name,
                    format!("'{}'", id),
                    LoadIssueKind::InvalidRecord { message },
                ));
                continue;
            }
        };

        if records.contains(id.as_str()) {
            issues.push(LoadIssue::new(
                name,
                format!("'{}'", id),
                LoadIssueKind::DuplicateId,
            ));
            continue;
        }
        records.insert_if_absent(id, record);
    }

    records
}

fn normalize_mapping(
    name: &str,
    entries: &Map<String, Value>,
    issues: &mut Vec<LoadIssue>,
) -> Catalog {
    let mut records = Catalog::new();

    for (key, body) in entries {
        let Some(id) = ExerciseId::parse(key.as_str()) else {
            issues.push(LoadIssue::new(
                name,
                format!("'{}'", key),
                LoadIssueKind::MissingRequiredField { field: "id" },
            ));
            continue;
        };
        let Some(object) = body.as_object() else {
            issues.push(LoadIssue::new(
                name,
                format!("'{}'", id),
                LoadIssueKind::InvalidRecord {
                    message: "record is not an object".to_string(),
                },
            ));
            continue;
        };

        // Mapping bodies are kept whole.
        match parse_record(object.clone()) {
            Ok(record) => {
                records.insert_if_absent(id, record);
            }
            Err(message) => issues.push(LoadIssue::new(
                name,
                format!("'{}'", id),
                LoadIssueKind::InvalidRecord { message },
            )),
        }
    }

    records
}

fn parse_record(body: Map<String, Value>) -> std::result::Result<ExerciseRecord, String> {
    serde_json::from_value(Value::Object(body)).map_err(|e| e.to_string())
}

fn read_relations(
    name: &str,
    id: &ExerciseId,
    body: &Map<String, Value>,
    key: &str,
    issues: &mut Vec<LoadIssue>,
) -> Vec<Relation> {
    let Some(value) = body.get(key) else {
        return Vec::new();
    };
    let Some(entries) = value.as_array() else {
        issues.push(LoadIssue::new(
            name,
            format!("'{}'", id),
            LoadIssueKind::InvalidRecord {
                message: format!("'{}' is not an array", key),
            },
        ));
        return Vec::new();
    };

    let mut relations = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let location = format!("'{}' {}[{}]", id, key, index);
        let has_target = entry
            .get("exerciseId")
            .and_then(Value::as_str)
            .is_some_and(|target| ExerciseId::parse(target).is_some());
        if !has_target {
            issues.push(LoadIssue::new(
                name,
                location,
                LoadIssueKind::MissingRequiredField {
                    field: "exerciseId",
                },
            ));
            continue;
        }

        match serde_json::from_value::<Relation>(entry.clone()) {
            Ok(relation) => relations.push(relation),
            Err(e) => issues.push(LoadIssue::new(
                name,
                location,
                LoadIssueKind::InvalidRecord {
                    message: e.to_string(),
                },
            )),
        }
    }
    relations
}
