//! Exercise records and the canonical catalog.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::btree_map::{self, BTreeMap};

use super::ExerciseId;

/// A single exercise definition as stored in the canonical catalog.
///
/// `equipment` and `cues` are ordered: equipment by required-gear priority,
/// cues by execution sequence. `target_muscles` is semantically a set.
/// Fields exercat does not interpret are kept in `extra` and written back
/// after the known ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseRecord {
    /// Human-readable display name.
    #[serde(default)]
    pub name: String,

    /// Required equipment, most important first.
    #[serde(default)]
    pub equipment: Vec<String>,

    /// Muscles worked by the exercise.
    #[serde(default)]
    pub target_muscles: Vec<String>,

    /// Instructional cues in execution order.
    #[serde(default)]
    pub cues: Vec<String>,

    /// Uninterpreted fields.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Canonical mapping from exercise identifier to record.
///
/// Keys are kept sorted so serialized output is byte-stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Catalog {
    entries: BTreeMap<ExerciseId, ExerciseRecord>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record only if the id is not already present.
    ///
    /// Returns `true` if the record was inserted. Existing records are never
    /// replaced.
    pub fn insert_if_absent(&mut self, id: ExerciseId, record: ExerciseRecord) -> bool {
        match self.entries.entry(id) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(record);
                true
            }
            btree_map::Entry::Occupied(_) => false,
        }
    }

    /// Look up a record by id.
    pub fn get(&self, id: &str) -> Option<&ExerciseRecord> {
        self.entries.get(id)
    }

    /// Check whether an id is present.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Iterate over ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &ExerciseId> {
        self.entries.keys()
    }

    /// Iterate over entries in sorted id order.
    pub fn iter(&self) -> impl Iterator<Item = (&ExerciseId, &ExerciseRecord)> {
        self.entries.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog has no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(ExerciseId, ExerciseRecord)> for Catalog {
    /// Collect entries; on duplicate ids the first occurrence is kept.
    fn from_iter<I: IntoIterator<Item = (ExerciseId, ExerciseRecord)>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for (id, record) in iter {
            catalog.insert_if_absent(id, record);
        }
        catalog
    }
}

impl IntoIterator for Catalog {
    type Item = (ExerciseId, ExerciseRecord);
    type IntoIter = btree_map::IntoIter<ExerciseId, ExerciseRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
