//! Synthesis of records for referenced but undefined exercises.
//!
//! Everything here works from the id string alone: equipment, target muscles
//! and cues come from ordered pattern tables ([`rules`]), and the name is the
//! title-cased id. Inference is deterministic; the same id always yields the
//! same record.
//!
//! # Example
//!
//! ```
//! use exercat::infer::infer_record;
//!
//! let record = infer_record("some-novel-movement");
//! assert_eq!(record.name, "Some Novel Movement");
//! assert_eq!(record.equipment, vec!["bodyweight"]);
//! assert_eq!(record.target_muscles, vec!["full-body"]);
//! assert_eq!(record.cues.len(), 4);
//! ```

pub mod cues;
pub mod equipment;
pub mod muscles;
pub mod name;
pub mod rules;

pub use cues::{generate_cues, match_archetype, Archetype, ARCHETYPES};
pub use equipment::{infer_equipment, EQUIPMENT_RULES};
pub use muscles::{infer_target_muscles, DEFAULT_MUSCLES, MUSCLE_CHAINS};
pub use name::display_name;
pub use rules::{Pattern, Rule, RuleChain};

use serde::Serialize;
use std::collections::BTreeSet;

use crate::catalog::{Catalog, ExerciseId, ExerciseRecord};
use crate::reconcile::{merge_missing, MergeStats};

/// Build a complete record from an exercise id.
pub fn infer_record(id: &str) -> ExerciseRecord {
    explain(id).record
}

/// The rules that produced an inferred record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FiredRules {
    pub equipment: &'static str,
    /// `chain/rule` for every contributing muscle chain.
    pub muscles: Vec<String>,
    pub cues: &'static str,
}

/// An inferred record together with the rules behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inference {
    pub record: ExerciseRecord,
    pub rules: FiredRules,
}

/// Infer a record and report which rules fired.
pub fn explain(id: &str) -> Inference {
    let (equipment_rule, equipment) = equipment::equipment_with_rule(id);
    let (muscle_rules, target_muscles) = muscles::muscles_with_rules(id);
    let (archetype, cues) = cues::cues_with_archetype(id);

    Inference {
        record: ExerciseRecord {
            name: display_name(id),
            equipment,
            target_muscles,
            cues,
            extra: Default::default(),
        },
        rules: FiredRules {
            equipment: equipment_rule,
            muscles: muscle_rules,
            cues: archetype,
        },
    }
}

/// Fills catalog gaps with inferred records.
#[derive(Debug, Clone, Copy, Default)]
pub struct InferenceEngine;

impl InferenceEngine {
    pub fn new() -> Self {
        Self
    }

    /// Synthesize one record per missing id.
    pub fn synthesize<'a, I>(&self, missing: I) -> Catalog
    where
        I: IntoIterator<Item = &'a ExerciseId>,
    {
        missing
            .into_iter()
            .map(|id| {
                tracing::debug!("Inferring record for '{}'", id);
                (id.clone(), infer_record(id.as_str()))
            })
            .collect()
    }

    /// Add inferred records for `missing` ids to `catalog`.
    ///
    /// Existing records are never replaced, so ids that are already defined
    /// are counted as kept.
    pub fn fill(&self, catalog: &mut Catalog, missing: &BTreeSet<ExerciseId>) -> MergeStats {
        let stats = merge_missing(catalog, self.synthesize(missing));
        tracing::info!("Inferred {} missing exercise(s)", stats.added);
        stats
    }
}
