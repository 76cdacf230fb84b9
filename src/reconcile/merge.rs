//! Left-wins merge of exercise records.

use crate::catalog::{Catalog, ExerciseId, ExerciseRecord};

/// Outcome counts of a [`merge_missing`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Records inserted because their id was new.
    pub added: usize,
    /// Incoming records skipped because the id was already present.
    pub kept: usize,
}

/// Add every incoming record whose id is not yet in `target`.
///
/// Records already in `target` are never replaced or modified; a winning
/// record is taken whole, never combined field-by-field with a losing one.
pub fn merge_missing<I>(target: &mut Catalog, incoming: I) -> MergeStats
where
    I: IntoIterator<Item = (ExerciseId, ExerciseRecord)>,
{
    let mut stats = MergeStats::default();
    for (id, record) in incoming {
        if target.insert_if_absent(id, record) {
            stats.added += 1;
        } else {
            stats.kept += 1;
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ExerciseId {
        ExerciseId::parse(s).unwrap()
    }

    fn record(name: &str, cue: &str) -> ExerciseRecord {
        ExerciseRecord {
            name: name.to_string(),
            equipment: vec!["bodyweight".to_string()],
            target_muscles: vec!["core".to_string()],
            cues: vec![cue.to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn adds_only_new_ids() {
        let mut catalog: Catalog = [(id("plank"), record("Plank", "catalog"))]
            .into_iter()
            .collect();

        let stats = merge_missing(
            &mut catalog,
            vec![
                (id("plank"), record("Plank (old)", "old")),
                (id("side-plank"), record("Side Plank", "old")),
            ],
        );

        assert_eq!(stats, MergeStats { added: 1, kept: 1 });
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("plank").unwrap().name, "Plank");
        assert_eq!(catalog.get("plank").unwrap().cues, vec!["catalog"]);
    }

    #[test]
    fn winning_record_is_never_a_hybrid() {
        let mut winner = record("Dip", "winner");
        winner.equipment.clear();
        let mut catalog: Catalog = [(id("dip"), winner.clone())].into_iter().collect();

        merge_missing(&mut catalog, vec![(id("dip"), record("Dip", "loser"))]);

        assert_eq!(catalog.get("dip"), Some(&winner));
    }

    #[test]
    fn empty_incoming_changes_nothing() {
        let mut catalog = Catalog::new();
        let stats = merge_missing(&mut catalog, Vec::new());
        assert_eq!(stats, MergeStats::default());
        assert!(catalog.is_empty());
    }
}
