//! Equipment inference.

use super::rules::{Pattern, Rule, RuleChain};

/// Equipment lists produced by the rules.
pub type Equipment = &'static [&'static str];

/// Equipment rules in priority order.
///
/// Loaded barbell patterns come first but yield to an explicit dumbbell or
/// kettlebell token, so `dumbbell-row` needs dumbbells, not a barbell.
pub const EQUIPMENT_RULES: RuleChain<Equipment> = RuleChain {
    name: "equipment",
    rules: &[
        Rule {
            name: "barbell-lift",
            pattern: Pattern::AnyExcept {
                any: &["barbell", "deadlift", "squat", "press", "row", "jerk"],
                except: &["dumbbell", "kettlebell"],
            },
            value: &["barbell"],
        },
        Rule {
            name: "dumbbell",
            pattern: Pattern::Any(&["dumbbell"]),
            value: &["dumbbells"],
        },
        Rule {
            name: "kettlebell",
            pattern: Pattern::Any(&["kettlebell"]),
            value: &["kettlebells"],
        },
        Rule {
            name: "bar-hang",
            pattern: Pattern::Any(&["pull-up", "chin-up", "hanging", "muscle-up"]),
            value: &["pull-up-bar"],
        },
        Rule {
            name: "rings",
            pattern: Pattern::Any(&["ring"]),
            value: &["rings"],
        },
        Rule {
            name: "parallettes",
            pattern: Pattern::Any(&["parallette"]),
            value: &["parallettes"],
        },
        Rule {
            name: "landmine",
            pattern: Pattern::Any(&["landmine"]),
            value: &["barbell", "landmine"],
        },
        Rule {
            name: "bands",
            pattern: Pattern::Any(&["band", "pull-apart"]),
            value: &["resistance-bands"],
        },
        Rule {
            name: "bench",
            pattern: Pattern::AnyExcept {
                any: &["bench", "incline", "decline"],
                except: &["push"],
            },
            value: &["bench"],
        },
        Rule {
            name: "wall",
            pattern: Pattern::Any(&["wall"]),
            value: &["wall"],
        },
        Rule {
            name: "box",
            pattern: Pattern::Any(&["box", "step"]),
            value: &["bench"],
        },
    ],
    fallback: Some(&["bodyweight"]),
};

/// Infer required equipment from an exercise id.
pub fn infer_equipment(id: &str) -> Vec<String> {
    equipment_with_rule(id).1
}

/// Equipment plus the name of the rule that produced it.
pub(crate) fn equipment_with_rule(id: &str) -> (&'static str, Vec<String>) {
    let lowered = id.to_lowercase();
    match EQUIPMENT_RULES.evaluate(&lowered) {
        Some((rule, items)) => (rule, items.iter().map(|s| s.to_string()).collect()),
        None => (super::rules::FALLBACK, Vec::new()),
    }
}
