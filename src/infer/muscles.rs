//! Target-muscle inference.
//!
//! Several independent chains each contribute at most one muscle group, and
//! their results accumulate. A squat-press hybrid therefore gets both the
//! pressing and the squatting muscles. Only when no chain matches does the
//! generic push/pull chain apply.

use std::collections::BTreeSet;

use super::rules::{Pattern, Rule, RuleChain};

/// Muscle groups produced by the rules.
pub type Muscles = &'static [&'static str];

const PRESSING: Muscles = &["chest", "shoulders", "triceps"];
const PULLING: Muscles = &["back", "biceps"];

/// Body-region chains, evaluated independently.
pub const MUSCLE_CHAINS: &[RuleChain<Muscles>] = &[
    RuleChain {
        name: "upper-body",
        rules: &[
            Rule {
                name: "press",
                pattern: Pattern::Any(&["push-up", "press", "dip"]),
                value: PRESSING,
            },
            Rule {
                name: "pull",
                pattern: Pattern::Any(&["pull-up", "chin-up", "row", "lever"]),
                value: PULLING,
            },
            Rule {
                name: "curl",
                pattern: Pattern::Any(&["curl"]),
                value: &["biceps", "forearms"],
            },
            Rule {
                name: "overhead",
                pattern: Pattern::Any(&["shoulder", "overhead"]),
                value: &["shoulders", "triceps"],
            },
        ],
        fallback: None,
    },
    RuleChain {
        name: "lower-body",
        rules: &[
            Rule {
                name: "squat",
                pattern: Pattern::Any(&["squat", "lunge", "pistol"]),
                value: &["quadriceps", "glutes", "hamstrings"],
            },
            Rule {
                name: "hinge",
                pattern: Pattern::Any(&["deadlift", "hip"]),
                value: &["hamstrings", "glutes", "back"],
            },
            Rule {
                name: "calf",
                pattern: Pattern::Any(&["calf"]),
                value: &["calves"],
            },
        ],
        fallback: None,
    },
    RuleChain {
        name: "core",
        rules: &[
            Rule {
                name: "anti-extension",
                pattern: Pattern::Any(&[
                    "plank", "hollow", "flag", "l-sit", "v-sit", "dead-bug", "bird-dog",
                ]),
                value: &["core", "abs"],
            },
            Rule {
                name: "rotation",
                pattern: Pattern::Any(&["twist", "russian", "oblique"]),
                value: &["core", "obliques"],
            },
            Rule {
                name: "mountain-climber",
                pattern: Pattern::Any(&["mountain-climber"]),
                value: &["core", "cardio", "shoulders"],
            },
        ],
        fallback: None,
    },
    RuleChain {
        name: "full-body",
        rules: &[
            Rule {
                name: "compound",
                pattern: Pattern::Any(&["burpee", "turkish", "get-up", "thruster"]),
                value: &["full-body", "core"],
            },
            Rule {
                name: "muscle-up",
                pattern: Pattern::Any(&["muscle-up"]),
                value: &["back", "biceps", "chest", "triceps"],
            },
        ],
        fallback: None,
    },
    RuleChain {
        name: "lats",
        rules: &[Rule {
            name: "lat",
            pattern: Pattern::Any(&["lat"]),
            value: &["lats", "back"],
        }],
        fallback: None,
    },
];

/// Generic push/pull chain used only when no region chain matched.
pub const DEFAULT_MUSCLES: RuleChain<Muscles> = RuleChain {
    name: "default",
    rules: &[
        Rule {
            name: "push",
            pattern: Pattern::Any(&["push", "press"]),
            value: PRESSING,
        },
        Rule {
            name: "pull",
            pattern: Pattern::Any(&["pull", "row"]),
            value: PULLING,
        },
    ],
    fallback: Some(&["full-body"]),
};

/// Infer target muscles from an exercise id, as a sorted de-duplicated list.
pub fn infer_target_muscles(id: &str) -> Vec<String> {
    muscles_with_rules(id).1
}

/// Muscles plus the `chain/rule` names that contributed them.
pub(crate) fn muscles_with_rules(id: &str) -> (Vec<String>, Vec<String>) {
    let lowered = id.to_lowercase();
    let mut muscles = BTreeSet::new();
    let mut fired = Vec::new();

    for chain in MUSCLE_CHAINS {
        if let Some((rule, groups)) = chain.evaluate(&lowered) {
            muscles.extend(groups.iter().copied());
            fired.push(format!("{}/{}", chain.name, rule));
        }
    }

    if muscles.is_empty() {
        if let Some((rule, groups)) = DEFAULT_MUSCLES.evaluate(&lowered) {
            muscles.extend(groups.iter().copied());
            fired.push(format!("{}/{}", DEFAULT_MUSCLES.name, rule));
        }
    }

    (fired, muscles.into_iter().map(str::to_string).collect())
}
