//! Instructional cue templates.
//!
//! Each [`Archetype`] is a movement pattern with a fixed cue sequence:
//! `lead` sentences, then at most one variant sentence group, then `tail`
//! sentences. Exactly one archetype fires per id, in the order of
//! [`ARCHETYPES`]; ids matching none get the generic template.

use super::name::display_name;
use super::rules::{Pattern, Rule, FALLBACK};

/// Sentences inserted by a variant.
pub type Sentences = &'static [&'static str];

/// A movement archetype and its cue template.
#[derive(Debug, Clone, Copy)]
pub struct Archetype {
    pub name: &'static str,
    pub pattern: Pattern,
    pub lead: Sentences,
    /// First matching variant wins.
    pub variants: &'static [Rule<Sentences>],
    /// Used when no variant matches.
    pub default_variant: Sentences,
    pub tail: Sentences,
}

impl Archetype {
    fn render(&self, lowered: &str) -> Vec<String> {
        let variant = self
            .variants
            .iter()
            .find(|rule| rule.pattern.matches(lowered))
            .map(|rule| rule.value)
            .unwrap_or(self.default_variant);

        self.lead
            .iter()
            .chain(variant)
            .chain(self.tail)
            .map(|s| s.to_string())
            .collect()
    }
}

/// Archetypes in priority order.
pub const ARCHETYPES: &[Archetype] = &[
    Archetype {
        name: "push-up",
        pattern: Pattern::Any(&["push-up"]),
        lead: &[
            "Start in a plank position with hands placed appropriately.",
            "Keep your body in a straight line from head to heels.",
        ],
        variants: &[
            Rule {
                name: "diamond",
                pattern: Pattern::Any(&["diamond", "close"]),
                value: &["Place hands close together in a diamond shape."],
            },
            Rule {
                name: "wide",
                pattern: Pattern::Any(&["wide"]),
                value: &["Place hands wider than shoulder-width apart."],
            },
            Rule {
                name: "archer",
                pattern: Pattern::Any(&["archer"]),
                value: &["Shift weight to one arm while extending the other."],
            },
        ],
        default_variant: &[],
        tail: &[
            "Lower your chest toward the floor with control.",
            "Press back up to the starting position.",
        ],
    },
    Archetype {
        name: "pull-up",
        pattern: Pattern::Any(&["pull-up", "chin-up"]),
        lead: &["Hang from the bar with arms fully extended."],
        variants: &[
            Rule {
                name: "wide",
                pattern: Pattern::Any(&["wide"]),
                value: &["Use a wide overhand grip, wider than shoulders."],
            },
            Rule {
                name: "neutral",
                pattern: Pattern::Any(&["neutral"]),
                value: &["Use a neutral grip with palms facing each other."],
            },
            Rule {
                name: "chin",
                pattern: Pattern::Any(&["chin"]),
                value: &["Use an underhand grip with palms facing you."],
            },
        ],
        default_variant: &["Use an overhand grip slightly wider than shoulders."],
        tail: &[
            "Pull your body up until your chin is over the bar.",
            "Lower yourself with control to full arm extension.",
        ],
    },
    Archetype {
        name: "squat",
        pattern: Pattern::Any(&["squat"]),
        lead: &["Stand with feet shoulder-width apart."],
        variants: &[
            Rule {
                name: "cossack",
                pattern: Pattern::Any(&["cossack"]),
                value: &["Shift weight to one leg while extending the other leg straight."],
            },
            Rule {
                name: "pistol",
                pattern: Pattern::Any(&["pistol"]),
                value: &["Balance on one leg with the other leg extended forward."],
            },
        ],
        default_variant: &[],
        tail: &[
            "Keep your chest up and core engaged.",
            "Lower yourself by bending at the hips and knees.",
            "Drive through your heels to return to standing.",
        ],
    },
    Archetype {
        name: "plank",
        pattern: Pattern::Any(&["plank"]),
        lead: &[],
        variants: &[Rule {
            name: "side",
            pattern: Pattern::Any(&["side"]),
            value: &[
                "Lie on your side, supporting yourself on your forearm.",
                "Keep your body in a straight line from head to feet.",
            ],
        }],
        default_variant: &[
            "Position yourself on forearms and toes.",
            "Maintain a straight line from head to heels.",
        ],
        tail: &[
            "Engage your core and breathe steadily.",
            "Hold the position without letting your hips sag or pike.",
        ],
    },
    Archetype {
        name: "dead-bug",
        pattern: Pattern::All(&["dead", "bug"]),
        lead: &[
            "Lie on your back with arms extended toward the ceiling.",
            "Lift your legs to 90 degrees at hips and knees.",
            "Slowly extend opposite arm and leg while keeping your back flat.",
            "Return to starting position and repeat on the other side.",
        ],
        variants: &[],
        default_variant: &[],
        tail: &[],
    },
    Archetype {
        name: "bird-dog",
        pattern: Pattern::All(&["bird", "dog"]),
        lead: &[
            "Start on hands and knees in a tabletop position.",
            "Keep your spine neutral and core engaged.",
            "Extend opposite arm and leg simultaneously.",
            "Hold briefly, then return to start and switch sides.",
        ],
        variants: &[],
        default_variant: &[],
        tail: &[],
    },
    Archetype {
        name: "muscle-up",
        pattern: Pattern::Any(&["muscle-up"]),
        lead: &[
            "Start from a dead hang on the bar or rings.",
            "Pull explosively to get your chest above the bar.",
            "Transition by pressing your body up and over.",
            "Lower yourself with control back to the starting position.",
        ],
        variants: &[],
        default_variant: &[],
        tail: &[],
    },
    Archetype {
        name: "handstand",
        pattern: Pattern::Any(&["handstand"]),
        lead: &[],
        variants: &[Rule {
            name: "wall",
            pattern: Pattern::Any(&["wall"]),
            value: &[
                "Place hands on the floor close to a wall.",
                "Walk your feet up the wall into a handstand position.",
            ],
        }],
        default_variant: &[],
        tail: &[
            "Keep your arms straight and shoulders active.",
            "Maintain a straight body line throughout the movement.",
            "Lower yourself with control.",
        ],
    },
    Archetype {
        name: "lunge",
        pattern: Pattern::Any(&["lunge"]),
        lead: &[
            "Step forward or backward into a lunge position.",
            "Keep your front knee over your ankle.",
            "Lower until both knees are at 90 degrees.",
            "Push through your front heel to return to start.",
        ],
        variants: &[],
        default_variant: &[],
        tail: &[],
    },
];

/// The archetype that fires for an id, if any.
pub fn match_archetype(id: &str) -> Option<&'static Archetype> {
    let lowered = id.to_lowercase();
    ARCHETYPES.iter().find(|a| a.pattern.matches(&lowered))
}

/// Generate ordered instructional cues for an exercise id.
///
/// Always returns a non-empty list.
pub fn generate_cues(id: &str) -> Vec<String> {
    cues_with_archetype(id).1
}

/// Cues plus the archetype name (or `fallback`).
pub(crate) fn cues_with_archetype(id: &str) -> (&'static str, Vec<String>) {
    let lowered = id.to_lowercase();
    match match_archetype(&lowered) {
        Some(archetype) => (archetype.name, archetype.render(&lowered)),
        None => (FALLBACK, generic_cues(&display_name(id))),
    }
}

fn generic_cues(name: &str) -> Vec<String> {
    vec![
        format!("Set up in the proper starting position for {}.", name),
        "Maintain good form throughout the movement.".to_string(),
        "Control the movement in both directions.".to_string(),
        "Focus on the target muscles throughout the exercise.".to_string(),
    ]
}
