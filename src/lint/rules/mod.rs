//! Built-in lint rules.
//!
//! This module contains all the validation rules that come with exercat.

pub mod dangling_target;
pub mod empty_cues;
pub mod progression_cycle;
pub mod self_relationship;
pub mod unknown_exercise;

pub use dangling_target::DanglingTargetRule;
pub use empty_cues::EmptyCuesRule;
pub use progression_cycle::ProgressionCycleRule;
pub use self_relationship::SelfRelationshipRule;
pub use unknown_exercise::UnknownExerciseRule;
