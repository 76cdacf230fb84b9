//! Catalog validation and linting.
//!
//! Checks a catalog against its relationship graph through a pluggable
//! rule-based system.
//!
//! # Overview
//!
//! The lint system consists of:
//!
//! - **Rules** - Individual validation checks ([`LintRule`] trait)
//! - **Registry** - Collection of all available rules ([`RuleRegistry`])
//! - **Diagnostics** - Issue reports with severity and suggestions ([`LintDiagnostic`])
//! - **Formatters** - Human and JSON rendering ([`LintFormatter`])
//!
//! # Example
//!
//! ```
//! use exercat::catalog::{Catalog, ExerciseId, RelationKind, RelationshipGraph};
//! use exercat::lint::{has_errors, lint};
//!
//! let mut graph = RelationshipGraph::new();
//! let a = ExerciseId::parse("a").unwrap();
//! let b = ExerciseId::parse("b").unwrap();
//! graph.add_edge(a, RelationKind::Progression, b);
//!
//! let diagnostics = lint(&Catalog::new(), &graph);
//! assert!(has_errors(&diagnostics));
//! ```

pub mod diagnostic;
pub mod output;
pub mod registry;
pub mod rule;
pub mod rules;

pub use diagnostic::{LintDiagnostic, RelatedInfo};
pub use output::{HumanFormatter, JsonFormatter, LintFormatter, OutputFormat};
pub use registry::RuleRegistry;
pub use rule::{LintContext, LintRule, RuleId, Severity};
pub use rules::{
    DanglingTargetRule, EmptyCuesRule, ProgressionCycleRule, SelfRelationshipRule,
    UnknownExerciseRule,
};

use crate::catalog::{Catalog, RelationshipGraph};

/// Run the built-in rules over a catalog and its relationships.
pub fn lint(catalog: &Catalog, graph: &RelationshipGraph) -> Vec<LintDiagnostic> {
    RuleRegistry::with_builtins().check_all(&LintContext::new(catalog, graph))
}

/// Whether any diagnostic is an error.
pub fn has_errors(diagnostics: &[LintDiagnostic]) -> bool {
    diagnostics.iter().any(|d| d.severity == Severity::Error)
}

/// Whether any diagnostic is a warning.
pub fn has_warnings(diagnostics: &[LintDiagnostic]) -> bool {
    diagnostics.iter().any(|d| d.severity == Severity::Warning)
}

/// Number of error diagnostics that concern undefined exercises.
pub fn dangling_count(diagnostics: &[LintDiagnostic]) -> usize {
    diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .filter(|d| d.rule_id.0 == "unknown-exercise" || d.rule_id.0 == "dangling-target")
        .count()
}
