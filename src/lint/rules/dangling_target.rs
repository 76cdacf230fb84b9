//! Relationship targets that resolve to nothing.

use std::collections::BTreeMap;

use crate::catalog::{Edge, ExerciseId};
use crate::lint::{LintContext, LintDiagnostic, LintRule, RuleId, Severity};

/// Detects regression and progression targets missing from the catalog.
///
/// One diagnostic per missing target, listing every edge that points at it.
pub struct DanglingTargetRule;

impl LintRule for DanglingTargetRule {
    fn id(&self) -> RuleId {
        RuleId::new("dangling-target")
    }

    fn name(&self) -> &str {
        "Dangling Target"
    }

    fn description(&self) -> &str {
        "Detects regressions and progressions that reference undefined exercises"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, ctx: &LintContext<'_>) -> Vec<LintDiagnostic> {
        let mut by_target: BTreeMap<&ExerciseId, Vec<Edge<'_>>> = BTreeMap::new();
        for edge in ctx.graph.edges() {
            if !ctx.catalog.contains(edge.to.as_str()) {
                by_target.entry(edge.to).or_default().push(edge);
            }
        }

        by_target
            .into_iter()
            .map(|(target, edges)| {
                let mut diag = LintDiagnostic::new(
                    self.id(),
                    self.default_severity(),
                    format!(
                        "'{}' is referenced by {} relationship(s) but is not defined",
                        target,
                        edges.len()
                    ),
                )
                .with_exercise(target.clone())
                .with_suggestion("Run `exercat build` to infer missing exercises");

                for edge in edges {
                    diag = diag.with_related(
                        edge.from.clone(),
                        format!("{} of '{}'", edge.kind, edge.from),
                    );
                }
                diag
            })
            .collect()
    }
}
