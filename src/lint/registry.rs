//! Rule registry for managing lint rules.
//!
//! The [`RuleRegistry`] stores all available lint rules and provides
//! methods for registering, retrieving, and running them.

use std::collections::BTreeMap;

use super::diagnostic::LintDiagnostic;
use super::rule::{LintContext, LintRule, RuleId};
use super::rules::{
    DanglingTargetRule, EmptyCuesRule, ProgressionCycleRule, SelfRelationshipRule,
    UnknownExerciseRule,
};

/// Registry of all available lint rules, keyed and run in rule-id order.
pub struct RuleRegistry {
    rules: BTreeMap<RuleId, Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Create a registry with all built-in rules.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(UnknownExerciseRule));
        registry.register(Box::new(DanglingTargetRule));
        registry.register(Box::new(SelfRelationshipRule));
        registry.register(Box::new(ProgressionCycleRule));
        registry.register(Box::new(EmptyCuesRule));
        registry
    }

    /// Register a lint rule, replacing any rule with the same id.
    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        self.rules.insert(rule.id(), rule);
    }

    /// Get a rule by ID.
    pub fn get(&self, id: &RuleId) -> Option<&dyn LintRule> {
        self.rules.get(id).map(|r| r.as_ref())
    }

    /// Iterate over all rules.
    pub fn iter(&self) -> impl Iterator<Item = &dyn LintRule> {
        self.rules.values().map(|r| r.as_ref())
    }

    /// Run every rule and collect the diagnostics, most severe first.
    pub fn check_all(&self, ctx: &LintContext<'_>) -> Vec<LintDiagnostic> {
        let mut diagnostics: Vec<_> = self.iter().flat_map(|rule| rule.check(ctx)).collect();
        // Stable sort keeps rule order within a severity.
        diagnostics.sort_by(|a, b| b.severity.cmp(&a.severity));
        diagnostics
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, ExerciseId, RelationKind, RelationshipGraph};
    use crate::lint::Severity;

    struct MockRule {
        id: RuleId,
    }

    impl LintRule for MockRule {
        fn id(&self) -> RuleId {
            self.id.clone()
        }
        fn name(&self) -> &str {
            "Mock Rule"
        }
        fn description(&self) -> &str {
            "A mock rule for testing"
        }
        fn default_severity(&self) -> Severity {
            Severity::Hint
        }
        fn check(&self, _ctx: &LintContext<'_>) -> Vec<LintDiagnostic> {
            vec![LintDiagnostic::new(self.id(), Severity::Hint, "mock")]
        }
    }

    #[test]
    fn registry_new_is_empty() {
        let registry = RuleRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(RuleRegistry::default().is_empty());
    }

    #[test]
    fn registry_register_and_get() {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(MockRule {
            id: RuleId::new("mock"),
        }));

        assert!(registry.get(&RuleId::new("mock")).is_some());
        assert!(registry.get(&RuleId::new("unknown")).is_none());
    }

    #[test]
    fn registry_with_builtins_has_rules() {
        let registry = RuleRegistry::with_builtins();
        assert_eq!(registry.len(), 5);
        for id in [
            "unknown-exercise",
            "dangling-target",
            "self-relationship",
            "progression-cycle",
            "empty-cues",
        ] {
            assert!(registry.get(&RuleId::new(id)).is_some(), "missing {}", id);
        }
    }

    #[test]
    fn check_all_orders_by_severity() {
        let mut registry = RuleRegistry::with_builtins();
        registry.register(Box::new(MockRule {
            id: RuleId::new("aaa-mock"),
        }));

        let catalog = Catalog::new();
        let mut graph = RelationshipGraph::new();
        let a = ExerciseId::parse("a").unwrap();
        graph.add_edge(a.clone(), RelationKind::Progression, a);

        let diagnostics = registry.check_all(&LintContext::new(&catalog, &graph));
        let severities: Vec<_> = diagnostics.iter().map(|d| d.severity).collect();
        let mut sorted = severities.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(severities, sorted);
        assert_eq!(diagnostics.last().unwrap().severity, Severity::Hint);
        assert!(diagnostics.iter().any(|d| d.rule_id.0 == "self-relationship"));
    }
}
