//! Lint diagnostic messages.
//!
//! A [`LintDiagnostic`] names the rule that fired, the exercise it concerns
//! (when there is one) and optional follow-up information.

use serde::Serialize;

use super::rule::{RuleId, Severity};
use crate::catalog::ExerciseId;

/// A diagnostic message produced by a lint rule.
#[derive(Debug, Clone, Serialize)]
pub struct LintDiagnostic {
    /// The rule that produced this diagnostic.
    pub rule_id: RuleId,
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// The exercise the diagnostic is about.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise: Option<ExerciseId>,
    /// Optional suggestion for fixing the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Other exercises involved.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related: Vec<RelatedInfo>,
}

/// Additional information related to a diagnostic.
#[derive(Debug, Clone, Serialize)]
pub struct RelatedInfo {
    pub exercise: ExerciseId,
    /// Message explaining the relationship.
    pub message: String,
}

impl LintDiagnostic {
    /// Create a new diagnostic.
    pub fn new(rule_id: RuleId, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            rule_id,
            severity,
            message: message.into(),
            exercise: None,
            suggestion: None,
            related: vec![],
        }
    }

    /// Attach the exercise this diagnostic is about.
    pub fn with_exercise(mut self, id: ExerciseId) -> Self {
        self.exercise = Some(id);
        self
    }

    /// Add a fix suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add related information.
    pub fn with_related(mut self, id: ExerciseId, message: impl Into<String>) -> Self {
        self.related.push(RelatedInfo {
            exercise: id,
            message: message.into(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ExerciseId {
        ExerciseId::parse(s).unwrap()
    }

    #[test]
    fn diagnostic_creation() {
        let diag = LintDiagnostic::new(RuleId::new("test-rule"), Severity::Error, "Test message");

        assert_eq!(diag.rule_id, RuleId::new("test-rule"));
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.message, "Test message");
        assert!(diag.exercise.is_none());
        assert!(diag.suggestion.is_none());
        assert!(diag.related.is_empty());
    }

    #[test]
    fn diagnostic_builder_pattern() {
        let diag = LintDiagnostic::new(RuleId::new("dangling-target"), Severity::Error, "msg")
            .with_exercise(id("b"))
            .with_suggestion("Run `exercat build`")
            .with_related(id("a"), "progression of 'a'");

        assert_eq!(diag.exercise, Some(id("b")));
        assert_eq!(diag.suggestion.as_deref(), Some("Run `exercat build`"));
        assert_eq!(diag.related.len(), 1);
        assert_eq!(diag.related[0].exercise, id("a"));
    }

    #[test]
    fn serialization_skips_empty_fields() {
        let diag = LintDiagnostic::new(RuleId::new("r"), Severity::Warning, "w");
        let json = serde_json::to_value(&diag).unwrap();
        assert_eq!(json["rule_id"], "r");
        assert_eq!(json["severity"], "warning");
        assert!(json.get("exercise").is_none());
        assert!(json.get("related").is_none());
    }
}
