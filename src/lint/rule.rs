//! Lint rule definitions.
//!
//! This module provides the core traits and types for defining lint rules:
//!
//! - [`LintRule`] - The trait that all lint rules must implement
//! - [`LintContext`] - The catalog and relationships a rule inspects
//! - [`RuleId`] - Unique identifier for a lint rule
//! - [`Severity`] - Severity level for diagnostics (Hint, Warning, Error)

use serde::Serialize;

use super::diagnostic::LintDiagnostic;
use crate::catalog::{Catalog, RelationshipGraph};

/// Unique identifier for a lint rule.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RuleId(pub String);

impl RuleId {
    /// Create a new rule ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity level for lint diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational hint, does not affect validity.
    Hint,
    /// Warning that should be addressed.
    Warning,
    /// Error that makes the catalog inconsistent.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Hint => write!(f, "hint"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// What a rule checks: a catalog and the relationships that refer into it.
#[derive(Debug, Clone, Copy)]
pub struct LintContext<'a> {
    pub catalog: &'a Catalog,
    pub graph: &'a RelationshipGraph,
}

impl<'a> LintContext<'a> {
    pub fn new(catalog: &'a Catalog, graph: &'a RelationshipGraph) -> Self {
        Self { catalog, graph }
    }
}

/// A lint rule that validates a catalog against its relationships.
///
/// Each rule checks for a specific issue and produces diagnostics
/// when problems are found.
pub trait LintRule: Send + Sync {
    /// Unique identifier for this rule.
    fn id(&self) -> RuleId;

    /// Human-readable name of the rule.
    fn name(&self) -> &str;

    /// Description of what this rule checks.
    fn description(&self) -> &str;

    /// Default severity for this rule.
    fn default_severity(&self) -> Severity;

    /// Check the catalog and return any diagnostics.
    fn check(&self, ctx: &LintContext<'_>) -> Vec<LintDiagnostic>;
}
