//! Exercise identifiers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Kebab-case identifier of an exercise, e.g. `archer-push-up`.
///
/// Identifiers are the join key between every source document. They are
/// never empty; use [`ExerciseId::parse`] to build one from untrusted input.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct ExerciseId(String);

impl ExerciseId {
    /// Parse an identifier, rejecting empty or whitespace-only strings.
    pub fn parse(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ExerciseId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ExerciseId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_kebab_case() {
        let id = ExerciseId::parse("archer-push-up").unwrap();
        assert_eq!(id.as_str(), "archer-push-up");
        assert_eq!(id.to_string(), "archer-push-up");
    }

    #[test]
    fn parse_rejects_empty_and_blank() {
        assert!(ExerciseId::parse("").is_none());
        assert!(ExerciseId::parse("   ").is_none());
    }

    #[test]
    fn ids_order_lexicographically() {
        let a = ExerciseId::parse("a").unwrap();
        let b = ExerciseId::parse("b").unwrap();
        assert!(a < b);
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = ExerciseId::parse("plank").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"plank\"");
    }
}
