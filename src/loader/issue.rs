//! Per-record load problems.

use std::fmt;

/// What went wrong with a single record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadIssueKind {
    /// A required field is absent, not a string, or empty.
    MissingRequiredField { field: &'static str },
    /// The record body does not match the expected shape.
    InvalidRecord { message: String },
    /// The id already appeared earlier in the same source.
    DuplicateId,
}

/// A record dropped while loading a source.
///
/// Issues never abort a run; the offending record is skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadIssue {
    /// Name of the source the record came from.
    pub source: String,
    /// Where in the source: an id if one was readable, otherwise an array index.
    pub location: String,
    /// The problem.
    pub kind: LoadIssueKind,
}

impl LoadIssue {
    pub fn new(source: &str, location: impl Into<String>, kind: LoadIssueKind) -> Self {
        Self {
            source: source.to_string(),
            location: location.into(),
            kind,
        }
    }
}

impl fmt::Display for LoadIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            LoadIssueKind::MissingRequiredField { field } => write!(
                f,
                "{} {}: missing required field '{}', record dropped",
                self.source, self.location, field
            ),
            LoadIssueKind::InvalidRecord { message } => write!(
                f,
                "{} {}: invalid record ({}), record dropped",
                self.source, self.location, message
            ),
            LoadIssueKind::DuplicateId => write!(
                f,
                "{} {}: duplicate id, keeping the first occurrence",
                self.source, self.location
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_display() {
        let issue = LoadIssue::new(
            "exercises",
            "[3]",
            LoadIssueKind::MissingRequiredField { field: "id" },
        );
        let msg = issue.to_string();
        assert!(msg.contains("exercises [3]"));
        assert!(msg.contains("'id'"));
    }

    #[test]
    fn duplicate_display_names_location() {
        let issue = LoadIssue::new("exercises", "'plank'", LoadIssueKind::DuplicateId);
        assert!(issue.to_string().contains("'plank'"));
        assert!(issue.to_string().contains("first occurrence"));
    }
}
