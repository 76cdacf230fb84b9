//! Source document shapes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Layout of a source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SourceShape {
    /// Detect the shape from the document itself.
    #[default]
    Auto,
    /// `{ "exercises": [ { "id": ..., ... } ] }`
    Array,
    /// `{ "exercises": { <id>: { ... } } }`
    Mapping,
    /// `{ "relationships": { <id>: { "regressions": [...], "progressions": [...] } } }`
    Relationships,
}

impl SourceShape {
    /// Top-level key this shape is stored under.
    pub fn top_level_key(&self) -> Option<&'static str> {
        match self {
            SourceShape::Auto => None,
            SourceShape::Array | SourceShape::Mapping => Some("exercises"),
            SourceShape::Relationships => Some("relationships"),
        }
    }
}

impl fmt::Display for SourceShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceShape::Auto => write!(f, "auto"),
            SourceShape::Array => write!(f, "array"),
            SourceShape::Mapping => write!(f, "mapping"),
            SourceShape::Relationships => write!(f, "relationships"),
        }
    }
}

impl FromStr for SourceShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "array" => Ok(Self::Array),
            "mapping" => Ok(Self::Mapping),
            "relationships" => Ok(Self::Relationships),
            _ => Err(format!("unknown source shape: {}", s)),
        }
    }
}

/// Detect the shape of a parsed document.
///
/// A `relationships` key wins over `exercises`; an `exercises` array is the
/// array form and an `exercises` object the mapping form. Returns `None`
/// when neither key is usable.
pub fn detect_shape(doc: &Value) -> Option<SourceShape> {
    if doc.get("relationships").is_some_and(Value::is_object) {
        return Some(SourceShape::Relationships);
    }
    match doc.get("exercises") {
        Some(Value::Array(_)) => Some(SourceShape::Array),
        Some(Value::Object(_)) => Some(SourceShape::Mapping),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn detects_array_form() {
        let doc = json!({"exercises": [{"id": "a"}]});
        assert_eq!(detect_shape(&doc), Some(SourceShape::Array));
    }

    #[test]
    fn detects_mapping_form() {
        let doc = json!({"exercises": {"a": {"name": "A"}}});
        assert_eq!(detect_shape(&doc), Some(SourceShape::Mapping));
    }

    #[test]
    fn detects_relationship_form() {
        let doc = json!({"relationships": {}});
        assert_eq!(detect_shape(&doc), Some(SourceShape::Relationships));
    }

    #[test]
    fn unknown_documents_have_no_shape() {
        assert_eq!(detect_shape(&json!({"exercises": 3})), None);
        assert_eq!(detect_shape(&json!([])), None);
        assert_eq!(detect_shape(&json!({"other": {}})), None);
    }

    #[test]
    fn shape_from_str_round_trips_display() {
        for shape in [
            SourceShape::Auto,
            SourceShape::Array,
            SourceShape::Mapping,
            SourceShape::Relationships,
        ] {
            assert_eq!(shape.to_string().parse::<SourceShape>(), Ok(shape));
        }
        assert!("list".parse::<SourceShape>().is_err());
    }
}
