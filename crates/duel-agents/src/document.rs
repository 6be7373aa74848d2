//! JSON documents exchanged with the model
//!
//! Replies are parsed straight into these records and checked at the
//! boundary; a reply that does not fit is a [`DebateError::SchemaViolation`],
//! never a partially filled document.

use serde::{Deserialize, Serialize};
use std::fmt;

use duel_llm::global_metrics;

use crate::error::DebateError;

/// Identifier for one side of a dilemma
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewpointLabel {
    A,
    B,
}

impl ViewpointLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewpointLabel::A => "A",
            ViewpointLabel::B => "B",
        }
    }

    /// The opposing side
    pub fn other(&self) -> Self {
        match self {
            ViewpointLabel::A => ViewpointLabel::B,
            ViewpointLabel::B => ViewpointLabel::A,
        }
    }
}

impl fmt::Display for ViewpointLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One side of a dilemma
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewpoint {
    pub title: String,
    pub position: String,
}

/// A generated dilemma with exactly two conflicting viewpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DilemmaDocument {
    pub topic: String,
    pub dilemma: String,
    pub viewpoint_a: Viewpoint,
    pub viewpoint_b: Viewpoint,
}

impl DilemmaDocument {
    pub const NAME: &'static str = "DilemmaDocument";

    /// Parse a model reply, rejecting missing, mistyped or blank fields
    pub fn parse(raw: &str) -> Result<Self, DebateError> {
        let doc: Self = from_reply(Self::NAME, raw)?;
        doc.validate().inspect_err(|_| global_metrics().record_schema_violation())?;
        Ok(doc)
    }

    /// Get the viewpoint for a label
    pub fn viewpoint(&self, label: ViewpointLabel) -> &Viewpoint {
        match label {
            ViewpointLabel::A => &self.viewpoint_a,
            ViewpointLabel::B => &self.viewpoint_b,
        }
    }

    fn validate(&self) -> Result<(), DebateError> {
        require(Self::NAME, "topic", &self.topic)?;
        require(Self::NAME, "dilemma", &self.dilemma)?;
        for (field, viewpoint) in [("viewpoint_a", &self.viewpoint_a), ("viewpoint_b", &self.viewpoint_b)] {
            require(Self::NAME, &format!("{}.title", field), &viewpoint.title)?;
            require(Self::NAME, &format!("{}.position", field), &viewpoint.position)?;
        }
        Ok(())
    }
}

/// One advocate's defense of its assigned viewpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvocacyDocument {
    pub agent: String,
    pub defended_viewpoint: ViewpointLabel,
    pub argument: String,
    /// Exactly three points; other counts fail deserialization
    pub key_points: [String; 3],
}

impl AdvocacyDocument {
    pub const NAME: &'static str = "AdvocacyDocument";

    /// Parse a model reply for the advocate assigned to `expected`
    pub fn parse(raw: &str, expected: ViewpointLabel) -> Result<Self, DebateError> {
        let doc: Self = from_reply(Self::NAME, raw)?;
        doc.validate(expected)
            .inspect_err(|_| global_metrics().record_schema_violation())?;
        Ok(doc)
    }

    fn validate(&self, expected: ViewpointLabel) -> Result<(), DebateError> {
        if self.defended_viewpoint != expected {
            return Err(DebateError::schema(
                Self::NAME,
                format!(
                    "defended_viewpoint is {} but the advocate was assigned {}",
                    self.defended_viewpoint, expected
                ),
            ));
        }
        require(Self::NAME, "argument", &self.argument)?;
        for (i, point) in self.key_points.iter().enumerate() {
            require(Self::NAME, &format!("key_points[{}]", i), point)?;
        }
        Ok(())
    }
}

fn from_reply<T: for<'de> Deserialize<'de>>(document: &'static str, raw: &str) -> Result<T, DebateError> {
    serde_json::from_str(raw).map_err(|e| {
        global_metrics().record_schema_violation();
        DebateError::schema(document, e.to_string())
    })
}

fn require(document: &'static str, field: &str, value: &str) -> Result<(), DebateError> {
    if value.trim().is_empty() {
        return Err(DebateError::schema(document, format!("{} is empty", field)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DILEMMA: &str = r#"{"topic":"t","dilemma":"d","viewpoint_a":{"title":"A1","position":"p1"},"viewpoint_b":{"title":"B1","position":"p2"}}"#;

    #[test]
    fn test_parse_dilemma() {
        let doc = DilemmaDocument::parse(DILEMMA).unwrap();
        assert_eq!(doc.topic, "t");
        assert_eq!(doc.viewpoint(ViewpointLabel::A).title, "A1");
        assert_eq!(doc.viewpoint(ViewpointLabel::B).position, "p2");
    }

    #[test]
    fn test_dilemma_ignores_unknown_fields() {
        let raw = r#"{"topic":"t","dilemma":"d","extra":1,"viewpoint_a":{"title":"A1","position":"p1"},"viewpoint_b":{"title":"B1","position":"p2"}}"#;
        assert!(DilemmaDocument::parse(raw).is_ok());
    }

    #[test]
    fn test_dilemma_missing_viewpoint() {
        let raw = r#"{"topic":"t","dilemma":"d","viewpoint_a":{"title":"A1","position":"p1"}}"#;
        let err = DilemmaDocument::parse(raw).unwrap_err();
        assert!(err.is_schema_violation());
        assert!(err.to_string().contains("viewpoint_b"));
    }

    #[test]
    fn test_dilemma_blank_position() {
        let raw = r#"{"topic":"t","dilemma":"d","viewpoint_a":{"title":"A1","position":" "},"viewpoint_b":{"title":"B1","position":"p2"}}"#;
        let err = DilemmaDocument::parse(raw).unwrap_err();
        assert!(err.to_string().contains("viewpoint_a.position"));
    }

    #[test]
    fn test_dilemma_not_json() {
        let err = DilemmaDocument::parse("Sure! Here is your dilemma:").unwrap_err();
        assert!(err.is_schema_violation());
    }

    #[test]
    fn test_parse_advocacy() {
        let raw = r#"{"agent":"Agent 2","defended_viewpoint":"A","argument":"x","key_points":["1","2","3"]}"#;
        let doc = AdvocacyDocument::parse(raw, ViewpointLabel::A).unwrap();
        assert_eq!(doc.key_points.len(), 3);
        assert_eq!(doc.defended_viewpoint, ViewpointLabel::A);
    }

    #[test]
    fn test_advocacy_wrong_point_count() {
        let two = r#"{"agent":"Agent 2","defended_viewpoint":"A","argument":"x","key_points":["1","2"]}"#;
        assert!(AdvocacyDocument::parse(two, ViewpointLabel::A).is_err());

        let four = r#"{"agent":"Agent 2","defended_viewpoint":"A","argument":"x","key_points":["1","2","3","4"]}"#;
        assert!(AdvocacyDocument::parse(four, ViewpointLabel::A).is_err());
    }

    #[test]
    fn test_advocacy_label_mismatch() {
        let raw = r#"{"agent":"Agent 3","defended_viewpoint":"A","argument":"y","key_points":["4","5","6"]}"#;
        let err = AdvocacyDocument::parse(raw, ViewpointLabel::B).unwrap_err();
        assert!(err.is_schema_violation());
        assert!(err.to_string().contains("assigned B"));
    }

    #[test]
    fn test_advocacy_unknown_label() {
        let raw = r#"{"agent":"Agent 3","defended_viewpoint":"C","argument":"y","key_points":["4","5","6"]}"#;
        assert!(AdvocacyDocument::parse(raw, ViewpointLabel::B).is_err());
    }

    #[test]
    fn test_label_serializes_as_letter() {
        assert_eq!(serde_json::to_string(&ViewpointLabel::B).unwrap(), "\"B\"");
        assert_eq!(ViewpointLabel::A.other(), ViewpointLabel::B);
    }
}
