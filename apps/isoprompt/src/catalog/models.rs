//! Mode and domain records. Plain immutable data; no behaviour beyond display.

use std::fmt;

use serde::Serialize;

/// How strictly a mode expects the optimized prompt to constrain the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strictness {
    Low,
    Medium,
    High,
    VeryHigh,
    Ultra,
    /// Depends on the task (creative and persuasive work).
    Variable,
}

impl Strictness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strictness::Low => "low",
            Strictness::Medium => "medium",
            Strictness::High => "high",
            Strictness::VeryHigh => "very_high",
            Strictness::Ultra => "ultra",
            Strictness::Variable => "variable",
        }
    }
}

impl fmt::Display for Strictness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reasoning / output style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mode {
    pub key: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub capabilities: &'static [&'static str],
    pub strictness: Strictness,
    pub require_citations: bool,
    pub output_formats: &'static [&'static str],
    pub industries: &'static [&'static str],
    pub topics: &'static [&'static str],
}

/// One subject-matter specialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Domain {
    pub key: &'static str,
    pub description: &'static str,
    /// Empty for the catch-all domain.
    pub fields: &'static [&'static str],
    pub applications: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strictness_serializes_snake_case() {
        let json = serde_json::to_string(&Strictness::VeryHigh).unwrap();
        assert_eq!(json, "\"very_high\"");
        assert_eq!(Strictness::VeryHigh.to_string(), "very_high");
    }

    #[test]
    fn test_domain_serializes_empty_fields() {
        let domain = Domain {
            key: "general_knowledge",
            description: "All cross-disciplinary or uncategorized knowledge.",
            fields: &[],
            applications: &["trivia"],
        };
        let value = serde_json::to_value(&domain).unwrap();
        assert_eq!(value["fields"], serde_json::json!([]));
        assert_eq!(value["key"], "general_knowledge");
    }
}
