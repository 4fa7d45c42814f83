// Result objects produced by the code generation and validation engine.
//
// All of these are created fresh per engine call and owned by the caller;
// nothing here holds references into the donor snapshot.

use serde::{Deserialize, Serialize};

/// Shape classification of a generated or user-supplied code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    /// Short, pure-letter code built from word initials (3-4 letters).
    Initials,
    /// Longer pure-letter code (5+ letters).
    Abbreviation,
    /// Exactly two letters, no digits.
    Acronym,
    /// Mix of letters and digits.
    Hybrid,
    /// Anything else.
    Custom,
}

/// Describes how a code is shaped, independent of which synthesis strategy
/// produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodePattern {
    pub kind: PatternKind,
    /// Human-readable description of the shape.
    pub description: String,
    /// An illustrative example code of this shape.
    pub example: String,
}

/// One scored code suggestion. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedCodeSuggestion {
    /// The candidate code, uppercase alphanumeric, 2-10 characters.
    pub code: String,
    /// Quality score in [0, 100].
    pub confidence: u8,
    /// Human-readable explanation of how the code was produced and how it
    /// fared against the registry.
    pub reasoning: String,
    /// Whether the code is unused in the donor snapshot.
    pub is_unique: bool,
    /// Shape classification.
    pub pattern: CodePattern,
}

/// Statistics about a single `generate_code` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationStats {
    /// Raw candidates produced by all strategies (including the fallback
    /// cascade when it ran).
    pub total_generated: usize,
    /// Candidates surviving validation and deduplication.
    pub unique_count: usize,
    /// Arithmetic mean confidence of the surviving set, rounded.
    pub average_confidence: u8,
    /// Wall-clock duration of the call in milliseconds.
    pub processing_time_ms: u64,
}

/// The full outcome of a `generate_code` call: the best suggestion, ranked
/// runners-up, and call statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeGenerationResult {
    pub primary: GeneratedCodeSuggestion,
    /// Ranked alternatives; never contains `primary.code` or duplicates.
    pub alternatives: Vec<GeneratedCodeSuggestion>,
    pub stats: GenerationStats,
}

/// Outcome of the format-only check for a single code string.
///
/// `issues` are fatal (the code is not legal); `warnings` are soft
/// findings (all-numeric, supplied without intentional casing) left to the
/// caller's judgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatCheck {
    pub is_valid: bool,
    pub issues: Vec<String>,
    pub warnings: Vec<String>,
}

/// Composite validation outcome for a code against the donor snapshot.
///
/// `is_valid` means both format-legal and unused. `similar` lists
/// confusable existing codes as `"CODE (Donor Name)"` entries even when no
/// exact conflict exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeValidationResult {
    pub is_valid: bool,
    pub is_unique: bool,
    /// Names of donors already holding this exact code.
    pub conflicts: Vec<String>,
    /// Near-duplicate existing codes, `"CODE (Donor Name)"`.
    pub similar: Vec<String>,
    /// Alternative codes proposed when the input is taken or malformed.
    pub suggestions: Vec<String>,
    /// Fatal format problems.
    pub format_issues: Vec<String>,
}

/// Caller-facing validation of a hand-typed code. Never an error: a
/// validator-internal failure degrades to all-false with a single issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomCodeCheck {
    pub is_valid: bool,
    pub is_available: bool,
    pub issues: Vec<String>,
    /// At most 3 alternative codes.
    pub suggestions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&PatternKind::Abbreviation).unwrap(),
            "\"abbreviation\""
        );
    }

    #[test]
    fn stats_uses_camel_case_keys() {
        let stats = GenerationStats {
            total_generated: 12,
            unique_count: 7,
            average_confidence: 63,
            processing_time_ms: 2,
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"totalGenerated\":12"));
        assert!(json.contains("\"uniqueCount\":7"));
    }
}
