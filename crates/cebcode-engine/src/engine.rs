// CodeEngine: the public entry point tying analysis, synthesis,
// validation and scoring together.
//
// The engine is an explicit instance holding the donor snapshot -- no
// module-level cache, no singleton. The snapshot is read-only during a
// call and only ever replaced wholesale through `update_donors`, so the
// single-writer discipline is enforced by `&mut self` on that one method.

use std::time::Instant;

use cebcode_core::character::MIN_CODE_LEN;
use cebcode_core::{
    CodeGenerationResult, CustomCodeCheck, DonorRecord, GeneratedCodeSuggestion, GenerationStats,
};

use crate::analysis::{extract_initials, generate_abbreviations, normalize_name, significant_words};
use crate::score::create_suggestion;
use crate::synthesis::{
    CandidateSet, RawCandidate, fallback_candidates, synthesize_from_abbreviations,
    synthesize_from_initials, synthesize_hybrid,
};
use crate::validate::{validate_code, validate_code_format};

/// Default preferred code length.
pub const DEFAULT_PREFERRED_LENGTH: usize = 5;

/// Default number of alternatives returned alongside the primary.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Alternatives cap for custom-code validation responses.
const MAX_CUSTOM_SUGGESTIONS: usize = 3;

/// Errors fatal to a single `generate_code` call. All other findings are
/// returned as structured data.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// No entity name was supplied.
    #[error("entity name is required")]
    EmptyName,

    /// Even the fallback cascade produced nothing; only possible for
    /// pathological inputs such as names without Latin letters.
    #[error("could not generate any code for \"{0}\"")]
    NoViableCode(String),
}

/// Options for a single generation call.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// The entity name to derive codes from. Required.
    pub entity_name: String,
    /// Contributor category of the requesting entity. Carried for parity
    /// with the request form; no strategy currently branches on it.
    pub contributor_type: Option<String>,
    /// Target code length the strategies aim for. Values below the
    /// minimum code length are raised to it.
    pub preferred_length: usize,
    /// Maximum number of alternatives returned alongside the primary.
    pub max_suggestions: usize,
}

impl GenerateOptions {
    pub fn new(entity_name: &str) -> Self {
        Self {
            entity_name: entity_name.to_string(),
            contributor_type: None,
            preferred_length: DEFAULT_PREFERRED_LENGTH,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

/// The code generation and validation engine.
///
/// Holds the donor snapshot; every public call is a single synchronous
/// request/response over it. All structures in a result are created fresh
/// per call.
#[derive(Debug, Default)]
pub struct CodeEngine {
    donors: Vec<DonorRecord>,
}

impl CodeEngine {
    pub fn new(donors: Vec<DonorRecord>) -> Self {
        Self { donors }
    }

    /// Replace the donor snapshot wholesale. Takes effect on the next call.
    pub fn update_donors(&mut self, donors: Vec<DonorRecord>) {
        self.donors = donors;
    }

    /// The current snapshot.
    pub fn donors(&self) -> &[DonorRecord] {
        &self.donors
    }

    /// Generate a ranked set of code suggestions for an entity name.
    ///
    /// Runs all three synthesis strategies, validates and scores every
    /// candidate, deduplicates by code (first occurrence wins), and ranks
    /// by confidence. When nothing survives, the fallback cascade runs
    /// once and the pipeline retries over its output.
    pub fn generate_code(
        &self,
        options: &GenerateOptions,
    ) -> Result<CodeGenerationResult, GenerationError> {
        let start = Instant::now();
        let name = options.entity_name.trim();
        if name.is_empty() {
            return Err(GenerationError::EmptyName);
        }
        let preferred_length = options.preferred_length.max(MIN_CODE_LEN);

        let mut set = CandidateSet::new();
        let initials = extract_initials(name);
        let abbreviations = generate_abbreviations(name);
        let words = significant_words(&normalize_name(name));

        synthesize_from_initials(&initials, preferred_length, &mut set);
        synthesize_from_abbreviations(&abbreviations, preferred_length, &mut set);
        synthesize_hybrid(&words, preferred_length, &mut set);

        let mut ranked = self.rank(set.candidates(), name);
        if ranked.is_empty() {
            fallback_candidates(name, &self.donors, &mut set);
            ranked = self.rank(set.candidates(), name);
        }

        let elapsed_ms = start.elapsed().as_millis() as u64;
        let Some((primary, alternatives)) = split_ranked(ranked.clone(), options.max_suggestions)
        else {
            return Err(GenerationError::NoViableCode(name.to_string()));
        };

        let total = ranked.iter().map(|s| u32::from(s.confidence)).sum::<u32>();
        let average_confidence = (total as f64 / ranked.len() as f64).round() as u8;

        Ok(CodeGenerationResult {
            primary,
            alternatives,
            stats: GenerationStats {
                total_generated: set.attempted(),
                unique_count: ranked.len(),
                average_confidence,
                processing_time_ms: elapsed_ms,
            },
        })
    }

    /// Validate a hand-typed code. Total: always returns a result object.
    ///
    /// Format problems, soft warnings, conflicts and near-duplicates are
    /// folded into `issues`; alternative codes are capped at three.
    pub fn validate_custom_code(&self, code: &str) -> CustomCodeCheck {
        let format = validate_code_format(code);
        let validation = validate_code(code, &self.donors);

        let mut issues = format.issues;
        issues.extend(format.warnings);
        issues.extend(
            validation
                .conflicts
                .iter()
                .map(|name| format!("Conflicts with: {name}")),
        );
        issues.extend(
            validation
                .similar
                .iter()
                .map(|entry| format!("Similar to existing code: {entry}")),
        );

        let mut suggestions = validation.suggestions;
        suggestions.truncate(MAX_CUSTOM_SUGGESTIONS);

        CustomCodeCheck {
            is_valid: format.is_valid,
            is_available: validation.is_unique,
            issues,
            suggestions,
        }
    }

    /// Convenience wrapper returning just the code strings from
    /// `generate_code`, best first, at most `count`.
    pub fn generate_multiple_codes(
        &self,
        entity_name: &str,
        count: usize,
    ) -> Result<Vec<String>, GenerationError> {
        let mut options = GenerateOptions::new(entity_name);
        options.max_suggestions = count;
        let result = self.generate_code(&options)?;
        Ok(std::iter::once(result.primary.code)
            .chain(result.alternatives.into_iter().map(|s| s.code))
            .take(count)
            .collect())
    }

    /// Score and rank candidates: validate each, drop format-invalid ones,
    /// sort by raw score descending (the clamped confidence would collapse
    /// strong candidates into ties). The sort is stable, so equal-scored
    /// candidates keep synthesis order and results stay deterministic.
    fn rank(&self, candidates: &[RawCandidate], entity_name: &str) -> Vec<GeneratedCodeSuggestion> {
        let mut scored: Vec<_> = candidates
            .iter()
            .filter_map(|c| create_suggestion(c, entity_name, &self.donors))
            .collect();
        scored.sort_by(|a, b| b.rank_score.total_cmp(&a.rank_score));
        scored.into_iter().map(|s| s.suggestion).collect()
    }
}

/// Split a ranked list into the primary suggestion and up to
/// `max_suggestions` alternatives.
fn split_ranked(
    mut ranked: Vec<GeneratedCodeSuggestion>,
    max_suggestions: usize,
) -> Option<(GeneratedCodeSuggestion, Vec<GeneratedCodeSuggestion>)> {
    if ranked.is_empty() {
        return None;
    }
    let primary = ranked.remove(0);
    ranked.truncate(max_suggestions);
    Some((primary, ranked))
}
