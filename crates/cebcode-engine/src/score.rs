// Quality scoring: a deterministic 0-100 confidence model.
//
// `base_score` rates the shape of a candidate against its source name;
// `create_suggestion` layers the validator's findings on top and packages
// the result. Format-invalid candidates are dropped here, so everything
// that reaches a CodeGenerationResult is format-legal.

use cebcode_core::character::longest_consonant_run;
use cebcode_core::{CodePattern, DonorRecord, GeneratedCodeSuggestion, PatternKind};

use crate::synthesis::{RawCandidate, Strategy};
use crate::validate::format::validate_code_format;
use crate::validate::similarity::check_code_uniqueness;

/// Every candidate starts here before adjustments.
const BASE: f64 = 50.0;

/// Added when the code is unused in the registry.
const UNIQUE_BONUS: f64 = 20.0;

/// Subtracted when the code collides with an existing one.
const CONFLICT_PENALTY: f64 = 30.0;

/// Added when the code passes the format check. The mirror-image penalty
/// of 20 exists for completeness but never reaches a result, since
/// format-invalid candidates are dropped before ranking.
const FORMAT_BONUS: f64 = 10.0;

/// Flat tie-break preference for the initials strategy: short recognizable
/// acronyms beat equally-scored alternatives.
const INITIALS_BONUS: f64 = 5.0;

/// A consonant run of this length or more reads as unpronounceable.
const CONSONANT_RUN_LIMIT: usize = 4;

/// Rate the shape of a candidate against the entity name, before any
/// registry findings. Deterministic; result is roughly in [25, 125] and
/// is clamped later.
pub fn base_score(code: &str, entity_name: &str) -> f64 {
    let mut score = BASE;

    // Length: 4-6 is the sweet spot for a registry code.
    let len = code.chars().count();
    score += match len {
        4..=6 => 20.0,
        3 | 7 => 10.0,
        _ => -10.0,
    };

    // Letter overlap with the source name: codes recognizably derived from
    // the name score higher.
    let name_upper = entity_name.to_ascii_uppercase();
    let letters: Vec<char> = code.chars().filter(|c| c.is_ascii_alphabetic()).collect();
    if !letters.is_empty() {
        let matched = letters.iter().filter(|c| name_upper.contains(**c)).count();
        score += matched as f64 / letters.len() as f64 * 30.0;
    }

    // Digits dilute recognizability.
    let digits = code.chars().filter(|c| c.is_ascii_digit()).count();
    score += match digits {
        0 => 15.0,
        1 | 2 => 5.0,
        _ => -10.0,
    };

    if longest_consonant_run(code) < CONSONANT_RUN_LIMIT {
        score += 10.0;
    }

    score
}

/// Classify the shape of a code, independent of which strategy produced
/// it. The two-letter acronym case is checked before the length-based
/// letter rules so it is not shadowed by the initials rule.
pub fn classify_pattern(code: &str) -> CodePattern {
    let len = code.chars().count();
    let has_digit = code.chars().any(|c| c.is_ascii_digit());
    let pure_letters = !has_digit && code.chars().all(|c| c.is_ascii_alphabetic());
    let has_letter = code.chars().any(|c| c.is_ascii_alphabetic());

    let (kind, description, example) = if pure_letters && len == 2 {
        (PatternKind::Acronym, "Two-letter acronym", "UN")
    } else if pure_letters && len <= 4 {
        (PatternKind::Initials, "Initials of significant words", "WHO")
    } else if pure_letters {
        (PatternKind::Abbreviation, "Shortened form of the name", "UNICEF")
    } else if has_letter && has_digit {
        (PatternKind::Hybrid, "Letters with a numeric suffix", "WFP01")
    } else {
        (PatternKind::Custom, "Unclassified shape", "X1Y2")
    };

    CodePattern {
        kind,
        description: description.to_string(),
        example: example.to_string(),
    }
}

/// A packaged suggestion together with its unclamped ranking score.
///
/// Good candidates routinely exceed 100 points before clamping; ranking
/// on the clamped confidence would collapse them into ties, so ordering
/// uses the raw score and only the reported confidence is clamped.
#[derive(Debug, Clone)]
pub struct ScoredSuggestion {
    pub suggestion: GeneratedCodeSuggestion,
    pub rank_score: f64,
}

/// Validate and score one raw candidate, producing a packaged suggestion.
///
/// Returns `None` for format-invalid candidates: they are excluded from
/// ranking so every emitted suggestion satisfies the code invariants.
pub fn create_suggestion(
    candidate: &RawCandidate,
    entity_name: &str,
    donors: &[DonorRecord],
) -> Option<ScoredSuggestion> {
    let format = validate_code_format(&candidate.code);
    if !format.is_valid {
        return None;
    }
    let uniqueness = check_code_uniqueness(&candidate.code, donors);

    let mut score = base_score(&candidate.code, entity_name);
    score += if uniqueness.is_unique {
        UNIQUE_BONUS
    } else {
        -CONFLICT_PENALTY
    };
    score += FORMAT_BONUS;
    if candidate.strategy == Strategy::Initials {
        score += INITIALS_BONUS;
    }
    let confidence = score.clamp(0.0, 100.0).round() as u8;

    let pattern = classify_pattern(&candidate.code);
    let conflict_text = if uniqueness.is_unique {
        "no conflicts in the registry".to_string()
    } else {
        let n = uniqueness.conflicts.len();
        format!("conflicts with {n} existing code{}", if n == 1 { "" } else { "s" })
    };
    let reasoning = format!(
        "Generated from {}; {}; pattern: {}",
        candidate.strategy.describe(),
        conflict_text,
        pattern.description
    );

    Some(ScoredSuggestion {
        suggestion: GeneratedCodeSuggestion {
            code: candidate.code.clone(),
            confidence,
            reasoning,
            is_unique: uniqueness.is_unique,
            pattern,
        },
        rank_score: score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cebcode_core::DonorKind;

    fn donor(name: &str, code: &str) -> DonorRecord {
        DonorRecord::new(name, code, "Test", DonorKind::NonGovernment)
    }

    fn candidate(code: &str, strategy: Strategy) -> RawCandidate {
        RawCandidate {
            code: code.to_string(),
            strategy,
        }
    }

    #[test]
    fn base_score_rewards_ideal_length() {
        // All letters match, 5 chars, no digits, no long consonant run:
        // 50 + 20 + 30 + 15 + 10 = 125 (pre-clamp).
        assert_eq!(base_score("WORLD", "World Bank"), 125.0);
    }

    #[test]
    fn base_score_penalizes_extremes() {
        let short = base_score("WH", "World Health Organization");
        let ideal = base_score("WHOR", "World Health Organization");
        assert!(short < ideal);

        let digity = base_score("W1234", "World Health Organization");
        assert!(digity < ideal);
    }

    #[test]
    fn base_score_penalizes_consonant_walls() {
        let wall = base_score("NTRNT", "International");
        let smooth = base_score("INTER", "International");
        assert_eq!(smooth - wall, 10.0);
    }

    #[test]
    fn classify_two_letter_acronym_first() {
        assert_eq!(classify_pattern("UN").kind, PatternKind::Acronym);
        assert_eq!(classify_pattern("WHO").kind, PatternKind::Initials);
        assert_eq!(classify_pattern("WFPX").kind, PatternKind::Initials);
        assert_eq!(classify_pattern("UNICEF").kind, PatternKind::Abbreviation);
        assert_eq!(classify_pattern("WFP01").kind, PatternKind::Hybrid);
        assert_eq!(classify_pattern("12A3").kind, PatternKind::Hybrid);
    }

    #[test]
    fn create_suggestion_drops_format_invalid() {
        let raw = candidate("1234", Strategy::Fallback);
        assert!(create_suggestion(&raw, "Numbers Inc", &[]).is_none());
    }

    #[test]
    fn create_suggestion_scores_unique_higher_than_taken() {
        // A deliberately weak code so the 100-point clamp stays out of play:
        // base = 50 - 10 (len 2) + 0 (no letter overlap) + 5 (one digit) + 10 = 55.
        let donors = vec![donor("Quantum Nine", "Q9")];
        let taken =
            create_suggestion(&candidate("Q9", Strategy::Hybrid), "Zeta", &donors).unwrap();
        let free = create_suggestion(&candidate("Q9", Strategy::Hybrid), "Zeta", &[]).unwrap();
        assert!(!taken.suggestion.is_unique);
        assert!(free.suggestion.is_unique);
        // +20 unique vs -30 conflict: 50 points apart.
        assert_eq!(free.suggestion.confidence, 85);
        assert_eq!(taken.suggestion.confidence, 35);
    }

    #[test]
    fn initials_strategy_outranks_identical_hybrid_code() {
        let a = create_suggestion(&candidate("QZ", Strategy::Initials), "Anon", &[]).unwrap();
        let b = create_suggestion(&candidate("QZ", Strategy::Hybrid), "Anon", &[]).unwrap();
        assert_eq!(a.rank_score - b.rank_score, 5.0);
    }

    #[test]
    fn confidence_is_clamped_but_rank_score_is_not() {
        let s = create_suggestion(&candidate("WORLD", Strategy::Initials), "World", &[]).unwrap();
        assert_eq!(s.suggestion.confidence, 100);
        assert!(s.rank_score > 100.0);
    }

    #[test]
    fn ranking_prefers_free_code_even_when_confidence_ties() {
        // Both clamp to confidence 100, but the unused code must still
        // outrank the taken one.
        let donors = vec![donor("World Health Organization", "WHO")];
        let taken = create_suggestion(
            &candidate("WHO", Strategy::Initials),
            "World Health Organization",
            &donors,
        )
        .unwrap();
        let free = create_suggestion(
            &candidate("WHO01", Strategy::Initials),
            "World Health Organization",
            &donors,
        )
        .unwrap();
        assert!(free.rank_score > taken.rank_score);
    }

    #[test]
    fn reasoning_names_strategy_and_conflicts() {
        let donors = vec![donor("World Health Organization", "WHO")];
        let s = create_suggestion(
            &candidate("WHO", Strategy::Initials),
            "World Health Organization",
            &donors,
        )
        .unwrap()
        .suggestion;
        assert!(s.reasoning.contains("initials"));
        assert!(s.reasoning.contains("conflicts with 1 existing code"));
        assert!(s.reasoning.contains("Initials of significant words"));
    }
}
