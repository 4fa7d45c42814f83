// Code validation module.
//
//   - `format`: format-only legality check
//   - `similarity`: uniqueness scan and near-duplicate detection
//
// `validate_code` composes the three checks into one result object; all
// findings are data, nothing here fails.

pub mod format;
pub mod similarity;

use cebcode_core::character::{MAX_CODE_LEN, MIN_CODE_LEN, clean_code};
use cebcode_core::{CodeValidationResult, DonorRecord};

pub use format::validate_code_format;
pub use similarity::{
    SIMILARITY_THRESHOLD, check_code_uniqueness, find_similar_codes, levenshtein, similarity,
};

/// How many numbered-suffix alternatives to try when a code is taken.
const MAX_SUFFIX_ALTERNATIVES: u32 = 5;

/// Validate a code against the donor snapshot: format, uniqueness, and
/// near-duplicate similarity.
///
/// When the code is taken, up to five `BASE01..BASE05` alternatives are
/// proposed, keeping only those that are themselves unused. When the code
/// is malformed but salvageable, its cleaned form is proposed instead.
/// `is_valid` means both format-legal and unused; soft format warnings are
/// appended to `format_issues` after the fatal ones.
pub fn validate_code(code: &str, donors: &[DonorRecord]) -> CodeValidationResult {
    let format = validate_code_format(code);
    let uniqueness = check_code_uniqueness(code, donors);
    let similar = find_similar_codes(code, donors, SIMILARITY_THRESHOLD);

    let mut suggestions = Vec::new();
    if !uniqueness.is_unique {
        suggestions.extend(suffix_alternatives(code, donors));
    }
    if !format.is_valid {
        let cleaned = clean_code(code);
        if cleaned.chars().count() >= MIN_CODE_LEN && !suggestions.contains(&cleaned) {
            suggestions.push(cleaned);
        }
    }

    let mut format_issues = format.issues;
    format_issues.extend(format.warnings);

    CodeValidationResult {
        is_valid: format.is_valid && uniqueness.is_unique,
        is_unique: uniqueness.is_unique,
        conflicts: uniqueness.conflicts,
        similar,
        suggestions,
        format_issues,
    }
}

/// Numbered-suffix alternatives for a taken code, keeping only unused
/// ones. The base is truncated so the suffix fits the length limit.
fn suffix_alternatives(code: &str, donors: &[DonorRecord]) -> Vec<String> {
    let mut base = clean_code(code);
    let max_base = MAX_CODE_LEN - 2;
    if base.chars().count() > max_base {
        base = base.chars().take(max_base).collect();
    }
    if base.is_empty() {
        return Vec::new();
    }

    let mut alternatives = Vec::new();
    for n in 1..=MAX_SUFFIX_ALTERNATIVES {
        let candidate = format!("{base}{n:02}");
        if check_code_uniqueness(&candidate, donors).is_unique {
            alternatives.push(candidate);
        }
    }
    alternatives
}

#[cfg(test)]
mod tests {
    use super::*;
    use cebcode_core::DonorKind;

    fn donor(name: &str, code: &str) -> DonorRecord {
        DonorRecord::new(name, code, "Test", DonorKind::NonGovernment)
    }

    #[test]
    fn available_well_formed_code_is_valid() {
        let donors = vec![donor("World Health Organization", "WHO")];
        let result = validate_code("WFP", &donors);
        assert!(result.is_valid);
        assert!(result.is_unique);
        assert!(result.conflicts.is_empty());
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn taken_code_gets_suffix_alternatives() {
        let donors = vec![donor("World Health Organization", "WHO")];
        let result = validate_code("WHO", &donors);
        assert!(!result.is_valid);
        assert!(!result.is_unique);
        assert_eq!(result.conflicts, vec!["World Health Organization"]);
        assert_eq!(
            result.suggestions,
            vec!["WHO01", "WHO02", "WHO03", "WHO04", "WHO05"]
        );
    }

    #[test]
    fn taken_alternatives_are_filtered() {
        let donors = vec![
            donor("World Health Organization", "WHO"),
            donor("Who Trust One", "WHO01"),
            donor("Who Trust Three", "WHO03"),
        ];
        let result = validate_code("WHO", &donors);
        assert_eq!(result.suggestions, vec!["WHO02", "WHO04", "WHO05"]);
    }

    #[test]
    fn malformed_code_gets_cleaned_suggestion() {
        let result = validate_code("w.h.o!", &[]);
        assert!(!result.is_valid);
        assert!(result.is_unique);
        assert_eq!(result.suggestions, vec!["WHO"]);
    }

    #[test]
    fn hopeless_code_gets_no_suggestion() {
        let result = validate_code("!?", &[]);
        assert!(!result.is_valid);
        assert!(result.suggestions.is_empty());
        assert!(!result.format_issues.is_empty());
    }

    #[test]
    fn similar_codes_surface_without_blocking() {
        let donors = vec![donor("Unicef Fund", "UNICEFF")];
        let result = validate_code("UNICEF", &donors);
        assert!(result.is_valid);
        assert_eq!(result.similar, vec!["UNICEFF (Unicef Fund)"]);
    }

    #[test]
    fn long_base_truncated_so_suffix_fits() {
        let donors = vec![donor("Very Long Holder", "ABCDEFGHIJ")];
        let result = validate_code("ABCDEFGHIJ", &donors);
        for suggestion in &result.suggestions {
            assert!(suggestion.chars().count() <= MAX_CODE_LEN);
        }
        assert!(result.suggestions.contains(&"ABCDEFGH01".to_string()));
    }
}
