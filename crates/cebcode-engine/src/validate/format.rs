// Format-only validation of a single code string. Total: any input,
// including empty or garbage, produces a result object.

use cebcode_core::FormatCheck;
use cebcode_core::character::{MAX_CODE_LEN, MIN_CODE_LEN};

/// Check a code against the format rules: non-empty after trimming, 2-10
/// characters, ASCII letters and digits only, at least one letter.
///
/// Soft findings (an all-numeric shape, or a code supplied entirely in
/// lowercase) go into `warnings` and do not affect `is_valid`.
pub fn validate_code_format(code: &str) -> FormatCheck {
    let trimmed = code.trim();
    let mut issues = Vec::new();
    let mut warnings = Vec::new();

    if trimmed.is_empty() {
        issues.push("Code is required".to_string());
        return FormatCheck {
            is_valid: false,
            issues,
            warnings,
        };
    }

    let len = trimmed.chars().count();
    if len < MIN_CODE_LEN {
        issues.push(format!("Code must be at least {MIN_CODE_LEN} characters"));
    }
    if len > MAX_CODE_LEN {
        issues.push(format!("Code must be at most {MAX_CODE_LEN} characters"));
    }
    if !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
        issues.push("Code may only contain letters and digits".to_string());
    }

    let letters = trimmed.chars().filter(|c| c.is_ascii_alphabetic());
    let mut has_letter = false;
    let mut has_uppercase = false;
    for c in letters {
        has_letter = true;
        if c.is_ascii_uppercase() {
            has_uppercase = true;
        }
    }
    if !has_letter {
        issues.push("Code must contain at least one letter".to_string());
        if trimmed.chars().all(|c| c.is_ascii_digit()) {
            warnings.push("Code is entirely numeric".to_string());
        }
    } else if !has_uppercase {
        warnings.push("Code was supplied without uppercase letters".to_string());
    }

    FormatCheck {
        is_valid: issues.is_empty(),
        issues,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_codes_pass() {
        assert!(validate_code_format("WHO").is_valid);
        assert!(validate_code_format("UN").is_valid);
        assert!(validate_code_format("WFP01").is_valid);
        assert!(validate_code_format("ABCDEFGH02").is_valid);
    }

    #[test]
    fn empty_code_is_required() {
        let check = validate_code_format("");
        assert!(!check.is_valid);
        assert_eq!(check.issues, vec!["Code is required"]);

        let check = validate_code_format("   ");
        assert!(!check.is_valid);
    }

    #[test]
    fn single_character_too_short() {
        let check = validate_code_format("A");
        assert!(!check.is_valid);
        assert!(!check.issues.is_empty());
    }

    #[test]
    fn overlong_code_rejected() {
        let check = validate_code_format("TOOLONGCODE123");
        assert!(!check.is_valid);
        assert!(!check.issues.is_empty());
    }

    #[test]
    fn non_alphanumeric_rejected() {
        let check = validate_code_format("WH-O");
        assert!(!check.is_valid);
        assert!(check.issues.iter().any(|i| i.contains("letters and digits")));
    }

    #[test]
    fn all_numeric_is_fatal_with_warning() {
        let check = validate_code_format("1234");
        assert!(!check.is_valid);
        assert!(check.issues.iter().any(|i| i.contains("at least one letter")));
        assert!(check.warnings.iter().any(|w| w.contains("entirely numeric")));
    }

    #[test]
    fn lowercase_supply_warns_but_passes() {
        let check = validate_code_format("who");
        assert!(check.is_valid);
        assert_eq!(check.warnings.len(), 1);
    }

    #[test]
    fn surrounding_whitespace_ignored() {
        assert!(validate_code_format("  WHO  ").is_valid);
    }
}
