// Last-resort candidate cascade, invoked only when the three primary
// strategies leave zero surviving suggestions. Stages run in order and
// each later stage runs only when everything before it produced nothing,
// so the cheapest rescue wins.

use cebcode_core::DonorRecord;
use cebcode_core::character::letters_only;

use super::{CandidateSet, Strategy};
use crate::validate::format::validate_code_format;
use crate::validate::similarity::check_code_uniqueness;

/// How many unique suffixed codes stage 2 looks for before stopping.
const SUFFIX_STAGE_TARGET: usize = 3;

/// Numeric suffix scans never go past `99`.
const MAX_SUFFIX: u32 = 99;

/// Run the fallback cascade for `name` against the donor snapshot.
///
/// 1. 4-, 5- and 6-letter prefixes of the letters-only name, keeping any
///    that are format-valid.
/// 2. The 3-letter prefix with zero-padded suffixes `01..99`, stopping
///    after three codes that are both format-valid and unused.
/// 3. First two letters plus the last letter plus `"01"`, kept when
///    merely format-valid.
pub fn fallback_candidates(name: &str, donors: &[DonorRecord], set: &mut CandidateSet) {
    let base = letters_only(name);
    if base.is_empty() {
        return;
    }

    // Stage 1: plain prefixes. For names shorter than the prefix length
    // the whole name is taken; the candidate set deduplicates.
    let before = set.candidates().len();
    for prefix_len in 4..=6usize {
        let prefix: String = base.chars().take(prefix_len).collect();
        if validate_code_format(&prefix).is_valid {
            set.push(&prefix, Strategy::Fallback);
        }
    }
    if set.candidates().len() > before {
        return;
    }

    // Stage 2: 3-letter prefix with a numeric suffix, seeking unused codes.
    let prefix: String = base.chars().take(3).collect();
    let mut found = 0usize;
    for n in 1..=MAX_SUFFIX {
        let candidate = format!("{prefix}{n:02}");
        if !validate_code_format(&candidate).is_valid {
            continue;
        }
        if !check_code_uniqueness(&candidate, donors).is_unique {
            continue;
        }
        set.push(&candidate, Strategy::Fallback);
        found += 1;
        if found >= SUFFIX_STAGE_TARGET {
            break;
        }
    }
    if found > 0 {
        return;
    }

    // Stage 3: two leading letters, the trailing letter, and "01".
    let lead: String = base.chars().take(2).collect();
    if let Some(tail) = base.chars().last() {
        let candidate = format!("{lead}{tail}01");
        if validate_code_format(&candidate).is_valid {
            set.push(&candidate, Strategy::Fallback);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cebcode_core::DonorKind;

    fn donor(name: &str, code: &str) -> DonorRecord {
        DonorRecord::new(name, code, "Test", DonorKind::NonGovernment)
    }

    #[test]
    fn stage_one_emits_name_prefixes() {
        let mut set = CandidateSet::new();
        fallback_candidates("Rockefeller Foundation", &[], &mut set);
        let codes: Vec<&str> = set.candidates().iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["ROCK", "ROCKE", "ROCKEF"]);
    }

    #[test]
    fn short_names_skip_unavailable_prefix_lengths() {
        let mut set = CandidateSet::new();
        fallback_candidates("Oxfam", &[], &mut set);
        let codes: Vec<&str> = set.candidates().iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["OXFA", "OXFAM"]);
    }

    #[test]
    fn three_letter_name_becomes_its_own_code() {
        let mut set = CandidateSet::new();
        fallback_candidates("Aid", &[], &mut set);
        let codes: Vec<&str> = set.candidates().iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["AID"]);
    }

    #[test]
    fn two_letter_name_becomes_its_own_code() {
        let mut set = CandidateSet::new();
        fallback_candidates("Un", &[], &mut set);
        let codes: Vec<&str> = set.candidates().iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["UN"]);
    }

    #[test]
    fn stage_two_runs_for_single_letter_names() {
        // "X" alone fails the format check, so stage 2 pads with suffixes.
        let mut set = CandidateSet::new();
        fallback_candidates("X", &[], &mut set);
        let codes: Vec<&str> = set.candidates().iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["X01", "X02", "X03"]);
    }

    #[test]
    fn stage_two_skips_taken_codes() {
        let donors = vec![donor("Existing One", "X01"), donor("Existing Two", "X02")];
        let mut set = CandidateSet::new();
        fallback_candidates("X", &donors, &mut set);
        let codes: Vec<&str> = set.candidates().iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["X03", "X04", "X05"]);
    }

    #[test]
    fn stage_three_is_the_last_resort() {
        // Every stage-2 suffix taken: the two-letter-plus-tail shape remains.
        let donors: Vec<DonorRecord> = (1..=99)
            .map(|n| donor(&format!("Holder {n}"), &format!("X{n:02}")))
            .collect();
        let mut set = CandidateSet::new();
        fallback_candidates("X", &donors, &mut set);
        let codes: Vec<&str> = set.candidates().iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["XX01"]);
    }

    #[test]
    fn letterless_name_yields_nothing() {
        let mut set = CandidateSet::new();
        fallback_candidates("12345", &[], &mut set);
        assert!(set.is_empty());
    }
}
