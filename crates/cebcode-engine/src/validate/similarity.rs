// Uniqueness and near-duplicate detection against the donor snapshot.
//
// Both checks are single linear scans over the snapshot; similarity uses
// normalized Levenshtein distance so a one-letter variation of a 6-letter
// code is flagged while unrelated codes are not.

use cebcode_core::DonorRecord;

/// Codes at or above this normalized similarity are reported as
/// confusable near-duplicates.
pub const SIMILARITY_THRESHOLD: f64 = 0.8;

/// Outcome of the exact-match uniqueness scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniquenessCheck {
    pub is_unique: bool,
    /// Names of every donor holding the code; more than one entry means
    /// the registry itself carries duplicates.
    pub conflicts: Vec<String>,
}

/// Case-insensitive, whitespace-trimmed exact match against every donor's
/// code. An empty needle matches nothing, even against blank registry rows.
pub fn check_code_uniqueness(code: &str, donors: &[DonorRecord]) -> UniquenessCheck {
    let needle = code.trim().to_ascii_uppercase();
    if needle.is_empty() {
        return UniquenessCheck {
            is_unique: true,
            conflicts: Vec::new(),
        };
    }
    let conflicts: Vec<String> = donors
        .iter()
        .filter(|d| d.ceb_code.trim().to_ascii_uppercase() == needle)
        .map(|d| d.name.clone())
        .collect();
    UniquenessCheck {
        is_unique: conflicts.is_empty(),
        conflicts,
    }
}

/// Find existing codes confusably similar to `code`, excluding exact
/// matches (those are conflicts, handled separately). Returns
/// `"CODE (Donor Name)"` entries.
pub fn find_similar_codes(code: &str, donors: &[DonorRecord], threshold: f64) -> Vec<String> {
    let needle = code.trim().to_ascii_uppercase();
    if needle.is_empty() {
        return Vec::new();
    }
    let mut similar = Vec::new();
    for donor in donors {
        let existing = donor.ceb_code.trim().to_ascii_uppercase();
        if existing.is_empty() || existing == needle {
            continue;
        }
        if similarity(&needle, &existing) >= threshold {
            similar.push(format!("{existing} ({})", donor.name));
        }
    }
    similar
}

/// Normalized similarity in [0, 1]: `1 - edits / max_length`.
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f64 / max_len as f64
}

/// Levenshtein edit distance, two-row dynamic program.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0usize; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            current[j + 1] = substitution.min(prev[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut prev, &mut current);
    }
    prev[b.len()]
}
