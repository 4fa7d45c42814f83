// ASCII character classification and code canonicalization.
//
// Donor codes are restricted to uppercase ASCII letters and digits, so all
// classification here is ASCII-only on purpose; anything outside that set
// is stripped during cleaning.

/// English vowels (uppercase). `Y` is treated as a consonant for the
/// consonant-run heuristics, matching how abbreviations like "SYS" read.
const VOWELS: &[char] = &['A', 'E', 'I', 'O', 'U'];

/// Shortest legal donor code.
pub const MIN_CODE_LEN: usize = 2;

/// Longest legal donor code.
pub const MAX_CODE_LEN: usize = 10;

/// Check whether a character is an ASCII vowel (case-insensitive).
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c.to_ascii_uppercase())
}

/// Check whether a character is an ASCII consonant (case-insensitive).
pub fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !is_vowel(c)
}

/// Canonicalize a raw candidate: uppercase, strip everything that is not
/// an ASCII letter or digit, truncate to [`MAX_CODE_LEN`] characters.
///
/// Total: any input produces a (possibly empty) cleaned string.
pub fn clean_code(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .take(MAX_CODE_LEN)
        .collect()
}

/// Reduce a name to its ASCII letters only, uppercased. Digits, spaces and
/// punctuation are dropped. Used as the base string for abbreviation
/// techniques and the fallback cascade.
pub fn letters_only(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Length of the longest run of consecutive consonants in `code`.
/// Digits break a run.
pub fn longest_consonant_run(code: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for c in code.chars() {
        if is_consonant(c) {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}
