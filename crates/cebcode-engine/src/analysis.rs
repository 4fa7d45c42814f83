// Name analysis: decomposes an entity name into initials and abbreviation
// candidates. All functions here are total -- empty or letterless input
// yields an empty list, never an error.

use cebcode_core::character::{is_vowel, letters_only};

/// Articles, prepositions and conjunctions that carry no identity in an
/// organization name. Single-character words are exempt from removal.
const STOP_WORDS: &[&str] = &[
    "THE", "OF", "FOR", "AND", "IN", "ON", "AT", "TO", "BY", "WITH", "FROM", "AN", "OR", "AS",
    "PER", "VIA",
];

/// Organizational nouns that are always kept as significant, even if a
/// future stop-word edit would cover them.
const KEEP_WORDS: &[&str] = &[
    "FUND", "FOUNDATION", "ORGANIZATION", "CENTRE", "CENTER", "AGENCY", "BANK",
];

/// Candidate initials strings shorter than this are discarded.
const MIN_INITIALS_LEN: usize = 2;

/// Candidate initials strings longer than this are discarded.
const MAX_INITIALS_LEN: usize = 8;

/// Normalize a raw entity name for word splitting: uppercase, strip
/// punctuation except `&` and `-`, collapse runs of whitespace.
pub fn normalize_name(name: &str) -> String {
    let kept: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '&' || *c == '-' || c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split a normalized name into its significant words.
///
/// A word survives when it is not a stop word, is a single character, or
/// is one of the whitelisted organizational nouns.
pub fn significant_words(normalized: &str) -> Vec<String> {
    normalized
        .split_whitespace()
        .filter(|w| {
            w.chars().count() == 1 || KEEP_WORDS.contains(w) || !STOP_WORDS.contains(w)
        })
        .map(|w| w.to_string())
        .collect()
}

/// First alphanumeric character of a word, if any.
fn first_symbol(word: &str) -> Option<char> {
    word.chars().find(|c| c.is_ascii_alphanumeric())
}

/// The word reduced to its alphanumeric characters.
fn word_symbols(word: &str) -> String {
    word.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}

/// Extract initials-style candidates from an entity name.
///
/// Emits up to four pattern families over the significant words:
///
/// 1. the first letter of every significant word,
/// 2. a 2- or 3-letter prefix of the first word plus the first letter of
///    each subsequent word,
/// 3. for a single long word (more than 6 letters), its 4/5/6-letter
///    prefixes,
/// 4. for hyphenated names, per-segment initials and per-segment 2-letter
///    prefixes.
///
/// Output is deduplicated, preserving first-seen order, and filtered to
/// 2-8 characters.
pub fn extract_initials(name: &str) -> Vec<String> {
    let normalized = normalize_name(name);
    if normalized.is_empty() {
        return Vec::new();
    }
    let words = significant_words(&normalized);
    let mut out: Vec<String> = Vec::new();

    // Family 1: one initial per significant word.
    let initials: String = words.iter().filter_map(|w| first_symbol(w)).collect();
    out.push(initials);

    // Family 2: short prefix of the first word + initials of the rest.
    if words.len() >= 2 {
        let first = word_symbols(&words[0]);
        let rest: String = words[1..].iter().filter_map(|w| first_symbol(w)).collect();
        for prefix_len in 2..=3usize {
            if first.chars().count() >= prefix_len {
                let prefix: String = first.chars().take(prefix_len).collect();
                out.push(format!("{prefix}{rest}"));
            }
        }
    }

    // Family 3: prefixes of a single long word.
    if words.len() == 1 {
        let symbols = word_symbols(&words[0]);
        if symbols.chars().count() > 6 {
            for prefix_len in 4..=6usize {
                out.push(symbols.chars().take(prefix_len).collect());
            }
        }
    }

    // Family 4: hyphen segments.
    if normalized.contains('-') {
        let segments: Vec<String> = normalized
            .split(['-', ' '])
            .map(word_symbols)
            .filter(|s| !s.is_empty())
            .collect();
        if segments.len() >= 2 {
            let seg_initials: String =
                segments.iter().filter_map(|s| s.chars().next()).collect();
            out.push(seg_initials);
            let seg_pairs: String = segments
                .iter()
                .flat_map(|s| s.chars().take(2))
                .collect();
            out.push(seg_pairs);
        }
    }

    dedup_in_range(out)
}

/// Generate abbreviation candidates by vowel elision.
///
/// Three techniques over the letters-only form of the name:
///
/// 1. all consonants, kept when the result is 3-8 characters,
/// 2. the first 4 and first 5 characters of the consonant string when it
///    is longer than 4,
/// 3. a "smart" pass removing only isolated vowels (a vowel with no vowel
///    neighbor), truncated to 6 characters and kept when at least 3.
pub fn generate_abbreviations(name: &str) -> Vec<String> {
    let base = letters_only(name);
    if base.is_empty() {
        return Vec::new();
    }
    let mut out: Vec<String> = Vec::new();

    let consonants: String = base.chars().filter(|c| !is_vowel(*c)).collect();
    let clen = consonants.chars().count();
    if (3..=8).contains(&clen) {
        out.push(consonants.clone());
    }
    if clen > 4 {
        out.push(consonants.chars().take(4).collect());
        out.push(consonants.chars().take(5).collect());
    }

    let smart: String = strip_isolated_vowels(&base).chars().take(6).collect();
    if smart.chars().count() >= 3 {
        out.push(smart);
    }

    let mut seen = std::collections::HashSet::new();
    out.retain(|c| seen.insert(c.clone()));
    out
}

/// Remove vowels that have no vowel neighbor; vowel clusters survive so
/// the result stays pronounceable (e.g. "OO" in "COOPERATION").
fn strip_isolated_vowels(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    let mut out = String::with_capacity(chars.len());
    for (i, &c) in chars.iter().enumerate() {
        if is_vowel(c) {
            let prev_vowel = i > 0 && is_vowel(chars[i - 1]);
            let next_vowel = i + 1 < chars.len() && is_vowel(chars[i + 1]);
            if !prev_vowel && !next_vowel {
                continue;
            }
        }
        out.push(c);
    }
    out
}

/// Deduplicate preserving order and drop candidates outside 2-8 characters.
fn dedup_in_range(candidates: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    candidates
        .into_iter()
        .filter(|c| {
            let len = c.chars().count();
            (MIN_INITIALS_LEN..=MAX_INITIALS_LEN).contains(&len)
        })
        .filter(|c| seen.insert(c.clone()))
        .collect()
}
