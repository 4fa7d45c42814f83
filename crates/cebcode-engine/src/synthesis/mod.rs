// Candidate synthesis module.
//
// Turns name-analysis output into raw candidate code strings:
//   - `strategies`: the three primary synthesis strategies
//   - `fallback`: last-resort cascade used only when the primary
//     strategies leave nothing standing
//
// Every strategy funnels its output through a shared `CandidateSet`
// accumulator that canonicalizes, counts, and deduplicates candidates.

pub mod fallback;
pub mod strategies;

use cebcode_core::character::clean_code;
use std::collections::HashSet;

pub use fallback::fallback_candidates;
pub use strategies::{
    synthesize_from_abbreviations, synthesize_from_initials, synthesize_hybrid,
};

/// The closed set of synthesis strategies. Which strategy produced a
/// candidate feeds both scoring (initials get a small tie-break bonus) and
/// the reasoning text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Initials of the significant words.
    Initials,
    /// Vowel-elision abbreviation of the whole name.
    Abbreviation,
    /// First-word prefix combined with remaining initials.
    Hybrid,
    /// Last-resort cascade over raw name prefixes.
    Fallback,
}

impl Strategy {
    /// Short phrase used in suggestion reasoning text.
    pub fn describe(self) -> &'static str {
        match self {
            Strategy::Initials => "initials of the name's significant words",
            Strategy::Abbreviation => "a vowel-elided abbreviation of the name",
            Strategy::Hybrid => "a word prefix combined with remaining initials",
            Strategy::Fallback => "a fallback prefix of the name",
        }
    }
}

/// A raw, not-yet-validated candidate tagged with its producing strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCandidate {
    /// Canonicalized code string (uppercase alphanumeric, at most 10 chars).
    pub code: String,
    pub strategy: Strategy,
}

/// Accumulator for raw candidates.
///
/// Canonicalizes every pushed string via `clean_code`, drops candidates
/// that clean to nothing, deduplicates by cleaned code (first occurrence
/// wins, keeping its strategy tag), and counts every push attempt for the
/// generation statistics.
#[derive(Debug, Default)]
pub struct CandidateSet {
    candidates: Vec<RawCandidate>,
    seen: HashSet<String>,
    attempted: usize,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clean and record a raw candidate. Duplicates and empty cleans are
    /// counted as attempts but not stored.
    pub fn push(&mut self, raw: &str, strategy: Strategy) {
        self.attempted += 1;
        let code = clean_code(raw);
        if code.is_empty() {
            return;
        }
        if !self.seen.insert(code.clone()) {
            return;
        }
        self.candidates.push(RawCandidate { code, strategy });
    }

    /// All distinct candidates in insertion order.
    pub fn candidates(&self) -> &[RawCandidate] {
        &self.candidates
    }

    /// Number of raw candidates pushed, duplicates included.
    pub fn attempted(&self) -> usize {
        self.attempted
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Consume the set, yielding the distinct candidates.
    pub fn into_candidates(self) -> Vec<RawCandidate> {
        self.candidates
    }
}
