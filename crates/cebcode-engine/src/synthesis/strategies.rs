// The three primary synthesis strategies. Each is a pure function from
// name-analysis output to candidates pushed into a `CandidateSet`, with
// hard variant caps so generation cost stays bounded no matter the input.

use super::{CandidateSet, Strategy};

/// Cap on variants derived from any single source string (raw form plus
/// numeric-suffix variants).
pub const MAX_VARIANTS_PER_SOURCE: usize = 10;

/// Numeric suffix scans never go past `99`.
pub const MAX_SUFFIX: u32 = 99;

/// Largest length deficit worth padding with numeric suffixes.
const MAX_PAD_DEFICIT: usize = 3;

/// Synthesize candidates from initials strings.
///
/// Per initials string: the raw form; zero-padded numeric suffixes when
/// the string falls short of the preferred length by at most 3; a straight
/// truncation and a truncate-plus-"1" variant when it is too long.
pub fn synthesize_from_initials(
    initials: &[String],
    preferred_length: usize,
    set: &mut CandidateSet,
) {
    for source in initials {
        let len = source.chars().count();
        let mut variants = 0usize;

        set.push(source, Strategy::Initials);
        variants += 1;

        if len < preferred_length && preferred_length - len <= MAX_PAD_DEFICIT {
            for n in 1..=MAX_SUFFIX {
                if variants >= MAX_VARIANTS_PER_SOURCE {
                    break;
                }
                set.push(&format!("{source}{n:02}"), Strategy::Initials);
                variants += 1;
            }
        } else if len > preferred_length {
            let truncated: String = source.chars().take(preferred_length).collect();
            set.push(&truncated, Strategy::Initials);
            let shortened: String = source.chars().take(preferred_length.saturating_sub(1)).collect();
            if !shortened.is_empty() {
                set.push(&format!("{shortened}1"), Strategy::Initials);
            }
        }
    }
}

/// Synthesize candidates from abbreviation strings.
///
/// Per abbreviation: the raw form; `"01"` and `"1"` suffix variants when
/// it is shorter than the preferred length; a truncation when it exceeds
/// the preferred length by more than 2.
pub fn synthesize_from_abbreviations(
    abbreviations: &[String],
    preferred_length: usize,
    set: &mut CandidateSet,
) {
    for source in abbreviations {
        let len = source.chars().count();

        set.push(source, Strategy::Abbreviation);

        if len < preferred_length {
            set.push(&format!("{source}01"), Strategy::Abbreviation);
            set.push(&format!("{source}1"), Strategy::Abbreviation);
        } else if len > preferred_length + 2 {
            let truncated: String = source.chars().take(preferred_length).collect();
            set.push(&truncated, Strategy::Abbreviation);
        }
    }
}

/// Synthesize hybrid candidates from the significant words of the name.
///
/// Multi-word names: a 2-4 letter prefix of the first word joined with the
/// initials of the remaining words, each padded with `"01"` when still
/// short of the preferred length. Single long words: the preferred-length
/// prefix and a truncate-plus-"1" variant.
pub fn synthesize_hybrid(words: &[String], preferred_length: usize, set: &mut CandidateSet) {
    if words.is_empty() {
        return;
    }
    let first = word_symbols(&words[0]);

    if words.len() >= 2 {
        let rest: String = words[1..]
            .iter()
            .filter_map(|w| w.chars().find(|c| c.is_ascii_alphanumeric()))
            .collect();
        for prefix_len in 2..=4usize {
            if first.chars().count() < prefix_len {
                break;
            }
            let prefix: String = first.chars().take(prefix_len).collect();
            let combined = format!("{prefix}{rest}");
            let combined_len = combined.chars().count();
            set.push(&combined, Strategy::Hybrid);
            if combined_len < preferred_length {
                set.push(&format!("{combined}01"), Strategy::Hybrid);
            }
        }
    } else if first.chars().count() > 6 {
        let prefix: String = first.chars().take(preferred_length).collect();
        set.push(&prefix, Strategy::Hybrid);
        let shortened: String = first.chars().take(preferred_length.saturating_sub(1)).collect();
        if !shortened.is_empty() {
            set.push(&format!("{shortened}1"), Strategy::Hybrid);
        }
    }
}

fn word_symbols(word: &str) -> String {
    word.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}
