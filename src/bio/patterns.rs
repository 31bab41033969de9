use std::collections::HashSet;

use serde::Serialize;
use tracing::trace;

use super::AnalysisConfig;
use crate::model::sequence::Sequence;

/// A substring found at two non-overlapping positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternMatch {
    pub pattern: String,
    pub positions: [usize; 2],
    pub length: usize,
}

/// Finds repeated substrings, shortest lengths first, leftmost first.
///
/// For each length in `min_pattern_len..=min(max_pattern_len, len / 2)` every
/// start position with room for a second copy is visited. A substring that has
/// not been recorded yet is searched again from `position + length`; the first
/// hit is recorded together with the current position. Collection stops once
/// `max_patterns` matches exist.
pub fn find_patterns(sequence: &Sequence, config: &AnalysisConfig) -> Vec<PatternMatch> {
    let text = sequence.to_string();
    let len = text.len();
    let upper = config.max_pattern_len.min(len / 2);

    let mut found = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for length in config.min_pattern_len.max(1)..=upper {
        for start in 0..=(len - 2 * length) {
            if found.len() >= config.max_patterns {
                return found;
            }

            let pattern = &text[start..start + length];
            if seen.contains(pattern) {
                continue;
            }

            let from = start + length;
            if let Some(offset) = text[from..].find(pattern) {
                let next = from + offset;
                trace!(pattern, start, next, "repeat found");
                found.push(PatternMatch {
                    pattern: pattern.to_string(),
                    positions: [start, next],
                    length,
                });
                seen.insert(pattern);
            }
        }
    }

    found.truncate(config.max_patterns);
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(text: &str) -> Vec<PatternMatch> {
        find_patterns(&Sequence::from_text(text), &AnalysisConfig::default())
    }

    #[test]
    fn finds_dinucleotide_repeats_first() {
        let found = patterns("ATCGATCG");
        assert_eq!(found.len(), 5);
        assert_eq!(
            found[0],
            PatternMatch {
                pattern: "AT".to_string(),
                positions: [0, 4],
                length: 2,
            }
        );
        assert_eq!(found[1].pattern, "TC");
        assert_eq!(found[1].positions, [1, 5]);
        assert_eq!(found[2].pattern, "CG");
        assert_eq!(found[2].positions, [2, 6]);
        assert_eq!(found[3].pattern, "ATC");
        assert_eq!(found[3].positions, [0, 4]);
        assert_eq!(found[4].pattern, "TCG");
    }

    #[test]
    fn second_occurrence_does_not_overlap_first() {
        let found = patterns("AAA");
        assert!(found.is_empty());

        let found = patterns("AAAA");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].pattern, "AA");
        assert_eq!(found[0].positions, [0, 2]);
    }

    #[test]
    fn each_substring_is_recorded_once() {
        let found = patterns("ACACACAC");
        let ac: Vec<_> = found.iter().filter(|p| p.pattern == "AC").collect();
        assert_eq!(ac.len(), 1);
        assert_eq!(ac[0].positions, [0, 2]);
    }

    #[test]
    fn no_repeats_in_short_or_unique_sequences() {
        assert!(patterns("A").is_empty());
        assert!(patterns("ATCG").is_empty());
    }

    #[test]
    fn respects_custom_limits() {
        let config = AnalysisConfig {
            min_pattern_len: 3,
            max_pattern_len: 3,
            max_patterns: 2,
        };
        let found = find_patterns(&Sequence::from_text("ATCGATCGATCG"), &config);
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|p| p.length == 3));
    }
}
