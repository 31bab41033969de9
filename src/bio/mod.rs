//! Nucleotide composition, complement and repeat analysis.
//!
//! [`analyze`] is the entry point: it filters free text down to a
//! [`Sequence`], then derives base counts, percentage composition,
//! GC-content, the complementary strand and up to five repeated substrings.
//! An input with no valid bases has no analysis; this is reported as `None`
//! rather than as an error.
//!
//! ```
//! use stemlab::bio::analyze;
//!
//! let analysis = analyze("ATCGATCG").expect("non-empty sequence");
//! assert_eq!(analysis.counts.a, 2);
//! assert!((analysis.gc_content - 50.0).abs() < 1e-9);
//! assert_eq!(analysis.complement.to_string(), "TAGCTAGC");
//!
//! assert!(analyze("").is_none());
//! ```

mod patterns;
mod random;

pub use patterns::{PatternMatch, find_patterns};
pub use random::{DEFAULT_RANDOM_LENGTH, random_sequence};

use serde::Serialize;
use tracing::debug;

use crate::model::sequence::Sequence;
use crate::model::types::Nucleotide;

/// Limits for the repeat search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Shortest repeated substring considered.
    pub min_pattern_len: usize,
    /// Longest repeated substring considered; also capped at half the
    /// sequence length.
    pub max_pattern_len: usize,
    /// Maximum number of repeats reported.
    pub max_patterns: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_pattern_len: 2,
            max_pattern_len: 6,
            max_patterns: 5,
        }
    }
}

/// One value per base.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct PerBase<T> {
    pub a: T,
    pub t: T,
    pub c: T,
    pub g: T,
}

impl<T: Copy> PerBase<T> {
    pub fn get(&self, base: Nucleotide) -> T {
        match base {
            Nucleotide::A => self.a,
            Nucleotide::T => self.t,
            Nucleotide::C => self.c,
            Nucleotide::G => self.g,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequenceAnalysis {
    pub sequence: Sequence,
    pub length: usize,
    pub counts: PerBase<usize>,
    pub percentages: PerBase<f64>,
    pub gc_content: f64,
    pub complement: Sequence,
    pub patterns: Vec<PatternMatch>,
}

/// Analyzes `text` with the default repeat limits.
pub fn analyze(text: &str) -> Option<SequenceAnalysis> {
    analyze_with(text, &AnalysisConfig::default())
}

pub fn analyze_with(text: &str, config: &AnalysisConfig) -> Option<SequenceAnalysis> {
    let sequence = Sequence::from_text(text);
    if sequence.is_empty() {
        debug!(input_len = text.len(), "no valid bases, nothing to analyze");
        return None;
    }
    Some(analyze_sequence(sequence, config))
}

pub fn analyze_sequence(sequence: Sequence, config: &AnalysisConfig) -> SequenceAnalysis {
    let counts = count_bases(&sequence);
    let total = sequence.len() as f64;
    let pct = |n: usize| n as f64 / total * 100.0;
    let percentages = PerBase {
        a: pct(counts.a),
        t: pct(counts.t),
        c: pct(counts.c),
        g: pct(counts.g),
    };
    let gc_content = percentages.g + percentages.c;
    let complement = sequence.complement();
    let patterns = find_patterns(&sequence, config);

    debug!(
        length = sequence.len(),
        gc_content,
        patterns = patterns.len(),
        "sequence analyzed"
    );

    SequenceAnalysis {
        length: sequence.len(),
        sequence,
        counts,
        percentages,
        gc_content,
        complement,
        patterns,
    }
}

fn count_bases(sequence: &Sequence) -> PerBase<usize> {
    let mut counts = PerBase::default();
    for base in sequence.bases() {
        match base {
            Nucleotide::A => counts.a += 1,
            Nucleotide::T => counts.t += 1,
            Nucleotide::C => counts.c += 1,
            Nucleotide::G => counts.g += 1,
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn empty_and_invalid_inputs_have_no_analysis() {
        assert!(analyze("").is_none());
        assert!(analyze("   ").is_none());
        assert!(analyze("xyz-123").is_none());
    }

    #[test]
    fn balanced_sequence_counts() {
        let a = analyze("ATCGATCG").unwrap();
        assert_eq!(a.length, 8);
        assert_eq!(
            a.counts,
            PerBase {
                a: 2,
                t: 2,
                c: 2,
                g: 2
            }
        );
        assert!(approx_eq(a.gc_content, 50.0, 1e-12));
        assert!(approx_eq(a.percentages.get(Nucleotide::T), 25.0, 1e-12));
    }

    #[test]
    fn input_is_cleaned_before_analysis() {
        let a = analyze("gg cc\nAT?").unwrap();
        assert_eq!(a.sequence.to_string(), "GGCCAT");
        assert_eq!(a.complement.to_string(), "CCGGTA");
        assert!(approx_eq(a.gc_content, 4.0 / 6.0 * 100.0, 1e-9));
    }

    #[test]
    fn percentages_sum_to_one_hundred() {
        for text in [
            "A",
            "GCGCGCTATAAAAGGCGCGCGCTATA",
            "ATGGTGCACCTGACTCCTGAGGAGAAGTCTGCCGTTACTGCCCTGTGGGGCAAGG",
        ] {
            let a = analyze(text).unwrap();
            let sum: f64 = Nucleotide::ALL
                .iter()
                .map(|n| a.percentages.get(*n))
                .sum();
            assert!(approx_eq(sum, 100.0, 1e-9), "sum was {sum} for {text}");
        }
    }

    #[test]
    fn single_base_has_no_patterns() {
        let a = analyze("g").unwrap();
        assert!(a.patterns.is_empty());
        assert!(approx_eq(a.gc_content, 100.0, 1e-12));
    }

    #[test]
    fn analysis_serializes_with_uppercase_base_keys() {
        let a = analyze("AATT").unwrap();
        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(json["counts"]["A"], 2);
        assert_eq!(json["sequence"], "AATT");
        assert_eq!(json["complement"], "TTAA");
    }
}
