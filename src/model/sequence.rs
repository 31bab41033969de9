use serde::{Serialize, Serializer};
use std::fmt;

use super::types::Nucleotide;

/// A DNA sequence over {A, T, C, G}.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sequence {
    bases: Vec<Nucleotide>,
}

impl Sequence {
    /// Uppercases `text` and keeps only A, T, C and G.
    ///
    /// Everything else (whitespace, digits, IUPAC ambiguity codes) is
    /// silently dropped.
    pub fn from_text(text: &str) -> Self {
        let bases = text
            .chars()
            .flat_map(char::to_uppercase)
            .filter_map(|c| Nucleotide::from_char(c).ok())
            .collect();
        Self { bases }
    }

    pub fn from_bases(bases: Vec<Nucleotide>) -> Self {
        Self { bases }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    #[inline]
    pub fn bases(&self) -> &[Nucleotide] {
        &self.bases
    }

    pub fn complement(&self) -> Sequence {
        Sequence {
            bases: self.bases.iter().map(Nucleotide::complement).collect(),
        }
    }

    pub fn count(&self, base: Nucleotide) -> usize {
        self.bases.iter().filter(|b| **b == base).count()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for base in &self.bases {
            write!(f, "{base}")?;
        }
        Ok(())
    }
}

impl Serialize for Sequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_text_filters_and_uppercases() {
        let s = Sequence::from_text("at cg-N 12 gx");
        assert_eq!(s.to_string(), "ATCGG");
        assert_eq!(s.len(), 5);
    }

    #[test]
    fn from_text_of_noise_is_empty() {
        assert!(Sequence::from_text("xyz 123 --").is_empty());
        assert!(Sequence::from_text("").is_empty());
    }

    #[test]
    fn complement_twice_is_identity() {
        let s = Sequence::from_text("ATGGTGCACCTGACTCCTGAGG");
        assert_eq!(s.complement().to_string(), "TACCACGTGGACTGAGGACTCC");
        assert_eq!(s.complement().complement(), s);
    }

    #[test]
    fn serializes_as_plain_string() {
        let s = Sequence::from_text("gattaca");
        assert_eq!(serde_json::to_string(&s).unwrap(), "\"GATTACA\"");
    }
}
