use rand::Rng;

use crate::model::sequence::Sequence;
use crate::model::types::Nucleotide;

pub const DEFAULT_RANDOM_LENGTH: usize = 50;

/// Draws `length` bases uniformly from {A, T, C, G}.
pub fn random_sequence<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Sequence {
    let bases = (0..length)
        .map(|_| Nucleotide::ALL[rng.gen_range(0..Nucleotide::ALL.len())])
        .collect();
    Sequence::from_bases(bases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn produces_requested_length() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(random_sequence(&mut rng, DEFAULT_RANDOM_LENGTH).len(), 50);
        assert!(random_sequence(&mut rng, 0).is_empty());
    }

    #[test]
    fn same_seed_same_sequence() {
        let a = random_sequence(&mut StdRng::seed_from_u64(42), 64);
        let b = random_sequence(&mut StdRng::seed_from_u64(42), 64);
        assert_eq!(a, b);
    }

    #[test]
    fn output_survives_text_filtering() {
        let s = random_sequence(&mut StdRng::seed_from_u64(1), 200);
        assert_eq!(Sequence::from_text(&s.to_string()), s);
    }
}
