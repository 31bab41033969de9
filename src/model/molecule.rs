use serde::Serialize;

use super::atom::Atom;

/// Unordered pair of atom indices, stored with `i <= j`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Bond {
    pub i: usize,
    pub j: usize,
}

impl Bond {
    pub fn new(idx1: usize, idx2: usize) -> Self {
        if idx1 <= idx2 {
            Self { i: idx1, j: idx2 }
        } else {
            Self { i: idx2, j: idx1 }
        }
    }

    #[inline]
    pub fn connects(&self, a: usize, b: usize) -> bool {
        *self == Bond::new(a, b)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Molecule {
    pub atoms: Vec<Atom>,
    pub bonds: Vec<Bond>,
}

impl Molecule {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn has_bond(&self, a: usize, b: usize) -> bool {
        self.bonds.iter().any(|bond| bond.connects(a, b))
    }
}
