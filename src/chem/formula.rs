use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::model::atom::Atom;
use crate::model::types::Element;

/// Aggregated element counts in display order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Formula {
    counts: Vec<(Element, usize)>,
    weight: f64,
}

impl Formula {
    pub fn from_atoms(atoms: &[Atom]) -> Self {
        let mut tally: BTreeMap<Element, usize> = BTreeMap::new();
        let mut weight = 0.0;
        for atom in atoms {
            *tally.entry(atom.element).or_insert(0) += 1;
            weight += atom.element.atomic_weight();
        }

        let mut counts: Vec<_> = tally.into_iter().collect();
        counts.sort_by(|(a, _), (b, _)| display_order(*a, *b));

        Self { counts, weight }
    }

    pub fn counts(&self) -> &[(Element, usize)] {
        &self.counts
    }

    pub fn count(&self, element: Element) -> usize {
        self.counts
            .iter()
            .find(|(el, _)| *el == element)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    /// Molecular weight in g/mol.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Carbon, then hydrogen, then the remaining symbols alphabetically.
fn display_order(a: Element, b: Element) -> Ordering {
    let rank = |el: Element| match el {
        Element::C => 0,
        Element::H => 1,
        _ => 2,
    };
    rank(a)
        .cmp(&rank(b))
        .then_with(|| a.symbol().cmp(b.symbol()))
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (element, count) in &self.counts {
            write!(f, "{element}")?;
            if *count > 1 {
                write!(f, "{count}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atoms(elements: &[Element]) -> Vec<Atom> {
        elements
            .iter()
            .enumerate()
            .map(|(i, el)| Atom::new(*el, [i as f64 * 40.0, 0.0], i as u64))
            .collect()
    }

    #[test]
    fn methane() {
        use Element::*;
        let f = Formula::from_atoms(&atoms(&[C, H, H, H, H]));
        assert_eq!(f.to_string(), "CH4");
        assert!((f.weight() - 16.043).abs() < 1e-9);
        assert_eq!(f.count(H), 4);
    }

    #[test]
    fn hydrogen_precedes_other_elements_without_carbon() {
        use Element::*;
        assert_eq!(Formula::from_atoms(&atoms(&[O, H, H])).to_string(), "H2O");
        assert_eq!(Formula::from_atoms(&atoms(&[N, H, H, H])).to_string(), "H3N");
    }

    #[test]
    fn remaining_symbols_are_alphabetical() {
        use Element::*;
        let f = Formula::from_atoms(&atoms(&[S, Cl, C, O, Br, H, F, N]));
        assert_eq!(f.to_string(), "CHBrClFNOS");
    }

    #[test]
    fn empty_formula_is_blank_with_zero_weight() {
        let f = Formula::from_atoms(&[]);
        assert!(f.is_empty());
        assert_eq!(f.to_string(), "");
        assert_eq!(f.weight(), 0.0);
    }
}
