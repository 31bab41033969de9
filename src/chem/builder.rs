use tracing::debug;

use super::error::Error;
use super::formula::Formula;
use super::template::MoleculeTemplate;
use crate::model::atom::Atom;
use crate::model::molecule::{Bond, Molecule};
use crate::model::types::Element;

/// Outcome of [`MoleculeBuilder::place_atom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// A new atom was appended at this index.
    Added(usize),
    /// The point lies on the existing atom at this index; nothing was added.
    Hit(usize),
}

/// An in-memory molecule editing session.
///
/// The formula and weight are never stored; they are derived from the atom
/// list whenever they are asked for, so every mutation is reflected at once.
#[derive(Debug, Clone)]
pub struct MoleculeBuilder {
    molecule: Molecule,
    selected: Element,
    next_id: u64,
}

impl Default for MoleculeBuilder {
    fn default() -> Self {
        Self {
            molecule: Molecule::new(),
            selected: Element::C,
            next_id: 1,
        }
    }
}

impl MoleculeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn molecule(&self) -> &Molecule {
        &self.molecule
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.molecule.atoms
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.molecule.bonds
    }

    pub fn selected_element(&self) -> Element {
        self.selected
    }

    pub fn select_element(&mut self, element: Element) {
        self.selected = element;
    }

    /// Appends an atom and returns its index. Coordinates are not validated.
    pub fn add_atom(&mut self, element: Element, x: f64, y: f64) -> usize {
        let id = self.take_id();
        self.molecule.atoms.push(Atom::new(element, [x, y], id));
        let index = self.molecule.atoms.len() - 1;
        debug!(%element, x, y, index, "atom added");
        index
    }

    /// Adds an atom of the selected element unless `(x, y)` lands on an
    /// existing atom, in which case the first such atom is reported.
    pub fn place_atom(&mut self, x: f64, y: f64) -> Placement {
        match self
            .molecule
            .atoms
            .iter()
            .position(|atom| atom.contains([x, y]))
        {
            Some(index) => Placement::Hit(index),
            None => Placement::Added(self.add_atom(self.selected, x, y)),
        }
    }

    /// Bonds the two most recently added atoms.
    ///
    /// Returns `false` without changing anything when fewer than two atoms
    /// exist or when those two atoms are already bonded.
    pub fn add_bond(&mut self) -> bool {
        let n = self.molecule.atoms.len();
        if n < 2 {
            return false;
        }

        let (a, b) = (n - 2, n - 1);
        if self.molecule.has_bond(a, b) {
            debug!(a, b, "bond already present");
            return false;
        }

        self.molecule.bonds.push(Bond::new(a, b));
        debug!(a, b, "bond added");
        true
    }

    pub fn clear(&mut self) {
        self.molecule.atoms.clear();
        self.molecule.bonds.clear();
    }

    /// Replaces the current molecule with `template`.
    ///
    /// The builder is left untouched if the template has a bond that points
    /// outside its atom list, joins an atom to itself, or repeats a pair.
    pub fn load(&mut self, template: &MoleculeTemplate) -> Result<(), Error> {
        let n = template.atoms.len();
        let mut bonds: Vec<Bond> = Vec::with_capacity(template.bonds.len());
        for &[i, j] in &template.bonds {
            if i >= n || j >= n {
                return Err(Error::invalid_bond(
                    &template.name,
                    i,
                    j,
                    format!("template has only {n} atoms"),
                ));
            }
            if i == j {
                return Err(Error::invalid_bond(
                    &template.name,
                    i,
                    j,
                    "an atom cannot bond to itself",
                ));
            }
            let bond = Bond::new(i, j);
            if bonds.contains(&bond) {
                return Err(Error::invalid_bond(
                    &template.name,
                    i,
                    j,
                    "duplicate bond",
                ));
            }
            bonds.push(bond);
        }

        let atoms = template
            .atoms
            .iter()
            .map(|a| Atom::new(a.element, [a.x, a.y], self.take_id()))
            .collect();

        self.molecule = Molecule { atoms, bonds };
        debug!(template = %template.name, atoms = n, "template loaded");
        Ok(())
    }

    pub fn formula(&self) -> Formula {
        Formula::from_atoms(&self.molecule.atoms)
    }

    /// Sum of atomic weights in g/mol; zero for an empty molecule.
    pub fn molecular_weight(&self) -> f64 {
        self.formula().weight()
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
