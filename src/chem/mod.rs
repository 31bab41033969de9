//! Interactive molecule building.
//!
//! A [`MoleculeBuilder`] owns a list of placed atoms and the bonds between
//! them. Bonds are always drawn between the two most recently added atoms
//! and are never duplicated. The molecular [`Formula`] and weight are pure
//! derived views of the atom list.
//!
//! ```
//! use stemlab::chem::MoleculeBuilder;
//! use stemlab::Element;
//!
//! let mut builder = MoleculeBuilder::new();
//! builder.add_atom(Element::O, 400.0, 250.0);
//! builder.add_atom(Element::H, 370.0, 220.0);
//! assert!(builder.add_bond());
//! builder.add_atom(Element::H, 430.0, 220.0);
//!
//! assert_eq!(builder.formula().to_string(), "H2O");
//! assert!((builder.molecular_weight() - 18.015).abs() < 1e-9);
//! ```

mod builder;
mod error;
mod formula;
mod template;

pub use builder::{MoleculeBuilder, Placement};
pub use error::Error;
pub use formula::Formula;
pub use template::{MoleculeTemplate, TemplateAtom};
