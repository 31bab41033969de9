use serde::{Deserialize, Serialize};

use crate::model::types::Element;

/// A named, ready-made molecule that can replace the builder's contents.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MoleculeTemplate {
    pub name: String,
    /// Conventional formula label shown next to the name (may use
    /// subscript digits).
    #[serde(default)]
    pub label: String,
    pub atoms: Vec<TemplateAtom>,
    #[serde(default)]
    pub bonds: Vec<[usize; 2]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct TemplateAtom {
    pub element: Element,
    pub x: f64,
    pub y: f64,
}

impl MoleculeTemplate {
    /// Case-insensitive name comparison.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }
}
