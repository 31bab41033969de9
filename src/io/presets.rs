use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use super::error::Error;
use crate::chem::MoleculeTemplate;

const DEFAULT_PRESETS_TOML: &str = include_str!("../../resources/presets.toml");

static DEFAULT_PRESETS: OnceLock<Presets> = OnceLock::new();

/// Named inputs offered by each tool: sample DNA, ready-made molecules and
/// common functions.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Presets {
    #[serde(default)]
    pub sequences: Vec<SequencePreset>,
    #[serde(default)]
    pub molecules: Vec<MoleculeTemplate>,
    #[serde(default)]
    pub functions: Vec<FunctionPreset>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SequencePreset {
    pub name: String,
    pub sequence: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FunctionPreset {
    pub name: String,
    pub expression: String,
}

fn same_name(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

impl Presets {
    pub fn sequence(&self, name: &str) -> Option<&SequencePreset> {
        self.sequences.iter().find(|p| same_name(&p.name, name))
    }

    pub fn molecule(&self, name: &str) -> Option<&MoleculeTemplate> {
        self.molecules.iter().find(|m| m.is_named(name))
    }

    pub fn function(&self, name: &str) -> Option<&FunctionPreset> {
        self.functions.iter().find(|p| same_name(&p.name, name))
    }

    /// Adds `other`'s entries, replacing ones with the same name.
    pub fn merge(&mut self, other: Presets) {
        for preset in other.sequences {
            match self.sequences.iter_mut().find(|p| same_name(&p.name, &preset.name)) {
                Some(existing) => *existing = preset,
                None => self.sequences.push(preset),
            }
        }
        for template in other.molecules {
            match self.molecules.iter_mut().find(|m| m.is_named(&template.name)) {
                Some(existing) => *existing = template,
                None => self.molecules.push(template),
            }
        }
        for preset in other.functions {
            match self.functions.iter_mut().find(|p| same_name(&p.name, &preset.name)) {
                Some(existing) => *existing = preset,
                None => self.functions.push(preset),
            }
        }
    }
}

/// Built-in catalog, optionally extended by a user-supplied TOML document.
pub fn load_presets(custom_toml: Option<&str>) -> Result<Presets, Error> {
    let mut presets = default_presets().clone();
    if let Some(toml) = custom_toml {
        let custom: Presets = toml::from_str(toml)?;
        presets.merge(custom);
    }
    Ok(presets)
}

pub fn default_presets() -> &'static Presets {
    DEFAULT_PRESETS.get_or_init(|| {
        toml::from_str(DEFAULT_PRESETS_TOML)
            .expect("Failed to parse embedded preset catalog. This is a library bug.")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chem::MoleculeBuilder;
    use crate::model::types::Element;

    #[test]
    fn default_catalog_has_every_section() {
        let presets = default_presets();
        assert_eq!(presets.sequences.len(), 3);
        assert_eq!(presets.molecules.len(), 3);
        assert_eq!(presets.functions.len(), 8);
        assert!(presets.sequence("tata box sequence").is_some());
        assert_eq!(presets.function("Cubic").unwrap().expression, "x^3");
    }

    #[test]
    fn preset_molecules_load_into_a_builder() {
        let presets = default_presets();
        for (name, formula) in [("Water", "H2O"), ("Methane", "CH4"), ("Ammonia", "H3N")] {
            let mut builder = MoleculeBuilder::new();
            builder.load(presets.molecule(name).unwrap()).unwrap();
            assert_eq!(builder.formula().to_string(), formula);
            assert_eq!(builder.bonds().len(), builder.atoms().len() - 1);
        }
    }

    #[test]
    fn methane_weight() {
        let mut builder = MoleculeBuilder::new();
        builder
            .load(default_presets().molecule("methane").unwrap())
            .unwrap();
        assert!((builder.molecular_weight() - 16.043).abs() < 1e-9);
    }

    #[test]
    fn custom_catalog_extends_and_overrides() {
        let custom = r#"
            [[functions]]
            name = "quadratic"
            expression = "x^2 - 1"

            [[molecules]]
            name = "Hydrogen Fluoride"
            bonds = [[0, 1]]
            atoms = [
                { element = "H", x = 380.0, y = 250.0 },
                { element = "F", x = 420.0, y = 250.0 },
            ]
        "#;
        let presets = load_presets(Some(custom)).unwrap();
        assert_eq!(presets.functions.len(), 8);
        assert_eq!(presets.function("Quadratic").unwrap().expression, "x^2 - 1");
        let hf = presets.molecule("hydrogen fluoride").unwrap();
        assert_eq!(hf.atoms[1].element, Element::F);
        assert_eq!(presets.sequences.len(), 3);
    }

    #[test]
    fn errors_on_invalid_custom_toml() {
        assert!(matches!(
            load_presets(Some("not valid [[[toml")),
            Err(Error::Catalog(_))
        ));
        let bad_element = r#"
            [[molecules]]
            name = "Bad"
            atoms = [{ element = "Xe", x = 0.0, y = 0.0 }]
        "#;
        assert!(load_presets(Some(bad_element)).is_err());
    }
}
