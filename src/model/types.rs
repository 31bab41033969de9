use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid or unsupported element symbol: '{0}'")]
pub struct ParseElementError(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid nucleotide symbol: '{0}'")]
pub struct ParseNucleotideError(char);

/// Elements available to the molecule builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    H,
    C,
    N,
    O,
    F,
    Cl,
    Br,
    S,
}

impl Element {
    pub const ALL: [Element; 8] = [
        Element::H,
        Element::C,
        Element::N,
        Element::O,
        Element::F,
        Element::Cl,
        Element::Br,
        Element::S,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Element::H => "Hydrogen",
            Element::C => "Carbon",
            Element::N => "Nitrogen",
            Element::O => "Oxygen",
            Element::F => "Fluorine",
            Element::Cl => "Chlorine",
            Element::Br => "Bromine",
            Element::S => "Sulfur",
        }
    }

    /// Render color as a `#rrggbb` hex string.
    pub fn color(&self) -> &'static str {
        match self {
            Element::H => "#ffffff",
            Element::C => "#404040",
            Element::N => "#3050f8",
            Element::O => "#ff0d0d",
            Element::F => "#90e050",
            Element::Cl => "#1ff01f",
            Element::Br => "#a62929",
            Element::S => "#ffff30",
        }
    }

    /// Render radius in canvas units; also the hit-test radius for placement.
    pub fn radius(&self) -> f64 {
        match self {
            Element::H => 15.0,
            Element::C => 20.0,
            Element::N => 18.0,
            Element::O => 18.0,
            Element::F => 16.0,
            Element::Cl => 22.0,
            Element::Br => 24.0,
            Element::S => 22.0,
        }
    }

    /// Standard atomic weight in g/mol.
    pub fn atomic_weight(&self) -> f64 {
        match self {
            Element::H => 1.008,
            Element::C => 12.011,
            Element::N => 14.007,
            Element::O => 15.999,
            Element::F => 18.998,
            Element::Cl => 35.453,
            Element::Br => 79.904,
            Element::S => 32.065,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Element::H => "H",
            Element::C => "C",
            Element::N => "N",
            Element::O => "O",
            Element::F => "F",
            Element::Cl => "Cl",
            Element::Br => "Br",
            Element::S => "S",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Element {
    type Err = ParseElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "H" => Ok(Element::H),
            "C" => Ok(Element::C),
            "N" => Ok(Element::N),
            "O" => Ok(Element::O),
            "F" => Ok(Element::F),
            "Cl" => Ok(Element::Cl),
            "Br" => Ok(Element::Br),
            "S" => Ok(Element::S),
            _ => Err(ParseElementError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Nucleotide {
    A,
    T,
    C,
    G,
}

impl Nucleotide {
    pub const ALL: [Nucleotide; 4] = [Nucleotide::A, Nucleotide::T, Nucleotide::C, Nucleotide::G];

    /// Watson-Crick base pair.
    pub fn complement(&self) -> Nucleotide {
        match self {
            Nucleotide::A => Nucleotide::T,
            Nucleotide::T => Nucleotide::A,
            Nucleotide::G => Nucleotide::C,
            Nucleotide::C => Nucleotide::G,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Nucleotide::A => 'A',
            Nucleotide::T => 'T',
            Nucleotide::C => 'C',
            Nucleotide::G => 'G',
        }
    }

    pub fn from_char(c: char) -> Result<Self, ParseNucleotideError> {
        match c {
            'A' => Ok(Nucleotide::A),
            'T' => Ok(Nucleotide::T),
            'C' => Ok(Nucleotide::C),
            'G' => Ok(Nucleotide::G),
            other => Err(ParseNucleotideError(other)),
        }
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
