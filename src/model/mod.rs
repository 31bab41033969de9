//! Core data structures shared by the simulation modules.
//!
//! - [`types`] – Builder elements and nucleotide bases.
//! - [`atom`] – A placed atom with element, 2D position and identity token.
//! - [`molecule`] – Atoms plus unordered, duplicate-free bonds.
//! - [`sequence`] – Filtered DNA sequences over {A, T, C, G}.

pub mod atom;
pub mod molecule;
pub mod sequence;
pub mod types;
