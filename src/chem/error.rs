//! Error types for molecule building.

use thiserror::Error;

/// Errors raised while loading a molecule template into a builder.
///
/// Interactive builder operations never fail; an impossible bond request is a
/// no-op. Templates, however, come from preset catalogs that may be edited by
/// hand and are checked before they replace the current molecule.
#[derive(Debug, Error)]
pub enum Error {
    /// A template bond references a missing atom or bonds an atom to itself.
    #[error("invalid bond between atoms {i} and {j} in template '{template}': {detail}")]
    InvalidBond {
        /// Template name.
        template: String,
        /// First atom index.
        i: usize,
        /// Second atom index.
        j: usize,
        /// Description of the problem.
        detail: String,
    },

    /// No preset molecule with the requested name exists.
    #[error("unknown preset molecule '{0}'")]
    UnknownPreset(String),
}

impl Error {
    /// Creates an [`InvalidBond`](Error::InvalidBond) error.
    pub fn invalid_bond(
        template: impl Into<String>,
        i: usize,
        j: usize,
        details: impl Into<String>,
    ) -> Self {
        Self::InvalidBond {
            template: template.into(),
            i,
            j,
            detail: details.into(),
        }
    }
}
