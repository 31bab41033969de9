use super::Format;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to parse {format}: {details} (at line {line})")]
    Parse {
        format: Format,
        line: usize,
        details: String,
    },

    #[error("invalid preset catalog: {0}")]
    Catalog(#[from] toml::de::Error),

    #[error(transparent)]
    Molecule(#[from] crate::chem::Error),

    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn parse(format: Format, line: usize, details: impl Into<String>) -> Self {
        Self::Parse {
            format,
            line,
            details: details.into(),
        }
    }
}
