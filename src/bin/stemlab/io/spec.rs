use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;

/// Encodings the commands can write results in. Not every command supports
/// every format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
    /// Comma-separated values
    Csv,
    /// Molecule script (molecule command only)
    Script,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Script => write!(f, "script"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OutputSpec {
    /// Path to write to, or `None` for stdout.
    pub path: Option<PathBuf>,
    pub format: OutputFormat,
}

impl OutputSpec {
    pub fn target_name(&self) -> String {
        self.path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "stdout".to_string())
    }
}
