use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use stemlab::io::{Presets, default_presets, load_presets};

use crate::io::Input;

/// The built-in catalog, extended by the file passed with `--presets`.
pub fn load_catalog(path: Option<&Path>) -> Result<Presets> {
    let Some(path) = path else {
        return Ok(default_presets().clone());
    };

    let text = Input::open(Some(path))?.read_text()?;
    let presets = load_presets(Some(&text))
        .with_context(|| format!("Failed to load preset catalog {}", path.display()))?;
    info!(
        path = %path.display(),
        sequences = presets.sequences.len(),
        molecules = presets.molecules.len(),
        functions = presets.functions.len(),
        "loaded custom presets"
    );
    Ok(presets)
}
