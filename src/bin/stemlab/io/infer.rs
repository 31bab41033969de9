use std::path::Path;

use stemlab::playground::Language;

use super::OutputFormat;

pub fn output(path: &Path) -> Option<OutputFormat> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "json" => Some(OutputFormat::Json),
        "csv" => Some(OutputFormat::Csv),
        "txt" | "text" | "out" => Some(OutputFormat::Text),
        "mols" | "molscript" => Some(OutputFormat::Script),
        _ => None,
    }
}

pub fn language(path: &Path) -> Option<Language> {
    Language::from_extension(path.extension()?.to_str()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_formats_by_extension() {
        assert_eq!(output(Path::new("out/traj.CSV")), Some(OutputFormat::Csv));
        assert_eq!(output(Path::new("a.json")), Some(OutputFormat::Json));
        assert_eq!(output(Path::new("water.mols")), Some(OutputFormat::Script));
        assert_eq!(output(Path::new("noext")), None);
    }

    #[test]
    fn languages_by_extension() {
        assert_eq!(language(Path::new("main.py")), Some(Language::Python));
        assert_eq!(language(Path::new("app.js")), Some(Language::JavaScript));
        assert_eq!(language(Path::new("lib.rs")), None);
    }
}
