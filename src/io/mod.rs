use std::fmt;

pub mod csv;
pub mod error;
pub mod fasta;
pub mod script;

mod presets;

pub use error::Error;
pub use presets::{FunctionPreset, Presets, SequencePreset, default_presets, load_presets};

/// Text formats read or written by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Fasta,
    MoleculeScript,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Fasta => write!(f, "FASTA"),
            Format::MoleculeScript => write!(f, "molecule script"),
        }
    }
}

/// Writes `value` as pretty-printed JSON followed by a newline.
pub fn write_json<W: std::io::Write, T: serde::Serialize + ?Sized>(
    mut writer: W,
    value: &T,
) -> Result<(), Error> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_output_ends_with_newline() {
        let mut buf = Vec::new();
        write_json(&mut buf, &crate::bio::analyze("GC").unwrap()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with("}\n"));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["gc_content"], 100.0);
        assert_eq!(value["complement"], "CG");
        assert_eq!(value["counts"]["G"], 1);
    }

    #[test]
    fn parse_errors_name_the_format() {
        let err = Error::parse(Format::MoleculeScript, 4, "unknown command 'x'");
        assert_eq!(
            err.to_string(),
            "failed to parse molecule script: unknown command 'x' (at line 4)"
        );
    }
}
