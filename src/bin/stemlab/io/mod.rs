mod infer;
mod spec;

pub use infer::{language as infer_language, output as infer_output_format};
pub use spec::{OutputFormat, OutputSpec};

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, IsTerminal, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};

pub fn stderr_is_tty() -> bool {
    io::stderr().is_terminal()
}

pub fn stdin_is_tty() -> bool {
    io::stdin().is_terminal()
}

/// A readable command input, either a file or stdin, with the name used in
/// error messages.
pub struct Input {
    name: String,
    reader: Box<dyn BufRead>,
}

impl Input {
    /// Opens `path`, or stdin when there is none.
    pub fn open(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => {
                let file = File::open(p)
                    .with_context(|| format!("Failed to open input file: {}", p.display()))?;
                Ok(Self {
                    name: p.display().to_string(),
                    reader: Box::new(BufReader::new(file)),
                })
            }
            None => Ok(Self {
                name: "stdin".to_string(),
                reader: Box::new(io::stdin().lock()),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reads everything that is left as UTF-8 text.
    pub fn read_text(mut self) -> Result<String> {
        let mut text = String::new();
        self.reader
            .read_to_string(&mut text)
            .with_context(|| format!("Failed to read {}", self.name))?;
        Ok(text)
    }
}

impl Read for Input {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reader.read(buf)
    }
}

impl BufRead for Input {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.reader.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.reader.consume(amt)
    }
}

/// A buffered destination for one report, a file or stdout.
///
/// Call [`Output::finish`] once everything is written; dropping an output
/// flushes too but loses any error.
pub struct Output {
    name: String,
    writer: Box<dyn Write>,
}

impl Output {
    pub fn create(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => {
                let file = File::create(p)
                    .with_context(|| format!("Failed to create output file: {}", p.display()))?;
                Ok(Self {
                    name: p.display().to_string(),
                    writer: Box::new(BufWriter::new(file)),
                })
            }
            None => Ok(Self {
                name: "stdout".to_string(),
                writer: Box::new(BufWriter::new(io::stdout().lock())),
            }),
        }
    }

    pub fn finish(mut self) -> Result<()> {
        self.writer
            .flush()
            .with_context(|| format!("Failed to flush {}", self.name))
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("stemlab-{}-{}", std::process::id(), name))
    }

    #[test]
    fn output_then_input_round_trip_through_a_file() {
        let path = scratch("notes.txt");

        let mut out = Output::create(Some(&path)).unwrap();
        writeln!(out, ">seq\nATCG").unwrap();
        out.finish().unwrap();

        let mut input = Input::open(Some(&path)).unwrap();
        let mut first = String::new();
        input.read_line(&mut first).unwrap();
        assert_eq!(first, ">seq\n");
        assert_eq!(input.read_text().unwrap(), "ATCG\n");

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_input_names_the_path() {
        let path = scratch("does-not-exist.fa");
        let err = Input::open(Some(&path)).err().unwrap();
        assert!(err.to_string().contains("does-not-exist.fa"));
    }

    #[test]
    fn stdin_is_labelled() {
        assert_eq!(Input::open(None).unwrap().name(), "stdin");
    }
}
