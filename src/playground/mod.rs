//! A code playground that only pretends to run code.
//!
//! [`run`] scans source text line by line for a handful of literal shapes
//! (`print(...)` and simple assignments in Python, `console.log(...)` in
//! JavaScript) and echoes an approximation of what they would print. There
//! is no parser, no control flow and no evaluation; a loop body prints once
//! and a function call prints nothing.
//!
//! ```
//! use stemlab::playground::{Language, run};
//!
//! let out = run("speed = 12.5\nprint(f\"v = {speed:.1f} m/s\")", Language::Python);
//! assert_eq!(out.text, "v = 12.5 m/s");
//!
//! let quiet = run("let x = 1;", Language::JavaScript);
//! assert!(quiet.lines.is_empty());
//! assert!(quiet.text.starts_with("JavaScript code executed successfully!"));
//! ```

mod examples;
mod javascript;
mod python;
mod value;

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;
use tracing::debug;

pub use examples::{Example, examples, find_example};
pub use python::PythonScanner;
pub use value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Python,
    JavaScript,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language: '{0}' (expected python or javascript)")]
pub struct ParseLanguageError(String);

impl Language {
    pub const ALL: [Language; 2] = [Language::Python, Language::JavaScript];

    pub fn name(self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
        }
    }

    /// Shown when a run produced no lines.
    pub fn default_output(self) -> &'static str {
        match self {
            Language::Python => "Code executed successfully!\n(Add print statements to see output)",
            Language::JavaScript => {
                "JavaScript code executed successfully!\n(Add console.log statements to see output)"
            }
        }
    }

    /// Guesses the language from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "py" => Some(Language::Python),
            "js" | "mjs" | "cjs" => Some(Language::JavaScript),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "python" | "py" => Ok(Language::Python),
            "javascript" | "js" => Ok(Language::JavaScript),
            _ => Err(ParseLanguageError(s.to_string())),
        }
    }
}

/// What a run printed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunOutput {
    pub language: Language,
    /// Recognized output lines, in source order.
    pub lines: Vec<String>,
    /// The lines joined by newlines, or the language's default message when
    /// nothing was recognized.
    pub text: String,
    /// Wall time spent scanning.
    #[serde(rename = "duration_ms", serialize_with = "as_millis")]
    pub duration: Duration,
}

fn as_millis<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64() * 1000.0)
}

pub fn run(source: &str, language: Language) -> RunOutput {
    let started = Instant::now();

    let lines = match language {
        Language::Python => PythonScanner::new().scan(source),
        Language::JavaScript => javascript::scan(source),
    };
    let text = if lines.is_empty() {
        language.default_output().to_string()
    } else {
        lines.join("\n")
    };

    let duration = started.elapsed();
    debug!(%language, lines = lines.len(), ?duration, "playground run finished");

    RunOutput {
        language,
        lines,
        text,
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_gets_default_message() {
        let py = run("", Language::Python);
        assert!(py.lines.is_empty());
        assert_eq!(
            py.text,
            "Code executed successfully!\n(Add print statements to see output)"
        );

        let js = run("   \n", Language::JavaScript);
        assert_eq!(js.text, Language::JavaScript.default_output());
    }

    #[test]
    fn lines_are_joined_in_order() {
        let out = run("console.log('a')\nconsole.log(\"b\")", Language::JavaScript);
        assert_eq!(out.lines, vec!["a", "b"]);
        assert_eq!(out.text, "a\nb");
    }

    #[test]
    fn huge_precision_is_echoed_not_formatted() {
        let out = run("x = 1.5\nprint(f\"{x:.70000f}\")", Language::Python);
        assert_eq!(out.lines, vec!["{x:.70000f}"]);
    }

    #[test]
    fn languages_do_not_cross() {
        let py = run("console.log('a')", Language::Python);
        assert!(py.lines.is_empty());
        let js = run("print('a')", Language::JavaScript);
        assert!(js.lines.is_empty());
    }

    #[test]
    fn language_names_and_extensions() {
        assert_eq!("JS".parse::<Language>(), Ok(Language::JavaScript));
        assert_eq!("python".parse::<Language>(), Ok(Language::Python));
        assert!("ruby".parse::<Language>().is_err());
        assert_eq!(Language::from_extension("PY"), Some(Language::Python));
        assert_eq!(Language::from_extension("rs"), None);
        assert_eq!(Language::JavaScript.to_string(), "javascript");
    }
}
