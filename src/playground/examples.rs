use serde::Serialize;

use super::Language;

/// A bundled snippet for the playground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Example {
    /// Short identifier accepted by `stemlab run --example`.
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub code: &'static str,
}

const PYTHON: &[Example] = &[
    Example {
        key: "projectile",
        title: "Projectile Motion Simulator",
        description: "Report flight time, range and apex of a launch",
        code: include_str!("../../resources/playground/projectile.py"),
    },
    Example {
        key: "dna",
        title: "DNA Sequence Analyzer",
        description: "Print composition figures for a short sequence",
        code: include_str!("../../resources/playground/dna.py"),
    },
    Example {
        key: "functions",
        title: "Mathematical Function Plotter",
        description: "Describe a sampled trigonometric curve",
        code: include_str!("../../resources/playground/functions.py"),
    },
];

const JAVASCRIPT: &[Example] = &[
    Example {
        key: "calculator",
        title: "Interactive Calculator",
        description: "Log the results of a few arithmetic helpers",
        code: include_str!("../../resources/playground/calculator.js"),
    },
    Example {
        key: "statistics",
        title: "Data Visualization",
        description: "Log summary statistics for a dataset",
        code: include_str!("../../resources/playground/statistics.js"),
    },
];

pub fn examples(language: Language) -> &'static [Example] {
    match language {
        Language::Python => PYTHON,
        Language::JavaScript => JAVASCRIPT,
    }
}

pub fn find_example(language: Language, key: &str) -> Option<&'static Example> {
    examples(language)
        .iter()
        .find(|e| e.key.eq_ignore_ascii_case(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playground::run;

    #[test]
    fn every_example_produces_output() {
        for language in [Language::Python, Language::JavaScript] {
            for example in examples(language) {
                let output = run(example.code, language);
                assert!(
                    !output.lines.is_empty(),
                    "example '{}' printed nothing",
                    example.key
                );
            }
        }
    }

    #[test]
    fn projectile_example_formats_numbers() {
        let example = find_example(Language::Python, "PROJECTILE").unwrap();
        let output = run(example.code, Language::Python);
        assert!(output.lines.contains(&"Flight time: 7.21 seconds".to_string()));
        assert!(output.lines.contains(&"Launch velocity: 50 m/s".to_string()));
        assert!(!output.lines.iter().any(|l| l.starts_with("Mathematical")));
    }

    #[test]
    fn lookup_is_per_language() {
        assert!(find_example(Language::JavaScript, "dna").is_none());
        assert!(find_example(Language::JavaScript, "calculator").is_some());
    }
}
