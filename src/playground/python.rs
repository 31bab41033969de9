use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::trace;

use super::value::Value;

static PRINT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"print\((.*)\)").expect("print pattern"));
static FSTRING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"f["'](.*)["']"#).expect("f-string pattern"));
static FORMATTED_FIELD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\w+):(\.?\d*f?)\}").expect("format field pattern"));
static PLAIN_FIELD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\w+)\}").expect("field pattern"));
static DECIMALS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(\d+)f").expect("decimals pattern"));
static ASSIGN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+)\s*=\s*(.+)$").expect("assignment pattern"));

const MATH_OPS: [&str; 6] = [
    "math.sin",
    "math.cos",
    "math.tan",
    "math.sqrt",
    "math.pi",
    "math.e",
];

const DEFAULT_DECIMALS: usize = 2;

/// Line scanner for Python-looking source.
///
/// Only `print(...)` calls, top-level `name = value` lines and references to
/// a few `math` members are recognized. Everything else is skipped.
#[derive(Debug, Default)]
pub struct PythonScanner {
    variables: HashMap<String, Value>,
    output: Vec<String>,
}

impl PythonScanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    pub fn scan(mut self, source: &str) -> Vec<String> {
        for line in source.lines() {
            self.scan_line(line.trim());
        }
        self.output
    }

    fn scan_line(&mut self, line: &str) {
        if line.is_empty() || line.starts_with('#') {
            return;
        }

        if line.contains("print(") {
            if let Some(caps) = PRINT_RE.captures(line) {
                self.print(&caps[1]);
            }
        }

        if line.contains('=') && !line.contains("==") {
            if let Some(caps) = ASSIGN_RE.captures(line) {
                let rhs = strip_inline_comment(&caps[2]);
                let value = Value::classify(rhs);
                trace!(name = &caps[1], %value, "recorded assignment");
                self.variables.insert(caps[1].to_string(), value);
            }
        }

        if line.contains("math.") {
            for op in MATH_OPS.iter().filter(|op| line.contains(*op)) {
                self.output
                    .push(format!("Mathematical operation detected: {op}"));
            }
        }
    }

    fn print(&mut self, args: &str) {
        if args.contains("f\"") || args.contains("f'") {
            if let Some(caps) = FSTRING_RE.captures(args) {
                let text = self.interpolate(&caps[1]);
                self.output.push(text);
            }
            return;
        }

        let text = args.replace(['"', '\''], "");
        let line = match self.variables.get(&text) {
            Some(value) => value.to_string(),
            None => text,
        };
        self.output.push(line);
    }

    fn interpolate(&self, template: &str) -> String {
        let formatted = FORMATTED_FIELD_RE.replace_all(template, |caps: &Captures| {
            let Some(value) = self.variables.get(&caps[1]) else {
                return caps[0].to_string();
            };
            let spec = &caps[2];
            if !spec.contains('f') {
                return value.to_string();
            }
            let decimals = match DECIMALS_RE.captures(spec) {
                Some(d) => d[1].parse().ok(),
                None => Some(DEFAULT_DECIMALS),
            };
            match decimals.and_then(|d| value.fixed(d)) {
                Some(text) => text,
                None => {
                    trace!(field = &caps[0], "precision out of range, field kept");
                    caps[0].to_string()
                }
            }
        });

        PLAIN_FIELD_RE
            .replace_all(&formatted, |caps: &Captures| match self.variables.get(&caps[1]) {
                Some(value) => value.to_string(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}

/// Drops a trailing `# comment` that is not inside a quoted string.
fn strip_inline_comment(rhs: &str) -> &str {
    let mut quote = None;
    for (i, c) in rhs.char_indices() {
        match (quote, c) {
            (None, '"' | '\'') => quote = Some(c),
            (Some(q), c) if c == q => quote = None,
            (None, '#') => return rhs[..i].trim_end(),
            _ => {}
        }
    }
    rhs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(source: &str) -> Vec<String> {
        PythonScanner::new().scan(source)
    }

    #[test]
    fn prints_literals_and_variables() {
        let out = scan("name = \"Ada\"\nprint(\"hello\")\nprint(name)\nprint(missing)");
        assert_eq!(out, vec!["hello", "Ada", "missing"]);
    }

    #[test]
    fn f_string_formats_numbers() {
        let src = "\
velocity = 50  # m/s
time = 7.2084
print(f\"Launch velocity: {velocity} m/s\")
print(f\"Flight time: {time:.2f} seconds\")
print(f\"Default places: {time:f}\")
print(f\"Unknown: {nothing} and {other:.1f}\")
";
        assert_eq!(
            scan(src),
            vec![
                "Launch velocity: 50 m/s",
                "Flight time: 7.21 seconds",
                "Default places: 7.21",
                "Unknown: {nothing} and {other:.1f}",
            ]
        );
    }

    #[test]
    fn format_without_f_prints_raw_value() {
        let out = scan("x = 3.14159\nprint(f'{x:>8}')\nprint(f'{x:}')");
        assert_eq!(out, vec!["{x:>8}", "3.14159"]);
    }

    #[test]
    fn oversized_precision_keeps_the_field() {
        let src = "x = 1.5\nprint(f\"{x:.70000f}\")\nprint(f\"{x:.100f}|{x:.101f}\")\nprint(f\"{x:.99999999999999999999999f}\")";
        let out = scan(src);
        assert_eq!(out[0], "{x:.70000f}");
        assert_eq!(out[1], format!("1.5{}|{{x:.101f}}", "0".repeat(99)));
        assert_eq!(out[2], "{x:.99999999999999999999999f}");
    }

    #[test]
    fn text_values_ignore_decimal_format() {
        let out = scan("label = 'apex'\nprint(f\"{label:.2f}\")");
        assert_eq!(out, vec!["apex"]);
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        assert!(scan("# print(\"no\")\n\n   \n").is_empty());
    }

    #[test]
    fn comparisons_are_not_assignments() {
        let mut scanner = PythonScanner::new();
        for line in ["x = 1", "x == 2", "if x >= 0:", "y += 4"] {
            scanner.scan_line(line);
        }
        assert_eq!(scanner.variable("x"), Some(&Value::Number(1.0)));
        assert_eq!(scanner.variable("y"), None);
    }

    #[test]
    fn printing_an_assignment_does_not_record_it() {
        let mut scanner = PythonScanner::new();
        scanner.scan_line("x = 5");
        scanner.scan_line("print(f\"x = {x}\")");
        assert_eq!(scanner.variable("x"), Some(&Value::Number(5.0)));
        assert_eq!(scanner.output, vec!["x = 5"]);
    }

    #[test]
    fn lists_print_comma_joined() {
        let out = scan("values = [1, 2, 3]\nprint(values)");
        assert_eq!(out, vec!["1,2,3"]);
    }

    #[test]
    fn detects_math_members() {
        let out = scan("y = math.sin(x) + math.pi");
        assert_eq!(
            out,
            vec![
                "Mathematical operation detected: math.sin",
                "Mathematical operation detected: math.pi",
            ]
        );
    }

    #[test]
    fn inline_comments_respect_quotes() {
        assert_eq!(strip_inline_comment("45     # degrees"), "45");
        assert_eq!(strip_inline_comment("\"#1\" # rank"), "\"#1\"");
        assert_eq!(strip_inline_comment("'a#b'"), "'a#b'");
    }
}
