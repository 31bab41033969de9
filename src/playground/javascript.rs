use std::sync::LazyLock;

use regex::Regex;

static LOG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"console\.log\((.*)\)").expect("console.log pattern"));
static TEMPLATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]*)`").expect("template literal pattern"));

/// Echoes the argument text of every line starting with `console.log(`.
///
/// Template literals lose their backticks and every quote character is
/// removed. `${...}` placeholders are printed as written.
pub fn scan(source: &str) -> Vec<String> {
    source
        .lines()
        .filter(|line| line.trim_start().starts_with("console.log("))
        .filter_map(|line| LOG_RE.captures(line))
        .map(|caps| {
            let args = &caps[1];
            let unwrapped = if args.contains('`') {
                TEMPLATE_RE.replace_all(args, "$1").into_owned()
            } else {
                args.to_string()
            };
            unwrapped.replace(['"', '\'', '`'], "")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_quotes() {
        let out = scan("console.log(\"Hello, world\");\n  console.log('indented');");
        assert_eq!(out, vec!["Hello, world", "indented"]);
    }

    #[test]
    fn unwraps_template_literals_without_substitution() {
        let out = scan("const a = 1;\nconsole.log(`a is ${a}`);");
        assert_eq!(out, vec!["a is ${a}"]);
    }

    #[test]
    fn ignores_other_statements() {
        let out = scan("let x = 2;\nif (x) { console.log(\"nested\"); }\n// console.log(\"no\")");
        assert!(out.is_empty());
    }

    #[test]
    fn greedy_match_keeps_inner_parentheses() {
        let out = scan("console.log(\"sum\", add(1, 2));");
        assert_eq!(out, vec!["sum, add(1, 2)"]);
    }
}
