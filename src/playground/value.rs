use std::fmt;

/// Most decimal places a `{name:.Nf}` field may ask for, as with
/// `Number.prototype.toFixed`.
pub const MAX_DECIMALS: usize = 100;

/// A value recorded by a recognized assignment.
///
/// Values print the way a browser console would show them: whole numbers
/// without a fraction and lists as comma-joined elements.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    /// A right-hand side that contained quotes, with every quote removed.
    Text(String),
    List(serde_json::Value),
    /// Anything else, kept verbatim.
    Raw(String),
}

impl Value {
    /// Classifies the right-hand side of `name = rhs`.
    pub fn classify(rhs: &str) -> Self {
        if let Some(n) = parse_number(rhs) {
            return Value::Number(n);
        }
        if rhs.contains(['"', '\'']) {
            return Value::Text(rhs.replace(['"', '\''], ""));
        }
        if rhs.contains('[') && rhs.contains(']') {
            return match serde_json::from_str(&rhs.replace('\'', "\"")) {
                Ok(list) => Value::List(list),
                Err(_) => Value::Raw(rhs.to_string()),
            };
        }
        Value::Raw(rhs.to_string())
    }

    /// `{name:.Nf}` rendering: numbers get `decimals` places, other values
    /// print as usual. `None` when `decimals` exceeds [`MAX_DECIMALS`].
    pub fn fixed(&self, decimals: usize) -> Option<String> {
        if decimals > MAX_DECIMALS {
            return None;
        }
        Some(match self {
            Value::Number(n) => format!("{n:.decimals$}"),
            other => other.to_string(),
        })
    }
}

fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn write_json(f: &mut fmt::Formatter<'_>, value: &serde_json::Value) -> fmt::Result {
    use serde_json::Value as Json;
    match value {
        Json::Null => Ok(()),
        Json::Bool(b) => write!(f, "{b}"),
        Json::Number(n) => match n.as_f64() {
            Some(v) => write!(f, "{v}"),
            None => write!(f, "{n}"),
        },
        Json::String(s) => f.write_str(s),
        Json::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write_json(f, item)?;
            }
            Ok(())
        }
        Json::Object(_) => f.write_str("[object Object]"),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(s) | Value::Raw(s) => f.write_str(s),
            Value::List(list) => write_json(f, list),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_numbers() {
        assert_eq!(Value::classify("50"), Value::Number(50.0));
        assert_eq!(Value::classify("9.81"), Value::Number(9.81));
        assert_eq!(Value::classify("-2.5e3"), Value::Number(-2500.0));
        assert_eq!(Value::classify("nan"), Value::Raw("nan".into()));
    }

    #[test]
    fn classifies_quoted_text() {
        assert_eq!(Value::classify("\"ATCG\""), Value::Text("ATCG".into()));
        assert_eq!(Value::classify("'it''s'"), Value::Text("its".into()));
    }

    #[test]
    fn classifies_lists() {
        let list = Value::classify("[1, 2, 3]");
        assert!(matches!(list, Value::List(_)));
        assert_eq!(list.to_string(), "1,2,3");

        let broken = Value::classify("[x for x in range(3)]");
        assert_eq!(broken, Value::Raw("[x for x in range(3)]".into()));
    }

    #[test]
    fn quotes_win_over_brackets() {
        assert_eq!(Value::classify("['a', 'b']"), Value::Text("[a, b]".into()));
    }

    #[test]
    fn numbers_print_like_a_console() {
        assert_eq!(Value::Number(50.0).to_string(), "50");
        assert_eq!(Value::Number(0.5).to_string(), "0.5");
        assert_eq!(Value::Number(7.2084).fixed(2).as_deref(), Some("7.21"));
        assert_eq!(Value::Raw("v0 * 2".into()).fixed(2).as_deref(), Some("v0 * 2"));
    }

    #[test]
    fn precision_is_capped() {
        let n = Value::Number(1.5);
        assert_eq!(n.fixed(MAX_DECIMALS).map(|s| s.len()), Some(2 + MAX_DECIMALS));
        assert_eq!(n.fixed(MAX_DECIMALS + 1), None);
        assert_eq!(n.fixed(70_000), None);
    }
}
