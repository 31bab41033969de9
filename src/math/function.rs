use std::fmt;

use serde::{Serialize, Serializer};

use super::ast::Expr;
use super::error::Error;
use super::parser::parse;

/// An expression in `x` as typed by the user, compiled once.
///
/// A text that fails to parse is kept along with its error so that the
/// plotter can still ask for values; every sample is then NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    source: String,
    compiled: Result<Expr, Error>,
}

impl Function {
    pub fn parse(source: impl Into<String>) -> Self {
        let source = source.into();
        let compiled = parse(&source);
        Self { source, compiled }
    }

    /// Like [`parse`](Function::parse) but refuses text that does not compile.
    pub fn compile(source: impl Into<String>) -> Result<Self, Error> {
        let function = Self::parse(source);
        if let Err(e) = &function.compiled {
            return Err(e.clone());
        }
        Ok(function)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn error(&self) -> Option<&Error> {
        self.compiled.as_ref().err()
    }

    pub fn is_valid(&self) -> bool {
        self.compiled.is_ok()
    }

    /// Value at `x`, or NaN when the text did not compile or the result is
    /// not finite.
    pub fn eval(&self, x: f64) -> f64 {
        match &self.compiled {
            Ok(expr) => {
                let y = expr.eval(x);
                if y.is_finite() { y } else { f64::NAN }
            }
            Err(_) => f64::NAN,
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl Serialize for Function {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square() {
        let f = Function::parse("x^2");
        assert!(f.is_valid());
        assert_eq!(f.eval(0.0), 0.0);
        assert_eq!(f.eval(2.0), 4.0);
        assert_eq!(f.eval(-3.0), 9.0);
    }

    #[test]
    fn failures_are_nan_per_sample() {
        let log = Function::parse("log(x)");
        assert!(log.eval(-1.0).is_nan());
        assert!(log.eval(0.0).is_nan());
        assert_eq!(log.eval(1.0), 0.0);

        let inv = Function::parse("1/x");
        assert!(inv.eval(0.0).is_nan());
        assert_eq!(inv.eval(2.0), 0.5);
    }

    #[test]
    fn invalid_text_is_kept_with_its_error() {
        let f = Function::parse("2x + 1");
        assert!(!f.is_valid());
        assert!(f.error().is_some());
        assert!(f.eval(1.0).is_nan());
        assert_eq!(f.to_string(), "2x + 1");
        assert!(Function::compile("2x + 1").is_err());
        assert!(Function::compile("2*x + 1").is_ok());
    }

    #[test]
    fn deeply_nested_text_evaluates_to_nan() {
        let nested = format!("{}x{}", "(".repeat(20_000), ")".repeat(20_000));
        let f = Function::parse(nested.as_str());
        assert!(matches!(f.error(), Some(Error::TooDeep { .. })));
        assert!(f.eval(1.0).is_nan());

        let signs = format!("{}x", "-".repeat(20_000));
        let err = Function::compile(signs).unwrap_err();
        assert!(err.position().is_some());
    }
}
