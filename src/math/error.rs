//! Error types for expression parsing and plot windows.

use thiserror::Error;

/// Reasons an expression cannot be compiled.
///
/// Positions are zero-based character offsets into the source text.
/// Evaluation itself never fails: domain errors and division by zero produce
/// NaN or infinity, which the plotter treats as a missing sample.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The expression contains no tokens.
    #[error("expression is empty")]
    Empty,

    /// A character outside the expression vocabulary.
    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar {
        /// The offending character.
        ch: char,
        /// Character offset.
        pos: usize,
    },

    /// A numeric literal that does not parse as a float.
    #[error("invalid number '{text}' at position {pos}")]
    InvalidNumber {
        /// Literal text.
        text: String,
        /// Character offset.
        pos: usize,
    },

    /// A name that is neither `x`, a constant nor a known function.
    #[error("unknown name '{name}' at position {pos}")]
    UnknownIdentifier {
        /// The name as written.
        name: String,
        /// Character offset.
        pos: usize,
    },

    /// A function name used without a parenthesized argument.
    #[error("function '{name}' at position {pos} must be followed by '('")]
    MissingArgument {
        /// Function name.
        name: String,
        /// Character offset.
        pos: usize,
    },

    /// A token that does not fit the grammar where it appears.
    #[error("unexpected {found} at position {pos}")]
    UnexpectedToken {
        /// Description of the token.
        found: String,
        /// Character offset.
        pos: usize,
    },

    /// Parentheses, signs, calls or operator chains nested past the parser's
    /// depth limit.
    #[error("expression nested too deeply at position {pos}")]
    TooDeep {
        /// Character offset of the token that went one level too far.
        pos: usize,
    },

    /// The input ended while more was expected.
    #[error("unexpected end of expression: expected {expected}")]
    UnexpectedEnd {
        /// What the parser was looking for.
        expected: &'static str,
    },

    /// A viewport whose bounds are not finite or not increasing.
    #[error("invalid {axis} range: minimum must be finite and below maximum")]
    InvalidViewport {
        /// `'x'` or `'y'`.
        axis: char,
    },
}

impl Error {
    pub fn unexpected_token(found: impl Into<String>, pos: usize) -> Self {
        Self::UnexpectedToken {
            found: found.into(),
            pos,
        }
    }

    /// Character offset of the problem, if it has one.
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::UnexpectedChar { pos, .. }
            | Error::InvalidNumber { pos, .. }
            | Error::UnknownIdentifier { pos, .. }
            | Error::MissingArgument { pos, .. }
            | Error::UnexpectedToken { pos, .. }
            | Error::TooDeep { pos } => Some(*pos),
            Error::Empty | Error::UnexpectedEnd { .. } | Error::InvalidViewport { .. } => None,
        }
    }
}
