//! Recursive-descent parser for plot expressions.
//!
//! Grammar, lowest precedence first:
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('+' | '-') unary | power
//! power   := primary ('^' unary)?
//! primary := NUMBER | 'x' | 'pi' | 'e' | FUNC '(' expr ')' | '(' expr ')'
//! ```
//!
//! `power` recurses through `unary`, which makes `^` right-associative,
//! lets exponents carry a sign (`2^-1`), and keeps `-x^2` equal to `-(x^2)`.
//!
//! Every level of nesting (a sign, a parenthesis, a function call, an
//! exponent or one more operand in a chain) counts towards [`MAX_DEPTH`], so
//! neither parsing nor evaluation can recurse without bound.

use std::f64::consts::{E, PI};

use tracing::trace;

use super::ast::{BinOp, Expr, Func};
use super::error::Error;
use super::lexer::{Token, TokenKind, tokenize};

/// Deepest expression tree the parser will build.
pub const MAX_DEPTH: usize = 256;

pub fn parse(source: &str) -> Result<Expr, Error> {
    let tokens = tokenize(source)?;
    if tokens.is_empty() {
        return Err(Error::Empty);
    }

    let mut parser = Parser {
        tokens,
        cursor: 0,
        depth: 0,
    };
    let expr = parser.expr()?;

    if let Some(token) = parser.peek() {
        return Err(Error::unexpected_token(token.kind.to_string(), token.pos));
    }

    trace!(source, parsed = %expr, "expression compiled");
    Ok(expr)
}

struct Parser {
    tokens: Vec<Token>,
    cursor: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.cursor).cloned();
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.peek().is_some_and(|t| &t.kind == kind) {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Goes one level deeper, blaming the token just consumed when the tree
    /// would grow past [`MAX_DEPTH`].
    fn descend(&mut self) -> Result<(), Error> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            let pos = self
                .cursor
                .checked_sub(1)
                .and_then(|i| self.tokens.get(i))
                .map_or(0, |t| t.pos);
            return Err(Error::TooDeep { pos });
        }
        Ok(())
    }

    fn expect_close(&mut self) -> Result<(), Error> {
        match self.next() {
            Some(Token {
                kind: TokenKind::RParen,
                ..
            }) => Ok(()),
            Some(token) => Err(Error::unexpected_token(token.kind.to_string(), token.pos)),
            None => Err(Error::UnexpectedEnd { expected: "')'" }),
        }
    }

    fn expr(&mut self) -> Result<Expr, Error> {
        let start = self.depth;
        let mut lhs = self.term()?;
        loop {
            let op = if self.eat(&TokenKind::Plus) {
                BinOp::Add
            } else if self.eat(&TokenKind::Minus) {
                BinOp::Sub
            } else {
                self.depth = start;
                return Ok(lhs);
            };
            self.descend()?;
            let rhs = self.term()?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
    }

    fn term(&mut self) -> Result<Expr, Error> {
        let start = self.depth;
        let mut lhs = self.unary()?;
        loop {
            let op = if self.eat(&TokenKind::Star) {
                BinOp::Mul
            } else if self.eat(&TokenKind::Slash) {
                BinOp::Div
            } else {
                self.depth = start;
                return Ok(lhs);
            };
            self.descend()?;
            let rhs = self.unary()?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
    }

    fn unary(&mut self) -> Result<Expr, Error> {
        if self.eat(&TokenKind::Minus) {
            let operand = self.nested(Self::unary)?;
            return Ok(Expr::Neg(Box::new(operand)));
        }
        if self.eat(&TokenKind::Plus) {
            return self.nested(Self::unary);
        }
        self.power()
    }

    fn nested(
        &mut self,
        rule: impl FnOnce(&mut Self) -> Result<Expr, Error>,
    ) -> Result<Expr, Error> {
        self.descend()?;
        let expr = rule(self)?;
        self.depth -= 1;
        Ok(expr)
    }

    fn power(&mut self) -> Result<Expr, Error> {
        let base = self.primary()?;
        if self.eat(&TokenKind::Caret) {
            let exponent = self.nested(Self::unary)?;
            return Ok(Expr::Binary(
                BinOp::Pow,
                Box::new(base),
                Box::new(exponent),
            ));
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<Expr, Error> {
        let Some(token) = self.next() else {
            return Err(Error::UnexpectedEnd {
                expected: "a number, 'x' or '('",
            });
        };

        match token.kind {
            TokenKind::Number(n) => Ok(Expr::Number(n)),
            TokenKind::LParen => {
                let inner = self.nested(Self::expr)?;
                self.expect_close()?;
                Ok(inner)
            }
            TokenKind::Ident(name) => self.identifier(name, token.pos),
            other => Err(Error::unexpected_token(other.to_string(), token.pos)),
        }
    }

    fn identifier(&mut self, name: String, pos: usize) -> Result<Expr, Error> {
        match name.as_str() {
            "x" => return Ok(Expr::X),
            "pi" => return Ok(Expr::Number(PI)),
            "e" => return Ok(Expr::Number(E)),
            _ => {}
        }

        let Ok(func) = name.parse::<Func>() else {
            return Err(Error::UnknownIdentifier { name, pos });
        };

        if !self.eat(&TokenKind::LParen) {
            return Err(Error::MissingArgument { name, pos });
        }
        let arg = self.nested(Self::expr)?;
        self.expect_close()?;
        Ok(Expr::Call(func, Box::new(arg)))
    }
}
