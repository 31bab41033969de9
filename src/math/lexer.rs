use std::fmt;

use super::error::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: usize,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(n) => write!(f, "number {n}"),
            TokenKind::Ident(name) => write!(f, "name '{name}'"),
            TokenKind::Plus => f.write_str("'+'"),
            TokenKind::Minus => f.write_str("'-'"),
            TokenKind::Star => f.write_str("'*'"),
            TokenKind::Slash => f.write_str("'/'"),
            TokenKind::Caret => f.write_str("'^'"),
            TokenKind::LParen => f.write_str("'('"),
            TokenKind::RParen => f.write_str("')'"),
        }
    }
}

/// Splits `source` into tokens. `**` is accepted as a synonym for `^`.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let chars: Vec<char> = source.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let pos = i;

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let kind = match c {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' if chars.get(i + 1) == Some(&'*') => {
                i += 1;
                TokenKind::Caret
            }
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '^' => TokenKind::Caret,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            c if c.is_ascii_digit() || c == '.' => {
                let end = scan_number(&chars, i);
                let text: String = chars[i..end].iter().collect();
                let value = text
                    .parse::<f64>()
                    .map_err(|_| Error::InvalidNumber { text, pos })?;
                tokens.push(Token {
                    kind: TokenKind::Number(value),
                    pos,
                });
                i = end;
                continue;
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let mut end = i;
                while end < chars.len() && (chars[end].is_ascii_alphanumeric() || chars[end] == '_')
                {
                    end += 1;
                }
                tokens.push(Token {
                    kind: TokenKind::Ident(chars[i..end].iter().collect()),
                    pos,
                });
                i = end;
                continue;
            }
            other => return Err(Error::UnexpectedChar { ch: other, pos }),
        };

        tokens.push(Token { kind, pos });
        i += 1;
    }

    Ok(tokens)
}

/// End of a decimal literal with an optional exponent. The exponent is only
/// taken when digits follow, so `2e` leaves `e` for the constant.
fn scan_number(chars: &[char], start: usize) -> usize {
    let mut end = start;
    while end < chars.len() && (chars[end].is_ascii_digit() || chars[end] == '.') {
        end += 1;
    }

    if end < chars.len() && matches!(chars[end], 'e' | 'E') {
        let mut exp = end + 1;
        if exp < chars.len() && matches!(chars[exp], '+' | '-') {
            exp += 1;
        }
        if exp < chars.len() && chars[exp].is_ascii_digit() {
            while exp < chars.len() && chars[exp].is_ascii_digit() {
                exp += 1;
            }
            end = exp;
        }
    }

    end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn operators_and_parens() {
        use TokenKind::*;
        assert_eq!(
            kinds("(x+1)*2 - 3/x^2"),
            vec![
                LParen,
                Ident("x".into()),
                Plus,
                Number(1.0),
                RParen,
                Star,
                Number(2.0),
                Minus,
                Number(3.0),
                Slash,
                Ident("x".into()),
                Caret,
                Number(2.0)
            ]
        );
    }

    #[test]
    fn double_star_is_power() {
        use TokenKind::*;
        assert_eq!(kinds("x**3"), vec![Ident("x".into()), Caret, Number(3.0)]);
    }

    #[test]
    fn numbers_with_fraction_and_exponent() {
        use TokenKind::*;
        assert_eq!(kinds("0.5"), vec![Number(0.5)]);
        assert_eq!(kinds(".25"), vec![Number(0.25)]);
        assert_eq!(kinds("1e3"), vec![Number(1000.0)]);
        assert_eq!(kinds("2.5E-1"), vec![Number(0.25)]);
        assert_eq!(kinds("2e"), vec![Number(2.0), Ident("e".into())]);
    }

    #[test]
    fn positions_are_character_offsets() {
        let tokens = tokenize("  sin(x)").unwrap();
        assert_eq!(tokens[0].pos, 2);
        assert_eq!(tokens[1].pos, 5);
        assert_eq!(tokens[2].pos, 6);
    }

    #[test]
    fn rejects_foreign_characters() {
        assert_eq!(
            tokenize("x; alert(1)"),
            Err(Error::UnexpectedChar { ch: ';', pos: 1 })
        );
        assert!(matches!(tokenize("1.2.3"), Err(Error::InvalidNumber { .. })));
    }
}
