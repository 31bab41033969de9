use std::fmt;
use std::str::FromStr;

/// Built-in single-argument functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    /// Natural logarithm, same as [`Func::Ln`].
    Log,
    Ln,
    Sqrt,
    Abs,
    Exp,
    Floor,
    Ceil,
    /// Rounds half up, so `round(-2.5)` is `-2`.
    Round,
}

impl Func {
    pub const ALL: [Func; 11] = [
        Func::Sin,
        Func::Cos,
        Func::Tan,
        Func::Log,
        Func::Ln,
        Func::Sqrt,
        Func::Abs,
        Func::Exp,
        Func::Floor,
        Func::Ceil,
        Func::Round,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
            Func::Log => "log",
            Func::Ln => "ln",
            Func::Sqrt => "sqrt",
            Func::Abs => "abs",
            Func::Exp => "exp",
            Func::Floor => "floor",
            Func::Ceil => "ceil",
            Func::Round => "round",
        }
    }

    pub fn apply(self, v: f64) -> f64 {
        match self {
            Func::Sin => v.sin(),
            Func::Cos => v.cos(),
            Func::Tan => v.tan(),
            Func::Log | Func::Ln => v.ln(),
            Func::Sqrt => v.sqrt(),
            Func::Abs => v.abs(),
            Func::Exp => v.exp(),
            Func::Floor => v.floor(),
            Func::Ceil => v.ceil(),
            Func::Round => (v + 0.5).floor(),
        }
    }
}

impl FromStr for Func {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Func::ALL
            .iter()
            .copied()
            .find(|f| f.name() == s)
            .ok_or(())
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinOp {
    fn symbol(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
            BinOp::Pow => '^',
        }
    }
}

/// Compiled expression tree in the single variable `x`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    X,
    Neg(Box<Expr>),
    Binary(BinOp, Box<Expr>, Box<Expr>),
    Call(Func, Box<Expr>),
}

impl Expr {
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Expr::Number(n) => *n,
            Expr::X => x,
            Expr::Neg(inner) => -inner.eval(x),
            Expr::Binary(op, lhs, rhs) => {
                let (a, b) = (lhs.eval(x), rhs.eval(x));
                match op {
                    BinOp::Add => a + b,
                    BinOp::Sub => a - b,
                    BinOp::Mul => a * b,
                    BinOp::Div => a / b,
                    BinOp::Pow => a.powf(b),
                }
            }
            Expr::Call(func, arg) => func.apply(arg.eval(x)),
        }
    }
}

/// Fully parenthesized form, used in diagnostics.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{n}"),
            Expr::X => f.write_str("x"),
            Expr::Neg(inner) => write!(f, "(-{inner})"),
            Expr::Binary(op, lhs, rhs) => write!(f, "({lhs} {} {rhs})", op.symbol()),
            Expr::Call(func, arg) => write!(f, "{func}({arg})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn function_names_round_trip() {
        for func in Func::ALL {
            assert_eq!(func.name().parse::<Func>(), Ok(func));
        }
        assert!("cosh".parse::<Func>().is_err());
    }

    #[test]
    fn log_is_natural() {
        assert_eq!(Func::Log.apply(std::f64::consts::E), 1.0);
        assert_eq!(Func::Log.apply(10.0), Func::Ln.apply(10.0));
    }

    #[test]
    fn round_goes_half_up() {
        assert_eq!(Func::Round.apply(2.5), 3.0);
        assert_eq!(Func::Round.apply(-2.5), -2.0);
        assert_eq!(Func::Round.apply(-2.6), -3.0);
    }

    #[test]
    fn display_shows_grouping() {
        let expr = Expr::Binary(
            BinOp::Add,
            Box::new(Expr::Number(1.0)),
            Box::new(Expr::Binary(
                BinOp::Mul,
                Box::new(Expr::Number(2.0)),
                Box::new(Expr::X),
            )),
        );
        assert_eq!(expr.to_string(), "(1 + (2 * x))");
        assert_eq!(expr.eval(3.0), 7.0);
    }
}
