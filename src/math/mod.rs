//! Single-variable function plotting.
//!
//! Expressions in `x` are compiled by a small recursive-descent parser into
//! an [`Expr`] tree; nothing is ever evaluated as code. The supported
//! vocabulary is numbers, `x`, `+ - * / ^` (with `**` as an alias for `^`),
//! parentheses, the constants `pi` and `e`, and the one-argument functions
//! listed in [`Func`].
//!
//! ```
//! use stemlab::math::{Function, Viewport, auto_scale, sample};
//!
//! let f = Function::parse("x^2");
//! assert_eq!(f.eval(2.0), 4.0);
//!
//! let domain = Viewport { x_min: -2.0, x_max: 2.0, ..Viewport::default() };
//! let fitted = auto_scale(&f, &domain).unwrap();
//! assert!(fitted.y_min <= 0.0 && fitted.y_max >= 4.0);
//! assert_eq!(sample(&f, &fitted, 4).len(), 5);
//! ```

mod ast;
mod error;
mod function;
mod lexer;
mod parser;
mod plot;

pub use ast::{BinOp, Expr, Func};
pub use error::Error;
pub use function::Function;
pub use parser::parse;
pub use plot::{
    AUTO_SCALE_PADDING, AUTO_SCALE_STEPS, CLIP_MARGIN, DEFAULT_RESOLUTION, Sample, Viewport,
    auto_scale, grid_step, sample, segments, ticks,
};
