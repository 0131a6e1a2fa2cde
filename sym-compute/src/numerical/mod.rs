//! Numerical evaluation of expression trees.
//!
//! [`evaluate`] substitutes the variables bound in a [`Ctxt`] and folds every operation whose
//! operands are constants. It stops with an [`Error`](sym_error::Error) on operations that have
//! no real result, such as division by zero or the logarithm of a negative number.
//!
//! ```
//! use sym_compute::numerical::{evaluate, Ctxt};
//! use sym_parser::{parse, Expr};
//!
//! let expr = parse("x**2 + 1").unwrap();
//! let ctxt = Ctxt::new().with_var("x", 3);
//! assert_eq!(evaluate(&expr, &ctxt).unwrap(), Expr::constant(10));
//! ```

pub mod ctxt;
pub mod error;
pub mod eval;
pub mod func;

pub use ctxt::Ctxt;
pub use eval::evaluate;
