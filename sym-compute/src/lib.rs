//! Numerical evaluation, simplification, and differentiation of expressions parsed by
//! [`sym_parser`].
//!
//! The crate is split into two modules:
//!
//! - [`numerical`] evaluates expressions against a context of variable bindings.
//! - [`symbolic`] rewrites expressions without evaluating them: simplification and symbolic
//!   differentiation.
//!
//! ```
//! use sym_compute::{numerical::{evaluate, Ctxt}, symbolic::{derivative, simplify}};
//! use sym_parser::{parse, Expr};
//!
//! let expr = parse("x**2 + x + x").unwrap();
//! assert_eq!(simplify(&expr).to_string(), "x**2 + 2 * x");
//!
//! let slope = derivative(&expr, "x");
//! let ctxt = Ctxt::new().with_var("x", 3);
//! assert_eq!(evaluate(&slope, &ctxt).unwrap(), Expr::constant(8));
//! ```

pub mod numerical;
pub mod symbolic;
