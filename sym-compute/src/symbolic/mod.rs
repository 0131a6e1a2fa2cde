//! Algebraic manipulation of expressions.
//!
//! # Simplification
//!
//! A primary use case for algebraic manipulation is to reduce expressions to some canonical form.
//! This is done with the [`simplify()`] function, which accepts an expression and returns a
//! "simplified" version of it. Simplification never fails: rewrites that would need a numeric
//! result that does not exist, such as folding `1/0`, are simply not applied.
//!
//! Simplification is done by applying a set of simplification rules to the expression until none
//! of them apply. Each rule is simply a function that accepts an expression and returns
//! [`Option<Expr>`]; if the rule is applicable to the expression, the rule is applied and the
//! result is returned.
//!
//! The current set of rules is defined in [`simplify::rules`], and covers constant folding,
//! identity elements, combining like terms and factors, moving negations, distributing
//! multiplication over addition, basic power rules, and regrouping chains of operations.
//!
//! ```
//! use sym_compute::symbolic::simplify;
//! use sym_parser::parse;
//!
//! let expr = parse("x + x + x").unwrap();
//! assert_eq!(simplify(&expr).to_string(), "3 * x");
//! ```
//!
//! # Differentiation
//!
//! [`derivative()`] computes the derivative of an expression with respect to a variable.
//!
//! ```
//! use sym_compute::symbolic::derivative;
//! use sym_parser::parse;
//!
//! let expr = parse("x**3 + sin(x)").unwrap();
//! assert_eq!(derivative(&expr, "x").to_string(), "3 * x**2 + cos(x)");
//! ```

pub mod derivative;
pub mod simplify;
pub mod step_collector;

#[cfg(test)]
pub(crate) mod random_tree;

pub use derivative::derivative;
pub use simplify::{simplify, simplify_with_steps};
pub use step_collector::StepCollector;

#[cfg(doc)]
use sym_parser::tree::Expr;
