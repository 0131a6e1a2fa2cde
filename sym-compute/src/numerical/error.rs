//! The kinds of errors that can occur while evaluating an expression tree.
//!
//! Expression trees do not remember where in the source they came from, so these errors are
//! created without spans.

use ariadne::Fmt;
use sym_attrs::ErrorKind;
use sym_error::{ErrorKind, EXPR};
use sym_parser::tree::ArithmeticError;

/// A divisor evaluated to zero, or zero was raised to a negative power.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    labels = ["this divisor is zero"],
    help = format!("the expression `{}` is undefined", expr.fg(EXPR)),
)]
pub struct DivisionByZero {
    /// The rendered expression that divided by zero.
    pub expr: String,
}

/// A function or operator was applied outside of its real domain, such as `log(-1)`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` has no real value", expr),
    labels = ["outside of the domain"],
    help = "only real-valued results are supported",
)]
pub struct DomainError {
    /// The rendered expression that has no real value.
    pub expr: String,
}

/// The expression tree is nested more deeply than the evaluator allows.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "maximum recursion depth exceeded",
    labels = ["while evaluating this expression"],
    help = format!("the evaluator can descend at most {} levels", max_depth),
)]
pub struct RecursionLimit {
    /// The maximum allowed depth.
    pub max_depth: usize,
}

/// Converts an [`ArithmeticError`] from combining two constants into an evaluation error.
pub(crate) fn from_arithmetic(err: ArithmeticError, expr: String) -> sym_error::Error {
    match err {
        ArithmeticError::DivisionByZero => sym_error::Error::new(vec![], DivisionByZero { expr }),
        ArithmeticError::Domain => sym_error::Error::new(vec![], DomainError { expr }),
    }
}
