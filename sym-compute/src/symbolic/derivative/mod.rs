//! Symbolic differentiation.
//!
//! [`derivative`] differentiates an expression with respect to a single variable. Every
//! intermediate derivative is simplified before it is combined with its siblings, which keeps the
//! trees produced by the product and chain rules small.

use sym_parser::tree::{BinOpKind, Expr, FuncKind, MAX_RECURSION_DEPTH};
use std::f64::consts::E;
use tracing::{debug, warn};
use super::simplify::simplify;

mod function;

/// `(f + g)' = f' + g'`
/// `(f - g)' = f' - g'`
fn sum_rule(kind: BinOpKind, f: &Expr, g: &Expr, var: &str, depth: usize) -> Expr {
    Expr::binary(kind, inner_derivative(f, var, depth + 1), inner_derivative(g, var, depth + 1))
}

/// `(f * g)' = f * g' + f' * g`
fn product_rule(f: &Expr, g: &Expr, var: &str, depth: usize) -> Expr {
    Expr::add(
        Expr::mul(f.clone(), inner_derivative(g, var, depth + 1)),
        Expr::mul(inner_derivative(f, var, depth + 1), g.clone()),
    )
}

/// `(f / g)' = (f' * g - f * g') / (g * g)`
fn quotient_rule(f: &Expr, g: &Expr, var: &str, depth: usize) -> Expr {
    Expr::div(
        Expr::sub(
            Expr::mul(inner_derivative(f, var, depth + 1), g.clone()),
            Expr::mul(f.clone(), inner_derivative(g, var, depth + 1)),
        ),
        Expr::mul(g.clone(), g.clone()),
    )
}

/// Differentiates `f ** g`, choosing the rule by which side depends on the variable:
///
/// - neither: `0`
/// - only the base: `(f ** g)' = g * f ** (g - 1) * f'`
/// - only the exponent: `(f ** g)' = f ** g * log(f) * g'`
/// - both: `(f ** g)' = e ** (g * log(f)) * (g' * log(f) + f' * g / f)`
fn power_rule(f: &Expr, g: &Expr, var: &str, depth: usize) -> Expr {
    let log_f = || Expr::function(FuncKind::Log, f.clone());

    match (f.depends_on(var), g.depends_on(var)) {
        (false, false) => Expr::constant(0),
        (true, false) => Expr::mul(
            Expr::mul(
                g.clone(),
                Expr::pow(f.clone(), Expr::sub(g.clone(), Expr::constant(1))),
            ),
            inner_derivative(f, var, depth + 1),
        ),
        (false, true) => Expr::mul(
            Expr::mul(Expr::pow(f.clone(), g.clone()), log_f()),
            inner_derivative(g, var, depth + 1),
        ),
        (true, true) => Expr::mul(
            Expr::pow(Expr::constant(E), Expr::mul(g.clone(), log_f())),
            Expr::add(
                Expr::mul(inner_derivative(g, var, depth + 1), log_f()),
                Expr::div(Expr::mul(inner_derivative(f, var, depth + 1), g.clone()), f.clone()),
            ),
        ),
    }
}

/// Computes the simplified derivative of an already simplified expression, located `depth` levels
/// below the expression [`derivative`] was called with.
///
/// Past [`MAX_RECURSION_DEPTH`], the subtree is returned as it is instead of being differentiated.
fn inner_derivative(f: &Expr, var: &str, depth: usize) -> Expr {
    if depth > MAX_RECURSION_DEPTH {
        warn!(max_depth = MAX_RECURSION_DEPTH, "expression too deep, leaving subtree undifferentiated");
        return f.clone();
    }

    let d = match f {
        Expr::Constant(_) => Expr::constant(0),
        Expr::Variable(name) => Expr::constant(if name == var { 1 } else { 0 }),
        Expr::Negation(operand) => Expr::negate(inner_derivative(operand, var, depth + 1)),
        Expr::Binary(kind @ (BinOpKind::Add | BinOpKind::Sub), f, g) => sum_rule(*kind, f, g, var, depth),
        Expr::Binary(BinOpKind::Mul, f, g) => product_rule(f, g, var, depth),
        Expr::Binary(BinOpKind::Div, f, g) => quotient_rule(f, g, var, depth),
        Expr::Binary(BinOpKind::Pow, f, g) => power_rule(f, g, var, depth),
        Expr::Function(kind, arg) => function::function_derivative(kind, arg, var, depth),
    };
    simplify(&d)
}

/// Computes the derivative of the given expression with respect to the variable `var`.
///
/// The input is simplified first, and so is the result. Derivatives of user-named functions are
/// written with a prime: the derivative of `f(x**2)` is `f'(x**2) * 2 * x`.
///
/// The result renders and evaluates like any other tree, but a primed name such
/// as `f'` is not accepted by [`parse`](sym_parser::parse). A derivative that contains one does
/// not survive a render and parse round trip.
///
/// Subtrees nested deeper than [`MAX_RECURSION_DEPTH`] are not differentiated: they are copied
/// into the result unchanged, and a warning is logged.
pub fn derivative(f: &Expr, var: &str) -> Expr {
    debug!(%f, var, "differentiating");
    inner_derivative(&simplify(f), var, 0)
}
