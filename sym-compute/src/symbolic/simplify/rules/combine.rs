//! Combining like terms.

use crate::symbolic::{simplify::step::Step, step_collector::StepCollector};
use sym_parser::tree::{BinOpKind, Expr, Number};

/// Utility function to split a term into its constant coefficient and the rest of the term. If
/// the term has no leading constant factor, the coefficient is 1. Returns [`None`] for constants,
/// which are not like terms of anything.
///
/// - `3*a` -> `(3, a)`
/// - `-a` -> `(-1, a)`
/// - `-(2*a)` -> `(-2, a)`
/// - `a*b` -> `(1, a*b)`
/// - `a` -> `(1, a)`
fn split_coeff(expr: &Expr) -> Option<(Number, &Expr)> {
    match expr {
        Expr::Constant(_) => None,
        Expr::Binary(BinOpKind::Mul, coeff, term) if !term.is_constant() => match coeff.as_number() {
            Some(coeff) => Some((coeff, term)),
            None => Some((Number::Int(1), expr)),
        },
        Expr::Negation(operand) => split_coeff(operand).map(|(coeff, term)| (-coeff, term)),
        _ => Some((Number::Int(1), expr)),
    }
}

/// Combines like terms.
///
/// `a+a = 2*a`
/// `3*a+a = 4*a`
/// `2*a-5*a = -3*a`
/// `a-a = 0*a`
pub fn combine_like_terms(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let Expr::Binary(kind @ (BinOpKind::Add | BinOpKind::Sub), lhs, rhs) = expr else {
        return None;
    };

    let (lhs_coeff, lhs_term) = split_coeff(lhs)?;
    let (rhs_coeff, rhs_term) = split_coeff(rhs)?;

    // the rest of the terms must be strictly equal
    if lhs_term != rhs_term {
        return None;
    }

    let coeff = lhs_coeff.apply(*kind, rhs_coeff).ok()?;
    step_collector.push(Step::CombineLikeTerms);
    Some(Expr::mul(Expr::Constant(coeff), lhs_term.clone()))
}

/// Applies all like-term rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    combine_like_terms(expr, step_collector)
}
