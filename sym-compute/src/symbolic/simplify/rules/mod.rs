//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the expression to simplify as an argument,
//! and returns `Some(expr)` with the rewritten expression if the rule applies at the root of the
//! expression, or `None` if the rule does not apply. Rules never look past the root and its
//! nearest descendants; the simplifier takes care of visiting every node.

pub mod canonical;
pub mod combine;
pub mod distribute;
pub mod fold;
pub mod function;
pub mod identity;
pub mod negation;
pub mod power;
pub mod regroup;

use crate::symbolic::step_collector::StepCollector;
use sym_parser::tree::{BinOpKind, Expr, FuncKind};
use super::step::Step;

/// If the expression is a binary operation of the given kind, calls the given transformation
/// function with the left and right-hand-side of the operation.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_binary(
    expr: &Expr,
    kind: BinOpKind,
    f: impl Fn(&Expr, &Expr) -> Option<Expr>,
) -> Option<Expr> {
    match expr {
        Expr::Binary(k, lhs, rhs) if *k == kind => f(lhs, rhs),
        _ => None,
    }
}

/// If the expression is a negation, calls the given transformation function with the operand.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_negation(expr: &Expr, f: impl Fn(&Expr) -> Option<Expr>) -> Option<Expr> {
    match expr {
        Expr::Negation(operand) => f(operand),
        _ => None,
    }
}

/// If the expression applies the given function, calls the given transformation function with
/// the operand.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_function(expr: &Expr, kind: &FuncKind, f: impl Fn(&Expr) -> Option<Expr>) -> Option<Expr> {
    match expr {
        Expr::Function(k, operand) if k == kind => f(operand),
        _ => None,
    }
}

/// Applies every rule except re-association.
pub fn local(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    fold::all(expr, step_collector)
        .or_else(|| identity::all(expr, step_collector))
        .or_else(|| canonical::all(expr, step_collector))
        .or_else(|| combine::all(expr, step_collector))
        .or_else(|| negation::all(expr, step_collector))
        .or_else(|| power::all(expr, step_collector))
        .or_else(|| distribute::all(expr, step_collector))
        .or_else(|| function::all(expr, step_collector))
}

/// Applies all rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    local(expr, step_collector)
        .or_else(|| regroup::all(expr, step_collector))
}
