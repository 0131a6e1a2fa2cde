//! Canonical placement of constants: constants go to the right of sums and to the left of
//! products.

use crate::symbolic::{simplify::step::Step, step_collector::StepCollector};
use sym_parser::tree::{BinOpKind, Expr};
use super::do_binary;

/// `3+a = a+3`
pub fn constant_to_right(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Add, |lhs, rhs| {
        (lhs.is_constant() && !rhs.is_constant()).then(|| Expr::add(rhs.clone(), lhs.clone()))
    })?;

    step_collector.push(Step::ConstantToRight);
    Some(opt)
}

/// `a*3 = 3*a`
pub fn constant_to_left(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Mul, |lhs, rhs| {
        (rhs.is_constant() && !lhs.is_constant()).then(|| Expr::mul(rhs.clone(), lhs.clone()))
    })?;

    step_collector.push(Step::ConstantToLeft);
    Some(opt)
}

/// `2*(3*a) = 6*a`
pub fn gather_constants(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Mul, |lhs, rhs| {
        let outer = lhs.as_number()?;
        let (inner, rest) = match rhs {
            Expr::Binary(BinOpKind::Mul, inner, rest) => (inner.as_number()?, rest),
            _ => return None,
        };
        let product = outer.apply(BinOpKind::Mul, inner).ok()?;
        Some(Expr::mul(Expr::Constant(product), (**rest).clone()))
    })?;

    step_collector.push(Step::GatherConstants);
    Some(opt)
}

/// Applies all canonical ordering rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    constant_to_right(expr, step_collector)
        .or_else(|| constant_to_left(expr, step_collector))
        .or_else(|| gather_constants(expr, step_collector))
}
