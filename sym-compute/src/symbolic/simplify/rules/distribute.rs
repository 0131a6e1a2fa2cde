//! Distribution of multiplication over addition and subtraction.

use crate::symbolic::{simplify::step::Step, step_collector::StepCollector};
use sym_parser::tree::{BinOpKind, Expr};
use super::do_binary;

/// `a*(b+c) = a*b+a*c`
/// `a*(b-c) = a*b-a*c`
///
/// Only a sum or difference on the right-hand side is distributed over.
pub fn distributive_property(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Mul, |factor, rhs| match rhs {
        Expr::Binary(kind @ (BinOpKind::Add | BinOpKind::Sub), b, c) => Some(Expr::binary(
            *kind,
            Expr::mul(factor.clone(), (**b).clone()),
            Expr::mul(factor.clone(), (**c).clone()),
        )),
        _ => None,
    })?;

    step_collector.push(Step::DistributiveProperty);
    Some(opt)
}

/// Applies all distribution rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    distributive_property(expr, step_collector)
}
