//! Constant folding.

use crate::symbolic::{simplify::step::Step, step_collector::StepCollector};
use sym_parser::tree::Expr;
use super::do_negation;

/// `2+3 = 5`
/// `2**10 = 1024`
///
/// Operations without a real result, such as `1/0`, are left as they are.
pub fn fold_binary(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let Expr::Binary(kind, lhs, rhs) = expr else {
        return None;
    };
    let value = lhs.as_number()?.apply(*kind, rhs.as_number()?).ok()?;

    step_collector.push(Step::ConstantFold);
    Some(Expr::Constant(value))
}

/// `-(3) = -3`
pub fn negate_constant(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_negation(expr, |operand| operand.as_number().map(|n| Expr::Constant(-n)))?;

    step_collector.push(Step::NegateConstant);
    Some(opt)
}

/// Applies all constant folding rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    fold_binary(expr, step_collector)
        .or_else(|| negate_constant(expr, step_collector))
}
