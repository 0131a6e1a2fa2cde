//! Simplification rules for products and quotients of powers with the same base, and for powers
//! of powers and products.

use crate::symbolic::{simplify::step::Step, step_collector::StepCollector};
use sym_parser::tree::{BinOpKind, Expr};
use super::do_binary;

/// Splits a factor into its base and exponent. A factor that is not a power is its own base,
/// with an exponent of `None` (meaning `1`).
fn split_power(expr: &Expr) -> (&Expr, Option<&Expr>) {
    match expr {
        Expr::Binary(BinOpKind::Pow, base, exp) => (base, Some(exp)),
        _ => (expr, None),
    }
}

/// Combines the exponents of two factors with the same base, using `kind` (`+` for products,
/// `-` for quotients). Returns [`None`] if the bases differ, or if neither factor is a power and
/// the bases are constants.
fn combine_exponents(lhs: &Expr, rhs: &Expr, kind: BinOpKind) -> Option<Expr> {
    let (lhs_base, lhs_exp) = split_power(lhs);
    let (rhs_base, rhs_exp) = split_power(rhs);
    if lhs_base != rhs_base {
        return None;
    }

    let exp = match (lhs_exp, rhs_exp) {
        (Some(a), Some(b)) => Expr::binary(kind, a.clone(), b.clone()),
        (Some(a), None) => Expr::binary(kind, a.clone(), Expr::constant(1)),
        (None, Some(b)) => Expr::binary(kind, Expr::constant(1), b.clone()),
        (None, None) if lhs_base.is_constant() => return None,
        (None, None) => match kind {
            BinOpKind::Add => Expr::constant(2),
            _ => return None,
        },
    };
    Some(Expr::pow(lhs_base.clone(), exp))
}

/// `a*a = a**2`
/// `a**2*a**3 = a**(2+3)`
/// `a**2*a = a**(2+1)`
/// `a*a**2 = a**(1+2)`
pub fn combine_like_factors(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Mul, |lhs, rhs| {
        combine_exponents(lhs, rhs, BinOpKind::Add)
    })?;

    step_collector.push(Step::CombineLikeFactors);
    Some(opt)
}

/// `a**5/a**2 = a**(5-2)`
/// `a**5/a = a**(5-1)`
/// `a/a**5 = a**(1-5)`
pub fn divide_like_factors(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Div, |lhs, rhs| {
        combine_exponents(lhs, rhs, BinOpKind::Sub)
    })?;

    step_collector.push(Step::DivideLikeFactors);
    Some(opt)
}

/// `(a**b)**c = a**(b*c)`
pub fn power_power(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Pow, |lhs, outer_exp| {
        do_binary(lhs, BinOpKind::Pow, |base, inner_exp| {
            Some(Expr::pow(base.clone(), Expr::mul(inner_exp.clone(), outer_exp.clone())))
        })
    })?;

    step_collector.push(Step::PowerPower);
    Some(opt)
}

/// `(a*b)**c = a**c*b**c`
pub fn distribute_power(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Pow, |lhs, exp| {
        do_binary(lhs, BinOpKind::Mul, |a, b| {
            Some(Expr::mul(
                Expr::pow(a.clone(), exp.clone()),
                Expr::pow(b.clone(), exp.clone()),
            ))
        })
    })?;

    step_collector.push(Step::DistributePower);
    Some(opt)
}

/// Applies all power rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    combine_like_factors(expr, step_collector)
        .or_else(|| divide_like_factors(expr, step_collector))
        .or_else(|| power_power(expr, step_collector))
        .or_else(|| distribute_power(expr, step_collector))
}
