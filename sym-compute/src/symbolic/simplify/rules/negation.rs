//! Simplification rules that move negations towards the leaves of the tree, or absorb them into
//! the surrounding operation.

use crate::symbolic::{simplify::step::Step, step_collector::StepCollector};
use sym_parser::tree::{BinOpKind, Expr, Number};
use super::{do_binary, do_negation};

/// Returns the operand of a negation.
fn negated(expr: &Expr) -> Option<&Expr> {
    match expr {
        Expr::Negation(operand) => Some(operand),
        _ => None,
    }
}

/// Returns the value of a constant that is strictly less than zero.
fn negative_constant(expr: &Expr) -> Option<Number> {
    expr.as_number().filter(|n| n.is_negative())
}

/// `--a = a`
pub fn double_negation(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_negation(expr, |operand| negated(operand).cloned())?;

    step_collector.push(Step::DoubleNegation);
    Some(opt)
}

/// `a+(-b) = a-b`
/// `(-a)+b = b-a`
/// `a-(-b) = a+b`
pub fn absorb_negation(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Add, |lhs, rhs| {
        if let Some(rhs) = negated(rhs) {
            Some(Expr::sub(lhs.clone(), rhs.clone()))
        } else {
            negated(lhs).map(|lhs| Expr::sub(rhs.clone(), lhs.clone()))
        }
    })
        .or_else(|| do_binary(expr, BinOpKind::Sub, |lhs, rhs| {
            negated(rhs).map(|rhs| Expr::add(lhs.clone(), rhs.clone()))
        }))?;

    step_collector.push(Step::AbsorbNegation);
    Some(opt)
}

/// Returns the negation of a term whose sign can be moved into the surrounding sum: a negative
/// constant, or a product or quotient with a negative constant on the left.
fn negative_term(expr: &Expr) -> Option<Expr> {
    match expr {
        Expr::Constant(n) if n.is_negative() => Some(Expr::Constant(-*n)),
        Expr::Binary(kind @ (BinOpKind::Mul | BinOpKind::Div), lhs, rhs) => {
            negative_constant(lhs).map(|n| Expr::binary(*kind, Expr::Constant(-n), (**rhs).clone()))
        },
        _ => None,
    }
}

/// `a+(-3) = a-3`
/// `a-(-3) = a+3`
/// `a+(-3)*b = a-3*b`
/// `a-(-3)/b = a+3/b`
pub fn negative_constant_term(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Add, |lhs, rhs| {
        negative_term(rhs).map(|term| Expr::sub(lhs.clone(), term))
    })
        .or_else(|| do_binary(expr, BinOpKind::Sub, |lhs, rhs| {
            negative_term(rhs).map(|term| Expr::add(lhs.clone(), term))
        }))?;

    step_collector.push(Step::NegativeConstantTerm);
    Some(opt)
}

/// `(-3)-a = (-a)-3`
pub fn leading_negative_constant(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Sub, |lhs, rhs| {
        negative_constant(lhs).map(|n| Expr::sub(Expr::negate(rhs.clone()), Expr::Constant(-n)))
    })?;

    step_collector.push(Step::LeadingNegativeConstant);
    Some(opt)
}

/// `(-a)*(-b) = a*b`
/// `(-a)/(-b) = a/b`
pub fn cancel_negations(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let Expr::Binary(kind @ (BinOpKind::Mul | BinOpKind::Div), lhs, rhs) = expr else {
        return None;
    };
    let (lhs, rhs) = (negated(lhs)?, negated(rhs)?);

    step_collector.push(Step::CancelNegations);
    Some(Expr::binary(*kind, lhs.clone(), rhs.clone()))
}

/// `a*(-b) = -(a*b)`
/// `(-a)*b = -(a*b)`
/// `a/(-b) = -(a/b)`
/// `(-a)/b = -(a/b)`
pub fn hoist_negation(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let Expr::Binary(kind @ (BinOpKind::Mul | BinOpKind::Div), lhs, rhs) = expr else {
        return None;
    };
    let inner = match (negated(lhs), negated(rhs)) {
        (Some(lhs), None) => Expr::binary(*kind, lhs.clone(), (**rhs).clone()),
        (None, Some(rhs)) => Expr::binary(*kind, (**lhs).clone(), rhs.clone()),
        _ => return None,
    };

    step_collector.push(Step::HoistNegation);
    Some(Expr::negate(inner))
}

/// `-(3*a) = -3*a`
pub fn negate_coefficient(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_negation(expr, |operand| {
        do_binary(operand, BinOpKind::Mul, |coeff, term| {
            coeff.as_number().map(|n| Expr::mul(Expr::Constant(-n), term.clone()))
        })
    })?;

    step_collector.push(Step::NegateCoefficient);
    Some(opt)
}

/// `-1*a = -a`
pub fn multiply_minus_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Mul, |lhs, rhs| {
        let minus_one = lhs.as_number().map_or(false, |n| n == Number::Int(-1));
        minus_one.then(|| Expr::negate(rhs.clone()))
    })?;

    step_collector.push(Step::MultiplyMinusOne);
    Some(opt)
}

/// `-(a+b) = (-a)-b`
/// `-(a-b) = (-a)+b`
pub fn distribute_negation(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_negation(expr, |operand| match operand {
        Expr::Binary(BinOpKind::Add, lhs, rhs) => {
            Some(Expr::sub(Expr::negate((**lhs).clone()), (**rhs).clone()))
        },
        Expr::Binary(BinOpKind::Sub, lhs, rhs) => {
            Some(Expr::add(Expr::negate((**lhs).clone()), (**rhs).clone()))
        },
        _ => None,
    })?;

    step_collector.push(Step::DistributeNegation);
    Some(opt)
}

/// Applies all negation rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    double_negation(expr, step_collector)
        .or_else(|| absorb_negation(expr, step_collector))
        .or_else(|| negative_constant_term(expr, step_collector))
        .or_else(|| leading_negative_constant(expr, step_collector))
        .or_else(|| cancel_negations(expr, step_collector))
        .or_else(|| hoist_negation(expr, step_collector))
        .or_else(|| negate_coefficient(expr, step_collector))
        .or_else(|| multiply_minus_one(expr, step_collector))
        .or_else(|| distribute_negation(expr, step_collector))
}
