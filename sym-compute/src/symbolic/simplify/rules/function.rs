//! Function-specific simplification rules.

use crate::symbolic::{simplify::step::Step, step_collector::StepCollector};
use std::f64::consts::E;
use sym_parser::tree::{Expr, FuncKind, Number};
use super::do_function;

/// `log(e) = 1`
pub fn log_e(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_function(expr, &FuncKind::Log, |arg| {
        (arg.as_number() == Some(Number::Float(E))).then(|| Expr::constant(1))
    })?;

    step_collector.push(Step::LogE);
    Some(opt)
}

/// Applies all function rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    log_e(expr, step_collector)
}
