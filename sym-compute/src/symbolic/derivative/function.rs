//! Symbolic derivatives of functions.

use sym_parser::tree::{Expr, FuncKind};
use super::inner_derivative;

/// Computes the derivative of a function applied to `arg`, and performs the chain rule.
pub(super) fn function_derivative(kind: &FuncKind, arg: &Expr, var: &str, depth: usize) -> Expr {
    if !arg.depends_on(var) {
        return Expr::constant(0);
    }

    let darg = inner_derivative(arg, var, depth + 1);
    match kind {
        FuncKind::Sin => Expr::mul(Expr::function(FuncKind::Cos, arg.clone()), darg),
        FuncKind::Cos => Expr::mul(
            Expr::negate(Expr::function(FuncKind::Sin, arg.clone())),
            darg,
        ),
        FuncKind::Tan => {
            let cos = Expr::function(FuncKind::Cos, arg.clone());
            Expr::div(darg, Expr::mul(cos.clone(), cos))
        },
        FuncKind::Log => Expr::div(darg, arg.clone()),
        // no closed form; written as `f'(arg)`
        FuncKind::UserNamed(name) => Expr::mul(
            Expr::function(FuncKind::UserNamed(format!("{name}'")), arg.clone()),
            darg,
        ),
    }
}
