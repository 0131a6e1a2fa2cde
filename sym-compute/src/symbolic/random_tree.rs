//! Seeded random trees for testing the symbolic engines.
//!
//! Trees use the variables `x` and `y`, negative constants, division by variables and variable
//! exponents. Every tree has a real value whenever `x` and `y` are bound to positive numbers:
//! divisors are never zero, and the base of a power is a variable or a positive constant.

use rand::{rngs::StdRng, Rng};
use sym_parser::tree::{Expr, FuncKind};

fn variable(rng: &mut StdRng) -> Expr {
    Expr::variable(if rng.gen_bool(0.5) { "x" } else { "y" })
}

/// Generates a leaf: a variable, an integer, or a float with an exact decimal representation.
pub fn random_leaf(rng: &mut StdRng) -> Expr {
    match rng.gen_range(0..4) {
        0 | 1 => variable(rng),
        2 => Expr::constant(rng.gen_range(-9..10i64)),
        _ => Expr::constant(rng.gen_range(-20..20i32) as f64 / 4.0),
    }
}

/// Generates a divisor that is never zero.
fn divisor(rng: &mut StdRng) -> Expr {
    match rng.gen_range(0..3) {
        0 => variable(rng),
        1 => Expr::constant(rng.gen_range(1..10i64)),
        _ => Expr::constant(-rng.gen_range(1..10i64)),
    }
}

/// Generates a power of a variable or a positive constant, raised to a small integer or to a
/// variable.
fn power(rng: &mut StdRng) -> Expr {
    let base = if rng.gen_bool(0.75) {
        variable(rng)
    } else {
        Expr::constant(rng.gen_range(1..5i64))
    };
    let exponent = if rng.gen_bool(0.5) {
        Expr::constant(rng.gen_range(-2..4i64))
    } else {
        variable(rng)
    };
    Expr::pow(base, exponent)
}

/// Generates a random tree at most `depth` levels deep below its root.
pub fn random_expr(rng: &mut StdRng, depth: u32) -> Expr {
    if depth == 0 || rng.gen_bool(0.2) {
        return random_leaf(rng);
    }

    match rng.gen_range(0..8) {
        0 => Expr::negate(random_expr(rng, depth - 1)),
        1 | 2 => Expr::add(random_expr(rng, depth - 1), random_expr(rng, depth - 1)),
        3 => Expr::sub(random_expr(rng, depth - 1), random_expr(rng, depth - 1)),
        4 => Expr::mul(random_expr(rng, depth - 1), random_expr(rng, depth - 1)),
        5 => Expr::div(random_expr(rng, depth - 1), divisor(rng)),
        6 => power(rng),
        _ => {
            let kind = if rng.gen_bool(0.5) { FuncKind::Sin } else { FuncKind::Cos };
            Expr::function(kind, random_expr(rng, depth - 1))
        },
    }
}
