//! Module to simplify expressions.
//!
//! This module provides the [`simplify`] function, which rewrites an expression into an
//! equivalent, usually smaller one. It does this by simplifying the children of every node first,
//! then repeatedly applying the rewriting rules in [`rules`] at the node until no more rules
//! apply. Each time a rule rewrites a node, the children of the new node are simplified again.
//!
//! The result is a fixpoint of the rules: simplifying it again returns it unchanged.
//!
//! Two limits keep the simplifier total. Subtrees nested deeper than [`MAX_RECURSION_DEPTH`] are
//! returned as they are and no rule is applied to the nodes above them, though their other
//! children are still simplified. Every call also has a fixed budget of rewrites. When either
//! limit is hit, a warning is logged and the current form of the expression is returned.

pub mod rules;
pub mod step;

use crate::symbolic::step_collector::StepCollector;
use step::Step;
use sym_parser::tree::{Expr, MAX_RECURSION_DEPTH};
use tracing::{debug, trace, warn};

/// The maximum number of rewrites applied in a single call to [`simplify`].
pub const REWRITE_BUDGET: usize = 10_000;

/// State shared across one simplification.
struct Simplifier<'a> {
    /// Rewrites left before simplification stops.
    budget: usize,

    /// Set once a warning about a limit has been logged, to log it only once.
    warned: bool,

    step_collector: &'a mut dyn StepCollector<Step>,
}

impl<'a> Simplifier<'a> {
    fn new(step_collector: &'a mut dyn StepCollector<Step>) -> Self {
        Self {
            budget: REWRITE_BUDGET,
            warned: false,
            step_collector,
        }
    }

    /// Simplifies each child of the given node, and rebuilds the node around the results.
    ///
    /// The returned flag is set if some descendant was too deep to be simplified.
    fn simplify_children(&mut self, expr: &Expr, depth: usize) -> (Expr, bool) {
        match expr {
            Expr::Constant(_) | Expr::Variable(_) => (expr.clone(), false),
            Expr::Negation(operand) => {
                let (operand, truncated) = self.simplify_node(operand, depth + 1);
                (Expr::negate(operand), truncated)
            },
            Expr::Binary(kind, lhs, rhs) => {
                let (lhs, lhs_truncated) = self.simplify_node(lhs, depth + 1);
                let (rhs, rhs_truncated) = self.simplify_node(rhs, depth + 1);
                (Expr::binary(*kind, lhs, rhs), lhs_truncated || rhs_truncated)
            },
            Expr::Function(kind, operand) => {
                let (operand, truncated) = self.simplify_node(operand, depth + 1);
                (Expr::function(kind.clone(), operand), truncated)
            },
        }
    }

    /// Simplifies the given node, located `depth` levels below the root.
    ///
    /// Nodes with a descendant deeper than [`MAX_RECURSION_DEPTH`] are rebuilt around their
    /// simplified children, but no rule is applied to them. The returned flag reports this.
    fn simplify_node(&mut self, expr: &Expr, depth: usize) -> (Expr, bool) {
        if depth > MAX_RECURSION_DEPTH {
            if !self.warned {
                warn!(max_depth = MAX_RECURSION_DEPTH, "expression too deep, leaving subtree unsimplified");
                self.warned = true;
            }
            return (expr.clone(), true);
        }

        let (mut expr, mut truncated) = self.simplify_children(expr, depth);
        loop {
            if truncated {
                return (expr, true);
            }

            if self.budget == 0 {
                if !self.warned {
                    warn!(budget = REWRITE_BUDGET, "rewrite budget exhausted, stopping simplification");
                    self.warned = true;
                }
                return (expr, false);
            }

            let mut taken = Vec::new();
            let Some(new_expr) = rules::all(&expr, &mut taken) else {
                return (expr, false);
            };
            self.budget -= 1;
            trace!(steps = ?taken, from = %expr, to = %new_expr, "rewrite");
            for step in taken {
                self.step_collector.push(step);
            }
            (expr, truncated) = self.simplify_children(&new_expr, depth);
        }
    }
}

/// Base implementation of the simplification algorithm.
fn inner_simplify(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    debug!(%expr, "simplifying");
    let mut simplifier = Simplifier::new(step_collector);
    let (simplified, _) = simplifier.simplify_node(expr, 0);
    debug!(%simplified, rewrites = REWRITE_BUDGET - simplifier.budget, "simplified");
    simplified
}

/// Simplify the given expression.
pub fn simplify(expr: &Expr) -> Expr {
    inner_simplify(expr, &mut ())
}

/// Simplify the given expression. The steps taken by the simplifier will also be collected and
/// returned, in the order they were applied. This is useful for debugging, and also for
/// displaying the steps taken to the user.
pub fn simplify_with_steps(expr: &Expr) -> (Expr, Vec<Step>) {
    let mut steps = Vec::new();
    let expr = inner_simplify(expr, &mut steps);
    (expr, steps)
}
