//! Re-association of `+`/`-` and `*`/`/` chains.
//!
//! A chain such as `(x + 1) + (x + 2)` contains two pairs of like terms, but no rule that looks
//! at a single node can reach them. The rules in this module move operands across adjacent nodes
//! of the same precedence so that such pairs meet. A regrouping is only accepted if the new inner
//! pair can itself be simplified, either directly or after regrouping it in turn, up to a fixed
//! nesting level.

use crate::symbolic::{simplify::step::Step, step_collector::StepCollector};
use sym_parser::tree::{Associativity, BinOpKind, Expr};
use super::local;

/// How many levels of nested regrouping are tried to prove that a regrouping is useful.
const NESTING: u8 = 2;

/// A candidate regrouping: an `inner` pair combined with `other` by `kind`.
struct Regrouped {
    inner: Expr,
    kind: BinOpKind,
    other: Expr,
    inner_first: bool,
}

impl Regrouped {
    /// `other kind (inner)`
    fn right(other: &Expr, kind: BinOpKind, inner: Expr) -> Self {
        Self { inner, kind, other: other.clone(), inner_first: false }
    }

    /// `(inner) kind other`
    fn left(inner: Expr, kind: BinOpKind, other: &Expr) -> Self {
        Self { inner, kind, other: other.clone(), inner_first: true }
    }

    fn build(self) -> Expr {
        if self.inner_first {
            Expr::binary(self.kind, self.inner, self.other)
        } else {
            Expr::binary(self.kind, self.other, self.inner)
        }
    }
}

/// Returns true if the two operations can be regrouped with each other.
fn same_family(a: BinOpKind, b: BinOpKind) -> bool {
    a != BinOpKind::Pow && b != BinOpKind::Pow && a.precedence() == b.precedence()
}

/// Returns true if the given pair simplifies to something other than itself. Moving a constant to
/// its canonical side, or a leading negative constant behind the other term, does not count.
fn reduces(inner: &Expr, nesting: u8) -> bool {
    let mut steps = Vec::new();
    if local(inner, &mut steps).is_some()
        && !matches!(
            steps.as_slice(),
            [Step::ConstantToRight | Step::ConstantToLeft | Step::LeadingNegativeConstant]
        )
    {
        return true;
    }

    nesting > 0 && regroup(inner, nesting - 1).is_some()
}

/// Lists every valid regrouping of the expression, in order of preference.
fn candidates(expr: &Expr) -> Vec<Regrouped> {
    let Expr::Binary(outer, lhs, rhs) = expr else {
        return Vec::new();
    };
    let outer = *outer;
    let commutative = outer.is_commutative();
    let left_assoc = outer.associativity() == Associativity::Left;
    let mut candidates = Vec::new();

    if let Expr::Binary(inner, l1, l2) = &**lhs {
        let inner = *inner;
        if same_family(outer, inner) {
            let (l1, l2, r) = (&**l1, &**l2, &**rhs);
            if commutative {
                // (l1 K l2) T r = l1 T (r K l2)
                candidates.push(Regrouped::right(l1, outer, Expr::binary(inner, r.clone(), l2.clone())));
                // (l1 K l2) T r = (l1 T r) K l2
                candidates.push(Regrouped::left(Expr::binary(outer, l1.clone(), r.clone()), inner, l2));
            }

            if left_assoc {
                if inner.is_commutative() {
                    // (l1 K l2) T r = l1 K (l2 T r)
                    candidates.push(Regrouped::right(l1, inner, Expr::binary(outer, l2.clone(), r.clone())));
                }

                // (l1 K l2) T r = (l1 T r) K l2
                candidates.push(Regrouped::left(Expr::binary(outer, l1.clone(), r.clone()), inner, l2));

                if inner == outer {
                    // (l1 - l2) - r = l1 - (l2 + r)
                    let partner = outer.commutative_partner();
                    candidates.push(Regrouped::right(l1, outer, Expr::binary(partner, l2.clone(), r.clone())));
                }
            }
        }
    }

    if let Expr::Binary(inner, r1, r2) = &**rhs {
        let inner = *inner;
        if same_family(outer, inner) {
            let (l, r1, r2) = (&**lhs, &**r1, &**r2);
            if commutative {
                // l T (r1 K r2) = (l T r1) K r2
                candidates.push(Regrouped::left(Expr::binary(outer, l.clone(), r1.clone()), inner, r2));
            }

            if left_assoc {
                // l - (r1 - r2) = (l - r1) + r2
                candidates.push(Regrouped::left(Expr::binary(outer, l.clone(), r1.clone()), inner.flipped(), r2));
            }
        }
    }

    candidates
}

/// Returns the first regrouping of the expression whose new inner pair reduces.
fn regroup(expr: &Expr, nesting: u8) -> Option<Expr> {
    candidates(expr)
        .into_iter()
        .find(|candidate| reduces(&candidate.inner, nesting))
        .map(Regrouped::build)
}

/// `(x+1)+(x+2) = x+((x+2)+1)`
/// `(2*x)*(3*y) = (2*(3*y))*x`
/// `(x-3)-4 = x-(3+4)`
pub fn regroup_chain(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = regroup(expr, NESTING)?;

    step_collector.push(Step::Regroup);
    Some(opt)
}

/// Applies all re-association rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    regroup_chain(expr, step_collector)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sym_parser::parse;
    use super::*;

    #[test]
    fn regroup_like_terms() {
        let expr = parse("(x + 1) + (x + 2)").unwrap();
        let regrouped = regroup_chain(&expr, &mut ()).unwrap();
        assert_eq!(regrouped, parse("x + ((x + 2) + 1)").unwrap());
    }

    #[test]
    fn regroup_constants_in_product() {
        let expr = parse("(x * 2) * 3").unwrap();
        let regrouped = regroup_chain(&expr, &mut ()).unwrap();
        assert_eq!(regrouped, parse("x * (3 * 2)").unwrap());
    }

    #[test]
    fn regroup_subtraction() {
        let expr = parse("(x - 3) - 4").unwrap();
        let mut steps = Vec::new();
        let regrouped = regroup_chain(&expr, &mut steps).unwrap();
        assert_eq!(regrouped, parse("x - (3 + 4)").unwrap());
        assert_eq!(steps, vec![Step::Regroup]);
    }

    #[test]
    fn no_useful_regrouping() {
        let expr = parse("(x + y) + z").unwrap();
        assert_eq!(regroup_chain(&expr, &mut ()), None);

        let expr = parse("(x * y) + z").unwrap();
        assert_eq!(regroup_chain(&expr, &mut ()), None);
    }
}
