use std::fmt::{Display, Error, Formatter, Result};
use super::{op::{Associativity, BinOpKind}, Expr, MAX_RECURSION_DEPTH};

/// The side of a binary operation that an operand is on.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Side {
    Left,
    Right,
}

/// Returns true if `child`, as the operand on `side` of a `parent` operation, must be wrapped in
/// parentheses to be parsed back into the same tree.
fn needs_parens(parent: BinOpKind, child: &Expr, side: Side) -> bool {
    let (parent_prec, child_prec) = (parent.precedence(), child.precedence());
    if child_prec < parent_prec {
        return true;
    }

    child_prec == parent_prec && match parent.associativity() {
        Associativity::Left => side == Side::Right,
        Associativity::Right => side == Side::Left,
        Associativity::Both => false,
    }
}

/// A node being rendered, `depth` levels below the node [`Display`] was called on.
///
/// Rendering fails with [`std::fmt::Error`] once `depth` exceeds [`MAX_RECURSION_DEPTH`].
struct Nested<'a> {
    expr: &'a Expr,
    depth: usize,
}

impl<'a> Nested<'a> {
    fn child(&self, expr: &'a Expr) -> Self {
        Self { expr, depth: self.depth + 1 }
    }

    /// Helper to format one operand of a binary operation.
    fn fmt_operand(&self, f: &mut Formatter, parent: BinOpKind, child: &'a Expr, side: Side) -> Result {
        if needs_parens(parent, child, side) {
            write!(f, "({})", self.child(child))
        } else {
            write!(f, "{}", self.child(child))
        }
    }
}

impl Display for Nested<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result {
        if self.depth > MAX_RECURSION_DEPTH {
            return Err(Error);
        }

        match self.expr {
            Expr::Constant(n) => write!(f, "{}", n),
            Expr::Variable(name) => write!(f, "{}", name),
            Expr::Negation(operand) => match **operand {
                Expr::Constant(_) | Expr::Variable(_) => write!(f, "-{}", self.child(operand)),
                _ => write!(f, "-({})", self.child(operand)),
            },
            Expr::Binary(kind, lhs, rhs) => {
                self.fmt_operand(f, *kind, lhs, Side::Left)?;
                match kind {
                    BinOpKind::Pow => write!(f, "{}", kind)?,
                    _ => write!(f, " {} ", kind)?,
                }
                self.fmt_operand(f, *kind, rhs, Side::Right)
            },
            Expr::Function(kind, operand) => write!(f, "{}({})", kind, self.child(operand)),
        }
    }
}

/// Renders the expression with the minimum parentheses needed to parse it back into the same
/// tree.
///
/// Formatting returns [`std::fmt::Error`] if the tree is nested deeper than
/// [`MAX_RECURSION_DEPTH`]. Note that [`ToString::to_string`] panics on such an error.
impl Display for Expr {
    fn fmt(&self, f: &mut Formatter) -> Result {
        Nested { expr: self, depth: 0 }.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use std::fmt::Write;
    use super::*;
    use crate::tree::FuncKind;

    fn x() -> Expr {
        Expr::variable("x")
    }

    fn y() -> Expr {
        Expr::variable("y")
    }

    #[test]
    fn operator_spacing() {
        let expr = Expr::add(
            Expr::mul(Expr::constant(3), Expr::pow(x(), Expr::constant(2))),
            Expr::div(y(), Expr::constant(2)),
        );
        assert_eq!(expr.render(), "3 * x**2 + y / 2");
    }

    #[test]
    fn left_associative_groups_right() {
        assert_eq!(Expr::sub(x(), Expr::sub(y(), Expr::constant(1))).render(), "x - (y - 1)");
        assert_eq!(Expr::sub(Expr::sub(x(), y()), Expr::constant(1)).render(), "x - y - 1");
        assert_eq!(Expr::div(x(), Expr::mul(y(), Expr::constant(2))).render(), "x / (y * 2)");
    }

    #[test]
    fn right_associative_groups_left() {
        assert_eq!(Expr::pow(Expr::pow(x(), y()), Expr::constant(2)).render(), "(x**y)**2");
        assert_eq!(Expr::pow(x(), Expr::pow(y(), Expr::constant(2))).render(), "x**y**2");
    }

    #[test]
    fn lower_precedence_groups() {
        let expr = Expr::mul(Expr::add(x(), Expr::constant(1)), Expr::sub(y(), Expr::constant(1)));
        assert_eq!(expr.render(), "(x + 1) * (y - 1)");
        assert_eq!(Expr::add(x(), Expr::add(y(), Expr::constant(1))).render(), "x + y + 1");
    }

    #[test]
    fn negation() {
        assert_eq!(Expr::negate(x()).render(), "-x");
        assert_eq!(Expr::negate(Expr::constant(3)).render(), "-3");
        assert_eq!(Expr::negate(Expr::add(x(), y())).render(), "-(x + y)");
        assert_eq!(Expr::pow(Expr::negate(x()), Expr::constant(2)).render(), "(-x)**2");
        assert_eq!(Expr::mul(Expr::constant(2), Expr::negate(x())).render(), "2 * -x");
    }

    #[test]
    fn functions() {
        let expr = Expr::function(FuncKind::Sin, Expr::add(x(), Expr::constant(1)));
        assert_eq!(expr.render(), "sin(x + 1)");
        let expr = Expr::pow(Expr::function(FuncKind::UserNamed("f".to_string()), x()), Expr::constant(2));
        assert_eq!(expr.render(), "(f(x))**2");
        assert_eq!(Expr::negate(Expr::function(FuncKind::Log, x())).render(), "-(log(x))");
    }

    #[test]
    fn float_constants() {
        assert_eq!(Expr::mul(Expr::constant(2.0), x()).render(), "2.0 * x");
        assert_eq!(Expr::constant(0.5).render(), "0.5");
    }

    #[test]
    fn too_deep_to_render() {
        let mut expr = x();
        for _ in 0..20_000 {
            expr = Expr::negate(expr);
        }

        let mut out = String::new();
        assert!(write!(out, "{}", expr).is_err());

        let mut expr = x();
        for _ in 0..MAX_RECURSION_DEPTH {
            expr = Expr::negate(expr);
        }
        assert!(expr.render().ends_with("(-x)))"));
    }
}
