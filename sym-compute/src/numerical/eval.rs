use sym_error::Error;
use sym_parser::tree::{BinOpKind, Expr};
use tracing::trace;
use super::{ctxt::Ctxt, error::{from_arithmetic, DivisionByZero, RecursionLimit}, func};

/// Evaluates the expression bottom-up, substituting the values of the variables bound in
/// `ctxt` and folding every operation whose operands are all constants.
///
/// Unbound variables are not an error; they are left in place, so the result is a constant only
/// if every variable the expression depends on is bound. User-named functions have no numeric
/// meaning and stay unevaluated, with their operand evaluated.
///
/// # Errors
///
/// - [`DivisionByZero`] if a divisor evaluates to zero, or zero is raised to a negative power.
/// - [`DomainError`](super::error::DomainError) if a result is not a finite real number, such
///   as `log(0)` or `(-8)**0.5`.
/// - [`RecursionLimit`] if the tree is deeper than [`Ctxt::max_depth`].
pub fn evaluate(expr: &Expr, ctxt: &Ctxt) -> Result<Expr, Error> {
    trace!(%expr, "evaluating");
    eval_inner(expr, ctxt, 1)
}

fn eval_inner(expr: &Expr, ctxt: &Ctxt, depth: usize) -> Result<Expr, Error> {
    if depth > ctxt.max_depth {
        return Err(Error::new(vec![], RecursionLimit { max_depth: ctxt.max_depth }));
    }

    match expr {
        Expr::Constant(_) => Ok(expr.clone()),
        Expr::Variable(name) => Ok(ctxt.get_var(name)
            .map(Expr::Constant)
            .unwrap_or_else(|| expr.clone())),
        Expr::Negation(operand) => {
            let operand = eval_inner(operand, ctxt, depth + 1)?;
            Ok(match operand.as_number() {
                Some(n) => Expr::Constant(-n),
                None => Expr::negate(operand),
            })
        },
        Expr::Binary(kind, lhs, rhs) => {
            let lhs = eval_inner(lhs, ctxt, depth + 1)?;
            let rhs = eval_inner(rhs, ctxt, depth + 1)?;

            if *kind == BinOpKind::Div && rhs.is_zero() {
                return Err(Error::new(vec![], DivisionByZero { expr: expr.to_string() }));
            }

            match (lhs.as_number(), rhs.as_number()) {
                (Some(a), Some(b)) => a.apply(*kind, b)
                    .map(Expr::Constant)
                    .map_err(|err| from_arithmetic(err, expr.to_string())),
                _ => Ok(Expr::binary(*kind, lhs, rhs)),
            }
        },
        Expr::Function(kind, operand) => {
            let operand = eval_inner(operand, ctxt, depth + 1)?;
            match operand.as_number() {
                Some(n) => match func::apply(kind, n) {
                    Ok(Some(value)) => Ok(Expr::Constant(value)),
                    Ok(None) => Ok(Expr::function(kind.clone(), operand)),
                    Err(err) => Err(from_arithmetic(err, expr.to_string())),
                },
                None => Ok(Expr::function(kind.clone(), operand)),
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_abs,
        afe_absolute_error_msg,
        afe_is_absolute_eq,
        assert_float_absolute_eq,
    };
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use super::*;
    use crate::numerical::error::DomainError;
    use sym_parser::{parse, tree::{FuncKind, Number}};

    fn eval_str(source: &str, ctxt: &Ctxt) -> Result<Expr, Error> {
        evaluate(&parse(source).unwrap(), ctxt)
    }

    fn eval_num(source: &str, ctxt: &Ctxt) -> f64 {
        match eval_str(source, ctxt).unwrap() {
            Expr::Constant(n) => n.to_f64(),
            other => panic!("`{}` did not evaluate to a constant: {}", source, other),
        }
    }

    #[test]
    fn arithmetic() {
        let ctxt = Ctxt::default();
        assert_eq!(eval_str("2+3*4", &ctxt).unwrap(), Expr::constant(14));
        assert_eq!(eval_str("-3+5", &ctxt).unwrap(), Expr::constant(2));
        assert_eq!(eval_str("2**10", &ctxt).unwrap(), Expr::constant(1024));
        assert_eq!(eval_str("7/2", &ctxt).unwrap(), Expr::constant(3.5));
        assert_eq!(eval_str("8/4/2", &ctxt).unwrap(), Expr::constant(1));
    }

    #[test]
    fn integer_results_stay_exact() {
        let result = eval_str("6/3", &Ctxt::default()).unwrap();
        assert!(matches!(result, Expr::Constant(Number::Int(2))));
    }

    #[test]
    fn bound_variables() {
        let ctxt = Ctxt::new().with_var("x", 3).with_var("y", 0.5);
        assert_eq!(eval_str("x**2 + y", &ctxt).unwrap(), Expr::constant(9.5));
        assert_float_absolute_eq!(eval_num("sin(x)**2 + cos(x)**2", &ctxt), 1.0);
    }

    #[test]
    fn unbound_variables_stay() {
        let ctxt = [("a", 2)].into_iter().collect::<Ctxt>();
        assert_eq!(
            eval_str("a*3 + b", &ctxt).unwrap(),
            Expr::add(Expr::constant(6), Expr::variable("b")),
        );
        assert_eq!(eval_str("-x", &Ctxt::default()).unwrap(), Expr::negate(Expr::variable("x")));
    }

    #[test]
    fn functions() {
        let ctxt = Ctxt::default();
        assert_float_absolute_eq!(eval_num("log(1)", &ctxt), 0.0);
        assert_float_absolute_eq!(eval_num("tan(0)", &ctxt), 0.0);
        assert_float_absolute_eq!(eval_num("cos(0) * 2", &ctxt), 2.0);
    }

    #[test]
    fn user_named_functions_stay() {
        let ctxt = Ctxt::new().with_var("x", 2);
        assert_eq!(
            eval_str("f(x+1)", &ctxt).unwrap(),
            Expr::function(FuncKind::UserNamed("f".to_string()), Expr::constant(3)),
        );
    }

    #[test]
    fn division_by_zero() {
        let ctxt = Ctxt::new().with_var("a", 5);
        let err = eval_str("a/(a-a)", &ctxt).unwrap_err();
        assert!(err.is::<DivisionByZero>());
        assert_eq!(err.to_string(), "division by zero");

        assert!(eval_str("x/0", &Ctxt::default()).unwrap_err().is::<DivisionByZero>());
        assert!(eval_str("0**(0-1)", &Ctxt::default()).unwrap_err().is::<DivisionByZero>());
    }

    #[test]
    fn domain_errors() {
        let ctxt = Ctxt::default();
        assert!(eval_str("log(0)", &ctxt).unwrap_err().is::<DomainError>());
        assert!(eval_str("log(0-2)", &ctxt).unwrap_err().is::<DomainError>());
        assert!(eval_str("(0-8)**0.5", &ctxt).unwrap_err().is::<DomainError>());
    }

    #[test]
    fn recursion_limit() {
        let ctxt = Ctxt::default().with_max_depth(3);
        assert!(eval_str("1+2", &ctxt).is_ok());
        assert!(eval_str("((1+2)*3)**2", &ctxt).unwrap_err().is::<RecursionLimit>());
    }

    /// Generates a leaf: a variable, an integer, or a float with an exact decimal representation.
    fn random_leaf(rng: &mut StdRng) -> Expr {
        match rng.gen_range(0..4) {
            0 => Expr::variable("x"),
            1 => Expr::variable("y"),
            2 => Expr::constant(rng.gen_range(0..10i64)),
            _ => Expr::constant(rng.gen_range(0..40i32) as f64 / 4.0),
        }
    }

    /// Generates a random tree whose evaluation with `x` and `y` bound always succeeds.
    fn random_expr(rng: &mut StdRng, depth: u32) -> Expr {
        if depth == 0 || rng.gen_bool(0.25) {
            return random_leaf(rng);
        }

        match rng.gen_range(0..7) {
            0 => Expr::negate(random_expr(rng, depth - 1)),
            1 => Expr::add(random_expr(rng, depth - 1), random_expr(rng, depth - 1)),
            2 => Expr::sub(random_expr(rng, depth - 1), random_expr(rng, depth - 1)),
            3 => Expr::mul(random_expr(rng, depth - 1), random_expr(rng, depth - 1)),
            4 => Expr::div(random_expr(rng, depth - 1), Expr::constant(rng.gen_range(1..10i64))),
            5 => Expr::pow(random_leaf(rng), Expr::constant(rng.gen_range(0..4i64))),
            _ => {
                let kind = if rng.gen_bool(0.5) { FuncKind::Sin } else { FuncKind::Cos };
                Expr::function(kind, random_expr(rng, depth - 1))
            },
        }
    }

    #[test]
    fn rendered_trees_evaluate_the_same() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let ctxt = Ctxt::new().with_var("x", 1.5).with_var("y", 2);

        for _ in 0..200 {
            let expr = random_expr(&mut rng, 5);
            let rendered = expr.to_string();
            let reparsed = parse(&rendered).unwrap();

            let (Expr::Constant(expected), Expr::Constant(actual)) = (
                evaluate(&expr, &ctxt).unwrap(),
                evaluate(&reparsed, &ctxt).unwrap(),
            ) else {
                panic!("`{}` did not evaluate to a constant", rendered);
            };

            // regrouped sums and products may round differently
            let (expected, actual) = (expected.to_f64(), actual.to_f64());
            assert!(
                (expected - actual).abs() <= 1e-9 * expected.abs().max(1.0),
                "`{}` evaluated to {} after rendering, expected {}",
                rendered,
                actual,
                expected,
            );
        }
    }
}
