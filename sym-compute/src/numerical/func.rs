//! Real-valued implementations of the built-in functions.

use sym_parser::tree::{ArithmeticError, FuncKind, Number};

/// Applies the function `kind` to a constant argument.
///
/// Returns `Ok(None)` for user-named functions, which have no numeric meaning.
pub fn apply(kind: &FuncKind, arg: Number) -> Result<Option<Number>, ArithmeticError> {
    let x = arg.to_f64();
    let value = match kind {
        FuncKind::Sin => x.sin(),
        FuncKind::Cos => x.cos(),
        FuncKind::Tan => x.tan(),
        FuncKind::Log if x <= 0.0 => return Err(ArithmeticError::Domain),
        FuncKind::Log => x.ln(),
        FuncKind::UserNamed(_) => return Ok(None),
    };

    if value.is_finite() {
        Ok(Some(Number::Float(value)))
    } else {
        Err(ArithmeticError::Domain)
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
    use super::*;

    #[test]
    fn trig() {
        let value = apply(&FuncKind::Sin, Number::Float(std::f64::consts::FRAC_PI_2)).unwrap().unwrap();
        assert_float_absolute_eq!(value.to_f64(), 1.0);
        let value = apply(&FuncKind::Cos, Number::Int(0)).unwrap().unwrap();
        assert_float_absolute_eq!(value.to_f64(), 1.0);
    }

    #[test]
    fn log_domain() {
        assert_eq!(apply(&FuncKind::Log, Number::Int(0)), Err(ArithmeticError::Domain));
        assert_eq!(apply(&FuncKind::Log, Number::Int(-2)), Err(ArithmeticError::Domain));
        let value = apply(&FuncKind::Log, Number::Float(std::f64::consts::E)).unwrap().unwrap();
        assert_float_absolute_eq!(value.to_f64(), 1.0);
    }

    #[test]
    fn user_named_has_no_value() {
        assert_eq!(apply(&FuncKind::UserNamed("f".to_string()), Number::Int(1)), Ok(None));
    }
}
