use std::{fmt, ops::{Add, Mul, Neg, Sub}};
use super::op::BinOpKind;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A numeric constant: either an exact integer or a floating-point number.
///
/// Integer arithmetic is checked. When an operation would overflow an [`i64`], the result falls
/// back to an [`f64`] instead.
///
/// Two numbers compare equal when their values are equal, regardless of representation, so
/// `Int(2) == Float(2.0)`.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Number {
    /// An integer, such as `2` or `144`.
    Int(i64),

    /// A floating-point number, such as `3.14` or `0.5`.
    Float(f64),
}

/// An arithmetic operation on two [`Number`]s that has no numeric result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    /// The divisor was zero, or zero was raised to a negative power.
    DivisionByZero,

    /// The result is not a finite real number, such as `(-8) ** 0.5`.
    Domain,
}

impl Number {
    /// Returns the value as an [`f64`].
    pub fn to_f64(self) -> f64 {
        match self {
            Self::Int(n) => n as f64,
            Self::Float(n) => n,
        }
    }

    /// Returns true if the value is zero.
    pub fn is_zero(self) -> bool {
        self.to_f64() == 0.0
    }

    /// Returns true if the value is one.
    pub fn is_one(self) -> bool {
        match self {
            Self::Int(n) => n == 1,
            Self::Float(n) => n == 1.0,
        }
    }

    /// Returns true if the value is strictly less than zero.
    pub fn is_negative(self) -> bool {
        self.to_f64() < 0.0
    }

    /// Divides `self` by `rhs`. The result is an integer only if the division is exact.
    pub fn checked_div(self, rhs: Self) -> Result<Self, ArithmeticError> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }

        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) if a.checked_rem(b) == Some(0) => Ok(a.checked_div(b)
                .map(Self::Int)
                .unwrap_or(Self::Float(a as f64 / b as f64))),
            (a, b) => finite(a.to_f64() / b.to_f64()),
        }
    }

    /// Raises `self` to the power of `rhs`.
    pub fn checked_pow(self, rhs: Self) -> Result<Self, ArithmeticError> {
        if self.is_zero() && rhs.is_negative() {
            return Err(ArithmeticError::DivisionByZero);
        }

        match (self, rhs) {
            (Self::Int(base), Self::Int(exp)) if exp >= 0 => {
                let exact = u32::try_from(exp)
                    .ok()
                    .and_then(|exp| base.checked_pow(exp));
                match exact {
                    Some(n) => Ok(Self::Int(n)),
                    None => finite((base as f64).powf(exp as f64)),
                }
            },
            (base, exp) => finite(base.to_f64().powf(exp.to_f64())),
        }
    }

    /// Applies the binary operation `kind` to `self` and `rhs`.
    pub fn apply(self, kind: BinOpKind, rhs: Self) -> Result<Self, ArithmeticError> {
        let result = match kind {
            BinOpKind::Add => self + rhs,
            BinOpKind::Sub => self - rhs,
            BinOpKind::Mul => self * rhs,
            BinOpKind::Div => return self.checked_div(rhs),
            BinOpKind::Pow => return self.checked_pow(rhs),
        };
        finite(result.to_f64()).map(|_| result)
    }
}

/// Wraps a float result, rejecting `NaN` and infinities.
fn finite(value: f64) -> Result<Number, ArithmeticError> {
    if value.is_finite() {
        Ok(Number::Float(value))
    } else {
        Err(ArithmeticError::Domain)
    }
}

/// Implements a checked integer operation with a float fallback.
macro_rules! checked_op {
    ($trait:ident, $method:ident, $checked:ident, $op:tt) => {
        impl $trait for Number {
            type Output = Number;

            fn $method(self, rhs: Self) -> Self::Output {
                match (self, rhs) {
                    (Self::Int(a), Self::Int(b)) => a.$checked(b)
                        .map(Self::Int)
                        .unwrap_or(Self::Float(a as f64 $op b as f64)),
                    (a, b) => Self::Float(a.to_f64() $op b.to_f64()),
                }
            }
        }
    };
}

checked_op!(Add, add, checked_add, +);
checked_op!(Sub, sub, checked_sub, -);
checked_op!(Mul, mul, checked_mul, *);

impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Self::Output {
        match self {
            Self::Int(n) => n.checked_neg()
                .map(Self::Int)
                .unwrap_or(Self::Float(-(n as f64))),
            Self::Float(n) => Self::Float(-n),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (a, b) => a.to_f64() == b.to_f64(),
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Self::Int(n.into())
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{}", n),
            // `{}` never uses scientific notation for `f64`, but drops the `.0` of integral values
            Self::Float(n) if n.is_finite() && n.fract() == 0.0 => write!(f, "{}.0", n),
            Self::Float(n) => write!(f, "{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn value_equality() {
        assert_eq!(Number::Int(2), Number::Float(2.0));
        assert_ne!(Number::Int(2), Number::Float(2.5));
    }

    #[test]
    fn integer_overflow_falls_back() {
        let big = Number::Int(i64::MAX);
        assert!(matches!(big + Number::Int(1), Number::Float(_)));
        assert!(matches!(-Number::Int(i64::MIN), Number::Float(_)));
        assert!(matches!(Number::Int(3) * Number::Int(4), Number::Int(12)));
    }

    #[test]
    fn exact_division() {
        assert!(matches!(Number::Int(12).checked_div(Number::Int(4)), Ok(Number::Int(3))));
        assert_eq!(Number::Int(1).checked_div(Number::Int(4)), Ok(Number::Float(0.25)));
        assert_eq!(Number::Int(1).checked_div(Number::Int(0)), Err(ArithmeticError::DivisionByZero));
        assert_eq!(Number::Int(1).checked_div(Number::Float(0.0)), Err(ArithmeticError::DivisionByZero));
    }

    #[test]
    fn powers() {
        assert!(matches!(Number::Int(2).checked_pow(Number::Int(10)), Ok(Number::Int(1024))));
        assert_eq!(Number::Int(2).checked_pow(Number::Int(-1)), Ok(Number::Float(0.5)));
        assert_eq!(Number::Int(0).checked_pow(Number::Int(-1)), Err(ArithmeticError::DivisionByZero));
        assert_eq!(Number::Int(-8).checked_pow(Number::Float(0.5)), Err(ArithmeticError::Domain));
        assert!(matches!(Number::Int(3).checked_pow(Number::Int(100)), Ok(Number::Float(_))));
    }

    #[test]
    fn display() {
        assert_eq!(Number::Int(-7).to_string(), "-7");
        assert_eq!(Number::Float(2.0).to_string(), "2.0");
        assert_eq!(Number::Float(0.25).to_string(), "0.25");
        assert_eq!(Number::Float(-1.5).to_string(), "-1.5");
    }
}
