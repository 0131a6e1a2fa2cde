//! Operator and function kinds, along with the precedence and associativity metadata shared by
//! the parser and the renderer.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precedence {
    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term = 1,

    /// Precedence of multiplication (`*`) and division (`/`), which separate factors.
    Factor = 2,

    /// Precedence of negation (`-x`) and function application (`sin(x)`).
    Unary = 3,

    /// Precedence of exponentiation (`**`).
    Exp = 4,

    /// Precedence of constants and variables, which never need grouping.
    Atom = 6,
}

impl PartialOrd for Precedence {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        let left = *self as u8;
        let right = *other as u8;
        left.partial_cmp(&right)
    }
}

/// The associativity of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a op b op c` is `(a op b) op c`.
    Left,

    /// `a op b op c` is `a op (b op c)`.
    Right,

    /// Grouping does not change the result, so either side may be left unparenthesized.
    Both,
}

/// The binary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinOpKind {
    /// Returns the precedence of the binary operation.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Add | Self::Sub => Precedence::Term,
            Self::Mul | Self::Div => Precedence::Factor,
            Self::Pow => Precedence::Exp,
        }
    }

    /// Returns the associativity of the binary operation.
    pub fn associativity(&self) -> Associativity {
        match self {
            Self::Add | Self::Mul => Associativity::Both,
            Self::Sub | Self::Div => Associativity::Left,
            Self::Pow => Associativity::Right,
        }
    }

    /// Returns true if the operation is commutative.
    pub fn is_commutative(&self) -> bool {
        matches!(self, Self::Add | Self::Mul)
    }

    /// Returns the commutative operation of the same precedence (`+` for `+`/`-`, `*` for `*`/`/`).
    /// [`BinOpKind::Pow`] has no such partner and is returned as is.
    pub fn commutative_partner(&self) -> Self {
        match self {
            Self::Add | Self::Sub => Self::Add,
            Self::Mul | Self::Div => Self::Mul,
            Self::Pow => Self::Pow,
        }
    }

    /// Returns the other operation of the same precedence (`+` and `-`, `*` and `/`).
    pub fn flipped(&self) -> Self {
        match self {
            Self::Add => Self::Sub,
            Self::Sub => Self::Add,
            Self::Mul => Self::Div,
            Self::Div => Self::Mul,
            Self::Pow => Self::Pow,
        }
    }

    /// Returns the symbol used to write the operation.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "**",
        }
    }
}

impl fmt::Display for BinOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The function being applied in an [`Expr::Function`](super::Expr::Function) node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FuncKind {
    Sin,
    Cos,
    Tan,
    Log,

    /// A function with no built-in meaning, written as a single letter, such as `f(x)`.
    UserNamed(String),
}

impl FuncKind {
    /// The names of the built-in functions.
    pub const KEYWORDS: [&'static str; 4] = ["sin", "cos", "tan", "log"];

    /// Returns the built-in function with the given name, if there is one.
    pub fn from_keyword(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "log" => Some(Self::Log),
            _ => None,
        }
    }

    /// Returns the name of the function.
    pub fn name(&self) -> &str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
            Self::UserNamed(name) => name,
        }
    }
}

impl fmt::Display for FuncKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
