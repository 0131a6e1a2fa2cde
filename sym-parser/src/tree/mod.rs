//! The expression tree shared by the parser and every engine that works with expressions.
//!
//! An [`Expr`] is immutable once built: engines that transform an expression always return a new
//! tree. The construction functions ([`Expr::add`], [`Expr::negate`], etc.) are purely structural
//! and never simplify their operands, so `Expr::add(Expr::constant(1), Expr::constant(2))` is a
//! node with two constant children, not the constant `3`.
//!
//! # Equality
//!
//! [`PartialEq`] is structural: two trees are equal if they have the same shape, the same
//! operators and functions, and equal leaves. [`Number`]s inside [`Expr::Constant`] compare by
//! value, so `2` and `2.0` are equal constants.

mod fmt;
pub mod number;
pub mod op;

pub use number::{ArithmeticError, Number};
pub use op::{Associativity, BinOpKind, FuncKind, Precedence};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The maximum depth of an expression tree that the parser will produce, and the default
/// recursion limit of the evaluator.
pub const MAX_RECURSION_DEPTH: usize = 1 << 9;

/// A node of an expression tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A numeric constant, such as `2` or `0.5`.
    Constant(Number),

    /// A variable, such as `x`.
    Variable(String),

    /// The negation of an expression, such as `-x`.
    Negation(Box<Expr>),

    /// A binary operation, such as `x + 1`.
    Binary(BinOpKind, Box<Expr>, Box<Expr>),

    /// A function applied to a single operand, such as `sin(x)` or `f(x)`.
    Function(FuncKind, Box<Expr>),
}

impl Expr {
    /// Creates a constant node.
    pub fn constant(value: impl Into<Number>) -> Self {
        Self::Constant(value.into())
    }

    /// Creates a variable node.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Creates a binary operation node.
    pub fn binary(kind: BinOpKind, lhs: Expr, rhs: Expr) -> Self {
        Self::Binary(kind, Box::new(lhs), Box::new(rhs))
    }

    /// Creates an addition node, `lhs + rhs`.
    pub fn add(lhs: Expr, rhs: Expr) -> Self {
        Self::binary(BinOpKind::Add, lhs, rhs)
    }

    /// Creates a subtraction node, `lhs - rhs`.
    pub fn sub(lhs: Expr, rhs: Expr) -> Self {
        Self::binary(BinOpKind::Sub, lhs, rhs)
    }

    /// Creates a multiplication node, `lhs * rhs`.
    pub fn mul(lhs: Expr, rhs: Expr) -> Self {
        Self::binary(BinOpKind::Mul, lhs, rhs)
    }

    /// Creates a division node, `lhs / rhs`.
    pub fn div(lhs: Expr, rhs: Expr) -> Self {
        Self::binary(BinOpKind::Div, lhs, rhs)
    }

    /// Creates an exponentiation node, `lhs ** rhs`.
    pub fn pow(lhs: Expr, rhs: Expr) -> Self {
        Self::binary(BinOpKind::Pow, lhs, rhs)
    }

    /// Creates a negation node, `-operand`.
    pub fn negate(operand: Expr) -> Self {
        Self::Negation(Box::new(operand))
    }

    /// Creates a function application node.
    pub fn function(kind: FuncKind, operand: Expr) -> Self {
        Self::Function(kind, Box::new(operand))
    }

    /// Returns the precedence of the node.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Constant(_) | Self::Variable(_) => Precedence::Atom,
            Self::Negation(_) | Self::Function(..) => Precedence::Unary,
            Self::Binary(kind, ..) => kind.precedence(),
        }
    }

    /// Returns the associativity of the node. Nodes that are not binary operations can never be
    /// regrouped and report [`Associativity::Both`].
    pub fn associativity(&self) -> Associativity {
        match self {
            Self::Binary(kind, ..) => kind.associativity(),
            _ => Associativity::Both,
        }
    }

    /// Returns the identity element of the node's operation, if it has one.
    ///
    /// This is `0` for `+` and `-`, and `1` for `*`, `/`, and `**` (as an exponent).
    pub fn identity(&self) -> Option<Expr> {
        match self {
            Self::Binary(BinOpKind::Add | BinOpKind::Sub, ..) => Some(Expr::constant(0)),
            Self::Binary(BinOpKind::Mul | BinOpKind::Div | BinOpKind::Pow, ..) => Some(Expr::constant(1)),
            _ => None,
        }
    }

    /// Returns the number stored in this node, if it is a constant.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Self::Constant(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns true if the node is a constant.
    pub fn is_constant(&self) -> bool {
        matches!(self, Self::Constant(_))
    }

    /// Returns true if the node is the constant zero.
    pub fn is_zero(&self) -> bool {
        self.as_number().map_or(false, Number::is_zero)
    }

    /// Returns true if the node is the constant one.
    pub fn is_one(&self) -> bool {
        self.as_number().map_or(false, Number::is_one)
    }

    /// Returns the direct children of the node, from left to right.
    pub fn children(&self) -> Vec<&Expr> {
        match self {
            Self::Constant(_) | Self::Variable(_) => Vec::new(),
            Self::Negation(operand) | Self::Function(_, operand) => vec![&**operand],
            Self::Binary(_, lhs, rhs) => vec![&**lhs, &**rhs],
        }
    }

    /// Returns the depth of the tree. A single leaf has depth 1.
    ///
    /// This does not recurse, so it is safe to call on trees of any depth.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 1)];
        while let Some((expr, depth)) = stack.pop() {
            max = max.max(depth);
            stack.extend(expr.children().into_iter().map(|child| (child, depth + 1)));
        }
        max
    }

    /// Returns true if the tree structurally contains the variable `var`.
    pub fn depends_on(&self, var: &str) -> bool {
        let mut stack = vec![self];
        while let Some(expr) = stack.pop() {
            match expr {
                Self::Variable(name) if name == var => return true,
                _ => stack.extend(expr.children()),
            }
        }
        false
    }

    /// Renders the expression as infix text that [`parse`](crate::parser::parse) accepts.
    ///
    /// This is the same as the [`Display`](std::fmt::Display) implementation.
    ///
    /// # Panics
    ///
    /// Panics if the tree is nested deeper than [`MAX_RECURSION_DEPTH`]. Use [`write!`] with the
    /// [`Display`](std::fmt::Display) implementation to get an error instead.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Moves the children of this node onto `stack`, leaving constant leaves in their place.
    fn take_children(&mut self, stack: &mut Vec<Expr>) {
        let placeholder = || Expr::Constant(Number::Int(0));
        match self {
            Self::Constant(_) | Self::Variable(_) => (),
            Self::Negation(operand) | Self::Function(_, operand) => {
                stack.push(std::mem::replace(&mut **operand, placeholder()));
            },
            Self::Binary(_, lhs, rhs) => {
                stack.push(std::mem::replace(&mut **lhs, placeholder()));
                stack.push(std::mem::replace(&mut **rhs, placeholder()));
            },
        }
    }
}

/// Drops the tree without recursing, so that dropping a deep tree cannot overflow the stack.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        self.take_children(&mut stack);
        while let Some(mut expr) = stack.pop() {
            expr.take_children(&mut stack);
        }
    }
}

impl From<Number> for Expr {
    fn from(n: Number) -> Self {
        Self::Constant(n)
    }
}
