//! The kinds of errors that can occur while parsing an expression.

use ariadne::Fmt;
use sym_attrs::ErrorKind;
use sym_error::{ErrorKind, EXPR};

/// A token that is not part of the expression grammar: a symbol, an uppercase letter, or a name
/// that is neither a single-letter variable nor a function keyword.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown token `{}`", lexeme),
    labels = ["I don't know what this means"],
    help = match suggestion {
        Some(keyword) => format!("did you mean the function `{}`?", keyword.fg(EXPR)),
        None => format!(
            "variables are single lowercase letters, and the available functions are {}",
            "sin, cos, tan, log".fg(EXPR),
        ),
    },
)]
pub struct UnknownToken {
    /// The text of the token.
    pub lexeme: String,

    /// The function keyword closest to the token, if one is close enough.
    pub suggestion: Option<&'static str>,
}

/// A parenthesis without a partner.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unbalanced parentheses",
    labels = [if *opening {
        "this parenthesis is never closed"
    } else {
        "this parenthesis has no matching opening parenthesis"
    }],
)]
pub struct UnbalancedParentheses {
    /// The unmatched parenthesis is an opening parenthesis. (Otherwise, it is a closing one.)
    pub opening: bool,
}

/// A region of the input did not reduce to exactly one expression, such as `()`, `2 +`, or
/// `(x)(y)`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected exactly one expression",
    labels = [match *trees {
        0 => "nothing to evaluate here".to_string(),
        n => format!("found {} separate expressions here", n),
    }],
    help = format!("check for a missing {} or operand", "operator".fg(EXPR)),
)]
pub struct EmptyExpression {
    /// The number of expressions the region reduced to.
    pub trees: usize,
}

/// A function keyword was used without a parenthesized argument, such as `sin x`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("missing argument list for `{}`", name),
    labels = ["expected `(` after this"],
    help = format!("write the argument in parentheses: {}", format!("{}(x)", name).fg(EXPR)),
)]
pub struct MissingCallParenthesis {
    /// The name of the function.
    pub name: String,
}

/// The expression is nested more deeply than the parser allows.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "maximum expression depth exceeded",
    labels = ["the expression gets too deep here"],
    help = format!("expressions may be nested at most {} levels deep", max_depth),
)]
pub struct RecursionLimit {
    /// The maximum allowed depth.
    pub max_depth: usize,
}
