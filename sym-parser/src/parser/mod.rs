//! A Shunting-Yard parser that turns infix text into an [`Expr`] tree.
//!
//! The classic algorithm is extended in three ways:
//!
//! - A `-` at the start of the input, after another operator, or after `(` is a negation marker
//!   rather than subtraction. Pending negation markers are applied to the next value as soon as
//!   it is complete, whether that value is a number, a variable, a parenthesized group, or a
//!   function application.
//! - A function keyword (`sin`, `cos`, `tan`, `log`) followed by `(` opens a call group, which
//!   wraps its single argument in an [`Expr::Function`] when it closes.
//! - A single-letter name followed by `(` is treated as a user-named function, so `f(x + 1)`
//!   becomes `Function(UserNamed("f"), x + 1)`.
//!
//! Every parenthesized group is reduced to a single tree as soon as it closes, so each group can
//! be checked for emptiness independently.

pub mod error;

use crate::{
    tokenizer::{tokenize_complete, Token, TokenKind},
    tree::{BinOpKind, Expr, FuncKind, Number, MAX_RECURSION_DEPTH},
};
use error::{EmptyExpression, MissingCallParenthesis, RecursionLimit, UnbalancedParentheses, UnknownToken};
use std::ops::Range;
use sym_error::Error;
use tracing::trace;

/// An item on the operator stack.
#[derive(Debug, Clone)]
enum StackItem {
    /// A binary operator waiting for its right operand.
    Op(BinOpKind, Range<usize>),

    /// A negation marker waiting for the next complete value.
    Neg(Range<usize>),

    /// An opening parenthesis used for grouping.
    Paren { start: usize, span: Range<usize> },

    /// An opening parenthesis of a call to a built-in function.
    Call { kind: FuncKind, start: usize, span: Range<usize> },

    /// An opening parenthesis of a call to a user-named function. The function name is the value
    /// right before `start` in the output.
    UserCall { start: usize, span: Range<usize> },
}

/// An item of the postfix output queue.
#[derive(Debug, Clone)]
enum OutputItem {
    /// A complete value, along with the depth of its tree.
    Value(Expr, usize),

    /// A binary operator, applied to the two values before it.
    Op(BinOpKind, Range<usize>),
}

/// A Shunting-Yard parser over the tokens of a single expression.
#[derive(Debug)]
pub struct Parser<'source> {
    /// The tokens of the source, without whitespace.
    tokens: Box<[Token<'source>]>,

    /// The index of the next token to read.
    cursor: usize,

    /// The length of the source, used to point errors at the end of the input.
    source_len: usize,

    /// The operator stack.
    stack: Vec<StackItem>,

    /// The postfix output queue.
    output: Vec<OutputItem>,

    /// The maximum depth of the tree the parser will build.
    max_depth: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
            source_len: source.len(),
            stack: Vec::new(),
            output: Vec::new(),
            max_depth: MAX_RECURSION_DEPTH,
        }
    }

    /// Returns the token before the one most recently read.
    fn prev_token(&self) -> Option<&Token<'source>> {
        self.cursor.checked_sub(2).and_then(|i| self.tokens.get(i))
    }

    /// Returns the next token without consuming it.
    fn peek_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Returns true if a `-` read now is a negation marker rather than subtraction.
    fn is_unary_position(&self) -> bool {
        match self.prev_token() {
            None => true,
            Some(token) => token.kind.is_operator() || token.kind == TokenKind::OpenParen,
        }
    }

    /// Checks that a tree of the given depth is allowed.
    fn check_depth(&self, depth: usize, span: &Range<usize>) -> Result<(), Error> {
        if depth > self.max_depth {
            Err(Error::new(vec![span.clone()], RecursionLimit { max_depth: self.max_depth }))
        } else {
            Ok(())
        }
    }

    /// Pushes a complete value to the output, first applying every pending negation marker on top
    /// of the stack.
    fn complete_value(&mut self, mut value: Expr, mut depth: usize, span: &Range<usize>) -> Result<(), Error> {
        while let Some(StackItem::Neg(_)) = self.stack.last() {
            self.stack.pop();
            value = Expr::negate(value);
            depth += 1;
            self.check_depth(depth, span)?;
        }
        self.output.push(OutputItem::Value(value, depth));
        Ok(())
    }

    /// Pushes a binary operator, first moving operators of higher (or, for left-associative
    /// operators, equal) precedence to the output.
    fn push_operator(&mut self, kind: BinOpKind, span: Range<usize>) {
        while let Some(StackItem::Op(top, _)) = self.stack.last() {
            let pops = if kind == BinOpKind::Pow {
                top.precedence() > kind.precedence()
            } else {
                top.precedence() >= kind.precedence()
            };
            if !pops {
                break;
            }

            if let Some(StackItem::Op(top, top_span)) = self.stack.pop() {
                self.output.push(OutputItem::Op(top, top_span));
            }
        }
        self.stack.push(StackItem::Op(kind, span));
    }

    /// Reduces a postfix sequence into the trees it describes.
    fn reduce(&self, items: Vec<OutputItem>) -> Result<Vec<(Expr, usize)>, Error> {
        let mut values: Vec<(Expr, usize)> = Vec::new();
        for item in items {
            match item {
                OutputItem::Value(expr, depth) => values.push((expr, depth)),
                OutputItem::Op(kind, span) => {
                    let (Some((rhs, rhs_depth)), Some((lhs, lhs_depth))) = (values.pop(), values.pop()) else {
                        return Err(Error::new(vec![span], EmptyExpression { trees: 0 }));
                    };
                    let depth = lhs_depth.max(rhs_depth) + 1;
                    self.check_depth(depth, &span)?;
                    values.push((Expr::binary(kind, lhs, rhs), depth));
                },
            }
        }
        Ok(values)
    }

    /// Reduces the output from index `start` onwards into exactly one tree.
    fn reduce_group(&mut self, start: usize, span: Range<usize>) -> Result<(Expr, usize), Error> {
        let items = self.output.split_off(start);
        let mut values = self.reduce(items)?;
        match values.len() {
            1 => Ok(values.remove(0)),
            trees => Err(Error::new(vec![span], EmptyExpression { trees })),
        }
    }

    /// Handles a name token, which is a variable, a function keyword, or an unknown word.
    fn parse_name(&mut self, token: &Token<'source>) -> Result<(), Error> {
        let next_is_paren = self.peek_token().map_or(false, |t| t.kind == TokenKind::OpenParen);

        if let Some(kind) = FuncKind::from_keyword(token.lexeme) {
            if !next_is_paren {
                return Err(Error::new(vec![token.span.clone()], MissingCallParenthesis {
                    name: token.lexeme.to_string(),
                }));
            }

            let paren = &self.tokens[self.cursor];
            let span = token.span.start..paren.span.end;
            self.cursor += 1;
            trace!(function = token.lexeme, "opening call group");
            self.stack.push(StackItem::Call { kind, start: self.output.len(), span });
            return Ok(());
        }

        if token.lexeme.len() != 1 {
            return Err(Error::new(vec![token.span.clone()], UnknownToken {
                lexeme: token.lexeme.to_string(),
                suggestion: suggest_keyword(token.lexeme),
            }));
        }

        let variable = Expr::variable(token.lexeme);
        if next_is_paren {
            // the name becomes a user-named function when its call group closes, so any negation
            // applies to the call instead of the name
            self.output.push(OutputItem::Value(variable, 1));
            let paren = &self.tokens[self.cursor];
            let span = paren.span.clone();
            self.cursor += 1;
            trace!(function = token.lexeme, "opening user-named call group");
            self.stack.push(StackItem::UserCall { start: self.output.len(), span });
            Ok(())
        } else {
            self.complete_value(variable, 1, &token.span)
        }
    }

    /// Handles a closing parenthesis, reducing the group it closes.
    fn parse_close_paren(&mut self, token: &Token<'source>) -> Result<(), Error> {
        loop {
            match self.stack.pop() {
                Some(StackItem::Op(kind, span)) => self.output.push(OutputItem::Op(kind, span)),
                Some(StackItem::Neg(span)) => {
                    return Err(Error::new(vec![span.start..token.span.end], EmptyExpression { trees: 0 }));
                },
                Some(StackItem::Paren { start, span }) => {
                    let (value, depth) = self.reduce_group(start, span.start..token.span.end)?;
                    return self.complete_value(value, depth, &token.span);
                },
                Some(StackItem::Call { kind, start, span }) => {
                    let (value, depth) = self.reduce_group(start, span.start..token.span.end)?;
                    self.check_depth(depth + 1, &token.span)?;
                    return self.complete_value(Expr::function(kind, value), depth + 1, &token.span);
                },
                Some(StackItem::UserCall { start, span }) => {
                    let (value, depth) = self.reduce_group(start, span.start..token.span.end)?;
                    let name = match self.output.pop() {
                        Some(OutputItem::Value(Expr::Variable(ref name), _)) => name.clone(),
                        _ => return Err(Error::new(vec![span], EmptyExpression { trees: 0 })),
                    };
                    self.check_depth(depth + 1, &token.span)?;
                    let call = Expr::function(FuncKind::UserNamed(name), value);
                    return self.complete_value(call, depth + 1, &token.span);
                },
                None => {
                    return Err(Error::new(vec![token.span.clone()], UnbalancedParentheses { opening: false }));
                },
            }
        }
    }

    /// Parses the whole source into a single expression tree.
    pub fn parse(mut self) -> Result<Expr, Error> {
        while let Some(token) = self.tokens.get(self.cursor).cloned() {
            self.cursor += 1;
            match token.kind {
                TokenKind::Int => {
                    let value = token.lexeme.parse::<i64>()
                        .map(Number::Int)
                        .or_else(|_| token.lexeme.parse::<f64>().map(Number::Float))
                        .map_err(|_| unknown_token(&token))?;
                    self.complete_value(Expr::Constant(value), 1, &token.span)?;
                },
                TokenKind::Float => {
                    let value = token.lexeme.parse::<f64>().map_err(|_| unknown_token(&token))?;
                    self.complete_value(Expr::constant(value), 1, &token.span)?;
                },
                TokenKind::Name => self.parse_name(&token)?,
                TokenKind::Sub if self.is_unary_position() => {
                    trace!(at = token.span.start, "negation marker");
                    self.stack.push(StackItem::Neg(token.span));
                },
                TokenKind::Add => self.push_operator(BinOpKind::Add, token.span),
                TokenKind::Sub => self.push_operator(BinOpKind::Sub, token.span),
                TokenKind::Mul => self.push_operator(BinOpKind::Mul, token.span),
                TokenKind::Div => self.push_operator(BinOpKind::Div, token.span),
                TokenKind::Pow => self.push_operator(BinOpKind::Pow, token.span),
                TokenKind::OpenParen => {
                    self.stack.push(StackItem::Paren { start: self.output.len(), span: token.span });
                },
                TokenKind::CloseParen => self.parse_close_paren(&token)?,
                TokenKind::Whitespace | TokenKind::Symbol => return Err(unknown_token(&token)),
            }
        }

        while let Some(item) = self.stack.pop() {
            match item {
                StackItem::Op(kind, span) => self.output.push(OutputItem::Op(kind, span)),
                StackItem::Neg(span) => return Err(Error::new(vec![span], EmptyExpression { trees: 0 })),
                StackItem::Paren { span, .. }
                    | StackItem::Call { span, .. }
                    | StackItem::UserCall { span, .. } => {
                    return Err(Error::new(vec![span], UnbalancedParentheses { opening: true }));
                },
            }
        }

        let whole = 0..self.source_len;
        let (expr, _) = self.reduce_group(0, whole)?;
        Ok(expr)
    }
}

/// Builds an [`UnknownToken`] error for the given token.
fn unknown_token(token: &Token) -> Error {
    Error::new(vec![token.span.clone()], UnknownToken {
        lexeme: token.lexeme.to_string(),
        suggestion: suggest_keyword(token.lexeme),
    })
}

/// Returns the function keyword closest to `word`, if it is within an edit distance of 2.
fn suggest_keyword(word: &str) -> Option<&'static str> {
    FuncKind::KEYWORDS
        .iter()
        .map(|keyword| (keyword, levenshtein::levenshtein(word, keyword)))
        .filter(|(_, distance)| *distance <= 2)
        .min_by_key(|(_, distance)| *distance)
        .map(|(keyword, _)| *keyword)
}

/// Parses an infix expression into an expression tree.
pub fn parse(source: &str) -> Result<Expr, Error> {
    Parser::new(source).parse()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Expr {
        Expr::variable("x")
    }

    fn c(n: i64) -> Expr {
        Expr::constant(n)
    }

    #[test]
    fn precedence() {
        assert_eq!(parse("2+3*4").unwrap(), Expr::add(c(2), Expr::mul(c(3), c(4))));
        assert_eq!(parse("(2+3)*4").unwrap(), Expr::mul(Expr::add(c(2), c(3)), c(4)));
        assert_eq!(parse("2*x**3").unwrap(), Expr::mul(c(2), Expr::pow(x(), c(3))));
    }

    #[test]
    fn left_associativity() {
        assert_eq!(parse("8-3-1").unwrap(), Expr::sub(Expr::sub(c(8), c(3)), c(1)));
        assert_eq!(parse("8/4/2").unwrap(), Expr::div(Expr::div(c(8), c(4)), c(2)));
    }

    #[test]
    fn power_is_right_associative() {
        assert_eq!(parse("2**3**2").unwrap(), Expr::pow(c(2), Expr::pow(c(3), c(2))));
        assert_eq!(parse("2* *3").unwrap(), Expr::pow(c(2), c(3)));
    }

    #[test]
    fn unary_minus() {
        assert_eq!(parse("-3+5").unwrap(), Expr::add(Expr::negate(c(3)), c(5)));
        assert_eq!(parse("2*-x").unwrap(), Expr::mul(c(2), Expr::negate(x())));
        assert_eq!(parse("(-x)").unwrap(), Expr::negate(x()));
        assert_eq!(parse("--x").unwrap(), Expr::negate(Expr::negate(x())));
        assert_eq!(parse("x--x").unwrap(), Expr::sub(x(), Expr::negate(x())));
    }

    #[test]
    fn negation_of_groups_and_calls() {
        assert_eq!(parse("-(x+1)").unwrap(), Expr::negate(Expr::add(x(), c(1))));
        assert_eq!(
            parse("-sin(x)").unwrap(),
            Expr::negate(Expr::function(FuncKind::Sin, x())),
        );
        assert_eq!(
            parse("-f(x)").unwrap(),
            Expr::negate(Expr::function(FuncKind::UserNamed("f".to_string()), x())),
        );
    }

    #[test]
    fn negation_binds_to_the_next_value() {
        assert_eq!(parse("-x**2").unwrap(), Expr::pow(Expr::negate(x()), c(2)));
        assert_eq!(parse("-(x**2)").unwrap(), Expr::negate(Expr::pow(x(), c(2))));
    }

    #[test]
    fn keyword_functions() {
        assert_eq!(
            parse("sin(x)*cos(2*x)").unwrap(),
            Expr::mul(
                Expr::function(FuncKind::Sin, x()),
                Expr::function(FuncKind::Cos, Expr::mul(c(2), x())),
            ),
        );
        assert_eq!(
            parse("log(tan(x))").unwrap(),
            Expr::function(FuncKind::Log, Expr::function(FuncKind::Tan, x())),
        );
    }

    #[test]
    fn user_named_functions() {
        assert_eq!(
            parse("2*g(x+1)").unwrap(),
            Expr::mul(c(2), Expr::function(FuncKind::UserNamed("g".to_string()), Expr::add(x(), c(1)))),
        );
    }

    #[test]
    fn numbers() {
        assert_eq!(parse("2.5").unwrap(), Expr::constant(2.5));
        assert_eq!(parse(".5").unwrap(), Expr::constant(0.5));
        assert_eq!(parse("99999999999999999999").unwrap(), Expr::constant(1e20));
    }

    #[test]
    fn unknown_tokens() {
        let err = parse("x + $").unwrap_err();
        assert!(err.is::<UnknownToken>());
        assert_eq!(err.spans, vec![4..5]);

        let err = parse("sni(x)").unwrap_err();
        assert_eq!(
            err.downcast_ref::<UnknownToken>(),
            Some(&UnknownToken { lexeme: "sni".to_string(), suggestion: Some("sin") }),
        );

        assert!(parse("X").unwrap_err().is::<UnknownToken>());
        assert!(parse("abc").unwrap_err().is::<UnknownToken>());
    }

    #[test]
    fn unbalanced_parentheses() {
        let err = parse("(x+1").unwrap_err();
        assert_eq!(err.downcast_ref::<UnbalancedParentheses>(), Some(&UnbalancedParentheses { opening: true }));
        assert_eq!(err.spans, vec![0..1]);

        let err = parse("x+1)").unwrap_err();
        assert_eq!(err.downcast_ref::<UnbalancedParentheses>(), Some(&UnbalancedParentheses { opening: false }));

        assert!(parse("sin(x").unwrap_err().is::<UnbalancedParentheses>());
    }

    #[test]
    fn empty_expressions() {
        assert!(parse("").unwrap_err().is::<EmptyExpression>());
        assert!(parse("()").unwrap_err().is::<EmptyExpression>());
        assert!(parse("2+").unwrap_err().is::<EmptyExpression>());
        assert!(parse("-").unwrap_err().is::<EmptyExpression>());
        assert!(parse("sin()").unwrap_err().is::<EmptyExpression>());

        let err = parse("(x)(y)").unwrap_err();
        assert_eq!(err.downcast_ref::<EmptyExpression>(), Some(&EmptyExpression { trees: 2 }));
    }

    #[test]
    fn missing_call_parenthesis() {
        let err = parse("sin x").unwrap_err();
        assert!(err.is::<MissingCallParenthesis>());
        assert_eq!(err.spans, vec![0..3]);
    }

    #[test]
    fn recursion_limit() {
        let source = format!("{}x{}", "(".repeat(100), ")".repeat(100));
        assert_eq!(parse(&source).unwrap(), x());

        let source = "-".repeat(MAX_RECURSION_DEPTH + 1) + "x";
        assert!(parse(&source).unwrap_err().is::<RecursionLimit>());

        let source = vec!["x"; MAX_RECURSION_DEPTH + 2].join("**");
        assert!(parse(&source).unwrap_err().is::<RecursionLimit>());
    }

    #[test]
    fn report_points_at_token() {
        let source = "2 + sni(x)";
        let err = parse(source).unwrap_err();
        let report = err.report_to_string("input", source);
        let stripped = String::from_utf8(strip_ansi_escapes::strip(report)).unwrap();
        assert!(stripped.contains("unknown token `sni`"));
        assert!(stripped.contains("did you mean the function `sin`?"));
    }
}
