pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the meaningful tokens produced by the tokenizer.
///
/// Whitespace is dropped, and two `*` tokens that follow each other (even with whitespace
/// between them) are merged into a single [`TokenKind::Pow`] token spanning both.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens: Vec<Token> = Vec::new();

    while let Some(Ok(kind)) = lexer.next() {
        if kind.is_whitespace() {
            continue;
        }

        let span = lexer.span();
        if let Some(last) = tokens.last_mut() {
            if last.kind == TokenKind::Mul && kind == TokenKind::Mul {
                last.kind = TokenKind::Pow;
                last.span = last.span.start..span.end;
                last.lexeme = &input[last.span.clone()];
                continue;
            }
        }

        tokens.push(Token {
            span,
            kind,
            lexeme: lexer.slice(),
        });
    }

    tokens.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    /// Compares the kinds of the complete token stream.
    fn compare_complete(input: &str, expected: &[(TokenKind, &str)]) {
        let tokens = tokenize_complete(input);
        let got = tokens.iter().map(|t| (t.kind, t.lexeme)).collect::<Vec<_>>();
        assert_eq!(got, expected);
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "1 + 2",
            [
                (TokenKind::Int, "1"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Int, "2"),
            ],
        );
    }

    #[test]
    fn mixed_expr() {
        compare_tokens(
            "3.5*sin(x)**2 - .25 / $",
            [
                (TokenKind::Float, "3.5"),
                (TokenKind::Mul, "*"),
                (TokenKind::Name, "sin"),
                (TokenKind::OpenParen, "("),
                (TokenKind::Name, "x"),
                (TokenKind::CloseParen, ")"),
                (TokenKind::Pow, "**"),
                (TokenKind::Int, "2"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Sub, "-"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Float, ".25"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Div, "/"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Symbol, "$"),
            ],
        );
    }

    #[test]
    fn uppercase_is_symbol() {
        compare_tokens("X", [(TokenKind::Symbol, "X")]);
    }

    #[test]
    fn complete_drops_whitespace() {
        compare_complete(
            "  x +\t1 ",
            &[
                (TokenKind::Name, "x"),
                (TokenKind::Add, "+"),
                (TokenKind::Int, "1"),
            ],
        );
    }

    #[test]
    fn complete_merges_split_power() {
        compare_complete(
            "x * * 2",
            &[
                (TokenKind::Name, "x"),
                (TokenKind::Pow, "* *"),
                (TokenKind::Int, "2"),
            ],
        );
        assert_eq!(tokenize_complete("x* *2")[1].span, 1..4);
    }

    #[test]
    fn complete_triple_star() {
        // `***` lexes as `**` then `*`, which merge no further
        compare_complete(
            "x***y",
            &[
                (TokenKind::Name, "x"),
                (TokenKind::Pow, "**"),
                (TokenKind::Mul, "*"),
                (TokenKind::Name, "y"),
            ],
        );
    }
}
