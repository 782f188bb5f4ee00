pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer. This allows us
/// to backtrack in case of an error.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(Ok(kind)) = lexer.next() {
        tokens.push(Token {
            span: lexer.span(),
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
    fn matrix_product_is_one_token() {
        compare_tokens(
            "a ** b * c",
            [
                (TokenKind::Name, "a"),
                (TokenKind::Whitespace, " "),
                (TokenKind::MatMul, "**"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Name, "b"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Mul, "*"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Name, "c"),
            ],
        );
    }

    #[test]
    fn decimal_literal() {
        compare_tokens(
            "3.14 + x2",
            [
                (TokenKind::Float, "3.14"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Name, "x2"),
            ],
        );
    }

    #[test]
    fn trailing_dot_splits() {
        compare_tokens(
            "12.",
            [
                (TokenKind::Int, "12"),
                (TokenKind::Dot, "."),
            ],
        );
    }

    #[test]
    fn matrix_literal() {
        compare_tokens(
            "[[1,2];[3,4]]",
            [
                (TokenKind::OpenSquare, "["),
                (TokenKind::OpenSquare, "["),
                (TokenKind::Int, "1"),
                (TokenKind::Comma, ","),
                (TokenKind::Int, "2"),
                (TokenKind::CloseSquare, "]"),
                (TokenKind::Semicolon, ";"),
                (TokenKind::OpenSquare, "["),
                (TokenKind::Int, "3"),
                (TokenKind::Comma, ","),
                (TokenKind::Int, "4"),
                (TokenKind::CloseSquare, "]"),
                (TokenKind::CloseSquare, "]"),
            ],
        );
    }

    #[test]
    fn query_form() {
        compare_tokens(
            "x^2 = 0 ?",
            [
                (TokenKind::Name, "x"),
                (TokenKind::Exp, "^"),
                (TokenKind::Int, "2"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Assign, "="),
                (TokenKind::Whitespace, " "),
                (TokenKind::Int, "0"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Question, "?"),
            ],
        );
    }

    #[test]
    fn unknown_character() {
        compare_tokens(
            "1 @ 2",
            [
                (TokenKind::Int, "1"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Symbol, "@"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Int, "2"),
            ],
        );
    }
}
