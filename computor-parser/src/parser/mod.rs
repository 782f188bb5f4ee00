pub mod ast;
pub mod error;
pub mod fmt;
pub mod token;

use crate::tokenizer::{tokenize_complete, Token, TokenKind};
use error::{kind, Error, ErrorKind};
use std::ops::Range;

/// Attempts to parse a value from the given stream of tokens, using multiple parsing functions
/// in order. The first function that succeeds is used to parse the value.
///
/// This function can also catch fatal errors and immediately short-circuit the parsing
/// process.
///
/// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
/// value is returned. Otherwise, the stream is left unchanged and the error of the last
/// attempted parsing function is returned.
#[macro_export]
macro_rules! try_parse_catch_fatal {
    ($($expr:expr),+ $(,)?) => {{
        $(
            match $expr {
                Ok(value) => return Ok(value),
                Err(err) if err.fatal => return Err(err),
                // ignore this error and try the next parser, or return it
                err => err,
            }
        )+
    }};
}

/// A high-level parser for the language. This is the type to use to parse an arbitrary piece of
/// code into an abstract syntax tree.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
        }
    }

    /// Creates a non-fatal error that points at the current token, or the end of the source code
    /// if the cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Creates a fatal error that points at the current token, or the end of the source code if
    /// the cursor is at the end of the stream.
    pub fn error_fatal(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new_fatal(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Move the cursor to the previous token. This function is a no-op if the cursor is at the
    /// beginning of the stream.
    pub fn prev(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Returns the previous token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the beginning of the stream.
    pub fn prev_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor.checked_sub(1)?)
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Moves this parser's cursor to the position of the given parser's cursor. Useful after
    /// speculatively parsing with a cloned parser.
    pub fn set_cursor(&mut self, other: &Parser) {
        self.cursor = other.cursor;
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        while self.cursor < self.tokens.len() {
            let token = &self.tokens[self.cursor];
            self.cursor += 1;
            if token.is_ignore() {
                continue;
            } else {
                // cloning is cheap: only Range<_> is cloned
                return Ok(token.clone());
            }
        }

        Err(self.error(kind::UnexpectedEof))
    }

    /// Speculatively parses a value from the given stream of tokens. This function can be used
    /// in the [`Parse::parse`] implementation of a type with the given [`Parser`], as it will
    /// automatically backtrack the cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        self.try_parse_with_fn(T::parse)
    }

    /// Speculatively parses multiple values (at least one) from the given stream of tokens, each
    /// delimited by a certain token.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// values are returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_delimited<T: Parse>(&mut self, delimiter: TokenKind) -> Result<Vec<T>, Error> {
        let start = self.cursor;
        let mut values = Vec::new();

        loop {
            match self.try_parse::<T>() {
                Ok(value) => values.push(value),
                Err(err) => {
                    if values.is_empty() {
                        self.cursor = start;
                        return Err(err);
                    } else {
                        return Ok(values);
                    }
                },
            }

            // skip whitespace before checking for the delimiter
            while self.current_token().is_some_and(|token| token.is_ignore()) {
                self.cursor += 1;
            }

            match self.current_token() {
                Some(token) if token.kind == delimiter => {
                    self.cursor += 1;
                },
                _ => return Ok(values),
            }
        }
    }

    /// Speculatively parses a value from the given stream of tokens, using a custom parsing
    /// function to parse the value.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_with_fn<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Parser) -> Result<T, Error>,
    {
        let start = self.cursor;
        match f(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Speculatively parses a value from the given stream of tokens, with a validation predicate.
    /// The value must parse successfully, **and** the predicate must return [`Ok`] for this
    /// function to return successfully.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_then<T: Parse, F>(&mut self, predicate: F) -> Result<T, Error>
    where
        F: FnOnce(&T, &Parser) -> Result<(), Error>,
    {
        let start = self.cursor;

        // closure workaround allows us to use `?` in the closure
        let mut compute = || -> Result<T, Error> {
            let value = T::parse(self)?;
            predicate(&value, self)?;
            Ok(value)
        };

        match compute() {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;

        // whitespace at the end of the input is fine
        while let Some(token) = self.current_token() {
            if token.is_ignore() {
                self.cursor += 1;
            } else {
                break;
            }
        }

        if self.cursor == self.tokens.len() {
            Ok(value)
        } else {
            Err(self.error_fatal(kind::ExpectedEof))
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// The associativity of a binary or unary operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Associativity {
    /// The operation is left-associative: `a op b op c` is evaluated as `(a op b) op c`.
    Left,

    /// The operation is right-associative: `a op b op c` is evaluated as `a op (b op c)`.
    Right,
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Precedence {
    /// Any precedence.
    Any,

    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`), division (`/`), remainder (`%`), and the matrix
    /// product (`**`), which separate factors.
    Factor,

    /// Precedence of unary negation (`-`).
    Neg,

    /// Precedence of exponentiation (`^`).
    Exp,
}

impl PartialOrd for Precedence {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        let left = *self as u8;
        let right = *other as u8;
        left.partial_cmp(&right)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use super::ast::assign::{Assign, AssignTarget, FuncHeader};
    use super::ast::binary::Binary;
    use super::ast::call::Call;
    use super::ast::expr::Expr;
    use super::ast::literal::{LitImag, Literal, LitNum, LitSym};
    use super::ast::stmt::{EvalQuery, SolveQuery, Stmt};
    use super::ast::unary::Unary;
    use super::token::op::{BinOp, BinOpKind, UnaryOp, UnaryOpKind};

    #[test]
    fn literal_int() {
        let mut parser = Parser::new("16");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Literal(Literal::Num(LitNum {
            value: "16".to_string(),
            span: 0..2,
        })));
    }

    #[test]
    fn literal_decimal() {
        let mut parser = Parser::new("3.14");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Literal(Literal::Num(LitNum {
            value: "3.14".to_string(),
            span: 0..4,
        })));
    }

    #[test]
    fn literal_imaginary() {
        let mut parser = Parser::new("i");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Literal(Literal::Imag(LitImag { span: 0..1 })));
    }

    #[test]
    fn literal_symbol() {
        let mut parser = Parser::new("varA");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Literal(Literal::Sym(LitSym {
            name: "varA".to_string(),
            span: 0..4,
        })));
    }

    #[test]
    fn trailing_dot_is_rejected() {
        let mut parser = Parser::new("12.");
        let err = parser.try_parse_full::<Expr>().unwrap_err();
        assert!(err.fatal);
    }

    #[test]
    fn binary_left_associativity_mix_precedence() {
        let mut parser = Parser::new("3 + 4 * a");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Binary(Binary {
            lhs: Box::new(Expr::Literal(Literal::Num(LitNum {
                value: "3".to_string(),
                span: 0..1,
            }))),
            op: BinOp { kind: BinOpKind::Add, span: 2..3 },
            rhs: Box::new(Expr::Binary(Binary {
                lhs: Box::new(Expr::Literal(Literal::Num(LitNum {
                    value: "4".to_string(),
                    span: 4..5,
                }))),
                op: BinOp { kind: BinOpKind::Mul, span: 6..7 },
                rhs: Box::new(Expr::Literal(Literal::Sym(LitSym {
                    name: "a".to_string(),
                    span: 8..9,
                }))),
                span: 4..9,
            })),
            span: 0..9,
        }));
    }

    #[test]
    fn binary_right_associativity() {
        let mut parser = Parser::new("1 ^ 2 ^ 3");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Binary(Binary {
            lhs: Box::new(Expr::Literal(Literal::Num(LitNum {
                value: "1".to_string(),
                span: 0..1,
            }))),
            op: BinOp { kind: BinOpKind::Exp, span: 2..3 },
            rhs: Box::new(Expr::Binary(Binary {
                lhs: Box::new(Expr::Literal(Literal::Num(LitNum {
                    value: "2".to_string(),
                    span: 4..5,
                }))),
                op: BinOp { kind: BinOpKind::Exp, span: 6..7 },
                rhs: Box::new(Expr::Literal(Literal::Num(LitNum {
                    value: "3".to_string(),
                    span: 8..9,
                }))),
                span: 4..9,
            })),
            span: 0..9,
        }));
    }

    #[test]
    fn unary_binds_weaker_than_power() {
        let mut parser = Parser::new("-x^2");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Unary(Unary {
            operand: Box::new(Expr::Binary(Binary {
                lhs: Box::new(Expr::Literal(Literal::Sym(LitSym {
                    name: "x".to_string(),
                    span: 1..2,
                }))),
                op: BinOp { kind: BinOpKind::Exp, span: 2..3 },
                rhs: Box::new(Expr::Literal(Literal::Num(LitNum {
                    value: "2".to_string(),
                    span: 3..4,
                }))),
                span: 1..4,
            })),
            op: UnaryOp { kind: UnaryOpKind::Neg, span: 0..1 },
            span: 0..4,
        }));
    }

    #[test]
    fn matrix_product_precedence() {
        let mut parser = Parser::new("a ** b + c");
        let Expr::Binary(outer) = parser.try_parse_full::<Expr>().unwrap() else {
            panic!("expected binary expression");
        };
        assert_eq!(outer.op.kind, BinOpKind::Add);

        let Expr::Binary(inner) = *outer.lhs else {
            panic!("expected binary expression");
        };
        assert_eq!(inner.op.kind, BinOpKind::MatMul);
    }

    #[test]
    fn implicit_multiplication_is_rejected() {
        let mut parser = Parser::new("2x");
        assert!(parser.try_parse_full::<Expr>().is_err());
    }

    #[test]
    fn matrix_literal() {
        let mut parser = Parser::new("[[1, 2]; [3, 4]]");
        let Expr::Matrix(matrix) = parser.try_parse_full::<Expr>().unwrap() else {
            panic!("expected matrix literal");
        };

        assert_eq!(matrix.rows.len(), 2);
        assert_eq!(matrix.rows[0].len(), 2);
        assert_eq!(matrix.span, 0..16);
    }

    #[test]
    fn matrix_row_mismatch() {
        let mut parser = Parser::new("[[1, 2]; [3]]");
        let err = parser.try_parse_full::<Expr>().unwrap_err();
        assert!(err.fatal);
    }

    #[test]
    fn assign_to_var() {
        let mut parser = Parser::new("x = 1 / 3");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Assign(Assign {
            target: AssignTarget::Symbol(LitSym {
                name: "x".to_string(),
                span: 0..1,
            }),
            value: Box::new(Expr::Binary(Binary {
                lhs: Box::new(Expr::Literal(Literal::Num(LitNum {
                    value: "1".to_string(),
                    span: 4..5,
                }))),
                op: BinOp { kind: BinOpKind::Div, span: 6..7 },
                rhs: Box::new(Expr::Literal(Literal::Num(LitNum {
                    value: "3".to_string(),
                    span: 8..9,
                }))),
                span: 4..9,
            })),
            span: 0..9,
        }));
    }

    #[test]
    fn assign_to_function() {
        let mut parser = Parser::new("f(x, y) = x ^ y");
        let Expr::Assign(assign) = parser.try_parse_full::<Expr>().unwrap() else {
            panic!("expected assignment");
        };

        assert_eq!(assign.target, AssignTarget::Func(FuncHeader {
            name: LitSym { name: "f".to_string(), span: 0..1 },
            params: vec![
                LitSym { name: "x".to_string(), span: 2..3 },
                LitSym { name: "y".to_string(), span: 5..6 },
            ],
            span: 0..7,
        }));
    }

    #[test]
    fn assign_to_imaginary_unit() {
        let mut parser = Parser::new("i = 4");
        let err = parser.try_parse_full::<Expr>().unwrap_err();
        assert!(err.fatal);
    }

    #[test]
    fn duplicate_function_params() {
        let mut parser = Parser::new("f(x, x) = x");
        let err = parser.try_parse_full::<Expr>().unwrap_err();
        assert!(err.fatal);
    }

    #[test]
    fn duplicate_call_args_are_fine() {
        let mut parser = Parser::new("f(x, x)");
        let Expr::Call(call) = parser.try_parse_full::<Expr>().unwrap() else {
            panic!("expected call");
        };
        assert_eq!(call.args.len(), 2);
    }

    #[test]
    fn function_call() {
        let mut parser = Parser::new("f(x)");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Call(Call {
            name: LitSym {
                name: "f".to_string(),
                span: 0..1,
            },
            args: vec![
                Expr::Literal(Literal::Sym(LitSym {
                    name: "x".to_string(),
                    span: 2..3,
                })),
            ],
            span: 0..4,
            paren_span: 1..4,
        }));
    }

    #[test]
    fn eval_query() {
        let mut parser = Parser::new("x + 2 = ?");
        let Stmt::Eval(EvalQuery { expr, span }) = parser.try_parse_full::<Stmt>().unwrap() else {
            panic!("expected evaluation query");
        };
        assert_eq!(span, 0..9);
        assert!(matches!(expr, Expr::Binary(_)));
    }

    #[test]
    fn solve_query() {
        let mut parser = Parser::new("x^2 - 4 = 0 ?");
        let Stmt::Solve(SolveQuery { lhs, rhs, span }) = parser.try_parse_full::<Stmt>().unwrap() else {
            panic!("expected solve query");
        };
        assert_eq!(span, 0..13);
        assert!(matches!(lhs, Expr::Binary(_)));
        assert!(matches!(rhs, Expr::Literal(_)));
    }

    #[test]
    fn plain_assignment_is_not_a_query() {
        let mut parser = Parser::new("x = 2");
        let stmt = parser.try_parse_full::<Stmt>().unwrap();
        assert!(matches!(stmt, Stmt::Expr(Expr::Assign(_))));
    }

    #[test]
    fn display_round_trip() {
        for source in ["x ^ 2 + 1", "f(x, y) = x ^ y", "[[1, 2];[3, 4]]", "-(x + 1)", "2 * x = 4 ?"] {
            let mut parser = Parser::new(source);
            let stmt = parser.try_parse_full::<Stmt>().unwrap();
            assert_eq!(format!("{}", stmt), source);
        }
    }
}
