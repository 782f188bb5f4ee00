use std::ops::Range;
use crate::{
    parser::{
        error::{kind, Error},
        token::{Float, Int, Name},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
    try_parse_catch_fatal,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A number literal. Integers and decimals are both supported; the lexeme is kept as written and
/// converted to an exact rational by the evaluator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitNum {
    /// The source text of the number literal.
    pub value: String,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitNum {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let (lexeme, span) = input
            .try_parse::<Float>()
            .map(|num| (num.lexeme, num.span))
            .or_else(|_| input.try_parse::<Int>().map(|num| (num.lexeme, num.span)))?;

        // `12.` lexes as an integer followed by an adjacent dot
        if let Some(token) = input.current_token() {
            if token.kind == TokenKind::Dot && token.span.start == span.end {
                return Err(Error::new_fatal(
                    vec![span.start..token.span.end],
                    kind::MalformedNumber,
                ));
            }
        }

        Ok(Self {
            value: lexeme,
            span,
        })
    }
}

/// The imaginary unit, written as the standalone identifier `i`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitImag {
    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitImag {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.try_parse::<Name>()?;
        if token.lexeme == "i" {
            Ok(Self { span: token.span })
        } else {
            Err(Error::new(vec![token.span], kind::NonFatal))
        }
    }
}

/// A symbol / identifier literal. Symbols are used to represent variables and functions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitSym {
    /// The name of the symbol.
    pub name: String,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitSym {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.try_parse::<Name>()?;
        Ok(Self {
            name: token.lexeme,
            span: token.span,
        })
    }
}

/// Represents a literal value.
///
/// A literal is any value that is written directly into the source code: a number, the imaginary
/// unit, or an identifier.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Literal {
    /// A number literal, such as `42` or `3.14`.
    Num(LitNum),

    /// The imaginary unit `i`.
    Imag(LitImag),

    /// A symbol / identifier literal, such as `x` or `varA`.
    Sym(LitSym),
}

impl Literal {
    /// Returns the span of the literal.
    pub fn span(&self) -> Range<usize> {
        match self {
            Literal::Num(num) => num.span.clone(),
            Literal::Imag(imag) => imag.span.clone(),
            Literal::Sym(sym) => sym.span.clone(),
        }
    }
}

impl Parse for Literal {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let _ = try_parse_catch_fatal!(input.try_parse::<LitNum>().map(Literal::Num));
        let _ = try_parse_catch_fatal!(input.try_parse::<LitImag>().map(Literal::Imag));
        try_parse_catch_fatal!(input.try_parse::<LitSym>().map(Literal::Sym))
    }
}
