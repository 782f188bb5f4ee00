use std::ops::Range;
use crate::{
    parser::{
        error::{kind, Error},
        ast::{expr::Expr, literal::LitSym},
        token::{Assign as AssignOp, CloseParen, OpenParen},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
    try_parse_catch_fatal,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A function header, **not including the body**, such as `f(x)` in `f(x) = x^2`. Parameters are
/// plain identifiers and must be pairwise distinct.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FuncHeader {
    /// The name of the function.
    pub name: LitSym,

    /// The parameters of the function.
    pub params: Vec<LitSym>,

    /// The region of the source code that this function header was parsed from.
    pub span: Range<usize>,
}

impl FuncHeader {
    /// Returns the span of the function header.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl Parse for FuncHeader {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let name = input.try_parse::<LitSym>()?;
        let _ = input.try_parse::<OpenParen>()?;
        let params = input.try_parse_delimited::<LitSym>(TokenKind::Comma)?;
        let close = input.try_parse::<CloseParen>()?;

        let span = name.span.start..close.span.end;
        Ok(Self { name, params, span })
    }
}

/// An assignment target, such as `x` or `f(x)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AssignTarget {
    /// A symbol, such as `x`.
    Symbol(LitSym),

    /// A function, such as `f(x)`.
    Func(FuncHeader),
}

impl AssignTarget {
    /// Returns the span of the assignment target.
    pub fn span(&self) -> Range<usize> {
        match self {
            AssignTarget::Symbol(symbol) => symbol.span.clone(),
            AssignTarget::Func(func) => func.span(),
        }
    }

    /// Validates the target once an `=` has been seen: the target name must not be the reserved
    /// imaginary unit, and function parameters must be distinct non-reserved identifiers.
    fn validate(&self) -> Result<(), Error> {
        let check_reserved = |symbol: &LitSym| {
            if symbol.name.eq_ignore_ascii_case("i") {
                Err(Error::new_fatal(
                    vec![symbol.span.clone()],
                    kind::ReservedName { name: symbol.name.clone() },
                ))
            } else {
                Ok(())
            }
        };

        match self {
            AssignTarget::Symbol(symbol) => check_reserved(symbol),
            AssignTarget::Func(header) => {
                check_reserved(&header.name)?;
                for (index, param) in header.params.iter().enumerate() {
                    check_reserved(param)?;
                    if let Some(first) = header.params[..index]
                        .iter()
                        .find(|other| other.name.eq_ignore_ascii_case(&param.name))
                    {
                        return Err(Error::new_fatal(
                            vec![first.span.clone(), param.span.clone()],
                            kind::DuplicateParam { name: param.name.clone() },
                        ));
                    }
                }
                Ok(())
            },
        }
    }
}

impl Parse for AssignTarget {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let _ = try_parse_catch_fatal!(input.try_parse::<FuncHeader>().map(AssignTarget::Func));
        input.try_parse::<LitSym>().map(AssignTarget::Symbol)
    }
}

/// An assignment of a variable or function, such as `x = 1` or `f(x) = x^2`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Assign {
    /// The target to assign to.
    pub target: AssignTarget,

    /// The expression to assign to the target.
    pub value: Box<Expr>,

    /// The region of the source code that this assignment expression was parsed from.
    pub span: Range<usize>,
}

impl Assign {
    /// Returns the span of the assignment expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl Parse for Assign {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let target = input.try_parse::<AssignTarget>()?;
        input.try_parse::<AssignOp>()?;

        // only now is this known to be an assignment; the same source could otherwise have been a
        // call expression, where duplicate arguments are fine
        target.validate()?;

        let value = match input.try_parse::<Expr>() {
            Ok(value) => value,
            Err(mut err) => {
                err.fatal = true;
                return Err(err);
            },
        };

        let span = target.span().start..value.span().end;
        Ok(Self {
            target,
            value: Box::new(value),
            span,
        })
    }
}
