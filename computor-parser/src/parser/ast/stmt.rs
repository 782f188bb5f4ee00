use std::ops::Range;
use crate::{
    parser::{
        error::Error,
        ast::expr::Expr,
        token::{Assign as AssignOp, Question},
        Parse,
        Parser,
    },
    try_parse_catch_fatal,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An evaluation query, such as `x + 2 = ?`. The expression is evaluated and its value printed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EvalQuery {
    /// The expression to evaluate.
    pub expr: Expr,

    /// The region of the source code that this query was parsed from.
    pub span: Range<usize>,
}

impl Parse for EvalQuery {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let expr = input.try_parse_with_fn(Expr::parse_non_assign)?;
        let _ = input.try_parse::<AssignOp>()?;
        let question = input.try_parse::<Question>()?;

        let span = expr.span().start..question.span.end;
        Ok(Self { expr, span })
    }
}

/// An equation to solve, such as `x^2 - 4 = 0 ?`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolveQuery {
    /// The left-hand side of the equation.
    pub lhs: Expr,

    /// The right-hand side of the equation.
    pub rhs: Expr,

    /// The region of the source code that this query was parsed from.
    pub span: Range<usize>,
}

impl Parse for SolveQuery {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let lhs = input.try_parse_with_fn(Expr::parse_non_assign)?;
        let _ = input.try_parse::<AssignOp>()?;
        let rhs = input.try_parse_with_fn(Expr::parse_non_assign)?;
        let question = input.try_parse::<Question>()?;

        let span = lhs.span().start..question.span.end;
        Ok(Self { lhs, rhs, span })
    }
}

/// A single line of input: a plain expression (possibly an assignment), an evaluation query, or
/// an equation to solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Stmt {
    /// A plain expression or assignment, evaluated for its value.
    Expr(Expr),

    /// An evaluation query: `expr = ?`.
    Eval(EvalQuery),

    /// An equation to solve: `lhs = rhs ?`.
    Solve(SolveQuery),
}

impl Stmt {
    /// Returns the span of the statement.
    pub fn span(&self) -> Range<usize> {
        match self {
            Stmt::Expr(expr) => expr.span(),
            Stmt::Eval(query) => query.span.clone(),
            Stmt::Solve(query) => query.span.clone(),
        }
    }
}

impl Parse for Stmt {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        // the query forms must be tried first: their `=` would otherwise parse as an assignment
        let _ = try_parse_catch_fatal!(input.try_parse::<EvalQuery>().map(Self::Eval));
        let _ = try_parse_catch_fatal!(input.try_parse::<SolveQuery>().map(Self::Solve));
        try_parse_catch_fatal!(input.try_parse::<Expr>().map(Self::Expr))
    }
}
