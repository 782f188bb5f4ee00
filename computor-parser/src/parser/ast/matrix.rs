use std::ops::Range;
use crate::{
    parser::{
        error::{kind, Error},
        ast::expr::Expr,
        token::{CloseSquare, OpenSquare},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One row of a matrix literal, such as `[1, 2]` in `[[1, 2]; [3, 4]]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
struct MatRow {
    /// The elements of the row.
    values: Vec<Expr>,

    /// The region of the source code that this row was parsed from.
    span: Range<usize>,
}

impl Parse for MatRow {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let open = input.try_parse::<OpenSquare>()?;
        let values = input.try_parse_delimited::<Expr>(TokenKind::Comma)?;
        let close = input.try_parse::<CloseSquare>()?;
        Ok(Self {
            values,
            span: open.span.start..close.span.end,
        })
    }
}

/// A matrix literal, such as `[[1, 2]; [3, 4]]`. Rows are separated by semicolons and must all
/// have the same length, which is checked while parsing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatLit {
    /// The rows of the matrix, in row-major order.
    pub rows: Vec<Vec<Expr>>,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl MatLit {
    /// Returns the span of the matrix literal.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl Parse for MatLit {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let open = input.try_parse::<OpenSquare>()?;

        if input.clone().try_parse::<CloseSquare>().is_ok() {
            return Err(Error::new_fatal(vec![input.span()], kind::EmptyMatrix));
        }

        let rows = input.try_parse_delimited::<MatRow>(TokenKind::Semicolon)?;
        let close = input.try_parse::<CloseSquare>()?;

        let width = rows[0].values.len();
        for row in rows.iter().skip(1) {
            if row.values.len() != width {
                return Err(Error::new_fatal(
                    vec![row.span.clone(), rows[0].span.clone()],
                    kind::RowLengthMismatch {
                        found: row.values.len(),
                        expected: width,
                    },
                ));
            }
        }

        Ok(Self {
            rows: rows.into_iter().map(|row| row.values).collect(),
            span: open.span.start..close.span.end,
        })
    }
}
