use ariadne::Fmt;
use computor_attrs::ErrorKind;
use computor_error::{ErrorKind, EXPR};
use crate::tokenizer::TokenKind;

/// An intentionally useless error. This should only be used for non-fatal errors, as it contains
/// no useful information.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "an internal non-fatal error occurred while parsing",
    labels = ["here"],
    help = "you should never see this error; please report this as a bug"
)]
pub struct NonFatal;

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of input",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of input",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
)]
pub struct ExpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!("expected one of: {}", expected.iter().map(|t| format!("{:?}", t)).collect::<Vec<_>>().join(", "))],
    help = format!("found {:?}", found),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// A parenthesis was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = if *opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// There was no expression inside a pair of parentheses.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression inside parenthesis",
    labels = ["add an expression here"],
)]
pub struct EmptyParenthesis;

/// A numeric literal ended with a dot without any fractional digits.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "malformed number literal",
    labels = ["this number is incomplete"],
    help = format!("add digits after the decimal point, or remove it: {}", "12.5".fg(EXPR)),
)]
pub struct MalformedNumber;

/// The rows of a matrix literal do not all have the same length.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "matrix rows have mismatched lengths",
    labels = [format!("this row has {} element(s)", found), format!("but this row has {} element(s)", expected)],
    help = "every row of a matrix literal must have the same number of elements",
)]
pub struct RowLengthMismatch {
    /// The number of elements of the first offending row.
    pub found: usize,

    /// The number of elements of the first row.
    pub expected: usize,
}

/// A matrix literal with no rows, such as `[]`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "empty matrix literal",
    labels = ["add at least one row here"],
    help = format!("a matrix literal looks like: {}", "[[1, 2]; [3, 4]]".fg(EXPR)),
)]
pub struct EmptyMatrix;

/// The same parameter name appears twice in a function header.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("duplicate parameter `{}` in function definition", name),
    labels = ["", "this parameter is already declared"],
    help = "every parameter of a function must have a distinct name",
)]
pub struct DuplicateParam {
    /// The name of the duplicated parameter.
    pub name: String,
}

/// An attempt to assign to the reserved identifier `i`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot assign to `{}`", name),
    labels = ["this name is reserved"],
    help = format!("`{}` always denotes the imaginary unit", "i".fg(EXPR)),
)]
pub struct ReservedName {
    /// The reserved name that was used.
    pub name: String,
}
