use ariadne::Fmt;
use computor_attrs::ErrorKind;
use computor_error::{ErrorKind, EXPR};

/// The function is undefined.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the `{}` function does not exist", name),
    labels = ["this function"],
    help = if suggestions.is_empty() {
        "define it first, or use one of the builtin functions".to_string()
    } else if suggestions.len() == 1 {
        format!("did you mean the `{}` function?", (&*suggestions[0]).fg(EXPR))
    } else {
        format!(
            "did you mean one of these functions? {}",
            suggestions
                .iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
)]
pub struct UndefinedFunction {
    /// The name of the function that was undefined.
    pub name: String,

    /// A list of similarly named functions, if any.
    pub suggestions: Vec<String>,
}

/// A function call had the wrong number of arguments.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("wrong number of arguments for the `{}` function", name),
    labels = ["this function call"],
    help = format!(
        "the `{}` function takes {} argument(s); there are {} argument(s) provided here",
        name.fg(EXPR),
        expected,
        given
    )
)]
pub struct WrongArgumentCount {
    /// The name of the function that was called.
    pub name: String,

    /// The number of arguments that were expected.
    pub expected: usize,

    /// The number of arguments that were given.
    pub given: usize,
}

/// An argument to a builtin function had the wrong type.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid argument for the `{}` function", name),
    labels = ["this function call", "this argument"],
    help = format!("expected {}, found {}", expected.fg(EXPR), found),
)]
pub struct TypeMismatch {
    /// The name of the builtin that was called.
    pub name: String,

    /// The index of the offending argument.
    pub index: usize,

    /// A description of the expected type.
    pub expected: &'static str,

    /// The typename of the value that was given.
    pub found: &'static str,
}

/// The given binary operation cannot be applied to the given operands.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot apply `{}` to `{}` and `{}`", op, left, right),
    labels = ["", "this operator", ""],
)]
pub struct InvalidBinaryOperation {
    /// The operator that was applied.
    pub op: &'static str,

    /// The typename of the left operand.
    pub left: &'static str,

    /// The typename of the right operand.
    pub right: &'static str,
}

/// The given unary operation cannot be applied to the given operand.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot apply `{}` to `{}`", op, operand),
    labels = ["this operator", ""],
)]
pub struct InvalidUnaryOperation {
    /// The operator that was applied.
    pub op: &'static str,

    /// The typename of the operand.
    pub operand: &'static str,
}

/// Division by zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    labels = ["", "", "this evaluates to zero"],
)]
pub struct DivisionByZero;

/// The remainder operator applied to non-integer operands.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "`%` is only defined for integers",
    labels = ["", "this operator", ""],
)]
pub struct NonIntegerRemainder;

/// The exponent does not reduce to an integer.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "exponent must be an integer",
    labels = ["", "", "this exponent"],
)]
pub struct NonIntegerExponent;

/// The exponent of a symbolic expression contains a free variable.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "symbolic exponent unsupported",
    labels = ["", "", "this exponent contains a free variable"],
)]
pub struct SymbolicExponent;

/// A negative exponent on an operand that cannot be inverted.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("exponent must be a non-negative integer for `{}`", operand),
    labels = ["", "", "this exponent is negative"],
)]
pub struct NegativeExponent {
    /// The typename of the base operand.
    pub operand: &'static str,
}

/// The exponent is too large to compute with.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "exponent is too large",
    labels = ["", "", "this exponent"],
)]
pub struct ExponentOverflow;

/// Division of a symbolic expression by something other than a non-zero scalar.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "non-scalar division in symbolic context",
    labels = ["", "this operator", ""],
    help = "an expression with free variables can only be divided by a non-zero number",
)]
pub struct NonScalarDivision;

/// The shapes of two matrices are incompatible for the attempted operation.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!(
        "matrix dimensions do not match: {}x{} and {}x{}",
        left.0, left.1, right.0, right.1
    ),
    labels = ["", "this operator", ""],
)]
pub struct DimensionMismatch {
    /// The shape of the left operand.
    pub left: (usize, usize),

    /// The shape of the right operand.
    pub right: (usize, usize),
}

/// An operation that requires a square matrix was applied to a non-square one.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("this operation requires a square matrix, but the matrix is {}x{}", rows, cols),
    labels = ["here"],
)]
pub struct NotSquare {
    /// The number of rows of the matrix.
    pub rows: usize,

    /// The number of columns of the matrix.
    pub cols: usize,
}

/// The matrix is singular and has no inverse.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "the matrix is singular",
    labels = ["here"],
    help = "a matrix with determinant 0 has no inverse",
)]
pub struct SingularMatrix;

/// A matrix literal element did not evaluate to a scalar.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("matrix elements must be numbers, found `{}`", found),
    labels = ["this element"],
)]
pub struct NonScalarMatrixElement {
    /// The typename of the offending element.
    pub found: &'static str,
}

/// A builtin function was called outside its domain.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is undefined for this argument: {}", name, reason),
    labels = ["this function call"],
)]
pub struct OutOfDomain {
    /// The name of the builtin.
    pub name: String,

    /// Why the argument is outside the domain.
    pub reason: &'static str,
}

/// The equation does not reduce to a polynomial the solver can handle.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "the equation does not reduce to a polynomial in one variable of degree at most 2",
    labels = ["this equation"],
)]
pub struct NotPolynomial;

/// The equation reduces to a polynomial of degree greater than 2.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot solve a polynomial of degree {}", degree),
    labels = ["this equation"],
    help = "only degrees 0, 1 and 2 are supported",
)]
pub struct DegreeTooHigh {
    /// The degree of the reduced polynomial.
    pub degree: u32,
}
