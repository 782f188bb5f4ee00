use computor_parser::parser::ast::binary::Binary;
use computor_parser::parser::token::op::BinOpKind;
use rug::ops::{Pow, RemRounding};
use crate::{
    ctxt::Ctxt,
    error::{
        kind::{
            DimensionMismatch,
            DivisionByZero,
            ExponentOverflow,
            InvalidBinaryOperation,
            NegativeExponent,
            NonIntegerExponent,
            NonIntegerRemainder,
            NonScalarDivision,
            NotSquare,
            SingularMatrix,
            SymbolicExponent,
        },
        Error,
        EvalError,
    },
    eval::Eval,
    matrix::MatrixError,
    primitive::rat,
    scalar::Scalar,
    symbolic::PolyExpr,
    value::Value,
};

impl Eval for Binary {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<Value, Error> {
        let left = self.lhs.eval(ctxt)?;
        let right = self.rhs.eval(ctxt)?;
        eval_operands(self.op.kind, left, right).map_err(|err| {
            err.into_error(vec![self.lhs.span(), self.op.span.clone(), self.rhs.span()])
        })
    }
}

/// Evaluates the binary expression given the operator, and the left and right operands.
pub(crate) fn eval_operands(
    op: BinOpKind,
    left: Value,
    right: Value,
) -> Result<Value, EvalError> {
    let invalid = |left: &Value, right: &Value| -> EvalError {
        InvalidBinaryOperation {
            op: op.as_str(),
            left: left.typename(),
            right: right.typename(),
        }
        .into()
    };

    // functions never participate in arithmetic
    if matches!(left, Value::Function(..)) || matches!(right, Value::Function(..)) {
        return Err(invalid(&left, &right));
    }

    if matches!(left, Value::Matrix(_)) || matches!(right, Value::Matrix(_)) {
        return eval_matrix_operands(op, left, right);
    }

    if left.is_inexact() || right.is_inexact() {
        return eval_inexact_operands(op, left, right);
    }

    // a symbolic operand that does not reduce to a scalar forces the symbolic path
    let symbolic = |value: &Value| {
        matches!(value, Value::Symbolic(_)) && value.as_scalar().is_none()
    };
    if symbolic(&left) || symbolic(&right) {
        return eval_symbolic_operands(op, left, right);
    }

    eval_scalar_operands(op, left, right)
}

/// Converts the exponent value to a non-negative `u32`, for bases that cannot be inverted.
fn unsigned_exponent(operand: &'static str, exp: &Value) -> Result<u32, EvalError> {
    let scalar = match exp.as_scalar() {
        Some(scalar) => scalar,
        None if matches!(exp, Value::Symbolic(_)) => return Err(SymbolicExponent.into()),
        None => return Err(NonIntegerExponent.into()),
    };
    let integer = scalar.as_integer().ok_or(NonIntegerExponent)?;

    if integer.cmp0() == std::cmp::Ordering::Less {
        Err(NegativeExponent { operand }.into())
    } else {
        integer.to_u32().ok_or_else(|| ExponentOverflow.into())
    }
}

fn matrix_err(err: MatrixError) -> EvalError {
    match err {
        MatrixError::DimensionMismatch { left, right } => DimensionMismatch { left, right }.into(),
        MatrixError::NotSquare { rows, cols } => NotSquare { rows, cols }.into(),
        MatrixError::Singular => SingularMatrix.into(),
        MatrixError::DivisionByZero => DivisionByZero.into(),
    }
}

/// Evaluates a binary expression where at least one operand is a matrix.
fn eval_matrix_operands(
    op: BinOpKind,
    left: Value,
    right: Value,
) -> Result<Value, EvalError> {
    let invalid = |left: &Value, right: &Value| -> EvalError {
        InvalidBinaryOperation {
            op: op.as_str(),
            left: left.typename(),
            right: right.typename(),
        }
        .into()
    };

    match (&left, &right) {
        (Value::Matrix(a), Value::Matrix(b)) => match op {
            BinOpKind::Add => Ok(Value::Matrix(a.add(b).map_err(matrix_err)?)),
            BinOpKind::Sub => Ok(Value::Matrix(a.sub(b).map_err(matrix_err)?)),
            BinOpKind::Mul => Ok(Value::Matrix(a.mul_elementwise(b).map_err(matrix_err)?)),
            BinOpKind::MatMul => Ok(Value::Matrix(a.matmul(b).map_err(matrix_err)?)),
            _ => Err(invalid(&left, &right)),
        },
        (Value::Matrix(a), _) => {
            match op {
                BinOpKind::Mul => {
                    let scalar = right.as_scalar().ok_or_else(|| invalid(&left, &right))?;
                    Ok(Value::Matrix(a.scalar_mul(&scalar)))
                },
                BinOpKind::Div => {
                    let scalar = right.as_scalar().ok_or_else(|| invalid(&left, &right))?;
                    Ok(Value::Matrix(a.scalar_div(&scalar).map_err(matrix_err)?))
                },
                BinOpKind::Exp => {
                    let exp = unsigned_exponent("Matrix", &right)?;
                    Ok(Value::Matrix(a.pow(exp).map_err(matrix_err)?))
                },
                _ => Err(invalid(&left, &right)),
            }
        },
        (_, Value::Matrix(b)) => match op {
            BinOpKind::Mul => {
                let scalar = left.as_scalar().ok_or_else(|| invalid(&left, &right))?;
                Ok(Value::Matrix(b.scalar_mul(&scalar)))
            },
            _ => Err(invalid(&left, &right)),
        },
        _ => unreachable!("caller checked that one operand is a matrix"),
    }
}

/// Evaluates a binary expression on the floating branch: at least one operand is inexact, and the
/// other is numeric.
fn eval_inexact_operands(
    op: BinOpKind,
    left: Value,
    right: Value,
) -> Result<Value, EvalError> {
    let invalid = |left: &Value, right: &Value| -> EvalError {
        InvalidBinaryOperation {
            op: op.as_str(),
            left: left.typename(),
            right: right.typename(),
        }
        .into()
    };

    let (Some(a), Some(b)) = (left.to_cfloat(), right.to_cfloat()) else {
        return Err(invalid(&left, &right));
    };

    let result = match op {
        BinOpKind::Add => a + b,
        BinOpKind::Sub => a - b,
        BinOpKind::Mul => a * b,
        BinOpKind::Div => {
            if b.is_zero() {
                return Err(DivisionByZero.into());
            }
            a / b
        },
        BinOpKind::Exp => a.pow(b),
        BinOpKind::Mod => return Err(NonIntegerRemainder.into()),
        BinOpKind::MatMul => return Err(invalid(&left, &right)),
    };

    Ok(Value::ComplexFloat(result).normalize())
}

/// Evaluates a binary expression where at least one operand is a symbolic expression with free
/// variables. Exact scalar operands are lifted to constant polynomials.
fn eval_symbolic_operands(
    op: BinOpKind,
    left: Value,
    right: Value,
) -> Result<Value, EvalError> {
    let invalid = |left: &Value, right: &Value| -> EvalError {
        InvalidBinaryOperation {
            op: op.as_str(),
            left: left.typename(),
            right: right.typename(),
        }
        .into()
    };

    let lift = |value: &Value| -> Option<PolyExpr> {
        match value {
            Value::Symbolic(poly) => Some(poly.clone()),
            value => value.as_scalar().map(PolyExpr::from_scalar),
        }
    };
    let (Some(a), Some(b)) = (lift(&left), lift(&right)) else {
        return Err(invalid(&left, &right));
    };

    let result = match op {
        BinOpKind::Add => a.add(&b),
        BinOpKind::Sub => a.sub(&b),
        BinOpKind::Mul => a.mul(&b),
        BinOpKind::Div => {
            let divisor = b.as_scalar().ok_or(NonScalarDivision)?;
            a.div_scalar(&divisor).ok_or(DivisionByZero)?
        },
        BinOpKind::Exp => {
            let exp = unsigned_exponent("Expression", &right)?;
            a.pow(exp)
        },
        BinOpKind::Mod | BinOpKind::MatMul => return Err(invalid(&left, &right)),
    };

    Ok(Value::Symbolic(result).normalize())
}

/// Evaluates a binary expression with two exact scalar operands.
fn eval_scalar_operands(
    op: BinOpKind,
    left: Value,
    right: Value,
) -> Result<Value, EvalError> {
    let invalid = |left: &Value, right: &Value| -> EvalError {
        InvalidBinaryOperation {
            op: op.as_str(),
            left: left.typename(),
            right: right.typename(),
        }
        .into()
    };

    let (Some(a), Some(b)) = (left.as_scalar(), right.as_scalar()) else {
        return Err(invalid(&left, &right));
    };

    let result = match op {
        BinOpKind::Add => a + b,
        BinOpKind::Sub => a - b,
        BinOpKind::Mul => a * b,
        BinOpKind::Div => {
            if b.is_zero() {
                return Err(DivisionByZero.into());
            }
            a.div(b).ok_or(DivisionByZero)?
        },
        BinOpKind::Mod => {
            let (Some(a), Some(b)) = (a.as_integer(), b.as_integer()) else {
                return Err(NonIntegerRemainder.into());
            };
            if b.cmp0() == std::cmp::Ordering::Equal {
                return Err(DivisionByZero.into());
            }
            Scalar::Rational(rat(a.rem_euc(b)))
        },
        BinOpKind::Exp => {
            let exp = b.as_integer().ok_or(NonIntegerExponent)?;
            match a.pow(&exp) {
                Some(result) => result,
                None if a.is_zero() => return Err(DivisionByZero.into()),
                None => return Err(ExponentOverflow.into()),
            }
        },
        BinOpKind::MatMul => return Err(invalid(&left, &right)),
    };

    Ok(Value::from(result))
}
