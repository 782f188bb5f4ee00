//! Built-in functions. The registry is fixed: every builtin takes exactly one argument, and
//! dispatch on the argument type happens inside each function.

use computor_parser::parser::ast::call::Call;
use computor_error::ErrorKind;
use crate::{
    error::{
        kind::{NotSquare, OutOfDomain, SingularMatrix, TypeMismatch, WrongArgumentCount},
        Error,
    },
    funcs::{perfect_sqrt, sqrt_value},
    primitive::{complex, float, rat},
    value::Value,
};

/// Represents an error that can occur while evaluating a builtin function.
#[derive(Debug)]
pub struct BuiltinError {
    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,

    /// The index of the offending argument, if the error is about one in particular.
    pub arg: Option<usize>,
}

impl BuiltinError {
    fn new(kind: impl ErrorKind + 'static) -> Self {
        Self { kind: Box::new(kind), arg: None }
    }

    fn with_arg(kind: impl ErrorKind + 'static, arg: usize) -> Self {
        Self { kind: Box::new(kind), arg: Some(arg) }
    }

    /// Convert the [`BuiltinError`] into an [`Error`], using the given function call to provide
    /// spans.
    pub fn into_error(self, call: &Call) -> Error {
        let spans = match self.arg {
            Some(index) => vec![call.span(), call.args[index].span()],
            None => vec![call.span()],
        };
        Error { spans, kind: self.kind }
    }
}

type Builtin = fn(&str, &[Value]) -> Result<Value, BuiltinError>;

/// Returns the builtin function with the given (normalized) name.
pub fn get_builtin(name: &str) -> Option<Builtin> {
    match name {
        "sqrt" => Some(sqrt),
        "abs" => Some(abs),
        "sin" => Some(sin),
        "cos" => Some(cos),
        "tan" => Some(tan),
        "exp" => Some(exp),
        "log" | "ln" => Some(log),
        "det" => Some(det),
        "inv" => Some(inv),
        "transpose" => Some(transpose),
        _ => None,
    }
}

/// Checks the arity of a builtin call and returns its single argument.
fn single_arg<'a>(name: &str, args: &'a [Value]) -> Result<&'a Value, BuiltinError> {
    match args {
        [arg] => Ok(arg),
        _ => Err(BuiltinError::new(WrongArgumentCount {
            name: name.to_string(),
            expected: 1,
            given: args.len(),
        })),
    }
}

fn mismatch(name: &str, expected: &'static str, found: &Value) -> BuiltinError {
    BuiltinError::with_arg(
        TypeMismatch {
            name: name.to_string(),
            index: 0,
            expected,
            found: found.typename(),
        },
        0,
    )
}

/// The square root, staying exact when possible.
fn sqrt(name: &str, args: &[Value]) -> Result<Value, BuiltinError> {
    let arg = single_arg(name, args)?;
    match arg {
        Value::Rational(_) | Value::Complex(_) | Value::Float(_) | Value::ComplexFloat(_) => {
            Ok(sqrt_value(arg))
        },
        arg => Err(mismatch(name, "a number", arg)),
    }
}

/// The absolute value of a real number, or the modulus of a complex number.
fn abs(name: &str, args: &[Value]) -> Result<Value, BuiltinError> {
    let arg = single_arg(name, args)?;
    match arg {
        Value::Rational(r) => Ok(Value::Rational(rat(r.abs_ref()))),
        Value::Complex(c) => {
            let norm = c.norm_sqr();
            match perfect_sqrt(&norm) {
                Some(modulus) => Ok(Value::Rational(modulus)),
                None => Ok(Value::Float(float(norm).sqrt())),
            }
        },
        Value::Float(n) => Ok(Value::Float(n.clone().abs())),
        Value::ComplexFloat(c) => Ok(Value::Float(c.clone().abs().into_real_imag().0)),
        arg => Err(mismatch(name, "a number", arg)),
    }
}

/// Converts a real scalar argument to a float, for the trigonometric and exponential builtins.
fn real_arg(name: &str, args: &[Value]) -> Result<rug::Float, BuiltinError> {
    let arg = single_arg(name, args)?;
    match arg {
        Value::Rational(r) => Ok(float(r)),
        Value::Float(n) => Ok(n.clone()),
        arg => Err(mismatch(name, "a real number", arg)),
    }
}

fn sin(name: &str, args: &[Value]) -> Result<Value, BuiltinError> {
    Ok(Value::Float(real_arg(name, args)?.sin()))
}

fn cos(name: &str, args: &[Value]) -> Result<Value, BuiltinError> {
    Ok(Value::Float(real_arg(name, args)?.cos()))
}

fn tan(name: &str, args: &[Value]) -> Result<Value, BuiltinError> {
    Ok(Value::Float(real_arg(name, args)?.tan()))
}

fn exp(name: &str, args: &[Value]) -> Result<Value, BuiltinError> {
    Ok(Value::Float(real_arg(name, args)?.exp()))
}

/// The natural logarithm: positive reals on the real branch, non-zero complex numbers on the
/// principal branch.
fn log(name: &str, args: &[Value]) -> Result<Value, BuiltinError> {
    let arg = single_arg(name, args)?;
    let domain = |reason| BuiltinError::with_arg(OutOfDomain { name: name.to_string(), reason }, 0);

    match arg {
        Value::Rational(r) => match r.cmp0() {
            std::cmp::Ordering::Greater => Ok(Value::Float(float(r).ln())),
            _ => Err(domain("the argument must be positive")),
        },
        Value::Float(n) => {
            if n.is_sign_positive() && !n.is_zero() {
                Ok(Value::Float(n.clone().ln()))
            } else {
                Err(domain("the argument must be positive"))
            }
        },
        Value::Complex(c) => {
            if c.is_zero() {
                Err(domain("the argument must be non-zero"))
            } else {
                let z = complex((float(&c.re), float(&c.im)));
                Ok(Value::ComplexFloat(z.ln()).normalize())
            }
        },
        Value::ComplexFloat(c) => {
            if c.is_zero() {
                Err(domain("the argument must be non-zero"))
            } else {
                Ok(Value::ComplexFloat(c.clone().ln()).normalize())
            }
        },
        arg => Err(mismatch(name, "a number", arg)),
    }
}

/// The determinant of a square matrix.
fn det(name: &str, args: &[Value]) -> Result<Value, BuiltinError> {
    let arg = single_arg(name, args)?;
    let Value::Matrix(matrix) = arg else {
        return Err(mismatch(name, "a matrix", arg));
    };

    if !matrix.is_square() {
        return Err(BuiltinError::with_arg(
            NotSquare { rows: matrix.rows(), cols: matrix.cols() },
            0,
        ));
    }

    match matrix.det() {
        Ok(scalar) => Ok(Value::from(scalar)),
        Err(_) => unreachable!("determinant of a square matrix cannot fail"),
    }
}

/// The inverse of a square non-singular matrix.
fn inv(name: &str, args: &[Value]) -> Result<Value, BuiltinError> {
    let arg = single_arg(name, args)?;
    let Value::Matrix(matrix) = arg else {
        return Err(mismatch(name, "a matrix", arg));
    };

    if !matrix.is_square() {
        return Err(BuiltinError::with_arg(
            NotSquare { rows: matrix.rows(), cols: matrix.cols() },
            0,
        ));
    }

    matrix
        .inverse()
        .map(Value::Matrix)
        .map_err(|_| BuiltinError::with_arg(SingularMatrix, 0))
}

/// The transpose of a matrix.
fn transpose(name: &str, args: &[Value]) -> Result<Value, BuiltinError> {
    let arg = single_arg(name, args)?;
    match arg {
        Value::Matrix(matrix) => Ok(Value::Matrix(matrix.transpose())),
        arg => Err(mismatch(name, "a matrix", arg)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complex::Complex;
    use crate::matrix::Matrix;
    use crate::scalar::Scalar;

    fn rational(n: i64) -> Value {
        Value::Rational(rat(n))
    }

    #[test]
    fn sqrt_exact_and_float() {
        assert_eq!(sqrt("sqrt", &[rational(16)]).unwrap(), rational(4));
        assert_eq!(
            sqrt("sqrt", &[Value::Rational(rat((9, 4)))]).unwrap(),
            Value::Rational(rat((3, 2))),
        );
        assert!(matches!(sqrt("sqrt", &[rational(2)]).unwrap(), Value::Float(_)));
    }

    #[test]
    fn sqrt_of_negative_is_imaginary() {
        assert_eq!(
            sqrt("sqrt", &[rational(-4)]).unwrap(),
            Value::Complex(Complex::new(rat(0), rat(2))),
        );
        assert!(matches!(
            sqrt("sqrt", &[rational(-2)]).unwrap(),
            Value::ComplexFloat(_),
        ));
    }

    #[test]
    fn abs_of_complex_is_modulus() {
        let z = Value::Complex(Complex::new(rat(3), rat(4)));
        assert_eq!(abs("abs", &[z]).unwrap(), rational(5));
        assert_eq!(abs("abs", &[rational(-7)]).unwrap(), rational(7));
    }

    #[test]
    fn log_domain() {
        assert!(log("log", &[rational(0)]).is_err());
        assert!(log("log", &[rational(-1)]).is_err());
        assert!(matches!(log("log", &[rational(2)]).unwrap(), Value::Float(_)));
    }

    #[test]
    fn trig_rejects_complex() {
        let z = Value::Complex(Complex::i());
        assert!(sin("sin", &[z]).is_err());
    }

    #[test]
    fn wrong_arity() {
        assert!(sqrt("sqrt", &[rational(1), rational(2)]).is_err());
        assert!(sqrt("sqrt", &[]).is_err());
    }

    #[test]
    fn matrix_builtins() {
        let m = Matrix::from_rows(vec![
            vec![Scalar::Rational(rat(1)), Scalar::Rational(rat(2))],
            vec![Scalar::Rational(rat(3)), Scalar::Rational(rat(4))],
        ]);

        assert_eq!(det("det", &[Value::Matrix(m.clone())]).unwrap(), rational(-2));
        assert!(inv("inv", &[Value::Matrix(m.clone())]).is_ok());
        assert_eq!(
            format!("{}", transpose("transpose", &[Value::Matrix(m)]).unwrap()),
            "[[1, 3];[2, 4]]",
        );

        assert!(det("det", &[rational(3)]).is_err());
    }
}
