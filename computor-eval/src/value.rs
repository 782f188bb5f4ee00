//! The runtime value tower.

use computor_parser::parser::ast::{assign::FuncHeader, expr::Expr};
use rug::{Complex as CFloat, Float, Rational};
use std::fmt::{Display, Formatter};
use crate::{
    complex::Complex,
    matrix::Matrix,
    primitive::{complex, float},
    scalar::Scalar,
    symbolic::PolyExpr,
};

/// Represents any value that can be produced by evaluation or stored in a variable.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An exact rational number.
    Rational(Rational),

    /// An exact complex number with a non-zero imaginary part.
    Complex(Complex),

    /// An inexact real number, produced only by the floating branch of builtins.
    Float(Float),

    /// An inexact complex number, produced only by the floating branch of builtins.
    ComplexFloat(CFloat),

    /// A matrix with exact scalar entries.
    Matrix(Matrix),

    /// A symbolic polynomial, produced when evaluation encounters free variables.
    Symbolic(PolyExpr),

    /// A stored function definition referenced by name.
    Function(FuncHeader, Expr),
}

impl Value {
    /// Returns the typename of this value.
    pub fn typename(&self) -> &'static str {
        match self {
            Value::Rational(_) => "Rational",
            Value::Complex(_) => "Complex",
            Value::Float(_) => "Float",
            Value::ComplexFloat(_) => "Complex",
            Value::Matrix(_) => "Matrix",
            Value::Symbolic(_) => "Expression",
            Value::Function(..) => "Function",
        }
    }

    /// Returns this value as an exact scalar, if it is one.
    pub fn as_scalar(&self) -> Option<Scalar> {
        match self {
            Value::Rational(r) => Some(Scalar::Rational(r.clone())),
            Value::Complex(c) => Some(Scalar::Complex(c.clone())),
            Value::Symbolic(poly) => poly.as_scalar(),
            _ => None,
        }
    }

    /// Returns true if this value is an exact scalar (or a symbolic expression that reduces to
    /// one).
    pub fn is_exact_scalar(&self) -> bool {
        self.as_scalar().is_some()
    }

    /// Returns true if this value is on the floating branch.
    pub fn is_inexact(&self) -> bool {
        matches!(self, Value::Float(_) | Value::ComplexFloat(_))
    }

    /// Lifts this value to an inexact complex number. Only meaningful for numeric values.
    pub fn to_cfloat(&self) -> Option<CFloat> {
        match self {
            Value::Rational(r) => Some(complex(float(r))),
            Value::Complex(c) => Some(complex((float(&c.re), float(&c.im)))),
            Value::Float(f) => Some(complex(f)),
            Value::ComplexFloat(c) => Some(c.clone()),
            _ => None,
        }
    }

    /// Canonicalizes the value: symbolic constants collapse to scalars, exact complex numbers
    /// with a zero imaginary part collapse to rationals, and inexact complex numbers with a zero
    /// imaginary part collapse to floats.
    pub fn normalize(self) -> Value {
        match self {
            Value::Symbolic(poly) => match poly.as_scalar() {
                Some(scalar) => Value::from(scalar),
                None => Value::Symbolic(poly),
            },
            Value::Complex(c) if c.is_real() => Value::Rational(c.re),
            Value::ComplexFloat(c) if c.imag().is_zero() => {
                Value::Float(c.into_real_imag().0)
            },
            value => value,
        }
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Rational(r) => Value::Rational(r),
            Scalar::Complex(c) if c.is_real() => Value::Rational(c.re),
            Scalar::Complex(c) => Value::Complex(c),
        }
    }
}

impl From<Rational> for Value {
    fn from(r: Rational) -> Self {
        Value::Rational(r)
    }
}

impl From<Float> for Value {
    fn from(f: Float) -> Self {
        Value::Float(f)
    }
}

impl From<Matrix> for Value {
    fn from(m: Matrix) -> Self {
        Value::Matrix(m)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        crate::fmt::format_value(f, self)
    }
}
