//! The exact scalar type: a rational or an exact complex number.
//!
//! Scalars are the entries of matrices, the coefficients of symbolic polynomials, and the
//! coefficients the solver works with. Arithmetic coerces rationals to complex numbers as needed
//! and collapses complex results with a zero imaginary part back to rationals.

use rug::{Integer, Rational};
use std::cmp::Ordering;
use std::ops::{Add, Mul, Neg, Sub};
use crate::{complex::Complex, primitive::rat};

/// An exact scalar value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// An exact rational number.
    Rational(Rational),

    /// An exact complex number with a non-zero imaginary part.
    Complex(Complex),
}

impl Scalar {
    /// Returns the zero scalar.
    pub fn zero() -> Self {
        Self::Rational(rat(0))
    }

    /// Returns the one scalar.
    pub fn one() -> Self {
        Self::Rational(rat(1))
    }

    /// Returns true if this scalar is zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Rational(r) => r.cmp0() == Ordering::Equal,
            Self::Complex(c) => c.is_zero(),
        }
    }

    /// Returns true if this scalar is one.
    pub fn is_one(&self) -> bool {
        match self {
            Self::Rational(r) => *r == *crate::primitive::ONE,
            Self::Complex(_) => false,
        }
    }

    /// Returns the rational value of this scalar, if it is rational.
    pub fn as_rational(&self) -> Option<&Rational> {
        match self {
            Self::Rational(r) => Some(r),
            Self::Complex(_) => None,
        }
    }

    /// Returns the integer value of this scalar, if it is an integer.
    pub fn as_integer(&self) -> Option<Integer> {
        match self {
            Self::Rational(r) if r.is_integer() => Some(r.numer().clone()),
            _ => None,
        }
    }

    /// Lifts this scalar to a complex number.
    pub fn to_complex(&self) -> Complex {
        match self {
            Self::Rational(r) => Complex::from_rational(r.clone()),
            Self::Complex(c) => c.clone(),
        }
    }

    /// Divides this scalar by another. Returns [`None`] if the divisor is zero.
    pub fn div(self, rhs: Self) -> Option<Self> {
        if rhs.is_zero() {
            return None;
        }

        match (self, rhs) {
            (Self::Rational(a), Self::Rational(b)) => Some(Self::from(a / b)),
            (a, b) => Some(Self::from(a.to_complex() * b.to_complex().recip())),
        }
    }

    /// Raises this scalar to an integer power. Negative exponents invert the base.
    ///
    /// Returns [`None`] if the base is zero and the exponent negative, or if the exponent is too
    /// large to be represented.
    pub fn pow(&self, exp: &Integer) -> Option<Self> {
        let exp = exp.to_i64()?;
        if exp < 0 && self.is_zero() {
            return None;
        }

        match self {
            Self::Rational(r) => {
                let exp32 = i32::try_from(exp).ok()?;
                Some(Self::from(rat(rug::ops::Pow::pow(r, exp32))))
            },
            Self::Complex(c) => Some(Self::from(c.pow(exp))),
        }
    }
}

/// Collapses a complex number with a zero imaginary part to a rational.
impl From<Complex> for Scalar {
    fn from(c: Complex) -> Self {
        if c.is_real() {
            Self::Rational(c.re)
        } else {
            Self::Complex(c)
        }
    }
}

impl From<Rational> for Scalar {
    fn from(r: Rational) -> Self {
        Self::Rational(r)
    }
}

impl Add for Scalar {
    type Output = Scalar;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Rational(a), Self::Rational(b)) => Self::from(a + b),
            (a, b) => Self::from(a.to_complex() + b.to_complex()),
        }
    }
}

impl Sub for Scalar {
    type Output = Scalar;

    fn sub(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Rational(a), Self::Rational(b)) => Self::from(a - b),
            (a, b) => Self::from(a.to_complex() - b.to_complex()),
        }
    }
}

impl Mul for Scalar {
    type Output = Scalar;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Rational(a), Self::Rational(b)) => Self::from(a * b),
            (a, b) => Self::from(a.to_complex() * b.to_complex()),
        }
    }
}

impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Self::Output {
        match self {
            Self::Rational(r) => Self::Rational(-r),
            Self::Complex(c) => Self::Complex(-c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::int;

    #[test]
    fn complex_collapses_to_rational() {
        let z = Scalar::Complex(Complex::i());
        let squared = z.clone() * z;
        assert_eq!(squared, Scalar::Rational(rat(-1)));
    }

    #[test]
    fn division_by_zero_is_none() {
        assert!(Scalar::one().div(Scalar::zero()).is_none());
    }

    #[test]
    fn negative_power_inverts() {
        let two = Scalar::Rational(rat(2));
        assert_eq!(two.pow(&int(-2)).unwrap(), Scalar::Rational(rat((1, 4))));
    }

    #[test]
    fn zero_to_negative_power_is_none() {
        assert!(Scalar::zero().pow(&int(-1)).is_none());
    }
}
