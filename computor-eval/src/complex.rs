//! Exact complex numbers over arbitrary-precision rationals.

use rug::Rational;
use std::ops::{Add, Mul, Neg, Sub};
use crate::primitive::rat;

/// A complex number with exact rational real and imaginary parts.
///
/// This type does not collapse to a rational on its own; [`Scalar`](crate::scalar::Scalar) and
/// [`Value`](crate::value::Value) take care of that so that `i^2` prints as `-1` rather than
/// `-1 + 0i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Complex {
    /// The real part of the number.
    pub re: Rational,

    /// The imaginary part of the number.
    pub im: Rational,
}

impl Complex {
    /// Constructs a new complex number from real and imaginary parts.
    pub fn new(re: Rational, im: Rational) -> Self {
        Self { re, im }
    }

    /// The imaginary unit.
    pub fn i() -> Self {
        Self::new(rat(0), rat(1))
    }

    /// Constructs a complex number with a zero imaginary part.
    pub fn from_rational(re: Rational) -> Self {
        Self::new(re, rat(0))
    }

    /// Returns true if both parts are zero.
    pub fn is_zero(&self) -> bool {
        self.re.cmp0() == std::cmp::Ordering::Equal && self.im.cmp0() == std::cmp::Ordering::Equal
    }

    /// Returns true if the imaginary part is zero.
    pub fn is_real(&self) -> bool {
        self.im.cmp0() == std::cmp::Ordering::Equal
    }

    /// Returns the complex conjugate of the number.
    pub fn conj(&self) -> Self {
        Self::new(self.re.clone(), -self.im.clone())
    }

    /// Returns the squared modulus `re² + im²`.
    pub fn norm_sqr(&self) -> Rational {
        rat(&self.re * &self.re) + rat(&self.im * &self.im)
    }

    /// Returns the reciprocal `1/z` as `conj(z) / |z|²`.
    ///
    /// The caller must check that the number is non-zero.
    pub fn recip(&self) -> Self {
        let norm = self.norm_sqr();
        let conj = self.conj();
        Self::new(conj.re / norm.clone(), conj.im / norm)
    }

    /// Raises the number to an integer power by repeated squaring. Negative exponents go through
    /// the reciprocal; the caller must check for a zero base in that case.
    pub fn pow(&self, exp: i64) -> Self {
        if exp < 0 {
            return self.recip().pow(-exp);
        }

        let mut result = Self::from_rational(rat(1));
        let mut base = self.clone();
        let mut exp = exp as u64;
        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exp >>= 1;
        }

        result
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

/// Multiplication uses the Gauss three-multiplication identity: with `z = a + bi` and
/// `w = c + di`, let `k1 = c(a + b)`, `k2 = a(d - c)`, `k3 = b(c + d)`; then
/// `zw = (k1 - k3) + (k1 + k2)i`.
impl Mul for Complex {
    type Output = Complex;

    fn mul(self, rhs: Self) -> Self::Output {
        let (a, b) = (self.re, self.im);
        let (c, d) = (rhs.re, rhs.im);

        let k1 = c.clone() * rat(&a + &b);
        let k2 = a * rat(&d - &c);
        let k3 = b * rat(&c + &d);

        Self::new(k1.clone() - k3, k1 + k2)
    }
}

impl Mul<Rational> for Complex {
    type Output = Complex;

    fn mul(self, rhs: Rational) -> Self::Output {
        Self::new(self.re * rhs.clone(), self.im * rhs)
    }
}

impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Self::Output {
        Self::new(-self.re, -self.im)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: i64, im: i64) -> Complex {
        Complex::new(rat(re), rat(im))
    }

    #[test]
    fn i_squared_is_minus_one() {
        assert_eq!(Complex::i().pow(2), c(-1, 0));
    }

    #[test]
    fn gauss_product() {
        // (3 + 2i)(1 + 4i) = 3 + 12i + 2i - 8 = -5 + 14i
        assert_eq!(c(3, 2) * c(1, 4), c(-5, 14));
    }

    #[test]
    fn negative_power_uses_reciprocal() {
        // (1 + i)^-2 = 1 / (2i) = -i/2
        assert_eq!(c(1, 1).pow(-2), Complex::new(rat(0), rat((-1, 2))));
    }

    #[test]
    fn conjugate_product_is_norm() {
        let z = c(3, 4);
        let norm = z.clone() * z.conj();
        assert_eq!(norm, c(25, 0));
        assert_eq!(z.norm_sqr(), rat(25));
    }
}
