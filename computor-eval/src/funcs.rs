//! Numeric helpers shared by the builtins and the solver: exact square roots where they exist,
//! and square-factor extraction for radical reduction.

use rug::{Integer, Rational};
use crate::{
    complex::Complex,
    primitive::{complex, float, rat},
    scalar::Scalar,
    value::Value,
};

/// Returns the exact square root of a non-negative rational, if both the numerator and the
/// denominator are perfect squares.
pub fn perfect_sqrt(r: &Rational) -> Option<Rational> {
    if r.cmp0() == std::cmp::Ordering::Less {
        return None;
    }

    let numer = r.numer();
    let denom = r.denom();
    if numer.is_perfect_square() && denom.is_perfect_square() {
        Some(rat((numer.clone().sqrt(), denom.clone().sqrt())))
    } else {
        None
    }
}

/// Decomposes a positive integer as `s² · r` with `s` as large as reasonably findable, so that
/// `√n = s·√r`. Small square factors are pulled out by trial division; a final perfect-square
/// check catches the remainder.
pub fn extract_square_factor(n: &Integer) -> (Integer, Integer) {
    let mut s = Integer::from(1);
    let mut r = n.clone();

    let mut d = Integer::from(2);
    while Integer::from(&d * &d) <= r && d < 1000u32 {
        let d_sq = Integer::from(&d * &d);
        while r.is_divisible(&d_sq) {
            r /= &d_sq;
            s *= &d;
        }
        d += 1;
    }

    if r.is_perfect_square() {
        s *= r.clone().sqrt();
        r = Integer::from(1);
    }

    (s, r)
}

/// Returns the exact square root of a scalar, if one exists in the exact tower.
///
/// For a non-negative rational this is [`perfect_sqrt`]; for a negative rational the result is
/// purely imaginary; for a complex number `a + bi` the principal root is
/// `√((|z| + a)/2) + sign(b)·√((|z| − a)/2)·i`, which is exact when all three component square
/// roots are.
pub fn exact_sqrt(scalar: &Scalar) -> Option<Scalar> {
    match scalar {
        Scalar::Rational(r) => {
            if r.cmp0() == std::cmp::Ordering::Less {
                let im = perfect_sqrt(&-r.clone())?;
                Some(Scalar::Complex(Complex::new(rat(0), im)))
            } else {
                perfect_sqrt(r).map(Scalar::Rational)
            }
        },
        Scalar::Complex(z) => {
            let modulus = perfect_sqrt(&z.norm_sqr())?;

            let re = perfect_sqrt(&rat((rat(&modulus + &z.re)) / 2))?;
            let mut im = perfect_sqrt(&rat((rat(&modulus - &z.re)) / 2))?;
            if z.im.cmp0() == std::cmp::Ordering::Less {
                im = -im;
            }

            Some(Scalar::from(Complex::new(re, im)))
        },
    }
}

/// The square root of any numeric value, staying exact when possible and falling back to the
/// floating branch otherwise.
pub fn sqrt_value(value: &Value) -> Value {
    match value {
        Value::Rational(r) => {
            match exact_sqrt(&Scalar::Rational(r.clone())) {
                Some(scalar) => Value::from(scalar),
                None => {
                    if r.cmp0() == std::cmp::Ordering::Less {
                        let im = float(rat(-r.clone())).sqrt();
                        Value::ComplexFloat(complex((float(0), im))).normalize()
                    } else {
                        Value::Float(float(r).sqrt())
                    }
                },
            }
        },
        Value::Complex(z) => {
            match exact_sqrt(&Scalar::Complex(z.clone())) {
                Some(scalar) => Value::from(scalar),
                None => {
                    let zf = complex((float(&z.re), float(&z.im)));
                    Value::ComplexFloat(zf.sqrt()).normalize()
                },
            }
        },
        Value::Float(f) => {
            if f.is_sign_negative() && !f.is_zero() {
                Value::ComplexFloat(complex(f).sqrt()).normalize()
            } else {
                Value::Float(f.clone().sqrt())
            }
        },
        Value::ComplexFloat(c) => Value::ComplexFloat(c.clone().sqrt()).normalize(),
        _ => unreachable!("callers dispatch on numeric values only"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::int;

    #[test]
    fn perfect_squares() {
        assert_eq!(perfect_sqrt(&rat((9, 4))), Some(rat((3, 2))));
        assert_eq!(perfect_sqrt(&rat(16)), Some(rat(4)));
        assert_eq!(perfect_sqrt(&rat(2)), None);
        assert_eq!(perfect_sqrt(&rat(-4)), None);
    }

    #[test]
    fn square_factor_extraction() {
        assert_eq!(extract_square_factor(&int(16)), (int(4), int(1)));
        assert_eq!(extract_square_factor(&int(20)), (int(2), int(5)));
        assert_eq!(extract_square_factor(&int(5)), (int(1), int(5)));
        assert_eq!(extract_square_factor(&int(72)), (int(6), int(2)));
    }

    #[test]
    fn exact_complex_sqrt() {
        // √(-4) = 2i
        assert_eq!(
            exact_sqrt(&Scalar::Rational(rat(-4))),
            Some(Scalar::Complex(Complex::new(rat(0), rat(2)))),
        );

        // √(3 + 4i) = 2 + i
        let root = exact_sqrt(&Scalar::Complex(Complex::new(rat(3), rat(4)))).unwrap();
        assert_eq!(root, Scalar::Complex(Complex::new(rat(2), rat(1))));

        // √2 is not exact
        assert_eq!(exact_sqrt(&Scalar::Rational(rat(2))), None);
    }
}
