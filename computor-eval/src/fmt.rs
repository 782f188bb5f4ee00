//! Canonical display forms for values.
//!
//! Rationals print as `p/q` (or just `p` when the denominator is 1), complex numbers with folded
//! signs (`3 - 2i`, `5i`, `i`), floats as trimmed decimals, matrices as `[[..];[..]]`, and
//! polynomials as terms in descending degree order with unit coefficients elided.

use rug::{float::Round, Complex as CFloat, Float, Rational};
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use crate::{
    complex::Complex,
    matrix::Matrix,
    scalar::Scalar,
    symbolic::{total_degree, MonomialKey, PolyExpr},
    value::Value,
};

/// The number of significant decimal digits shown for floats.
const FLOAT_DIGITS: usize = 20;

pub(crate) fn format_value(f: &mut Formatter<'_>, value: &Value) -> fmt::Result {
    match value {
        Value::Rational(r) => write!(f, "{}", r),
        Value::Complex(c) => format_complex(f, c),
        Value::Float(n) => format_float(f, n),
        Value::ComplexFloat(c) => format_cfloat(f, c),
        Value::Matrix(matrix) => format_matrix(f, matrix),
        Value::Symbolic(poly) => format_poly(f, poly),
        Value::Function(header, body) => write!(f, "{} = {}", header, body),
    }
}

/// Writes the imaginary part of a complex number, with the unit coefficient elided.
fn write_imag_magnitude(f: &mut Formatter<'_>, im: &Rational) -> fmt::Result {
    if *im == 1u32 {
        write!(f, "i")
    } else {
        write!(f, "{}i", im)
    }
}

pub(crate) fn format_complex(f: &mut Formatter<'_>, c: &Complex) -> fmt::Result {
    let re_zero = c.re.cmp0() == Ordering::Equal;
    let im_neg = c.im.cmp0() == Ordering::Less;
    let im_abs = if im_neg { -c.im.clone() } else { c.im.clone() };

    if c.is_zero() {
        return write!(f, "0");
    }
    if c.is_real() {
        return write!(f, "{}", c.re);
    }

    if re_zero {
        if im_neg {
            write!(f, "-")?;
        }
        write_imag_magnitude(f, &im_abs)
    } else {
        write!(f, "{}", c.re)?;
        write!(f, "{}", if im_neg { " - " } else { " + " })?;
        write_imag_magnitude(f, &im_abs)
    }
}

/// Formats a float as a trimmed decimal. Adapted for the exact tower: floats only ever come from
/// the builtin floating branch, so a plain decimal with trailing zeros removed is enough.
pub(crate) fn format_float(f: &mut Formatter<'_>, n: &Float) -> fmt::Result {
    if n.is_nan() {
        return write!(f, "NaN");
    } else if n.is_infinite() {
        return write!(f, "{}∞", if n.is_sign_negative() { "-" } else { "" });
    } else if n.is_zero() {
        return write!(f, "0");
    }

    let (sign, mut s, exponent) = n.to_sign_string_exp_round(10, Some(FLOAT_DIGITS), Round::Nearest);
    let exponent = exponent.unwrap(); // exponent is Some() if the number is non-zero

    // place the decimal point according to the exponent
    match exponent.cmp(&0) {
        Ordering::Less => s.insert_str(0, &format!("0.{}", "0".repeat(-exponent as usize))),
        Ordering::Equal => s.insert_str(0, "0."),
        Ordering::Greater => {
            let exponent = exponent as usize;
            if s.len() < exponent {
                s.push_str(&"0".repeat(exponent - s.len()));
            } else if s.len() > exponent {
                s.insert(exponent, '.');
            }
        },
    }

    let trimmed = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        &s
    };
    write!(f, "{}{}", if sign { "-" } else { "" }, trimmed)
}

pub(crate) fn format_cfloat(f: &mut Formatter<'_>, c: &CFloat) -> fmt::Result {
    let (re, im) = (c.real(), c.imag());

    if im.is_zero() {
        return format_float(f, re);
    }

    let im_neg = im.is_sign_negative();
    let im_abs = im.clone().abs();

    if re.is_zero() {
        if im_neg {
            write!(f, "-")?;
        }
    } else {
        format_float(f, re)?;
        write!(f, "{}", if im_neg { " - " } else { " + " })?;
    }

    if im_abs == 1u32 {
        write!(f, "i")
    } else {
        format_float(f, &im_abs)?;
        write!(f, "i")
    }
}

pub(crate) fn format_matrix(f: &mut Formatter<'_>, matrix: &Matrix) -> fmt::Result {
    write!(f, "[")?;
    for i in 0..matrix.rows() {
        if i != 0 {
            write!(f, ";")?;
        }
        write!(f, "[")?;
        for j in 0..matrix.cols() {
            if j != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", matrix.get(i, j))?;
        }
        write!(f, "]")?;
    }
    write!(f, "]")
}

/// Orders monomial keys for display: by name ascending, then exponent descending, so `x^2` comes
/// before `x * y`, which comes before `y^2`.
fn cmp_keys(a: &MonomialKey, b: &MonomialKey) -> Ordering {
    for ((name_a, exp_a), (name_b, exp_b)) in a.iter().zip(b) {
        match name_a.cmp(name_b).then(exp_b.cmp(exp_a)) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    a.len().cmp(&b.len())
}

/// Writes a monomial key such as `x^2 * y`. The key must not be empty.
fn write_monomial(f: &mut Formatter<'_>, key: &MonomialKey) -> fmt::Result {
    for (i, (name, exp)) in key.iter().enumerate() {
        if i != 0 {
            write!(f, " * ")?;
        }
        if *exp == 1 {
            write!(f, "{}", name)?;
        } else {
            write!(f, "{}^{}", name, exp)?;
        }
    }
    Ok(())
}

pub(crate) fn format_poly(f: &mut Formatter<'_>, poly: &PolyExpr) -> fmt::Result {
    if poly.is_zero() {
        return write!(f, "0");
    }

    let mut terms: Vec<_> = poly.terms().collect();
    terms.sort_by(|(key_a, _), (key_b, _)| {
        total_degree(key_b)
            .cmp(&total_degree(key_a))
            .then_with(|| cmp_keys(key_a, key_b))
    });

    for (index, (key, coeff)) in terms.into_iter().enumerate() {
        // complex coefficients are parenthesized and never fold their sign into the term
        let (negative, magnitude) = match coeff {
            Scalar::Rational(r) if r.cmp0() == Ordering::Less => {
                (true, Scalar::Rational(-r.clone()))
            },
            other => (false, other.clone()),
        };

        if index == 0 {
            if negative {
                write!(f, "-")?;
            }
        } else {
            write!(f, "{}", if negative { " - " } else { " + " })?;
        }

        if key.is_empty() {
            write_coeff(f, &magnitude)?;
        } else if magnitude.is_one() {
            write_monomial(f, key)?;
        } else {
            write_coeff(f, &magnitude)?;
            write!(f, " * ")?;
            write_monomial(f, key)?;
        }
    }

    Ok(())
}

/// Writes a polynomial coefficient, parenthesizing complex values.
fn write_coeff(f: &mut Formatter<'_>, coeff: &Scalar) -> fmt::Result {
    match coeff {
        Scalar::Rational(r) => write!(f, "{}", r),
        Scalar::Complex(c) => {
            write!(f, "(")?;
            format_complex(f, c)?;
            write!(f, ")")
        },
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Rational(r) => write!(f, "{}", r),
            Scalar::Complex(c) => format_complex(f, c),
        }
    }
}

impl Display for Complex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        format_complex(f, self)
    }
}

impl Display for Matrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        format_matrix(f, self)
    }
}

impl Display for PolyExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        format_poly(f, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::{float, rat};
    use crate::scalar::Scalar;
    use crate::symbolic::PolyExpr;

    fn show(value: &Value) -> String {
        format!("{}", value)
    }

    #[test]
    fn rational_forms() {
        assert_eq!(show(&Value::Rational(rat(14))), "14");
        assert_eq!(show(&Value::Rational(rat((-1, 3)))), "-1/3");
        assert_eq!(show(&Value::Rational(rat(0))), "0");
    }

    #[test]
    fn complex_sign_folding() {
        assert_eq!(show(&Value::Complex(Complex::new(rat(3), rat(-2)))), "3 - 2i");
        assert_eq!(show(&Value::Complex(Complex::new(rat(4), rat(6)))), "4 + 6i");
        assert_eq!(show(&Value::Complex(Complex::new(rat(0), rat(5)))), "5i");
        assert_eq!(show(&Value::Complex(Complex::i())), "i");
        assert_eq!(show(&Value::Complex(Complex::new(rat(0), rat(-1)))), "-i");
        assert_eq!(show(&Value::Complex(Complex::new(rat(3), rat(1)))), "3 + i");
        assert_eq!(show(&Value::Complex(Complex::new(rat((1, 2)), rat((-3, 2))))), "1/2 - 3/2i");
    }

    #[test]
    fn float_decimals_are_trimmed() {
        assert_eq!(show(&Value::Float(float(2).sqrt())), "1.4142135623730950488");
        assert_eq!(show(&Value::Float(float(4).sqrt())), "2");
        assert_eq!(show(&Value::Float(float(0.25))), "0.25");
        assert_eq!(show(&Value::Float(-float(0.5))), "-0.5");
    }

    #[test]
    fn polynomial_ordering_and_eliding() {
        // 4x^2 + 1, entered backwards
        let poly = PolyExpr::from_scalar(Scalar::Rational(rat(1)))
            .add(&PolyExpr::from_var("x").pow(2).mul(&PolyExpr::from_scalar(Scalar::Rational(rat(4)))));
        assert_eq!(show(&Value::Symbolic(poly)), "4 * x^2 + 1");

        // x^2 - x: unit coefficients elided, sign folded
        let poly = PolyExpr::from_var("x").pow(2).sub(&PolyExpr::from_var("x"));
        assert_eq!(show(&Value::Symbolic(poly)), "x^2 - x");

        // -x + 3
        let poly = PolyExpr::from_var("x").neg().add(&PolyExpr::from_scalar(Scalar::Rational(rat(3))));
        assert_eq!(show(&Value::Symbolic(poly)), "-x + 3");
    }

    #[test]
    fn complex_coefficients_are_parenthesized() {
        let poly = PolyExpr::from_var("x")
            .mul(&PolyExpr::from_scalar(Scalar::Complex(Complex::new(rat(3), rat(2)))));
        assert_eq!(show(&Value::Symbolic(poly)), "(3 + 2i) * x");
    }

    #[test]
    fn matrix_form() {
        let m = Matrix::from_rows(vec![
            vec![Scalar::Rational(rat(1)), Scalar::Rational(rat(2))],
            vec![Scalar::Rational(rat(3)), Scalar::Rational(rat(4))],
        ]);
        assert_eq!(show(&Value::Matrix(m)), "[[1, 2];[3, 4]]");
    }
}
