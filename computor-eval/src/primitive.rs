//! Constructors for the numeric primitives used throughout the crate.

use once_cell::sync::Lazy;
use rug::{ops::Pow, Assign, Complex, Float, Integer, Rational};

/// The number of bits of precision to use for the floating branch.
pub const PRECISION: u32 = 256;

/// Creates an [`Integer`] with the given value.
pub fn int<T>(n: T) -> Integer
where
    Integer: From<T>,
{
    Integer::from(n)
}

/// Creates a [`Rational`] with the given value.
pub fn rat<T>(n: T) -> Rational
where
    Rational: From<T>,
{
    Rational::from(n)
}

/// Creates a [`Float`] with the given value.
pub fn float<T>(n: T) -> Float
where
    Float: Assign<T>,
{
    Float::with_val(PRECISION, n)
}

/// Creates a [`Complex`] with the given value.
pub fn complex<T>(n: T) -> Complex
where
    Complex: Assign<T>,
{
    Complex::with_val(PRECISION, n)
}

/// Converts a decimal literal such as `3.14` into an exact [`Rational`].
///
/// The tokenizer guarantees the input matches `[0-9]+(\.[0-9]+)?`.
pub fn rat_from_str(s: &str) -> Rational {
    match s.split_once('.') {
        Some((whole, frac)) => {
            let digits: Integer = format!("{whole}{frac}").parse().unwrap();
            let denom = int(10u32).pow(frac.len() as u32);
            rat((digits, denom))
        },
        None => rat(s.parse::<Integer>().unwrap()),
    }
}

pub static ZERO: Lazy<Rational> = Lazy::new(|| rat(0));

pub static ONE: Lazy<Rational> = Lazy::new(|| rat(1));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_literal_is_exact() {
        assert_eq!(rat_from_str("3.14"), rat((157, 50)));
        assert_eq!(rat_from_str("0.5"), rat((1, 2)));
        assert_eq!(rat_from_str("42"), rat(42));
        assert_eq!(rat_from_str("0.0"), *ZERO);
    }
}
