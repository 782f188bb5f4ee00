//! The canonical symbolic form for expressions with free variables.
//!
//! A [`PolyExpr`] maps *monomial keys* to exact scalar coefficients. A monomial key is the sorted
//! list of `(variable, exponent)` pairs of one term; the empty key is the constant term. The form
//! is canonical by construction: no zero coefficient is ever stored, keys are unique, exponents
//! are positive, and variables appear in strictly ascending order within a key. Two expressions
//! are semantically equal exactly when their `PolyExpr`s are equal, so simplification is the
//! identity on an already-canonical value.

use rug::Integer;
use std::collections::BTreeMap;
use crate::scalar::Scalar;

/// The sorted `(variable, exponent)` pairs identifying one term. The empty key is the constant
/// monomial.
pub type MonomialKey = Vec<(String, u32)>;

/// A polynomial in canonical form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PolyExpr {
    terms: BTreeMap<MonomialKey, Scalar>,
}

impl PolyExpr {
    /// The zero polynomial.
    pub fn zero() -> Self {
        Self::default()
    }

    /// A constant polynomial.
    pub fn from_scalar(scalar: Scalar) -> Self {
        let mut poly = Self::zero();
        poly.add_term(Vec::new(), scalar);
        poly
    }

    /// The polynomial consisting of a single variable to the first power.
    pub fn from_var(name: &str) -> Self {
        let mut poly = Self::zero();
        poly.add_term(vec![(name.to_string(), 1)], Scalar::one());
        poly
    }

    /// Returns true if this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the scalar value of this polynomial if it is constant.
    pub fn as_scalar(&self) -> Option<Scalar> {
        match self.terms.len() {
            0 => Some(Scalar::zero()),
            1 => {
                let (key, coeff) = self.terms.iter().next().unwrap();
                key.is_empty().then(|| coeff.clone())
            },
            _ => None,
        }
    }

    /// Iterates over the terms in key order.
    pub fn terms(&self) -> impl Iterator<Item = (&MonomialKey, &Scalar)> {
        self.terms.iter()
    }

    /// Adds a coefficient to the term with the given key, dropping the term if the sum is zero.
    fn add_term(&mut self, key: MonomialKey, coeff: Scalar) {
        if coeff.is_zero() {
            return;
        }

        match self.terms.remove(&key) {
            Some(existing) => {
                let sum = existing + coeff;
                if !sum.is_zero() {
                    self.terms.insert(key, sum);
                }
            },
            None => {
                self.terms.insert(key, coeff);
            },
        }
    }

    /// Adds two polynomials by merging their coefficient maps.
    pub fn add(&self, other: &PolyExpr) -> PolyExpr {
        let mut result = self.clone();
        for (key, coeff) in &other.terms {
            result.add_term(key.clone(), coeff.clone());
        }
        result
    }

    /// Subtracts a polynomial by adding its negation.
    pub fn sub(&self, other: &PolyExpr) -> PolyExpr {
        self.add(&other.neg())
    }

    /// Negates every coefficient.
    pub fn neg(&self) -> PolyExpr {
        let terms = self
            .terms
            .iter()
            .map(|(key, coeff)| (key.clone(), -coeff.clone()))
            .collect();
        PolyExpr { terms }
    }

    /// Multiplies two polynomials by distributing every pair of terms. Exponents of shared
    /// variables add.
    pub fn mul(&self, other: &PolyExpr) -> PolyExpr {
        let mut result = PolyExpr::zero();
        for (key_a, coeff_a) in &self.terms {
            for (key_b, coeff_b) in &other.terms {
                result.add_term(merge_keys(key_a, key_b), coeff_a.clone() * coeff_b.clone());
            }
        }
        result
    }

    /// Divides every coefficient by a scalar. Returns [`None`] if the divisor is zero.
    pub fn div_scalar(&self, divisor: &Scalar) -> Option<PolyExpr> {
        if divisor.is_zero() {
            return None;
        }

        let mut result = PolyExpr::zero();
        for (key, coeff) in &self.terms {
            result.add_term(key.clone(), coeff.clone().div(divisor.clone())?);
        }
        Some(result)
    }

    /// Raises the polynomial to a non-negative integer power by repeated products.
    pub fn pow(&self, exp: u32) -> PolyExpr {
        let mut result = PolyExpr::from_scalar(Scalar::one());
        for _ in 0..exp {
            result = result.mul(self);
        }
        result
    }

    /// The total degree of the polynomial. The zero polynomial has degree 0.
    pub fn degree(&self) -> u32 {
        self.terms.keys().map(|key| total_degree(key)).max().unwrap_or(0)
    }

    /// Decomposes the polynomial as `a·x² + b·x + c` in a single variable.
    ///
    /// Returns the variable name and the coefficients `[c, b, a]` by ascending degree, or
    /// [`None`] if the polynomial involves several variables or exceeds degree 2.
    pub fn as_univariate_quadratic(&self) -> Option<(Option<String>, [Scalar; 3])> {
        let mut variable: Option<String> = None;
        let mut coeffs = [Scalar::zero(), Scalar::zero(), Scalar::zero()];

        for (key, coeff) in &self.terms {
            match key.as_slice() {
                [] => coeffs[0] = coeff.clone(),
                [(name, exp)] if *exp <= 2 => {
                    match &variable {
                        Some(existing) if existing != name => return None,
                        Some(_) => {},
                        None => variable = Some(name.clone()),
                    }
                    coeffs[*exp as usize] = coeff.clone();
                },
                _ => return None,
            }
        }

        Some((variable, coeffs))
    }
}

/// Merges two monomial keys, adding the exponents of shared variables.
fn merge_keys(a: &MonomialKey, b: &MonomialKey) -> MonomialKey {
    let mut merged: BTreeMap<&str, u32> = BTreeMap::new();
    for (name, exp) in a.iter().chain(b) {
        *merged.entry(name).or_insert(0) += exp;
    }
    merged
        .into_iter()
        .map(|(name, exp)| (name.to_string(), exp))
        .collect()
}

/// The total degree of a monomial key.
pub fn total_degree(key: &MonomialKey) -> u32 {
    key.iter().map(|(_, exp)| exp).sum()
}

/// Computes binomial(n, k) as an exact integer. Used by tests to check expansion coefficients.
pub fn binomial(n: u32, k: u32) -> Integer {
    if k > n {
        return Integer::from(0);
    }

    let k = k.min(n - k);
    let mut result = Integer::from(1);
    for i in 0..k {
        result = result * (n - i) / (i + 1);
    }
    result
}
