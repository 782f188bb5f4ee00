//! The equation solver for `lhs = rhs ?` queries.
//!
//! The two sides are evaluated, their difference is brought to the canonical polynomial form, and
//! the roots are computed for degrees 0 through 2. Roots stay exact whenever the arithmetic
//! allows: rational roots and exact complex roots are reported as such, irrational roots are
//! reported in reduced radical form, and only complex coefficients with an inexact square root
//! fall back to floating point.

use computor_parser::parser::ast::stmt::SolveQuery;
use rug::{Integer, Rational};
use std::fmt::{self, Display, Formatter};
use crate::{
    complex::Complex,
    ctxt::Ctxt,
    error::{
        kind::{DegreeTooHigh, NotPolynomial},
        Error,
    },
    eval::Eval,
    fmt::{format_cfloat, format_complex},
    funcs::{exact_sqrt, extract_square_factor},
    primitive::{complex, float, rat},
    scalar::Scalar,
    symbolic::PolyExpr,
    value::Value,
};

/// A root in reduced radical form: `base + coeff·√radicand`, or
/// `base + (coeff·√radicand)·i` when `imaginary` is set. The radicand is square-free as far as
/// [`extract_square_factor`] can tell, and greater than 1.
#[derive(Debug, Clone, PartialEq)]
pub struct RadicalRoot {
    /// The rational part of the root.
    pub base: Rational,

    /// The coefficient of the radical.
    pub coeff: Rational,

    /// The positive integer under the radical.
    pub radicand: Integer,

    /// Whether the radical part is imaginary.
    pub imaginary: bool,
}

/// One root of an equation.
#[derive(Debug, Clone, PartialEq)]
pub enum Root {
    /// An exact rational or complex root.
    Exact(Scalar),

    /// An exact root with an irrational radical part.
    Radical(RadicalRoot),

    /// A floating-point approximation. Only produced for complex coefficients whose discriminant
    /// has no exact square root.
    Approx(rug::Complex),
}

/// The solution set of an equation.
#[derive(Debug, Clone, PartialEq)]
pub enum Solution {
    /// Every real number satisfies the equation.
    AllReals,

    /// No value satisfies the equation.
    NoSolution,

    /// A single root: a degree-1 equation, or a degree-2 equation with a zero discriminant.
    One(Root),

    /// Two distinct roots.
    Two(Root, Root),
}

/// The result of solving an equation.
#[derive(Debug, Clone, PartialEq)]
pub struct Solved {
    /// The variable being solved for. `x` when the equation is constant.
    pub variable: String,

    /// The solution set.
    pub solution: Solution,
}

/// Evaluates both sides of the query and solves `lhs - rhs = 0`.
pub fn solve_query(query: &SolveQuery, ctxt: &mut Ctxt) -> Result<Solved, Error> {
    let spans = vec![query.span.clone()];

    let lhs = query.lhs.eval(ctxt)?;
    let rhs = query.rhs.eval(ctxt)?;

    let lift = |value: &Value| -> Option<PolyExpr> {
        match value {
            Value::Symbolic(poly) => Some(poly.clone()),
            value => value.as_scalar().map(PolyExpr::from_scalar),
        }
    };
    let (Some(left), Some(right)) = (lift(&lhs), lift(&rhs)) else {
        return Err(Error::new(spans, NotPolynomial));
    };

    let poly = left.sub(&right);
    let Some((variable, [c, b, a])) = poly.as_univariate_quadratic() else {
        // distinguish "too high a degree" from "not a polynomial at all"
        return Err(match poly.as_univariate_degree() {
            Some(degree) => Error::new(spans, DegreeTooHigh { degree }),
            None => Error::new(spans, NotPolynomial),
        });
    };

    let variable = variable.unwrap_or_else(|| "x".to_string());
    let solution = solve_coefficients(a, b, c);
    Ok(Solved { variable, solution })
}

/// Solves `a·x² + b·x + c = 0` from its coefficients.
fn solve_coefficients(a: Scalar, b: Scalar, c: Scalar) -> Solution {
    if a.is_zero() && b.is_zero() {
        // degree 0: either everything or nothing is a solution
        return if c.is_zero() {
            Solution::AllReals
        } else {
            Solution::NoSolution
        };
    }

    if a.is_zero() {
        // degree 1: the unique root -c/b
        let root = (-c).div(b).unwrap_or_else(|| unreachable!("b is non-zero"));
        return Solution::One(Root::Exact(root));
    }

    // degree 2: discriminant D = b² - 4ac
    let discriminant =
        b.clone() * b.clone() - Scalar::Rational(rat(4)) * a.clone() * c.clone();
    let two_a = Scalar::Rational(rat(2)) * a.clone();

    match (&b, &two_a, &discriminant) {
        (Scalar::Rational(b), Scalar::Rational(two_a), Scalar::Rational(d)) => {
            solve_rational_quadratic(b, two_a, d)
        },
        _ => solve_complex_quadratic(&b, &two_a, &discriminant),
    }
}

/// Solves a quadratic with rational coefficients. `two_a` and `d` are `2a` and the discriminant.
fn solve_rational_quadratic(b: &Rational, two_a: &Rational, d: &Rational) -> Solution {
    let base = rat(-b.clone() / two_a);

    match d.cmp0() {
        std::cmp::Ordering::Equal => Solution::One(Root::Exact(Scalar::Rational(base))),
        std::cmp::Ordering::Greater => {
            let (coeff, radicand) = reduce_radical(d, two_a);
            if radicand == 1u32 {
                // √D is rational: two exact roots
                let plus = rat(&base + &coeff);
                let minus = rat(&base - &coeff);
                Solution::Two(
                    Root::Exact(Scalar::Rational(plus)),
                    Root::Exact(Scalar::Rational(minus)),
                )
            } else {
                Solution::Two(
                    Root::Radical(RadicalRoot {
                        base: base.clone(),
                        coeff: coeff.clone(),
                        radicand: radicand.clone(),
                        imaginary: false,
                    }),
                    Root::Radical(RadicalRoot {
                        base,
                        coeff: -coeff,
                        radicand,
                        imaginary: false,
                    }),
                )
            }
        },
        std::cmp::Ordering::Less => {
            // two complex conjugate roots from √|D|
            let (coeff, radicand) = reduce_radical(&rat(-d.clone()), two_a);
            if radicand == 1u32 {
                let plus = Complex::new(base.clone(), coeff.clone());
                let minus = Complex::new(base, -coeff);
                Solution::Two(
                    Root::Exact(Scalar::from(plus)),
                    Root::Exact(Scalar::from(minus)),
                )
            } else {
                Solution::Two(
                    Root::Radical(RadicalRoot {
                        base: base.clone(),
                        coeff: coeff.clone(),
                        radicand: radicand.clone(),
                        imaginary: true,
                    }),
                    Root::Radical(RadicalRoot {
                        base,
                        coeff: -coeff,
                        radicand,
                        imaginary: true,
                    }),
                )
            }
        },
    }
}

/// Reduces `√d / two_a` for a positive rational `d = p/q`: with `√(p/q) = √(pq) / q` and
/// `pq = s²·r`, the result is the pair `(s / (q·two_a), r)` so that the radical part is
/// `coeff·√r`.
fn reduce_radical(d: &Rational, two_a: &Rational) -> (Rational, Integer) {
    let pq = Integer::from(d.numer() * d.denom());
    let (s, r) = extract_square_factor(&pq);
    let coeff = rat((s, d.denom().clone())) / two_a.clone();
    (coeff, r)
}

/// Solves a quadratic whose coefficients involve complex numbers: the quadratic formula in the
/// complex field, with an exact square root when one exists and a floating-point principal root
/// otherwise.
fn solve_complex_quadratic(b: &Scalar, two_a: &Scalar, d: &Scalar) -> Solution {
    let neg_b = -b.clone();

    if let Some(sqrt_d) = exact_sqrt(d) {
        let plus = (neg_b.clone() + sqrt_d.clone())
            .div(two_a.clone())
            .unwrap_or_else(|| unreachable!("2a is non-zero"));
        let minus = (neg_b - sqrt_d)
            .div(two_a.clone())
            .unwrap_or_else(|| unreachable!("2a is non-zero"));

        if d.is_zero() {
            return Solution::One(Root::Exact(plus));
        }
        return Solution::Two(Root::Exact(plus), Root::Exact(minus));
    }

    // floating fallback: the principal square root of the discriminant
    let to_cfloat = |scalar: &Scalar| {
        let z = scalar.to_complex();
        complex((float(&z.re), float(&z.im)))
    };
    let sqrt_d = to_cfloat(d).sqrt();
    let neg_b = to_cfloat(&neg_b);
    let two_a = to_cfloat(two_a);

    let plus = (neg_b.clone() + sqrt_d.clone()) / two_a.clone();
    let minus = (neg_b - sqrt_d) / two_a;
    Solution::Two(Root::Approx(plus), Root::Approx(minus))
}

impl PolyExpr {
    /// The degree of the polynomial if it is univariate (or constant), for solver error
    /// messages.
    fn as_univariate_degree(&self) -> Option<u32> {
        let mut variable: Option<&str> = None;
        for (key, _) in self.terms() {
            match key.as_slice() {
                [] => {},
                [(name, _)] => match variable {
                    Some(existing) if existing != name => return None,
                    _ => variable = Some(name),
                },
                _ => return None,
            }
        }
        Some(self.degree())
    }
}

impl Display for RadicalRoot {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let coeff_neg = self.coeff.cmp0() == std::cmp::Ordering::Less;
        let coeff_abs = if coeff_neg { rat(-self.coeff.clone()) } else { self.coeff.clone() };

        if self.base.cmp0() != std::cmp::Ordering::Equal {
            write!(f, "{} {} ", self.base, if coeff_neg { "-" } else { "+" })?;
        } else if coeff_neg {
            write!(f, "-")?;
        }

        if coeff_abs != 1u32 {
            write!(f, "{} * ", coeff_abs)?;
        }
        write!(f, "sqrt({})", self.radicand)?;

        if self.imaginary {
            write!(f, " * i")?;
        }
        Ok(())
    }
}

impl Display for Root {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Root::Exact(Scalar::Rational(r)) => write!(f, "{}", r),
            Root::Exact(Scalar::Complex(c)) => format_complex(f, c),
            Root::Radical(radical) => radical.fmt(f),
            Root::Approx(c) => format_cfloat(f, c),
        }
    }
}

impl Display for Solved {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.solution {
            Solution::AllReals => write!(f, "all real numbers"),
            Solution::NoSolution => write!(f, "no solution"),
            Solution::One(root) => write!(f, "{} = {}", self.variable, root),
            Solution::Two(first, second) => {
                write!(f, "{} = {}, {} = {}", self.variable, first, self.variable, second)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use computor_parser::parser::{ast::stmt::Stmt, Parser};

    fn solve_str(source: &str) -> Result<Solved, Error> {
        let mut ctxt = Ctxt::new();
        solve_with(source, &mut ctxt)
    }

    fn solve_with(source: &str, ctxt: &mut Ctxt) -> Result<Solved, Error> {
        let Stmt::Solve(query) = Parser::new(source).try_parse_full::<Stmt>().unwrap() else {
            panic!("expected a solve query");
        };
        solve_query(&query, ctxt)
    }

    #[test]
    fn linear() {
        assert_eq!(format!("{}", solve_str("2 * x + 4 = 0 ?").unwrap()), "x = -2");
        assert_eq!(format!("{}", solve_str("3 * y = 12 ?").unwrap()), "y = 4");
    }

    #[test]
    fn quadratic_with_rational_roots() {
        assert_eq!(format!("{}", solve_str("x^2 - 4 = 0 ?").unwrap()), "x = 2, x = -2");
        assert_eq!(
            format!("{}", solve_str("2 * x^2 - 3 * x + 1 = 0 ?").unwrap()),
            "x = 1, x = 1/2",
        );
    }

    #[test]
    fn quadratic_with_complex_roots() {
        assert_eq!(format!("{}", solve_str("x^2 + 1 = 0 ?").unwrap()), "x = i, x = -i");
        assert_eq!(
            format!("{}", solve_str("x^2 + 2 * x + 5 = 0 ?").unwrap()),
            "x = -1 + 2i, x = -1 - 2i",
        );
    }

    #[test]
    fn repeated_root() {
        assert_eq!(
            format!("{}", solve_str("x^2 + 2 * x + 1 = 0 ?").unwrap()),
            "x = -1",
        );
    }

    #[test]
    fn irrational_roots_stay_symbolic() {
        // x^2 - 2 = 0: ±√2
        assert_eq!(
            format!("{}", solve_str("x^2 - 2 = 0 ?").unwrap()),
            "x = sqrt(2), x = -sqrt(2)",
        );

        // x^2 + x - 1 = 0: (-1 ± √5) / 2
        assert_eq!(
            format!("{}", solve_str("x^2 + x - 1 = 0 ?").unwrap()),
            "x = -1/2 + 1/2 * sqrt(5), x = -1/2 - 1/2 * sqrt(5)",
        );

        // x^2 + 3 = 0: ±√3·i
        assert_eq!(
            format!("{}", solve_str("x^2 + 3 = 0 ?").unwrap()),
            "x = sqrt(3) * i, x = -sqrt(3) * i",
        );
    }

    #[test]
    fn radicals_are_reduced() {
        // x^2 - 8 = 0: ±2√2
        assert_eq!(
            format!("{}", solve_str("x^2 - 8 = 0 ?").unwrap()),
            "x = 2 * sqrt(2), x = -2 * sqrt(2)",
        );
    }

    #[test]
    fn degree_zero() {
        assert_eq!(format!("{}", solve_str("2 = 2 ?").unwrap()), "all real numbers");
        assert_eq!(format!("{}", solve_str("x - x = 0 ?").unwrap()), "all real numbers");
        assert_eq!(format!("{}", solve_str("1 = 2 ?").unwrap()), "no solution");
    }

    #[test]
    fn rejects_higher_degrees_and_multiple_variables() {
        assert!(solve_str("x^3 = 0 ?").is_err());
        assert!(solve_str("x * y = 1 ?").is_err());
        assert!(solve_str("[[1, 2]; [3, 4]] = 0 ?").is_err());
    }

    #[test]
    fn complex_coefficients() {
        // x^2 - 2ix - 1 = 0 has the double root x = i
        assert_eq!(
            format!("{}", solve_with("x^2 - 2 * i * x - 1 = 0 ?", &mut Ctxt::new()).unwrap()),
            "x = i",
        );
    }

    #[test]
    fn roots_substitute_to_zero() {
        // solver soundness for rational discriminants: substituting each root back in gives 0
        let mut ctxt = Ctxt::new();
        let solved = solve_with("2 * x^2 - 3 * x - 5 = 0 ?", &mut ctxt).unwrap();
        let Solution::Two(Root::Exact(r1), Root::Exact(r2)) = solved.solution else {
            panic!("expected two exact roots");
        };

        for root in [r1, r2] {
            let x = root.clone() * root.clone() * Scalar::Rational(rat(2))
                - root * Scalar::Rational(rat(3))
                - Scalar::Rational(rat(5));
            assert!(x.is_zero());
        }
    }

    #[test]
    fn functions_can_be_solved() {
        let mut ctxt = Ctxt::new();
        {
            let Stmt::Expr(expr) = Parser::new("f(x) = x^2 - 4").try_parse_full::<Stmt>().unwrap()
            else {
                panic!("expected an expression");
            };
            expr.eval(&mut ctxt).unwrap();
        }

        assert_eq!(
            format!("{}", solve_with("f(x) = 0 ?", &mut ctxt).unwrap()),
            "x = 2, x = -2",
        );
    }
}
