pub mod assign;
pub mod binary;
pub mod call;
pub mod literal;
pub mod matrix;
pub mod unary;

use computor_parser::parser::ast::expr::Expr;
use crate::{ctxt::Ctxt, error::Error, value::Value};

/// Any type that can be evaluated to produce a value.
pub trait Eval {
    /// Evaluate the expression to produce a value, using the given context.
    fn eval(&self, ctxt: &mut Ctxt) -> Result<Value, Error>;

    /// Evaluate the expression to produce a value, using an empty context.
    fn eval_default(&self) -> Result<Value, Error> {
        self.eval(&mut Default::default())
    }
}

impl Eval for Expr {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<Value, Error> {
        match self {
            Expr::Literal(literal) => literal.eval(ctxt),
            Expr::Paren(paren) => paren.expr.eval(ctxt),
            Expr::Matrix(matrix) => matrix.eval(ctxt),
            Expr::Call(call) => call.eval(ctxt),
            Expr::Unary(unary) => unary.eval(ctxt),
            Expr::Binary(binary) => binary.eval(ctxt),
            Expr::Assign(assign) => assign.eval(ctxt),
        }
    }
}

/// Eval tests depend on the parser, so ensure that parser tests pass before running these.
#[cfg(test)]
mod tests {
    use computor_parser::parser::Parser;
    use crate::primitive::rat;
    use super::*;

    /// Parses and evaluates the given source with a fresh context.
    fn eval_str(source: &str) -> Result<Value, Error> {
        let mut ctxt = Ctxt::new();
        eval_with(source, &mut ctxt)
    }

    /// Parses and evaluates the given source with the given context.
    fn eval_with(source: &str, ctxt: &mut Ctxt) -> Result<Value, Error> {
        let expr = Parser::new(source).try_parse_full::<Expr>().unwrap();
        expr.eval(ctxt)
    }

    #[test]
    fn arithmetic() {
        assert_eq!(eval_str("2 + 3 * 4").unwrap(), Value::Rational(rat(14)));
        assert_eq!(eval_str("(1 + 9) / 5 * 3").unwrap(), Value::Rational(rat(6)));
        assert_eq!(eval_str("2 ^ 10").unwrap(), Value::Rational(rat(1024)));
        assert_eq!(eval_str("7 % 3").unwrap(), Value::Rational(rat(1)));
        assert_eq!(eval_str("1 / 3 + 1 / 6").unwrap(), Value::Rational(rat((1, 2))));
    }

    #[test]
    fn remainder_is_euclidean() {
        assert_eq!(eval_str("-7 % 3").unwrap(), Value::Rational(rat(2)));
        assert_eq!(eval_str("7 % -3").unwrap(), Value::Rational(rat(1)));
    }

    #[test]
    fn negative_exponent_inverts() {
        assert_eq!(eval_str("2 ^ -2").unwrap(), Value::Rational(rat((1, 4))));
    }

    #[test]
    fn power_is_right_associative() {
        assert_eq!(eval_str("2 ^ 3 ^ 2").unwrap(), Value::Rational(rat(512)));
    }

    #[test]
    fn unary_binds_weaker_than_power() {
        assert_eq!(eval_str("-2 ^ 2").unwrap(), Value::Rational(rat(-4)));
    }

    #[test]
    fn imaginary_arithmetic() {
        assert_eq!(eval_str("i^2").unwrap(), Value::Rational(rat(-1)));
        assert_eq!(
            format!("{}", eval_str("(3 + 2 * i) + (1 + 4 * i)").unwrap()),
            "4 + 6i",
        );
        assert_eq!(eval_str("(2 * i) * (3 * i)").unwrap(), Value::Rational(rat(-6)));
    }

    #[test]
    fn division_by_zero() {
        assert!(eval_str("1 / 0").is_err());
        assert!(eval_str("1 / (2 - 2)").is_err());
    }

    #[test]
    fn modulo_rejects_non_integers() {
        assert!(eval_str("1.5 % 2").is_err());
        assert!(eval_str("i % 2").is_err());
    }

    #[test]
    fn variables() {
        let mut ctxt = Ctxt::new();
        eval_with("x = 5", &mut ctxt).unwrap();
        assert_eq!(eval_with("x", &mut ctxt).unwrap(), Value::Rational(rat(5)));
        assert_eq!(eval_with("X * 2", &mut ctxt).unwrap(), Value::Rational(rat(10)));

        // lookup is idempotent
        assert_eq!(eval_with("x", &mut ctxt).unwrap(), Value::Rational(rat(5)));
    }

    #[test]
    fn free_variables_go_symbolic() {
        let value = eval_str("2 * x + 4 - 4").unwrap();
        assert_eq!(format!("{}", value), "2 * x");
    }

    #[test]
    fn product_and_quotient_cancel() {
        let mut ctxt = Ctxt::new();
        eval_with("a = 7 / 13", &mut ctxt).unwrap();
        eval_with("b = -22 / 5", &mut ctxt).unwrap();
        assert_eq!(eval_with("a * b / b", &mut ctxt).unwrap(), Value::Rational(rat((7, 13))));
    }

    #[test]
    fn function_definition_and_call() {
        let mut ctxt = Ctxt::new();
        eval_with("f(x) = x^2 + 1", &mut ctxt).unwrap();
        assert_eq!(eval_with("f(3)", &mut ctxt).unwrap(), Value::Rational(rat(10)));
    }

    #[test]
    fn function_composition_stays_symbolic() {
        let mut ctxt = Ctxt::new();
        eval_with("f(x) = x^2 + 1", &mut ctxt).unwrap();
        eval_with("g(x) = 2 * x", &mut ctxt).unwrap();
        let value = eval_with("f(g(x))", &mut ctxt).unwrap();
        assert_eq!(format!("{}", value), "4 * x^2 + 1");
    }

    #[test]
    fn functions_bind_late() {
        let mut ctxt = Ctxt::new();
        eval_with("f(x) = x + k", &mut ctxt).unwrap();
        eval_with("k = 10", &mut ctxt).unwrap();
        assert_eq!(eval_with("f(1)", &mut ctxt).unwrap(), Value::Rational(rat(11)));

        eval_with("k = 20", &mut ctxt).unwrap();
        assert_eq!(eval_with("f(1)", &mut ctxt).unwrap(), Value::Rational(rat(21)));
    }

    #[test]
    fn wrong_argument_count() {
        let mut ctxt = Ctxt::new();
        eval_with("f(x, y) = x + y", &mut ctxt).unwrap();
        assert!(eval_with("f(1)", &mut ctxt).is_err());
        assert!(eval_with("f(1, 2, 3)", &mut ctxt).is_err());
        assert_eq!(eval_with("f(1, 2)", &mut ctxt).unwrap(), Value::Rational(rat(3)));
    }

    #[test]
    fn matrices() {
        assert_eq!(
            format!("{}", eval_str("[[1, 2]; [3, 4]] + [[1, 1]; [1, 1]]").unwrap()),
            "[[2, 3];[4, 5]]",
        );
        assert_eq!(
            format!("{}", eval_str("[[1, 2]; [3, 4]] * [[1, 2]; [3, 4]]").unwrap()),
            "[[1, 4];[9, 16]]",
        );
        assert_eq!(
            format!("{}", eval_str("[[1, 2]; [3, 4]] ** [[5, 6]; [7, 8]]").unwrap()),
            "[[19, 22];[43, 50]]",
        );
        assert_eq!(
            format!("{}", eval_str("2 * [[1, 2]; [3, 4]]").unwrap()),
            "[[2, 4];[6, 8]]",
        );
    }

    #[test]
    fn matrix_shape_errors() {
        assert!(eval_str("[[1, 2]] + [[1], [2]]").is_err());
        assert!(eval_str("[[1, 2]] ** [[1, 2]]").is_err());
    }

    #[test]
    fn matrix_product_of_scalars_is_an_error() {
        assert!(eval_str("2 ** 3").is_err());
    }

    #[test]
    fn symbolic_division_rules() {
        assert!(eval_str("x / x").is_err());
        assert!(eval_str("x / 0").is_err());
        assert_eq!(format!("{}", eval_str("(2 * x) / 2").unwrap()), "x");
    }

    #[test]
    fn symbolic_exponent_rules() {
        assert!(eval_str("2 ^ x").is_err());
        assert!(eval_str("x ^ -1").is_err());
        assert!(eval_str("x ^ (1/2)").is_err());
        assert_eq!(format!("{}", eval_str("x ^ 0").unwrap()), "1");
    }
}
