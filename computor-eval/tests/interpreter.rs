//! End-to-end tests: each case feeds lines through [`process`] the way the REPL does and checks
//! the printed answer.

use computor_eval::ctxt::Ctxt;
use computor_eval::process::process;
use pretty_assertions::assert_eq;

/// Runs a sequence of input lines and returns the output of the last one.
fn run(lines: &[&str]) -> String {
    let mut ctxt = Ctxt::new();
    let mut last = String::new();
    for line in lines {
        last = process(line, &mut ctxt).unwrap_or_else(|err| {
            panic!("`{}` failed: {}", line, err.message());
        });
    }
    last
}

/// Runs a sequence of input lines and returns the error message of the last one, which must
/// fail.
fn run_err(lines: &[&str]) -> String {
    let mut ctxt = Ctxt::new();
    let (last, rest) = lines.split_last().unwrap();
    for line in rest {
        process(line, &mut ctxt).unwrap();
    }
    process(last, &mut ctxt).unwrap_err().message()
}

#[test]
fn arithmetic_precedence() {
    assert_eq!(run(&["2 + 3 * 4"]), "14");
}

#[test]
fn imaginary_unit_squares_to_minus_one() {
    assert_eq!(run(&["i^2"]), "-1");
}

#[test]
fn complex_addition() {
    assert_eq!(run(&["(3+2*i) + (1+4*i)"]), "4 + 6i");
}

#[test]
fn function_evaluation() {
    assert_eq!(run(&["f(x) = x^2 + 1", "f(3) = ?"]), "10");
}

#[test]
fn function_composition() {
    assert_eq!(run(&["f(x)=x^2+1", "g(x)=2*x", "f(g(x)) = ?"]), "4 * x^2 + 1");
}

#[test]
fn linear_equation() {
    assert_eq!(run(&["2*x + 4 = 0 ?"]), "x = -2");
}

#[test]
fn quadratic_equation() {
    assert_eq!(run(&["x^2 - 4 = 0 ?"]), "x = 2, x = -2");
}

#[test]
fn quadratic_with_complex_roots() {
    assert_eq!(run(&["x^2 + 1 = 0 ?"]), "x = i, x = -i");
}

#[test]
fn determinant() {
    assert_eq!(run(&["det([[1,2];[3,4]])"]), "-2");
}

#[test]
fn sqrt_of_negative() {
    assert_eq!(run(&["sqrt(-4)"]), "2i");
}

#[test]
fn variables_round_trip() {
    assert_eq!(run(&["x = 3 / 7", "x"]), "3/7");
    assert_eq!(run(&["x = 0.5", "x * 2"]), "1");
}

#[test]
fn case_insensitive_names() {
    assert_eq!(run(&["varA = 21", "VARA * 2"]), "42");
}

#[test]
fn matrix_assignment_and_product() {
    assert_eq!(
        run(&["A = [[1, 0]; [0, 1]]", "B = [[5, 6]; [7, 8]]", "A ** B"]),
        "[[5, 6];[7, 8]]",
    );
}

#[test]
fn matrix_inverse_and_transpose() {
    assert_eq!(run(&["inv([[2, 0]; [0, 4]])"]), "[[1/2, 0];[0, 1/4]]");
    assert_eq!(run(&["transpose([[1, 2, 3]])"]), "[[1];[2];[3]]");
}

#[test]
fn symbolic_results_survive_evaluation() {
    assert_eq!(run(&["(x + 1) * (x - 1)"]), "x^2 - 1");
    assert_eq!(run(&["(1 + x)^4"]), "x^4 + 4 * x^3 + 6 * x^2 + 4 * x + 1");
}

#[test]
fn stored_functions_see_later_definitions() {
    assert_eq!(run(&["f(x) = x + k", "k = 2", "f(1)"]), "3");
}

#[test]
fn eval_query_is_plain_evaluation() {
    assert_eq!(run(&["2 + 2 = ?"]), "4");
    assert_eq!(run(&["x = 9", "x = ?"]), "9");
}

#[test]
fn solving_reports_all_and_none() {
    assert_eq!(run(&["0 = 0 ?"]), "all real numbers");
    assert_eq!(run(&["3 = 0 ?"]), "no solution");
}

#[test]
fn errors_abort_the_line() {
    assert_eq!(run_err(&["1 / 0"]), "division by zero");
    assert!(run_err(&["unknownfn(2)"]).contains("does not exist"));
    assert!(run_err(&["y + 2x"]).contains("expected end of input"));
    assert!(run_err(&["x ^ 3 = 0 ?"]).contains("degree 3"));
}

#[test]
fn undefined_variables_are_symbolic_until_solved() {
    assert_eq!(run(&["y + y"]), "2 * y");
    assert_eq!(run(&["y + 1 = 0 ?"]), "y = -1");
}

#[test]
fn exact_rational_pipeline() {
    assert_eq!(run(&["1/3 + 1/6"]), "1/2");
    assert_eq!(run(&["(2/3) ^ -2"]), "9/4");
    assert_eq!(run(&["0.1 + 0.2"]), "3/10");
}
