//! The per-line entry point: parse a line, dispatch it (assignment, evaluation, or equation
//! solving), and format the answer.

use ariadne::Source;
use computor_parser::parser::{ast::stmt::Stmt, error::Error as ParseError, Parser};
use crate::{ctxt::Ctxt, error::Error as EvalError, eval::Eval, solve::solve_query};

/// Utility enum to package errors that can occur while parsing / evaluating.
#[derive(Debug)]
pub enum Error {
    /// An error that occurred while parsing.
    Parse(ParseError),

    /// An error that occurred while evaluating or solving.
    Eval(EvalError),
}

impl Error {
    /// The one-line human-readable reason, used for `Error: <reason>` output.
    pub fn message(&self) -> String {
        match self {
            Self::Parse(err) => err.kind.message(),
            Self::Eval(err) => err.kind.message(),
        }
    }

    /// Report this error to stderr as a full report against the offending line.
    ///
    /// The `ariadne` crate's report type does not implement `Display`, so printing to stderr is
    /// the only option.
    pub fn report_to_stderr(&self, input: &str) {
        let report = match self {
            Self::Parse(err) => err.build_report(),
            Self::Eval(err) => err.build_report(),
        };
        let _ = report.eprint(("input", Source::from(input)));
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl From<EvalError> for Error {
    fn from(err: EvalError) -> Self {
        Self::Eval(err)
    }
}

/// Processes a single line of input against the given context, returning the line to print.
///
/// A failed line leaves the context untouched.
pub fn process(input: &str, ctxt: &mut Ctxt) -> Result<String, Error> {
    let stmt = Parser::new(input).try_parse_full::<Stmt>()?;

    match stmt {
        Stmt::Expr(expr) => Ok(expr.eval(ctxt)?.to_string()),
        Stmt::Eval(query) => Ok(query.expr.eval(ctxt)?.to_string()),
        Stmt::Solve(query) => Ok(solve_query(&query, ctxt)?.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_line_per_input() {
        let mut ctxt = Ctxt::new();
        assert_eq!(process("2 + 3 * 4", &mut ctxt).unwrap(), "14");
        assert_eq!(process("x = 5", &mut ctxt).unwrap(), "5");
        assert_eq!(process("x + 1 = ?", &mut ctxt).unwrap(), "6");
    }

    #[test]
    fn function_definitions_echo() {
        let mut ctxt = Ctxt::new();
        assert_eq!(process("f(x) = x^2 + 1", &mut ctxt).unwrap(), "f(x) = x ^ 2 + 1");
    }

    #[test]
    fn failed_lines_do_not_mutate_the_context() {
        let mut ctxt = Ctxt::new();
        process("x = 5", &mut ctxt).unwrap();
        assert!(process("x = 1 / 0", &mut ctxt).is_err());
        assert_eq!(process("x", &mut ctxt).unwrap(), "5");
    }

    #[test]
    fn parse_and_eval_errors_have_messages() {
        let mut ctxt = Ctxt::new();
        assert!(!process("2 @ 2", &mut ctxt).unwrap_err().message().is_empty());
        assert!(!process("1 / 0", &mut ctxt).unwrap_err().message().is_empty());
    }
}
