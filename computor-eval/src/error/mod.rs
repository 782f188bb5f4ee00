pub mod kind;

use ariadne::Report;
pub use computor_error::ErrorKind;
use std::ops::Range;

/// A general evaluation error, tied to the regions of the source line it originated from.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Build a report from this error kind.
    pub fn build_report(&self) -> Report<(&'static str, Range<usize>)> {
        self.kind.build_report("input", &self.spans)
    }
}

/// An evaluation error that has not been tied to source spans yet. Helpers that have no access to
/// the AST (scalar, matrix and polynomial arithmetic) produce these; the evaluator attaches the
/// spans of the offending node.
#[derive(Debug)]
pub struct EvalError {
    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl EvalError {
    /// Creates a new spanless error with the given kind.
    pub fn new(kind: impl ErrorKind + 'static) -> Self {
        Self { kind: Box::new(kind) }
    }

    /// Attaches spans, producing a complete [`Error`].
    pub fn into_error(self, spans: Vec<Range<usize>>) -> Error {
        Error { spans, kind: self.kind }
    }
}

impl<T: ErrorKind + 'static> From<T> for EvalError {
    fn from(kind: T) -> Self {
        Self::new(kind)
    }
}
