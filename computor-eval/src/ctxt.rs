//! The evaluation context: the single namespace of user-defined variables and functions.

use computor_parser::parser::ast::{assign::FuncHeader, expr::Expr};
use levenshtein::levenshtein;
use std::collections::HashMap;
use crate::value::Value;

/// What a name is bound to: a value, or a stored function definition.
#[derive(Debug, Clone)]
pub enum Binding {
    /// A value produced by a variable assignment.
    Value(Value),

    /// A function definition. The body is stored unevaluated so that identifiers it references
    /// are resolved at call time.
    Func(FuncHeader, Expr),
}

/// A context to use when evaluating an expression, containing variables and functions that can be
/// used within the expression.
///
/// Names are case-insensitive; the reserved identifier `i` never appears in the context.
#[derive(Debug, Clone, Default)]
pub struct Ctxt {
    /// The bindings in the context, keyed by normalized (lowercased) name.
    bindings: HashMap<String, Binding>,
}

/// Normalizes an identifier for lookup.
pub fn normalize(name: &str) -> String {
    name.to_lowercase()
}

/// Returns true if the identifier is reserved and can never be bound.
pub fn is_reserved(name: &str) -> bool {
    name.eq_ignore_ascii_case("i")
}

impl Ctxt {
    /// Creates a new empty context.
    pub fn new() -> Ctxt {
        Ctxt::default()
    }

    /// Binds a variable to a value, replacing any previous binding of the name.
    pub fn add_var(&mut self, name: &str, value: Value) {
        self.bindings.insert(normalize(name), Binding::Value(value));
    }

    /// Gets the value of a variable in the context.
    pub fn get_var(&self, name: &str) -> Option<&Value> {
        match self.bindings.get(&normalize(name)) {
            Some(Binding::Value(value)) => Some(value),
            _ => None,
        }
    }

    /// Binds a function definition, replacing any previous binding of the name.
    pub fn add_func(&mut self, header: FuncHeader, body: Expr) {
        self.bindings.insert(normalize(&header.name.name), Binding::Func(header, body));
    }

    /// Gets the header and body of a function in the context.
    pub fn get_func(&self, name: &str) -> Option<(&FuncHeader, &Expr)> {
        match self.bindings.get(&normalize(name)) {
            Some(Binding::Func(header, body)) => Some((header, body)),
            _ => None,
        }
    }

    /// Gets whatever the name is bound to.
    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(&normalize(name))
    }

    /// Returns the names of all functions in the context with a name similar to the given name.
    pub fn get_similar_funcs(&self, name: &str) -> Vec<String> {
        let name = normalize(name);
        self.bindings
            .iter()
            .filter(|(n, binding)| {
                matches!(binding, Binding::Func(..)) && levenshtein(n, &name) < 2
            })
            .map(|(n, _)| n.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::rat;

    #[test]
    fn lookup_is_case_insensitive() {
        let mut ctxt = Ctxt::new();
        ctxt.add_var("varA", Value::Rational(rat(5)));
        assert_eq!(ctxt.get_var("vara"), Some(&Value::Rational(rat(5))));
        assert_eq!(ctxt.get_var("VARA"), Some(&Value::Rational(rat(5))));
    }

    #[test]
    fn assignment_overwrites() {
        let mut ctxt = Ctxt::new();
        ctxt.add_var("x", Value::Rational(rat(1)));
        ctxt.add_var("X", Value::Rational(rat(2)));
        assert_eq!(ctxt.get_var("x"), Some(&Value::Rational(rat(2))));
    }

    #[test]
    fn reserved_name() {
        assert!(is_reserved("i"));
        assert!(is_reserved("I"));
        assert!(!is_reserved("x"));
    }
}
