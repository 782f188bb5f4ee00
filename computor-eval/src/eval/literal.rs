use computor_parser::parser::ast::literal::Literal;
use crate::{
    complex::Complex,
    ctxt::{is_reserved, normalize, Binding, Ctxt},
    error::Error,
    eval::Eval,
    primitive::rat_from_str,
    symbolic::PolyExpr,
    value::Value,
};

impl Eval for Literal {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<Value, Error> {
        match self {
            Literal::Num(num) => Ok(Value::Rational(rat_from_str(&num.value))),
            Literal::Imag(_) => Ok(Value::Complex(Complex::i())),
            Literal::Sym(sym) => {
                // `I` and `i` are the same identifier, and it is reserved
                if is_reserved(&sym.name) {
                    return Ok(Value::Complex(Complex::i()));
                }

                match ctxt.get(&sym.name) {
                    Some(Binding::Value(value)) => Ok(value.clone()),
                    Some(Binding::Func(header, body)) => {
                        Ok(Value::Function(header.clone(), body.clone()))
                    },
                    // unbound names become symbolic variables
                    None => Ok(Value::Symbolic(PolyExpr::from_var(&normalize(&sym.name)))),
                }
            },
        }
    }
}
