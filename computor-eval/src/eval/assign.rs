use computor_parser::parser::ast::assign::{Assign, AssignTarget};
use crate::{ctxt::Ctxt, error::Error, eval::Eval, value::Value};

impl Eval for Assign {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<Value, Error> {
        match &self.target {
            AssignTarget::Symbol(symbol) => {
                // evaluate first: a failed right-hand side must not touch the context
                let value = self.value.eval(ctxt)?.normalize();
                ctxt.add_var(&symbol.name, value.clone());
                Ok(value)
            },
            AssignTarget::Func(header) => {
                // the body is stored unevaluated; names it references are resolved at call time,
                // and errors in it only surface then
                ctxt.add_func(header.clone(), (*self.value).clone());
                Ok(Value::Function(header.clone(), (*self.value).clone()))
            },
        }
    }
}
