use computor_parser::parser::ast::call::Call;
use crate::{
    builtins,
    ctxt::{normalize, Ctxt},
    error::{
        kind::{UndefinedFunction, WrongArgumentCount},
        Error,
    },
    eval::Eval,
    value::Value,
};

impl Eval for Call {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<Value, Error> {
        // builtins resolve first and cannot be shadowed
        if let Some(builtin) = builtins::get_builtin(&normalize(&self.name.name)) {
            let args = self
                .args
                .iter()
                .map(|arg| arg.eval(ctxt))
                .collect::<Result<Vec<_>, _>>()?;
            return builtin(&self.name.name, &args).map_err(|err| err.into_error(self));
        }

        let Some((header, body)) = ctxt.get_func(&self.name.name) else {
            return Err(Error::new(vec![self.name.span.clone()], UndefinedFunction {
                name: self.name.name.clone(),
                suggestions: ctxt.get_similar_funcs(&self.name.name),
            }));
        };
        let (header, body) = (header.clone(), body.clone());

        if self.args.len() != header.params.len() {
            return Err(Error::new(self.outer_span().to_vec(), WrongArgumentCount {
                name: self.name.name.clone(),
                expected: header.params.len(),
                given: self.args.len(),
            }));
        }

        let args = self
            .args
            .iter()
            .map(|arg| arg.eval(ctxt))
            .collect::<Result<Vec<_>, _>>()?;

        // bind the parameters in a copy of the context, so the call cannot leak bindings and the
        // body still sees everything defined so far
        let mut call_ctxt = ctxt.clone();
        for (param, value) in header.params.iter().zip(args) {
            call_ctxt.add_var(&param.name, value);
        }

        // spans inside the body refer to the line the function was defined on, so errors raised
        // there are reported against this call site instead
        body.eval(&mut call_ctxt)
            .map_err(|err| Error { spans: vec![self.span()], kind: err.kind })
    }
}
