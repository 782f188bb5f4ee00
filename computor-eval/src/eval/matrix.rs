use computor_parser::parser::ast::matrix::MatLit;
use crate::{
    ctxt::Ctxt,
    error::{kind::NonScalarMatrixElement, Error},
    eval::Eval,
    matrix::Matrix,
    value::Value,
};

impl Eval for MatLit {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<Value, Error> {
        let mut rows = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let mut values = Vec::with_capacity(row.len());
            for element in row {
                let value = element.eval(ctxt)?.normalize();
                let Some(scalar) = value.as_scalar() else {
                    return Err(Error::new(
                        vec![element.span()],
                        NonScalarMatrixElement { found: value.typename() },
                    ));
                };
                values.push(scalar);
            }
            rows.push(values);
        }

        Ok(Value::Matrix(Matrix::from_rows(rows)))
    }
}
