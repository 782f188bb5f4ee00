use computor_parser::parser::ast::unary::Unary;
use computor_parser::parser::token::op::UnaryOpKind;
use crate::{
    ctxt::Ctxt,
    error::{kind::InvalidUnaryOperation, Error},
    eval::Eval,
    value::Value,
};

impl Eval for Unary {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<Value, Error> {
        let operand = self.operand.eval(ctxt)?;

        let invalid = || {
            Error::new(
                vec![self.op.span.clone(), self.operand.span()],
                InvalidUnaryOperation {
                    op: self.op.kind.as_str(),
                    operand: "Function",
                },
            )
        };

        match self.op.kind {
            UnaryOpKind::Pos => match operand {
                Value::Function(..) => Err(invalid()),
                operand => Ok(operand),
            },
            UnaryOpKind::Neg => match operand {
                Value::Rational(r) => Ok(Value::Rational(-r)),
                Value::Complex(c) => Ok(Value::Complex(-c)),
                Value::Float(n) => Ok(Value::Float(-n)),
                Value::ComplexFloat(c) => Ok(Value::ComplexFloat(-c)),
                Value::Matrix(m) => Ok(Value::Matrix(-m)),
                Value::Symbolic(poly) => Ok(Value::Symbolic(poly.neg())),
                Value::Function(..) => Err(invalid()),
            },
        }
    }
}
