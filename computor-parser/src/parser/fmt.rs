//! Plain-text rendering of AST nodes, used when echoing stored function definitions back to the
//! user.

use std::fmt::{self, Display, Formatter};
use super::{
    ast::{
        assign::{Assign, AssignTarget, FuncHeader},
        binary::Binary,
        call::Call,
        expr::Expr,
        literal::Literal,
        matrix::MatLit,
        paren::Paren,
        stmt::Stmt,
        unary::Unary,
    },
    Associativity,
    Precedence,
};

/// Binding strength of an expression for parenthesization, where atoms bind tightest.
fn strength(expr: &Expr) -> u8 {
    match expr {
        Expr::Assign(_) => Precedence::Any as u8,
        Expr::Binary(binary) => binary.op.precedence() as u8,
        Expr::Unary(_) => Precedence::Neg as u8,
        _ => u8::MAX,
    }
}

/// Writes `expr`, parenthesized if it binds looser than the given strength.
fn write_operand(f: &mut Formatter<'_>, expr: &Expr, min: u8) -> fmt::Result {
    if strength(expr) < min {
        write!(f, "({})", expr)
    } else {
        write!(f, "{}", expr)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(literal) => literal.fmt(f),
            Expr::Paren(paren) => paren.fmt(f),
            Expr::Matrix(matrix) => matrix.fmt(f),
            Expr::Call(call) => call.fmt(f),
            Expr::Unary(unary) => unary.fmt(f),
            Expr::Binary(binary) => binary.fmt(f),
            Expr::Assign(assign) => assign.fmt(f),
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Num(num) => write!(f, "{}", num.value),
            Literal::Imag(_) => write!(f, "i"),
            Literal::Sym(sym) => write!(f, "{}", sym.name),
        }
    }
}

impl Display for Paren {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.expr)
    }
}

impl Display for MatLit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.rows.iter().enumerate() {
            if i != 0 {
                write!(f, ";")?;
            }
            write!(f, "[")?;
            for (j, value) in row.iter().enumerate() {
                if j != 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", value)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

impl Display for Call {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ")")
    }
}

impl Display for Unary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.op.kind.as_str())?;
        write_operand(f, &self.operand, Precedence::Exp as u8)
    }
}

impl Display for Binary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let prec = self.op.precedence() as u8;
        let (lhs_min, rhs_min) = match self.op.associativity() {
            Associativity::Left => (prec, prec + 1),
            Associativity::Right => (prec + 1, prec),
        };

        write_operand(f, &self.lhs, lhs_min)?;
        write!(f, " {} ", self.op.kind.as_str())?;
        write_operand(f, &self.rhs, rhs_min)
    }
}

impl Display for FuncHeader {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", param.name)?;
        }
        write!(f, ")")
    }
}

impl Display for AssignTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AssignTarget::Symbol(symbol) => write!(f, "{}", symbol.name),
            AssignTarget::Func(header) => header.fmt(f),
        }
    }
}

impl Display for Assign {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.target, self.value)
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Expr(expr) => expr.fmt(f),
            Stmt::Eval(query) => write!(f, "{} = ?", query.expr),
            Stmt::Solve(query) => write!(f, "{} = {} ?", query.lhs, query.rhs),
        }
    }
}
