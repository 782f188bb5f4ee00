pub mod assign;
pub mod binary;
pub mod call;
pub mod expr;
pub mod literal;
pub mod matrix;
pub mod paren;
pub mod stmt;
pub mod unary;

pub use expr::{Expr, Primary};
pub use stmt::Stmt;
