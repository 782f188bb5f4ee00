//! Tokenizer and parser for the `computorv2` language.
//!
//! The entry point is [`parser::Parser`], which parses a line of input into a
//! [`parser::ast::stmt::Stmt`]: a plain expression, an assignment, an evaluation query (`expr =
//! ?`), or an equation to solve (`lhs = rhs ?`).

pub mod parser;
pub mod tokenizer;
