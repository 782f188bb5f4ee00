//! Evaluation for the `computorv2` language: an exact value tower (rationals, complex numbers,
//! matrices), a canonical symbolic polynomial form for expressions with free variables, an
//! equation solver for polynomials of degree ≤ 2, and the per-line [`process`] entry point used
//! by the REPL.
//!
//! [`process`]: process::process

pub mod builtins;
pub mod complex;
pub mod ctxt;
pub mod error;
pub mod eval;
pub mod fmt;
pub mod funcs;
pub mod matrix;
pub mod primitive;
pub mod process;
pub mod scalar;
pub mod solve;
pub mod symbolic;
pub mod value;
