//! Data model for the ToyC compiler.
//!
//! This crate defines the two structured representations the rest of the
//! pipeline operates on: the typed [`ast`] produced by parsing, and the
//! three-address [`ir`] produced by lowering. Both are closed sum types with
//! no behavior attached -- analysis, lowering, and emission all live in
//! downstream crates that consume these types by value.

pub mod ast;
pub mod ir;

pub use ast::{BinOp, CompilationUnit, Expr, FunctionDef, Param, Stmt, Type, UnOp};
pub use ir::{Instr, IrFunction, IrProgram, Operand};
