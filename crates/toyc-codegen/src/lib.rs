//! IR generation and RISC-V assembly emission for ToyC programs.
//!
//! This crate provides the back half of the compilation pipeline: it
//! takes a semantically valid AST, lowers it to a three-address IR, and
//! emits that IR as standalone RISC-V assembly text.
//!
//! # Modules
//!
//! - [`irgen`] -- AST -> IR lowering
//! - [`emit`] -- IR -> RISC-V text emission
//! - [`error`] -- Error types for all compilation failure modes
//! - [`options`] -- Emitter configuration (`EmitOptions`)

pub mod compiler;
pub mod emit;
pub mod error;
pub mod irgen;
pub mod options;

pub use compiler::compile_unit;
pub use error::CodegenError;
pub use options::EmitOptions;
