//! Codegen error types covering all compilation failure modes.

use thiserror::Error;
use toyc_check::SemaError;

/// Errors that can occur compiling a semantically valid AST to RISC-V text.
///
/// `TypeCheckFailed` is the only variant a well-formed ToyC program can
/// trigger; everything else is an internal invariant violation (spec §7,
/// error kind 3) -- it indicates a bug in the IR generator, not a property
/// of the input program, and should be unreachable given semantically
/// valid IR.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Pre-codegen semantic analysis found an error; compilation never
    /// reaches IR generation.
    #[error("semantic analysis failed: {0}")]
    TypeCheckFailed(#[from] SemaError),

    /// A `Jump`/`CJump` referenced a label with no matching `Label` in the
    /// same function.
    #[error("unbound label '{0}' in function '{1}'")]
    UnboundLabel(String, String),

    /// A `Call` named a function absent from both the compilation unit and
    /// the emitter's known runtime symbols.
    #[error("call to undefined function '{0}'")]
    UndefinedFunction(String),

    /// An instruction's operand shape makes no sense for that opcode (e.g.
    /// `Move` targeting a `Const`, or `Load`/`Store` reaching the emitter --
    /// see `toyc-core::ir::Instr` docs on why those are reserved).
    #[error("invalid operand for {opcode}: {detail}")]
    InvalidOperand { opcode: &'static str, detail: String },
}
