//! The three-address IR contract.
//!
//! IR function values are built once, in `toyc-codegen::irgen`, and not
//! mutated afterward; the emitter in `toyc-codegen::emit` consumes them by
//! reference. See the module-level invariants documented on [`Instr`].

mod instr;
mod operand;
mod program;

pub use instr::Instr;
pub use operand::Operand;
pub use program::{IrFunction, IrProgram};
