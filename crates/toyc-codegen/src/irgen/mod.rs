//! AST → IR lowering (spec §4.D).
//!
//! Implements the **qualified-name / `Move`-based** variant exclusively:
//! every variable read/write goes through a `Name` operand carrying a
//! `<source_name>@<depth>` qualified name, and assignment/initialization
//! lower to `Move`. `toyc_core::ir::Instr::Load`/`Store` are never
//! produced here -- see that type's doc comment for why they still exist
//! in the instruction set.
//!
//! `break`/`continue` targets are threaded through [`ctx::FuncCtx`]
//! rather than silently dropped, and `&&`/`||` evaluate both operands
//! unconditionally -- both are fidelity decisions recorded in
//! `DESIGN.md`, not bugs.

mod ctx;
mod expr;
mod stmt;

use toyc_core::ir::{IrFunction, IrProgram};
use toyc_core::CompilationUnit;

pub use ctx::LowerCtx;

/// Lowers a whole, semantically valid compilation unit to an IR program.
/// Callers are expected to have already run `toyc_check::analyze`;
/// lowering a program that fails analysis may panic (see the `expect`s in
/// `expr`/`stmt`, which encode invariants analysis is responsible for).
pub fn lower_program(unit: &CompilationUnit) -> IrProgram {
    let mut lower_ctx = LowerCtx::new();
    let functions = unit
        .functions
        .iter()
        .map(|f| lower_function(f, &mut lower_ctx))
        .collect();
    IrProgram { functions }
}

fn lower_function(
    func: &toyc_core::FunctionDef,
    unit: &mut LowerCtx,
) -> IrFunction {
    let mut func_ctx = ctx::FuncCtx::new();
    func_ctx.push_scope();
    let params = func
        .params
        .iter()
        .map(|p| func_ctx.declare(&p.name))
        .collect();

    let mut instrs = Vec::new();
    // The function body is always `Stmt::Block`, but it shares the scope
    // pushed above for parameters rather than getting its own nested one
    // -- handing it to `lower_stmt`'s generic `Block` arm would push a
    // second scope and put every top-level local one depth deeper than
    // the spec's qualified names call for.
    match &func.body {
        toyc_core::Stmt::Block(stmts) => {
            for s in stmts {
                stmt::lower_stmt(s, unit, &mut func_ctx, &mut instrs);
            }
        }
        other => stmt::lower_stmt(other, unit, &mut func_ctx, &mut instrs),
    }

    IrFunction {
        name: func.name.clone(),
        params,
        instrs,
    }
}
