use std::fmt::Write as _;

use toyc_core::ir::Operand;
use toyc_core::{BinOp, UnOp};

use super::frame::Frame;
use crate::error::CodegenError;

/// Loads `operand`'s value into physical register `reg`: `li` for a
/// constant, `lw` from its frame slot for a `Name`/`Temp` (spec §4.E
/// "Operand materialization").
pub fn materialize(operand: &Operand, reg: &str, frame: &mut Frame, out: &mut String) {
    match operand {
        Operand::Const(n) => {
            let _ = writeln!(out, "    li {reg}, {n}");
        }
        Operand::Name(_) | Operand::Temp(_) => {
            let offset = frame.slot_for_operand(operand);
            let _ = writeln!(out, "    lw {reg}, {offset}(sp)");
        }
    }
}

/// Stores physical register `reg` into `dest`'s frame slot. `dest` must
/// be a `Name` or `Temp` -- a `Const` destination is an internal
/// invariant violation (spec §4.E "Failure semantics").
pub fn store(reg: &str, dest: &Operand, opcode: &'static str, frame: &mut Frame, out: &mut String) -> Result<(), CodegenError> {
    match dest {
        Operand::Const(_) => Err(CodegenError::InvalidOperand {
            opcode,
            detail: "constant destination".to_string(),
        }),
        Operand::Name(_) | Operand::Temp(_) => {
            let offset = frame.slot_for_operand(dest);
            let _ = writeln!(out, "    sw {reg}, {offset}(sp)");
            Ok(())
        }
    }
}

/// Emits the two-or-more instruction sequence computing `op(t1, t2)` into
/// `t0`, per the translation table in spec §4.E.
pub fn emit_binop(op: BinOp, out: &mut String) {
    match op {
        BinOp::Add => writeln_ins(out, "add t0, t1, t2"),
        BinOp::Sub => writeln_ins(out, "sub t0, t1, t2"),
        BinOp::Mul => writeln_ins(out, "mul t0, t1, t2"),
        BinOp::Div => writeln_ins(out, "div t0, t1, t2"),
        BinOp::Mod => writeln_ins(out, "rem t0, t1, t2"),
        BinOp::Eq => {
            writeln_ins(out, "sub t0, t1, t2");
            writeln_ins(out, "seqz t0, t0");
        }
        BinOp::Ne => {
            writeln_ins(out, "sub t0, t1, t2");
            writeln_ins(out, "snez t0, t0");
        }
        BinOp::Lt => writeln_ins(out, "slt t0, t1, t2"),
        BinOp::Le => {
            writeln_ins(out, "sgt t0, t1, t2");
            writeln_ins(out, "xori t0, t0, 1");
        }
        BinOp::Gt => writeln_ins(out, "sgt t0, t1, t2"),
        BinOp::Ge => {
            writeln_ins(out, "slt t0, t1, t2");
            writeln_ins(out, "xori t0, t0, 1");
        }
        BinOp::And => writeln_ins(out, "and t0, t1, t2"),
        BinOp::Or => writeln_ins(out, "or t0, t1, t2"),
    }
}

pub fn emit_unop(op: UnOp, out: &mut String) {
    match op {
        UnOp::Neg => writeln_ins(out, "neg t0, t1"),
        UnOp::Not => writeln_ins(out, "seqz t0, t1"),
        UnOp::Pos => writeln_ins(out, "mv t0, t1"),
    }
}

fn writeln_ins(out: &mut String, line: &str) {
    let _ = writeln!(out, "    {line}");
}
