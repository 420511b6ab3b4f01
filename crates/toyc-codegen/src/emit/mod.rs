//! IR → RISC-V assembly text emission (spec §4.E).
//!
//! Each function gets a fixed-size activation record (`EmitOptions::frame_size`,
//! 1600 bytes by default) allocated on entry and released on return. Every
//! named variable and temporary maps to a 4-byte slot within that frame,
//! assigned the first time the operand is touched during emission -- see
//! [`frame::Frame`]. The stack-argument convention for calls passing more
//! than eight arguments assumes the callee's frame is the same fixed size
//! as the caller's (spec §9: fragile but self-consistent; not generalized
//! here).

mod frame;
mod translate;
mod validate;

use std::fmt::Write as _;

use toyc_core::ir::{Instr, IrFunction, IrProgram, Operand};

use crate::error::CodegenError;
use crate::options::EmitOptions;
use frame::Frame;

const ARG_REGS: [&str; 8] = ["a0", "a1", "a2", "a3", "a4", "a5", "a6", "a7"];

/// Emits a whole IR program as standalone RISC-V assembly text: a
/// `.text` section, a `.global main` export, and one label per function
/// equal to its source name (spec §6 "Target assembly").
pub fn emit_program(program: &IrProgram, options: &EmitOptions) -> Result<String, CodegenError> {
    validate::validate_program(program)?;

    let mut out = String::new();
    out.push_str(".text\n");
    out.push_str(".global main\n");
    for func in &program.functions {
        emit_function(func, options, &mut out)?;
    }
    Ok(out)
}

fn emit_function(func: &IrFunction, options: &EmitOptions, out: &mut String) -> Result<(), CodegenError> {
    let mut frame = Frame::new();
    let _ = writeln!(out, "{}:", func.name);
    let _ = writeln!(out, "    addi sp, sp, -{}", options.frame_size);

    emit_param_prologue(func, options, &mut frame, out);

    let ra_offset = frame.ra_offset();
    let _ = writeln!(out, "    sw ra, {ra_offset}(sp)");

    let mut ended_in_return = false;
    for instr in &func.instrs {
        ended_in_return = matches!(instr, Instr::Return(_));
        emit_instr(instr, options, &mut frame, out)?;
    }
    if !ended_in_return {
        emit_epilogue(options, &mut frame, out);
    }
    Ok(())
}

/// Stores the first eight parameters from `a0..a7` into their frame
/// slots; parameters beyond the eighth were placed by the caller at
/// `-4*(i-8)(sp)` (this function's own, already-decremented, `sp`,
/// given equal frame sizes -- spec §4.E, §9) and are relayed into this
/// function's slot the same way.
fn emit_param_prologue(func: &IrFunction, _options: &EmitOptions, frame: &mut Frame, out: &mut String) {
    for (i, param) in func.params.iter().enumerate() {
        let offset = frame.slot_for(param);
        if i < 8 {
            let _ = writeln!(out, "    sw {}, {offset}(sp)", ARG_REGS[i]);
        } else {
            let caller_offset: i64 = -4 * (i as i64 - 8);
            let _ = writeln!(out, "    lw t0, {caller_offset}(sp)");
            let _ = writeln!(out, "    sw t0, {offset}(sp)");
        }
    }
}

fn emit_epilogue(options: &EmitOptions, frame: &mut Frame, out: &mut String) {
    let ra_offset = frame.ra_offset();
    let _ = writeln!(out, "    lw ra, {ra_offset}(sp)");
    let _ = writeln!(out, "    addi sp, sp, {}", options.frame_size);
    out.push_str("    ret\n");
}

fn emit_instr(
    instr: &Instr,
    options: &EmitOptions,
    frame: &mut Frame,
    out: &mut String,
) -> Result<(), CodegenError> {
    if options.emit_comments {
        let _ = writeln!(out, "    # {instr:?}");
    }
    match instr {
        Instr::BinOp { dest, op, src1, src2 } => {
            translate::materialize(src1, "t1", frame, out);
            translate::materialize(src2, "t2", frame, out);
            translate::emit_binop(*op, out);
            translate::store("t0", dest, "BinOp", frame, out)
        }
        Instr::UnOp { dest, op, src } => {
            translate::materialize(src, "t1", frame, out);
            translate::emit_unop(*op, out);
            translate::store("t0", dest, "UnOp", frame, out)
        }
        Instr::Move { dest, src } => {
            translate::materialize(src, "t0", frame, out);
            translate::store("t0", dest, "Move", frame, out)
        }
        Instr::Load { .. } | Instr::Store { .. } => Err(CodegenError::InvalidOperand {
            opcode: if matches!(instr, Instr::Load { .. }) {
                "Load"
            } else {
                "Store"
            },
            detail: "reserved opcode, never emitted by irgen".to_string(),
        }),
        Instr::Label(label) => {
            let _ = writeln!(out, "{label}:");
            Ok(())
        }
        Instr::Jump(label) => {
            let _ = writeln!(out, "    j {label}");
            Ok(())
        }
        Instr::CJump {
            cond,
            label_true,
            label_false,
        } => {
            translate::materialize(cond, "t0", frame, out);
            let _ = writeln!(out, "    bne t0, x0, {label_true}");
            let _ = writeln!(out, "    j {label_false}");
            Ok(())
        }
        Instr::Call { dest, name, args } => {
            emit_call(dest.as_ref(), name, args, options, frame, out)
        }
        Instr::Return(value) => {
            if let Some(value) = value {
                translate::materialize(value, "a0", frame, out);
            }
            emit_epilogue(options, frame, out);
            Ok(())
        }
    }
}

fn emit_call(
    dest: Option<&Operand>,
    name: &str,
    args: &[Operand],
    options: &EmitOptions,
    frame: &mut Frame,
    out: &mut String,
) -> Result<(), CodegenError> {
    for (i, arg) in args.iter().enumerate() {
        if i < 8 {
            translate::materialize(arg, ARG_REGS[i], frame, out);
        } else {
            translate::materialize(arg, "t0", frame, out);
            let offset: i64 = -(options.frame_size as i64) - 4 * (i as i64 - 8);
            let _ = writeln!(out, "    sw t0, {offset}(sp)");
        }
    }
    let _ = writeln!(out, "    call {name}");
    if let Some(dest) = dest {
        translate::store("a0", dest, "Call", frame, out)?;
    }
    Ok(())
}
