use std::collections::HashSet;

use toyc_core::ir::{Instr, IrFunction, IrProgram};

use crate::error::CodegenError;

/// Checks the invariants the emitter assumes but does not itself
/// enforce while translating (spec §8: "every label appears exactly
/// once as a `Label`... every `Call` either defined in the same unit or
/// the caller accepts external linkage" -- this crate accepts no
/// external linkage, so every callee must be defined locally).
pub fn validate_program(program: &IrProgram) -> Result<(), CodegenError> {
    let known_functions: HashSet<&str> = program.functions.iter().map(|f| f.name.as_str()).collect();
    for func in &program.functions {
        validate_function(func, &known_functions)?;
    }
    Ok(())
}

fn validate_function(func: &IrFunction, known_functions: &HashSet<&str>) -> Result<(), CodegenError> {
    let labels: HashSet<&str> = func
        .instrs
        .iter()
        .filter_map(|i| match i {
            Instr::Label(l) => Some(l.as_str()),
            _ => None,
        })
        .collect();

    for instr in &func.instrs {
        match instr {
            Instr::Jump(label) if !labels.contains(label.as_str()) => {
                return Err(CodegenError::UnboundLabel(label.clone(), func.name.clone()))
            }
            Instr::CJump {
                label_true,
                label_false,
                ..
            } => {
                if !labels.contains(label_true.as_str()) {
                    return Err(CodegenError::UnboundLabel(label_true.clone(), func.name.clone()));
                }
                if !labels.contains(label_false.as_str()) {
                    return Err(CodegenError::UnboundLabel(label_false.clone(), func.name.clone()));
                }
            }
            Instr::Call { name, .. } if !known_functions.contains(name.as_str()) => {
                return Err(CodegenError::UndefinedFunction(name.clone()))
            }
            _ => {}
        }
    }
    Ok(())
}
