//! Top-level compilation pipeline orchestrating the full flow: semantic
//! analysis -> IR generation -> assembly emission.

use toyc_core::CompilationUnit;

use crate::error::CodegenError;
use crate::options::EmitOptions;
use crate::{emit, irgen};

/// Compiles a parsed compilation unit to RISC-V assembly text.
///
/// Runs semantic analysis first (spec §4.C); a semantically invalid unit
/// never reaches IR generation. The remaining stages -- lowering and
/// emission -- are total over the programs analysis accepts (spec §4.E
/// "Failure semantics"), so a [`CodegenError`] other than
/// [`CodegenError::TypeCheckFailed`] indicates a bug in this crate
/// rather than a property of the input program.
#[tracing::instrument(level = "debug", skip(unit, options))]
pub fn compile_unit(unit: &CompilationUnit, options: &EmitOptions) -> Result<String, CodegenError> {
    toyc_check::analyze(unit)?;
    let program = irgen::lower_program(unit);
    emit::emit_program(&program, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use toyc_parser::parse;

    #[test]
    fn semantic_errors_abort_before_codegen() {
        let unit = parse("int f() { return 0; }").unwrap();
        let err = compile_unit(&unit, &EmitOptions::default()).unwrap_err();
        assert!(matches!(err, CodegenError::TypeCheckFailed(_)));
    }

    #[test]
    fn valid_unit_compiles_to_assembly_containing_main() {
        let unit = parse("int main() { return 0; }").unwrap();
        let asm = compile_unit(&unit, &EmitOptions::default()).unwrap();
        assert!(asm.contains("main:"));
    }
}
