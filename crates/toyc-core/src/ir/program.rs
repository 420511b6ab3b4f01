use serde::{Deserialize, Serialize};

use super::instr::Instr;

/// A single lowered function: its (post-qualification) parameter names and
/// its flat instruction list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrFunction {
    pub name: String,
    pub params: Vec<String>,
    pub instrs: Vec<Instr>,
}

/// A whole lowered program: an ordered list of IR functions, mirroring the
/// order of `CompilationUnit::functions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrProgram {
    pub functions: Vec<IrFunction>,
}

impl IrProgram {
    pub fn find(&self, name: &str) -> Option<&IrFunction> {
        self.functions.iter().find(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::super::operand::Operand;
    use super::*;

    #[test]
    fn find_locates_function_by_name() {
        let prog = IrProgram {
            functions: vec![
                IrFunction {
                    name: "add".into(),
                    params: vec!["a@1".into(), "b@1".into()],
                    instrs: vec![Instr::Return(Some(Operand::name("a@1")))],
                },
                IrFunction {
                    name: "main".into(),
                    params: vec![],
                    instrs: vec![Instr::Return(Some(Operand::Const(0)))],
                },
            ],
        };
        assert!(prog.find("add").is_some());
        assert!(prog.find("main").is_some());
        assert!(prog.find("missing").is_none());
    }

    #[test]
    fn serde_roundtrip_ir_program() {
        let prog = IrProgram {
            functions: vec![IrFunction {
                name: "main".into(),
                params: vec![],
                instrs: vec![Instr::Return(Some(Operand::Const(0)))],
            }],
        };
        let json = serde_json::to_string(&prog).unwrap();
        let back: IrProgram = serde_json::from_str(&json).unwrap();
        assert_eq!(prog, back);
    }
}
