use serde::{Deserialize, Serialize};

/// Binary operators. All take two `int` operands and produce `int` --
/// ToyC has no boolean type, so relational and logical operators produce
/// `0`/`1` integers like the rest.
///
/// `And`/`Or` are evaluated non-short-circuit by the IR generator (spec
/// fidelity decision, see `toyc-codegen::irgen`): both operands are always
/// evaluated, which is observable whenever an operand is a function call
/// with side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    And,
    Or,
}

/// Unary operators. `Pos` is the identity (`+x`); it exists because the
/// grammar accepts it, not because it changes the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnOp {
    Neg,
    Not,
    Pos,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_roundtrip_binop() {
        for op in [
            BinOp::Add,
            BinOp::Sub,
            BinOp::Mul,
            BinOp::Div,
            BinOp::Mod,
            BinOp::Eq,
            BinOp::Ne,
            BinOp::Lt,
            BinOp::Le,
            BinOp::Gt,
            BinOp::Ge,
            BinOp::And,
            BinOp::Or,
        ] {
            let json = serde_json::to_string(&op).unwrap();
            let back: BinOp = serde_json::from_str(&json).unwrap();
            assert_eq!(op, back);
        }
    }

    #[test]
    fn serde_roundtrip_unop() {
        for op in [UnOp::Neg, UnOp::Not, UnOp::Pos] {
            let json = serde_json::to_string(&op).unwrap();
            let back: UnOp = serde_json::from_str(&json).unwrap();
            assert_eq!(op, back);
        }
    }
}
