use serde::{Deserialize, Serialize};

/// An IR value reference.
///
/// `Name` carries a *qualified* name of the form `<source_name>@<depth>`,
/// produced by `toyc-codegen::irgen` by suffixing the source identifier with
/// the scope-stack depth at the point of declaration. This is what makes
/// shadowed variables distinct in the IR (spec "Qualified name" in the
/// glossary) -- two declarations of `x` in nested blocks become `x@1` and
/// `x@2`, never colliding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operand {
    /// A literal constant.
    Const(i32),
    /// A fresh, single-assignment temporary, indexed within its function.
    Temp(u32),
    /// A named storage cell: a qualified source variable, or a function
    /// parameter's qualified name.
    Name(String),
}

impl Operand {
    pub fn name(qualified: impl Into<String>) -> Operand {
        Operand::Name(qualified.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn serde_roundtrip() {
        for op in [
            Operand::Const(-7),
            Operand::Temp(3),
            Operand::name("x@1"),
        ] {
            let json = serde_json::to_string(&op).unwrap();
            let back: Operand = serde_json::from_str(&json).unwrap();
            assert_eq!(op, back);
        }
    }

    proptest! {
        #[test]
        fn const_roundtrips_through_json_for_any_i32(n: i32) {
            let op = Operand::Const(n);
            let json = serde_json::to_string(&op).unwrap();
            let back: Operand = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(op, back);
        }
    }
}
