use std::fmt;

use serde::{Deserialize, Serialize};

/// ToyC's type system: a single value type plus `void` for functions that
/// return nothing.
///
/// There is no inference, no user-defined types, and no implicit
/// conversion between the two variants -- `void` is legal only as a
/// function return type and forbids `return <expr>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Type {
    Int,
    Void,
}

impl Type {
    /// `true` for the only legal value type.
    pub fn is_value_type(self) -> bool {
        matches!(self, Type::Int)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Int => write!(f, "int"),
            Type::Void => write!(f, "void"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_is_a_value_type_void_is_not() {
        assert!(Type::Int.is_value_type());
        assert!(!Type::Void.is_value_type());
    }

    #[test]
    fn serde_roundtrip() {
        for ty in [Type::Int, Type::Void] {
            let json = serde_json::to_string(&ty).unwrap();
            let back: Type = serde_json::from_str(&json).unwrap();
            assert_eq!(ty, back);
        }
    }
}
