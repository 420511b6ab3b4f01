use serde::{Deserialize, Serialize};

use super::ops::{BinOp, UnOp};

/// An expression. Name resolution (does `Var`/`Call` refer to a declared
/// variable/function?) happens later, in `toyc-check`; the AST only records
/// the name that was written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// 32-bit signed integer literal.
    IntLit(i32),
    /// A bare identifier used as a value.
    Var(String),
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Unary {
        op: UnOp,
        operand: Box<Expr>,
    },
    /// `callee(args...)`; argument order is the evaluation order.
    Call {
        callee: String,
        args: Vec<Expr>,
    },
}

impl Expr {
    pub fn binary(op: BinOp, lhs: Expr, rhs: Expr) -> Expr {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn unary(op: UnOp, operand: Expr) -> Expr {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_box_their_operands() {
        let e = Expr::binary(BinOp::Add, Expr::IntLit(1), Expr::IntLit(2));
        match e {
            Expr::Binary { op, lhs, rhs } => {
                assert_eq!(op, BinOp::Add);
                assert_eq!(*lhs, Expr::IntLit(1));
                assert_eq!(*rhs, Expr::IntLit(2));
            }
            _ => panic!("expected Binary"),
        }
    }

    #[test]
    fn serde_roundtrip_nested_expr() {
        let e = Expr::Call {
            callee: "f".into(),
            args: vec![
                Expr::binary(BinOp::Mul, Expr::Var("a".into()), Expr::IntLit(2)),
                Expr::unary(UnOp::Neg, Expr::Var("b".into())),
            ],
        };
        let json = serde_json::to_string(&e).unwrap();
        let back: Expr = serde_json::from_str(&json).unwrap();
        assert_eq!(e, back);
    }
}
