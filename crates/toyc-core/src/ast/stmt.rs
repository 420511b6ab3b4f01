use serde::{Deserialize, Serialize};

use super::expr::Expr;
use super::types::Type;

/// A statement. `Block` is the only construct that introduces a scope --
/// see `toyc-check::scope` for how scopes are pushed/popped during
/// analysis and `toyc-codegen::irgen` for how qualified names are minted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    Block(Vec<Stmt>),
    Empty,
    ExprStmt(Expr),
    VarDecl {
        ty: Type,
        name: String,
        init: Option<Expr>,
    },
    Assign {
        name: String,
        value: Expr,
    },
    If {
        cond: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    While {
        cond: Expr,
        body: Box<Stmt>,
    },
    Break,
    Continue,
    Return(Option<Expr>),
}

/// A single function parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub ty: Type,
    pub name: String,
}

/// A function definition. `body` is always `Stmt::Block` -- the grammar
/// never produces anything else here, but the type is `Stmt` rather than
/// `Vec<Stmt>` so the function body scopes exactly like any other block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDef {
    pub return_type: Type,
    pub name: String,
    pub params: Vec<Param>,
    pub body: Stmt,
}

/// A whole compilation unit: an ordered list of function definitions.
/// Exactly one must be named `main` with signature `() -> int`; that
/// invariant is enforced by `toyc-check`, not by this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompilationUnit {
    pub functions: Vec<FunctionDef>,
}
