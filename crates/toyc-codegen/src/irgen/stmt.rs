use toyc_core::ir::{Instr, Operand};
use toyc_core::Stmt;

use super::ctx::{FuncCtx, LowerCtx};
use super::expr::lower_expr;

/// Lowers a statement to its instruction list, per spec §4.D "Statement
/// lowering". `unit` carries the label counter shared across the whole
/// compilation unit; `func` carries the per-function temp counter and
/// qualified-name scope stack.
pub fn lower_stmt(stmt: &Stmt, unit: &mut LowerCtx, func: &mut FuncCtx, out: &mut Vec<Instr>) {
    match stmt {
        Stmt::Block(stmts) => {
            func.push_scope();
            for s in stmts {
                lower_stmt(s, unit, func, out);
            }
            func.pop_scope();
        }
        Stmt::Empty => {}
        Stmt::ExprStmt(expr) => {
            lower_expr(expr, func, out);
        }
        Stmt::VarDecl { ty: _, name, init } => {
            let qualified = func.declare(name);
            if let Some(init) = init {
                let src = lower_expr(init, func, out);
                out.push(Instr::Move {
                    dest: Operand::name(qualified),
                    src,
                });
            }
        }
        Stmt::Assign { name, value } => {
            let qualified = func
                .resolve(name)
                .expect("semantic analysis guarantees assignment targets resolve")
                .to_string();
            let src = lower_expr(value, func, out);
            out.push(Instr::Move {
                dest: Operand::name(qualified),
                src,
            });
        }
        Stmt::If {
            cond,
            then_branch,
            else_branch,
        } => lower_if(cond, then_branch, else_branch.as_deref(), unit, func, out),
        Stmt::While { cond, body } => lower_while(cond, body, unit, func, out),
        Stmt::Break => {
            let target = func
                .break_target()
                .expect("semantic analysis guarantees 'break' is inside a loop")
                .to_string();
            out.push(Instr::Jump(target));
        }
        Stmt::Continue => {
            let target = func
                .continue_target()
                .expect("semantic analysis guarantees 'continue' is inside a loop")
                .to_string();
            out.push(Instr::Jump(target));
        }
        Stmt::Return(expr) => {
            let value = expr.as_ref().map(|e| lower_expr(e, func, out));
            out.push(Instr::Return(value));
        }
    }
}

fn lower_if(
    cond: &toyc_core::Expr,
    then_branch: &Stmt,
    else_branch: Option<&Stmt>,
    unit: &mut LowerCtx,
    func: &mut FuncCtx,
    out: &mut Vec<Instr>,
) {
    let l_true = unit.fresh_label();
    let l_false = unit.fresh_label();
    let cond_op = lower_expr(cond, func, out);
    out.push(Instr::CJump {
        cond: cond_op,
        label_true: l_true.clone(),
        label_false: l_false.clone(),
    });
    out.push(Instr::Label(l_true));
    lower_stmt(then_branch, unit, func, out);

    match else_branch {
        None => {
            out.push(Instr::Label(l_false));
        }
        Some(else_branch) => {
            let l_end = unit.fresh_label();
            out.push(Instr::Jump(l_end.clone()));
            out.push(Instr::Label(l_false));
            lower_stmt(else_branch, unit, func, out);
            out.push(Instr::Label(l_end));
        }
    }
}

fn lower_while(
    cond: &toyc_core::Expr,
    body: &Stmt,
    unit: &mut LowerCtx,
    func: &mut FuncCtx,
    out: &mut Vec<Instr>,
) {
    let l_start = unit.fresh_label();
    let l_body = unit.fresh_label();
    let l_end = unit.fresh_label();

    out.push(Instr::Label(l_start.clone()));
    let cond_op = lower_expr(cond, func, out);
    out.push(Instr::CJump {
        cond: cond_op,
        label_true: l_body.clone(),
        label_false: l_end.clone(),
    });
    out.push(Instr::Label(l_body));

    func.push_loop_targets(l_end.clone(), l_start.clone());
    lower_stmt(body, unit, func, out);
    func.pop_loop_targets();

    out.push(Instr::Jump(l_start));
    out.push(Instr::Label(l_end));
}

#[cfg(test)]
mod tests {
    use super::*;
    use toyc_core::{BinOp, Expr, Type};

    fn lower(stmt: &Stmt) -> Vec<Instr> {
        let mut unit = LowerCtx::new();
        let mut func = FuncCtx::new();
        func.push_scope();
        let mut out = Vec::new();
        lower_stmt(stmt, &mut unit, &mut func, &mut out);
        out
    }

    #[test]
    fn var_decl_with_init_emits_one_move() {
        let stmt = Stmt::VarDecl {
            ty: Type::Int,
            name: "x".into(),
            init: Some(Expr::IntLit(3)),
        };
        let instrs = lower(&stmt);
        assert_eq!(instrs.len(), 1);
        assert!(matches!(&instrs[0], Instr::Move { dest: Operand::Name(n), .. } if n == "x@1"));
    }

    #[test]
    fn var_decl_without_init_emits_nothing() {
        let stmt = Stmt::VarDecl {
            ty: Type::Int,
            name: "x".into(),
            init: None,
        };
        assert!(lower(&stmt).is_empty());
    }

    #[test]
    fn if_without_else_omits_jump_and_end_label() {
        let stmt = Stmt::If {
            cond: Expr::IntLit(1),
            then_branch: Box::new(Stmt::Empty),
            else_branch: None,
        };
        let instrs = lower(&stmt);
        // CJump, Label(true), Label(false) -- no Jump, no third label.
        assert_eq!(instrs.len(), 3);
        assert!(matches!(instrs[0], Instr::CJump { .. }));
        assert!(matches!(instrs[1], Instr::Label(_)));
        assert!(matches!(instrs[2], Instr::Label(_)));
    }

    #[test]
    fn if_with_else_has_three_labels_and_a_jump() {
        let stmt = Stmt::If {
            cond: Expr::IntLit(1),
            then_branch: Box::new(Stmt::Empty),
            else_branch: Some(Box::new(Stmt::Empty)),
        };
        let instrs = lower(&stmt);
        let label_count = instrs.iter().filter(|i| matches!(i, Instr::Label(_))).count();
        let jump_count = instrs.iter().filter(|i| matches!(i, Instr::Jump(_))).count();
        assert_eq!(label_count, 3);
        assert_eq!(jump_count, 1);
    }

    #[test]
    fn while_threads_break_and_continue_to_start_and_end() {
        let stmt = Stmt::While {
            cond: Expr::IntLit(1),
            body: Box::new(Stmt::Block(vec![Stmt::Break, Stmt::Continue])),
        };
        let instrs = lower(&stmt);
        let jumps: Vec<&str> = instrs
            .iter()
            .filter_map(|i| match i {
                Instr::Jump(l) => Some(l.as_str()),
                _ => None,
            })
            .collect();
        // break -> L_end (last label), continue -> L_start (first label),
        // plus the loopback jump to L_start at the tail.
        let labels: Vec<&str> = instrs
            .iter()
            .filter_map(|i| match i {
                Instr::Label(l) => Some(l.as_str()),
                _ => None,
            })
            .collect();
        let l_start = labels[0];
        let l_end = labels[2];
        assert_eq!(jumps[0], l_end);
        assert_eq!(jumps[1], l_start);
    }

    #[test]
    fn binary_add_lowers_with_left_to_right_operands() {
        let stmt = Stmt::Return(Some(Expr::binary(
            BinOp::Add,
            Expr::IntLit(1),
            Expr::IntLit(2),
        )));
        let instrs = lower(&stmt);
        assert!(matches!(instrs[0], Instr::BinOp { op: BinOp::Add, .. }));
        assert!(matches!(instrs[1], Instr::Return(Some(_))));
    }
}
