use indexmap::IndexMap;
use toyc_core::{CompilationUnit, Expr, FunctionDef, Param, Stmt, Type};

use crate::diagnostics::SemaError;
use crate::scope::{FuncInfo, Scopes, VarInfo};

/// Checks a whole compilation unit per spec §4.C.
///
/// Two passes: pass 1 collects function signatures (and validates `main`);
/// pass 2 type-checks every function body against that table with a fresh
/// scope stack. The analyzer never mutates or annotates the AST -- it only
/// reads it, so running this twice on the same `unit` is idempotent.
#[tracing::instrument(level = "debug", skip(unit))]
pub fn analyze(unit: &CompilationUnit) -> Result<(), SemaError> {
    let functions = collect_function_table(unit)?;
    for func in &unit.functions {
        check_function(func, &functions)?;
    }
    Ok(())
}

#[tracing::instrument(level = "debug", skip(unit))]
fn collect_function_table(
    unit: &CompilationUnit,
) -> Result<IndexMap<String, FuncInfo>, SemaError> {
    let mut table = IndexMap::new();
    for func in &unit.functions {
        if table.contains_key(&func.name) {
            return Err(SemaError::DuplicateFunction {
                name: func.name.clone(),
            });
        }
        table.insert(
            func.name.clone(),
            FuncInfo {
                return_type: func.return_type,
                param_types: func.params.iter().map(|p| p.ty).collect(),
            },
        );
    }

    match table.get("main") {
        None => return Err(SemaError::MissingMain),
        Some(main) if main.return_type != Type::Int || !main.param_types.is_empty() => {
            return Err(SemaError::InvalidMainSignature)
        }
        Some(_) => {}
    }

    Ok(table)
}

/// Per-function analyzer state: the function table (read-only, shared
/// across all functions), the scope stack (rebuilt per function), the
/// enclosing function's declared return type, and whether we are
/// currently inside a loop body.
struct Analyzer<'a> {
    functions: &'a IndexMap<String, FuncInfo>,
    scopes: Scopes,
    function_name: String,
    return_type: Type,
    in_loop: bool,
}

#[tracing::instrument(level = "debug", skip(func, functions), fields(function = %func.name))]
fn check_function(
    func: &FunctionDef,
    functions: &IndexMap<String, FuncInfo>,
) -> Result<(), SemaError> {
    let mut analyzer = Analyzer {
        functions,
        scopes: Scopes::new(),
        function_name: func.name.clone(),
        return_type: func.return_type,
        in_loop: false,
    };
    analyzer.scopes.push();
    for Param { ty, name } in &func.params {
        if *ty == Type::Void {
            return Err(SemaError::VoidParam {
                function: func.name.clone(),
                name: name.clone(),
            });
        }
        if !analyzer.scopes.declare(name, VarInfo { ty: *ty }) {
            return Err(SemaError::DuplicateParam {
                function: func.name.clone(),
                name: name.clone(),
            });
        }
    }
    analyzer.check_stmt(&func.body)
}

impl Analyzer<'_> {
    fn check_stmt(&mut self, stmt: &Stmt) -> Result<(), SemaError> {
        match stmt {
            Stmt::Block(stmts) => {
                self.scopes.push();
                for s in stmts {
                    self.check_stmt(s)?;
                }
                self.scopes.pop();
                Ok(())
            }
            Stmt::Empty => Ok(()),
            Stmt::ExprStmt(expr) => {
                // A void-returning call is legal here and nowhere else;
                // the result type is simply discarded.
                self.check_expr(expr)?;
                Ok(())
            }
            Stmt::VarDecl { ty, name, init } => {
                if *ty == Type::Void {
                    return Err(SemaError::VoidVariable { name: name.clone() });
                }
                if self.scopes.declared_in_current_scope(name) {
                    return Err(SemaError::DuplicateVariable { name: name.clone() });
                }
                if let Some(init) = init {
                    let actual = self.check_expr(init)?;
                    if actual != *ty {
                        return Err(SemaError::InitTypeMismatch {
                            name: name.clone(),
                            expected: *ty,
                            actual,
                        });
                    }
                }
                self.scopes.declare(name, VarInfo { ty: *ty });
                Ok(())
            }
            Stmt::Assign { name, value } => {
                let var = self
                    .scopes
                    .lookup(name)
                    .ok_or_else(|| SemaError::AssignToUndeclared { name: name.clone() })?;
                let actual = self.check_expr(value)?;
                if actual != var.ty {
                    return Err(SemaError::AssignTypeMismatch {
                        name: name.clone(),
                        expected: var.ty,
                        actual,
                    });
                }
                Ok(())
            }
            Stmt::If {
                cond,
                then_branch,
                else_branch,
            } => {
                self.require_int_condition(cond)?;
                self.check_stmt(then_branch)?;
                if let Some(else_branch) = else_branch {
                    self.check_stmt(else_branch)?;
                }
                Ok(())
            }
            Stmt::While { cond, body } => {
                self.require_int_condition(cond)?;
                let was_in_loop = self.in_loop;
                self.in_loop = true;
                let result = self.check_stmt(body);
                self.in_loop = was_in_loop;
                result
            }
            Stmt::Break => {
                if !self.in_loop {
                    return Err(SemaError::BreakOutsideLoop);
                }
                Ok(())
            }
            Stmt::Continue => {
                if !self.in_loop {
                    return Err(SemaError::ContinueOutsideLoop);
                }
                Ok(())
            }
            Stmt::Return(expr) => match (self.return_type, expr) {
                (Type::Void, None) => Ok(()),
                (Type::Void, Some(_)) => Err(SemaError::VoidReturnWithValue),
                (Type::Int, None) => Err(SemaError::MissingReturnValue {
                    function: self.function_name.clone(),
                }),
                (Type::Int, Some(expr)) => {
                    let actual = self.check_expr(expr)?;
                    if actual != Type::Int {
                        return Err(SemaError::NonIntOperand { actual });
                    }
                    Ok(())
                }
            },
        }
    }

    fn require_int_condition(&mut self, cond: &Expr) -> Result<(), SemaError> {
        let ty = self.check_expr(cond)?;
        if ty != Type::Int {
            return Err(SemaError::ConditionNotInt { actual: ty });
        }
        Ok(())
    }

    /// Type-checks an expression and returns its type. `Call` is the only
    /// construct that can yield `Type::Void`; every other position that
    /// consumes an expression's value requires it to equal `Type::Int`,
    /// which is exactly what excludes void-returning calls from appearing
    /// anywhere but a bare expression-statement (spec §4.C).
    fn check_expr(&mut self, expr: &Expr) -> Result<Type, SemaError> {
        match expr {
            Expr::IntLit(_) => Ok(Type::Int),
            Expr::Var(name) => match self.scopes.lookup(name) {
                Some(var) => Ok(var.ty),
                None if self.functions.contains_key(name) => Err(SemaError::NotAVariable {
                    name: name.clone(),
                }),
                None => Err(SemaError::UndeclaredVariable { name: name.clone() }),
            },
            Expr::Unary { op: _, operand } => {
                let ty = self.check_expr(operand)?;
                self.require_int(ty)?;
                Ok(Type::Int)
            }
            Expr::Binary { op: _, lhs, rhs } => {
                // Every BinOp variant -- arithmetic, relational, logical --
                // requires two int operands and yields int (spec §4.C).
                let lty = self.check_expr(lhs)?;
                self.require_int(lty)?;
                let rty = self.check_expr(rhs)?;
                self.require_int(rty)?;
                Ok(Type::Int)
            }
            Expr::Call { callee, args } => self.check_call(callee, args),
        }
    }

    fn require_int(&self, ty: Type) -> Result<(), SemaError> {
        if ty != Type::Int {
            return Err(SemaError::NonIntOperand { actual: ty });
        }
        Ok(())
    }

    fn check_call(&mut self, callee: &str, args: &[Expr]) -> Result<Type, SemaError> {
        let info = self
            .functions
            .get(callee)
            .ok_or_else(|| SemaError::UndeclaredFunction {
                name: callee.to_string(),
            })?
            .clone();
        if args.len() != info.param_types.len() {
            return Err(SemaError::ArityMismatch {
                name: callee.to_string(),
                expected: info.param_types.len(),
                actual: args.len(),
            });
        }
        for (index, (arg, expected)) in args.iter().zip(&info.param_types).enumerate() {
            let actual = self.check_expr(arg)?;
            if actual != *expected {
                return Err(SemaError::ArgTypeMismatch {
                    name: callee.to_string(),
                    index,
                    expected: *expected,
                    actual,
                });
            }
        }
        Ok(info.return_type)
    }
}
