//! Semantic analysis for ToyC (spec §4.C): scope management, name
//! resolution, type checking, and control-flow context validation.
//!
//! [`analyze`] is the sole entry point: it neither mutates nor annotates
//! the AST it is given, and returns the first violated rule it finds.

mod check;
mod diagnostics;
mod scope;

pub use check::analyze;
pub use diagnostics::SemaError;
pub use scope::{FuncInfo, VarInfo};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use toyc_parser::parse;

    fn check_src(src: &str) -> Result<(), SemaError> {
        let unit = parse(src).expect("source must parse");
        analyze(&unit)
    }

    #[test]
    fn empty_main_is_accepted() {
        assert!(check_src("int main() { return 0; }").is_ok());
    }

    #[test]
    fn missing_main_is_rejected() {
        let err = check_src("int f() { return 0; }").unwrap_err();
        assert_eq!(err, SemaError::MissingMain);
    }

    #[test]
    fn non_int_main_return_type_is_rejected() {
        let err = check_src("void main() { return; }").unwrap_err();
        assert_eq!(err, SemaError::InvalidMainSignature);
    }

    #[test]
    fn main_with_parameters_is_rejected() {
        let err = check_src("int main(int x) { return 0; }").unwrap_err();
        assert_eq!(err, SemaError::InvalidMainSignature);
    }

    #[test]
    fn void_function_with_return_value_is_rejected() {
        let err = check_src("void f() { return 1; } int main() { return 0; }").unwrap_err();
        assert_eq!(err, SemaError::VoidReturnWithValue);
    }

    #[test]
    fn assignment_to_undeclared_variable_is_rejected() {
        let err = check_src("int main() { y = 0; return 0; }").unwrap_err();
        assert_eq!(
            err,
            SemaError::AssignToUndeclared {
                name: "y".to_string()
            }
        );
    }

    #[test]
    fn break_outside_loop_is_rejected() {
        let err = check_src("int main() { break; return 0; }").unwrap_err();
        assert_eq!(err, SemaError::BreakOutsideLoop);
    }

    #[test]
    fn continue_outside_loop_is_rejected() {
        let err = check_src("int main() { continue; return 0; }").unwrap_err();
        assert_eq!(err, SemaError::ContinueOutsideLoop);
    }

    #[test]
    fn break_inside_nested_block_within_loop_is_accepted() {
        assert!(check_src("int main() { while (1) { { break; } } return 0; }").is_ok());
    }

    #[test]
    fn shadowing_an_outer_scope_is_accepted() {
        assert!(check_src("int main() { int x = 1; { int x = 2; } return x; }").is_ok());
    }

    #[test]
    fn redeclaring_in_the_same_scope_is_rejected() {
        let err = check_src("int main() { int x = 1; int x = 2; return x; }").unwrap_err();
        assert_eq!(
            err,
            SemaError::DuplicateVariable {
                name: "x".to_string()
            }
        );
    }

    #[test]
    fn void_variable_declaration_is_rejected() {
        let err = check_src("int main() { void x; return 0; }").unwrap_err();
        assert_eq!(
            err,
            SemaError::VoidVariable {
                name: "x".to_string()
            }
        );
    }

    #[test]
    fn call_arity_mismatch_is_rejected() {
        let err =
            check_src("int add(int a, int b) { return a + b; } int main() { return add(1); }")
                .unwrap_err();
        assert_eq!(
            err,
            SemaError::ArityMismatch {
                name: "add".to_string(),
                expected: 2,
                actual: 1,
            }
        );
    }

    #[test]
    fn calling_an_undeclared_function_is_rejected() {
        let err = check_src("int main() { return f(); }").unwrap_err();
        assert_eq!(
            err,
            SemaError::UndeclaredFunction {
                name: "f".to_string()
            }
        );
    }

    #[test]
    fn void_call_as_expression_statement_is_accepted() {
        assert!(check_src("void f() { return; } int main() { f(); return 0; }").is_ok());
    }

    #[test]
    fn void_call_used_in_arithmetic_is_rejected() {
        let err =
            check_src("void f() { return; } int main() { return 1 + f(); }").unwrap_err();
        assert!(matches!(err, SemaError::NonIntOperand { .. }));
    }

    #[test]
    fn using_a_function_name_as_a_variable_is_rejected() {
        let err = check_src("int f() { return 0; } int main() { return f; }").unwrap_err();
        assert_eq!(
            err,
            SemaError::NotAVariable {
                name: "f".to_string()
            }
        );
    }

    #[test]
    fn analysis_is_idempotent() {
        let src = "int add(int a, int b) { return a + b; } int main() { return add(1, 2); }";
        let unit = parse(src).unwrap();
        assert_eq!(analyze(&unit), analyze(&unit));
    }
}
