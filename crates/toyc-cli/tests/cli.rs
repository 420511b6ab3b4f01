//! End-to-end driver tests covering the six scenarios in spec §8,
//! exercised over the built binary's stdin/stdout and exit code.

use assert_cmd::Command;
use predicates::prelude::*;

fn toyc() -> Command {
    Command::cargo_bin("toyc").expect("binary must build")
}

#[test]
fn empty_main_emits_assembly_with_required_directives() {
    toyc()
        .write_stdin("int main() { return 0; }")
        .assert()
        .success()
        .stdout(predicate::str::contains(".global main"))
        .stdout(predicate::str::contains("main:"))
        .stdout(predicate::str::contains("ret"));
}

#[test]
fn arithmetic_example_compiles_successfully() {
    toyc()
        .write_stdin("int main() { int a = 3; int b = 4; return a*a + b*b; }")
        .assert()
        .success();
}

#[test]
fn shadowing_example_compiles_and_ir_shows_distinct_qualified_names() {
    toyc()
        .args(["--emit", "ir"])
        .write_stdin("int main() { int x = 1; { int x = 2; } return x; }")
        .assert()
        .success()
        .stdout(predicate::str::contains("x@1"))
        .stdout(predicate::str::contains("x@2"));
}

#[test]
fn control_flow_and_calls_example_compiles_successfully() {
    let src = "int add(int a, int b) { return a + b; }
               int main() {
                 int s = 0; int i = 0;
                 while (i < 10) { s = add(s, i); i = i + 1; }
                 return s;
               }";
    toyc().write_stdin(src).assert().success();
}

#[test]
fn void_function_with_return_value_is_rejected_with_exit_code_2() {
    toyc()
        .write_stdin("void f() { return 1; } int main() { return 0; }")
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "void function cannot have a return value",
        ));
}

#[test]
fn assignment_to_undeclared_variable_is_rejected_with_exit_code_2() {
    toyc()
        .write_stdin("int main() { y = 0; return 0; }")
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "assignment to undeclared variable 'y'",
        ));
}

#[test]
fn break_outside_loop_is_rejected_with_exit_code_2() {
    toyc()
        .write_stdin("int main() { break; return 0; }")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("'break' outside of loop"));
}

#[test]
fn missing_main_is_rejected_with_exit_code_2() {
    toyc()
        .write_stdin("int f() { return 0; }")
        .assert()
        .code(2);
}

#[test]
fn syntax_error_is_rejected_with_exit_code_1() {
    toyc()
        .write_stdin("int main() { return 0 }")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("syntax error"));
}

#[test]
fn nine_argument_call_compiles_and_spills_the_stack_argument() {
    let src = "int f(int a, int b, int c, int d, int e, int g, int h, int i, int j) { return j; }
               int main() { return f(0,0,0,0,0,0,0,0,7); }";
    toyc()
        .write_stdin(src)
        .assert()
        .success()
        .stdout(predicate::str::contains("-1600(sp)"));
}
