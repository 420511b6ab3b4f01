use thiserror::Error;
use toyc_core::Type;

/// A semantic error, naming the offending identifier and any mismatched
/// types (spec §7: "a descriptive message naming the offending identifier
/// and mismatched types when applicable").
///
/// Analysis is eager: [`crate::check::analyze`] returns the *first*
/// violation it finds and stops, matching spec §4.C/§7's "first error
/// aborts the pass" policy. There is no error-list accumulation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SemaError {
    #[error("duplicate function '{name}'")]
    DuplicateFunction { name: String },

    #[error("missing 'main' function")]
    MissingMain,

    #[error("'main' must have signature '() -> int'")]
    InvalidMainSignature,

    #[error("duplicate parameter '{name}' in function '{function}'")]
    DuplicateParam { function: String, name: String },

    #[error("parameter '{name}' in function '{function}' cannot have type 'void'")]
    VoidParam { function: String, name: String },

    #[error("undeclared variable '{name}'")]
    UndeclaredVariable { name: String },

    #[error("assignment to undeclared variable '{name}'")]
    AssignToUndeclared { name: String },

    #[error("undeclared function '{name}'")]
    UndeclaredFunction { name: String },

    #[error("'{name}' is a function, not a variable")]
    NotAVariable { name: String },

    #[error("call to '{name}' expects {expected} argument(s), found {actual}")]
    ArityMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("argument {index} to '{name}' has type {actual}, expected {expected}")]
    ArgTypeMismatch {
        name: String,
        index: usize,
        expected: Type,
        actual: Type,
    },

    #[error("variable '{name}' already declared in this scope")]
    DuplicateVariable { name: String },

    #[error("variable '{name}' cannot have type 'void'")]
    VoidVariable { name: String },

    #[error("initializer for '{name}' has type {actual}, expected {expected}")]
    InitTypeMismatch {
        name: String,
        expected: Type,
        actual: Type,
    },

    #[error("cannot assign value of type {actual} to variable '{name}' of type {expected}")]
    AssignTypeMismatch {
        name: String,
        expected: Type,
        actual: Type,
    },

    #[error("condition must have type 'int', found {actual}")]
    ConditionNotInt { actual: Type },

    #[error("'break' outside of loop")]
    BreakOutsideLoop,

    #[error("'continue' outside of loop")]
    ContinueOutsideLoop,

    #[error("void function cannot have a return value")]
    VoidReturnWithValue,

    #[error("missing return value in function '{function}' returning 'int'")]
    MissingReturnValue { function: String },

    #[error("operand must have type 'int', found {actual}")]
    NonIntOperand { actual: Type },
}
