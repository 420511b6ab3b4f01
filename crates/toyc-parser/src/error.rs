use thiserror::Error;

/// A diagnostic produced while turning source text into an AST.
///
/// Message format follows spec §7: `<kind> error at line L, column C:
/// <detail>`. Parsing aborts on the first error -- there is no
/// accumulation or recovery.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("lexical error at line {line}, column {column}: {detail}")]
    Lexical {
        line: u32,
        column: u32,
        detail: String,
    },

    #[error("syntax error at line {line}, column {column}: {detail}")]
    Syntax {
        line: u32,
        column: u32,
        detail: String,
    },
}
