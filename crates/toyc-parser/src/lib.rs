//! Lexer and recursive-descent parser for ToyC source text.
//!
//! The rest of the pipeline treats parsing as an external collaborator
//! that only needs to produce a `toyc_core::CompilationUnit` -- this crate
//! is one conventional implementation of that contract, not a
//! specification requirement in its own right. Any parsing technology
//! that emits the same AST slots in here without downstream changes.

pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;

pub use error::ParseError;

use toyc_core::CompilationUnit;

/// Parse a complete ToyC source file into a compilation unit.
pub fn parse(source: &str) -> Result<CompilationUnit, ParseError> {
    let tokens = lexer::Lexer::new(source).tokenize()?;
    parser::Parser::new(&tokens).parse_compilation_unit()
}
