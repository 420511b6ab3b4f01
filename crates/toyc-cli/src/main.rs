//! ToyC compiler driver.
//!
//! Reads ToyC source (from stdin or a file), runs it through parsing,
//! semantic analysis, IR generation, and assembly emission, and prints
//! the requested pipeline stage. Exit codes distinguish failure classes
//! (spec §7) so a caller -- a shell script, a test harness -- can tell a
//! rejected program from a compiler bug without parsing stderr.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use toyc_codegen::{compile_unit, CodegenError, EmitOptions};

/// What pipeline stage to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EmitStage {
    Ast,
    AstJson,
    Ir,
    IrJson,
    Asm,
}

/// ToyC compiler and tools.
#[derive(Parser)]
#[command(name = "toyc", about = "ToyC compiler")]
struct Cli {
    /// ToyC source file; omitted or "-" reads stdin.
    file: Option<PathBuf>,

    /// Pipeline stage to print.
    #[arg(long, value_enum, default_value = "asm")]
    emit: EmitStage,

    /// Write output here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Raise log verbosity (repeatable: -v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Exit codes (spec §7, refined per stage).
const EXIT_SUCCESS: u8 = 0;
const EXIT_SYNTAX_ERROR: u8 = 1;
const EXIT_SEMANTIC_ERROR: u8 = 2;
const EXIT_INTERNAL_ERROR: u8 = 3;
const EXIT_IO_ERROR: u8 = 4;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    ExitCode::from(run(cli))
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt().with_max_level(level).init();
}

fn run(cli: Cli) -> u8 {
    let source = match read_source(cli.file.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("I/O error: {e}");
            return EXIT_IO_ERROR;
        }
    };

    let unit = match toyc_parser::parse(&source) {
        Ok(unit) => unit,
        Err(e) => {
            eprintln!("{e}");
            return EXIT_SYNTAX_ERROR;
        }
    };

    let output = match cli.emit {
        EmitStage::Ast => format!("{unit:#?}\n"),
        EmitStage::AstJson => match serde_json::to_string_pretty(&unit) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("internal error: failed to serialize AST: {e}");
                return EXIT_INTERNAL_ERROR;
            }
        },
        EmitStage::Ir | EmitStage::IrJson => {
            if let Err(e) = toyc_check::analyze(&unit) {
                eprintln!("semantic error: {e}");
                return EXIT_SEMANTIC_ERROR;
            }
            let program = toyc_codegen::irgen::lower_program(&unit);
            if cli.emit == EmitStage::Ir {
                format!("{program:#?}\n")
            } else {
                match serde_json::to_string_pretty(&program) {
                    Ok(json) => json,
                    Err(e) => {
                        eprintln!("internal error: failed to serialize IR: {e}");
                        return EXIT_INTERNAL_ERROR;
                    }
                }
            }
        }
        EmitStage::Asm => match compile_unit(&unit, &EmitOptions::default()) {
            Ok(asm) => asm,
            Err(CodegenError::TypeCheckFailed(e)) => {
                eprintln!("semantic error: {e}");
                return EXIT_SEMANTIC_ERROR;
            }
            Err(e) => {
                eprintln!("internal error: {e}");
                return EXIT_INTERNAL_ERROR;
            }
        },
    };

    match write_output(cli.output.as_deref(), &output) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("I/O error: {e}");
            EXIT_IO_ERROR
        }
    }
}

fn read_source(file: Option<&std::path::Path>) -> io::Result<String> {
    match file {
        None => read_stdin(),
        Some(path) if path == std::path::Path::new("-") => read_stdin(),
        Some(path) => fs::read_to_string(path),
    }
}

fn read_stdin() -> io::Result<String> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn write_output(file: Option<&std::path::Path>, text: &str) -> io::Result<()> {
    match file {
        Some(path) => fs::write(path, text),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct_per_failure_class() {
        let codes = [
            EXIT_SUCCESS,
            EXIT_SYNTAX_ERROR,
            EXIT_SEMANTIC_ERROR,
            EXIT_INTERNAL_ERROR,
            EXIT_IO_ERROR,
        ];
        let mut sorted = codes.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), codes.len());
    }
}
