//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fmt::Write as _;
use std::fs;

use crate::frontend::{lexer, parser, printer};
use crate::pipeline::{self, Compilation, CompileError, CompileOptions, StatementPolicy};

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions
/// during compilation.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &str) -> CliResult<String> {
    // Check file size before reading
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

/// Render a compilation error through miette, naming the file it came from.
fn compile_failure(file_path: &str, err: impl Into<CompileError>) -> CliError {
    let report = miette::Report::new(err.into()).wrap_err(format!("failed to compile '{}'", file_path));
    CliError::failure(format!("{:?}", report).trim_end())
}

/// Print the token dump for a source file.
pub fn lex_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = lexer::lex(&source);
    print!("{}", printer::render_tokens(&tokens));
    Ok(ExitCode::SUCCESS)
}

/// Print the AST tree for a source file.
pub fn parse_file(file_path: &str, policy: StatementPolicy) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = lexer::lex(&source);
    let program = parser::parse_with_policy(&tokens, policy).map_err(|e| compile_failure(file_path, e))?;
    print!("{}", printer::render_tree(&program));
    Ok(ExitCode::SUCCESS)
}

/// Compile a source file and print the generated code to stdout.
pub fn emit_file(file_path: &str, options: &CompileOptions) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let asm = pipeline::compile(&source, options).map_err(|e| compile_failure(file_path, e))?;
    print!("{}", asm);
    Ok(ExitCode::SUCCESS)
}

/// Compile a source file and write the generated code to `output_path`.
///
/// The output file is only created once compilation has succeeded.
pub fn build_file(file_path: &str, output_path: &str, options: &CompileOptions, verbose: bool) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let compilation = pipeline::compile_detailed(&source, options).map_err(|e| compile_failure(file_path, e))?;
    let asm = compilation.render(options.wrap);

    if verbose {
        print!("{}", verbose_report(&source, &compilation, &asm));
    }

    fs::write(output_path, &asm)
        .map_err(|e| CliError::failure(format!("Error writing output file '{}': {}", output_path, e)))?;

    tracing::debug!(
        source = file_path,
        output = output_path,
        instruction_count = compilation.instructions.len(),
        "wrote assembly"
    );
    println!("✓ Compiled {} → {}", file_path, output_path);
    Ok(ExitCode::SUCCESS)
}

/// Stage-by-stage report printed by `--verbose`.
pub fn verbose_report(source: &str, compilation: &Compilation, asm: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== SimpleLang Compiler ===");
    let _ = writeln!(out, "Input program: {}\n", source);

    let _ = writeln!(out, "=== Lexer Output ===");
    out.push_str(&printer::render_tokens(&compilation.tokens));

    let _ = writeln!(out, "\n=== Parser Output ===");
    let _ = writeln!(
        out,
        "Successfully parsed program with {} statements\n",
        compilation.program.statements.len()
    );

    let _ = writeln!(out, "=== Abstract Syntax Tree ===");
    out.push_str(&printer::render_tree(&compilation.program));

    let _ = writeln!(out, "\n=== Generated Code ===");
    out.push_str(asm);

    let _ = writeln!(out, "\nCompilation completed successfully!");
    out
}
