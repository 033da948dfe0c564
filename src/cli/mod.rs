//! CLI module for the SimpleLang compiler
//!
//! This module provides the command-line interface for the compiler.
//!
//! ## Commands
//!
//! - `<source> <output>` / `build <source> <output>` - Compile to VM assembly
//! - `--lex <source>` - Print the token dump
//! - `--parse <source>` - Print the AST tree
//! - `--emit <source>` - Print the generated code to stdout
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use crate::pipeline::{CompileOptions, StatementPolicy};
use crate::version::SIMPLELANG_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// The SimpleLang compiler
#[derive(Parser, Debug)]
#[command(name = "simplelang")]
#[command(version = SIMPLELANG_VERSION)]
#[command(about = "Compile SimpleLang programs to three-register VM assembly", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Source file to compile (default action when no subcommand given)
    #[arg(value_name = "SOURCE")]
    pub file: Option<PathBuf>,

    /// Where to write the generated assembly
    #[arg(value_name = "OUTPUT", requires = "file")]
    pub output: Option<PathBuf>,

    // Debug/development flags
    /// Tokenize only and print the token dump
    #[arg(long = "lex", value_name = "SOURCE", conflicts_with = "file")]
    pub lex_file: Option<PathBuf>,

    /// Parse only and print the AST tree
    #[arg(long = "parse", value_name = "SOURCE", conflicts_with = "file")]
    pub parse_file: Option<PathBuf>,

    /// Print the generated code to stdout instead of writing a file
    #[arg(long = "emit", value_name = "SOURCE", conflicts_with = "file")]
    pub emit_file: Option<PathBuf>,

    #[command(flatten)]
    pub build: BuildArgs,
}

/// Flags shared by every compiling command.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct BuildArgs {
    /// Drop tokens that cannot start a statement instead of failing
    #[arg(long, global = true)]
    pub skip_unknown: bool,

    /// Omit the ".text" header and trailing "hlt"
    #[arg(long, global = true)]
    pub no_wrap: bool,

    /// Print the token dump, AST tree and generated code while compiling
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl BuildArgs {
    pub fn compile_options(&self) -> CompileOptions {
        let policy = if self.skip_unknown {
            StatementPolicy::SkipUnknown
        } else {
            StatementPolicy::Strict
        };
        CompileOptions::new().with_policy(policy).with_wrap(!self.no_wrap)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile a source file to VM assembly
    Build {
        /// Source file to compile
        #[arg(value_name = "SOURCE")]
        file: PathBuf,
        /// Where to write the generated assembly
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    let options = cli.build.compile_options();

    // Handle debug flags first
    if let Some(file) = cli.lex_file {
        return commands::lex_file(&file.to_string_lossy());
    }
    if let Some(file) = cli.parse_file {
        return commands::parse_file(&file.to_string_lossy(), options.policy);
    }
    if let Some(file) = cli.emit_file {
        return commands::emit_file(&file.to_string_lossy(), &options);
    }

    match cli.command {
        Some(Command::Build { file, output }) => commands::build_file(
            &file.to_string_lossy(),
            &output.to_string_lossy(),
            &options,
            cli.build.verbose,
        ),
        None => match (cli.file, cli.output) {
            (Some(file), Some(output)) => commands::build_file(
                &file.to_string_lossy(),
                &output.to_string_lossy(),
                &options,
                cli.build.verbose,
            ),
            (Some(_), None) => Err(CliError::failure(
                "Error: missing OUTPUT path\n\nUsage: simplelang <SOURCE> <OUTPUT>",
            )),
            _ => Err(CliError::failure(
                "Usage: simplelang <SOURCE> <OUTPUT>\n\nFor more information, try '--help'.",
            )),
        },
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_default_compile() {
        let cli = Cli::try_parse_from(["simplelang", "prog.sl", "prog.asm"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.file.as_deref(), Some(std::path::Path::new("prog.sl")));
        assert_eq!(cli.output.as_deref(), Some(std::path::Path::new("prog.asm")));
        assert_eq!(cli.build.compile_options(), CompileOptions::new().with_wrap(true));
    }

    #[test]
    fn test_cli_parse_build() {
        let cli = Cli::try_parse_from(["simplelang", "build", "prog.sl", "out.asm"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Build { .. })));
    }

    #[test]
    fn test_cli_parse_build_flags() {
        let cli = Cli::try_parse_from([
            "simplelang",
            "build",
            "prog.sl",
            "out.asm",
            "--skip-unknown",
            "--no-wrap",
            "-v",
        ])
        .unwrap();
        assert!(cli.build.verbose);
        let options = cli.build.compile_options();
        assert_eq!(options.policy, StatementPolicy::SkipUnknown);
        assert!(!options.wrap);
    }

    #[test]
    fn test_cli_build_requires_output() {
        assert!(Cli::try_parse_from(["simplelang", "build", "prog.sl"]).is_err());
    }

    #[test]
    fn test_cli_parse_debug_flags() {
        let cli = Cli::try_parse_from(["simplelang", "--lex", "prog.sl"]).unwrap();
        assert!(cli.lex_file.is_some());

        let cli = Cli::try_parse_from(["simplelang", "--parse", "prog.sl"]).unwrap();
        assert!(cli.parse_file.is_some());

        let cli = Cli::try_parse_from(["simplelang", "--emit", "prog.sl", "--no-wrap"]).unwrap();
        assert!(cli.emit_file.is_some());
        assert!(cli.build.no_wrap);
    }

    #[test]
    fn test_debug_flags_conflict_with_positional_source() {
        assert!(Cli::try_parse_from(["simplelang", "--lex", "a.sl", "b.sl"]).is_err());
    }

    #[test]
    fn test_missing_output_is_an_error() {
        let cli = Cli::try_parse_from(["simplelang", "prog.sl"]).unwrap();
        let err = execute(cli).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("OUTPUT"));
    }

    #[test]
    fn test_no_arguments_is_an_error() {
        let cli = Cli::try_parse_from(["simplelang"]).unwrap();
        assert_eq!(execute(cli).unwrap_err().exit_code, ExitCode::FAILURE);
    }
}
