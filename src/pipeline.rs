//! End-to-end compilation: source text → assembly text.
//!
//! [`compile`] is the one-call entry point. [`compile_detailed`] runs the same stages but keeps every intermediate
//! product, which is what the CLI's `--verbose` mode prints.
//!
//! ## Examples
//!
//! ```rust
//! use simplelang::pipeline::{CompileOptions, compile};
//!
//! let asm = compile("int a = 4;", &CompileOptions::new().with_wrap(true)).unwrap();
//! assert_eq!(asm, ".text\nldi A 4\nmov M A 1\nhlt\n");
//! ```

use miette::Diagnostic;
use thiserror::Error;

use crate::backend::{CodegenError, CompilationContext, Instruction, emit_program, render_listing};
use crate::frontend::ast::Program;
use crate::frontend::diagnostics::SyntaxError;
use crate::frontend::lexer::{self, Token};
use crate::frontend::parser;

pub use crate::frontend::parser::StatementPolicy;

/// Knobs for one compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompileOptions {
    /// How the parser treats a token that cannot start a statement
    pub policy: StatementPolicy,
    /// Frame the output with `.text` and a trailing `hlt`
    pub wrap: bool,
}

impl CompileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: StatementPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }
}

/// Any error that stops a compilation.
#[derive(Debug, Error, Diagnostic)]
pub enum CompileError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Codegen(#[from] CodegenError),
}

/// Every intermediate product of a successful compilation.
#[derive(Debug)]
pub struct Compilation {
    pub tokens: Vec<Token>,
    pub program: Program,
    pub context: CompilationContext,
    pub instructions: Vec<Instruction>,
}

impl Compilation {
    /// Render the generated code as text.
    pub fn render(&self, wrap: bool) -> String {
        render_listing(&self.instructions, wrap)
    }
}

/// Lex, parse and generate, keeping every intermediate product.
///
/// A fresh [`CompilationContext`] is used for each call, so repeated calls on the same input produce identical
/// output.
///
/// ## Errors
/// Returns the first [`SyntaxError`] or [`CodegenError`].
#[tracing::instrument(skip_all, fields(source_len = source.len(), policy = ?options.policy))]
pub fn compile_detailed(source: &str, options: &CompileOptions) -> Result<Compilation, CompileError> {
    let tokens = lexer::lex(source);
    let program = parser::parse_with_policy(&tokens, options.policy)?;

    let mut context = CompilationContext::new();
    let instructions = emit_program(&program, &mut context)?;

    Ok(Compilation {
        tokens,
        program,
        context,
        instructions,
    })
}

/// Compile SimpleLang source to assembly text.
///
/// ## Errors
/// Returns the first [`SyntaxError`] or [`CodegenError`].
pub fn compile(source: &str, options: &CompileOptions) -> Result<String, CompileError> {
    compile_detailed(source, options).map(|c| c.render(options.wrap))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwrapped_by_default() {
        let asm = compile("int a; a = 2 + 3;", &CompileOptions::default()).unwrap();
        assert_eq!(asm, "ldi A 2\nldi B 3\nadd\nmov M A 1\n");
    }

    #[test]
    fn test_wrapped_empty_program() {
        let asm = compile("", &CompileOptions::new().with_wrap(true)).unwrap();
        assert_eq!(asm, ".text\nhlt\n");
    }

    #[test]
    fn test_syntax_error_is_reported() {
        let err = compile("int a = ;", &CompileOptions::default()).unwrap_err();
        assert!(matches!(err, CompileError::Syntax(ref e) if e.token_index == 3));
    }

    #[test]
    fn test_policy_is_forwarded() {
        let strict = compile("@ int a = 1;", &CompileOptions::default());
        assert!(strict.is_err());

        let lenient = compile(
            "@ int a = 1;",
            &CompileOptions::new().with_policy(StatementPolicy::SkipUnknown),
        )
        .unwrap();
        assert_eq!(lenient, "ldi A 1\nmov M A 1\n");
    }

    #[test]
    fn test_detailed_keeps_intermediates() {
        let c = compile_detailed("int a = 1; if (a == 1) { }", &CompileOptions::default()).unwrap();
        assert_eq!(c.program.statements.len(), 2);
        assert_eq!(c.tokens.last().map(|t| t.kind), Some(lexer::TokenKind::Eof));
        assert_eq!(c.context.symbols.len(), 1);
        assert_eq!(c.context.labels.allocated(), 1);
        assert_eq!(c.render(false).lines().count(), c.instructions.len());
    }

    #[test]
    fn test_repeated_compilation_is_identical() {
        let source = "int a = 1; if (a == 1) { a = 2; } else { a = 3; } if (a) { }";
        let first = compile(source, &CompileOptions::default()).unwrap();
        let second = compile(source, &CompileOptions::default()).unwrap();
        assert_eq!(first, second);
        assert!(second.contains("jnz %else_0"));
        assert!(second.contains("jnz %else_1"));
    }
}
