//! Error types for code generation.
//!
//! The parser only ever produces trees the generator can lower, so these errors are reachable from hand-built ASTs
//! or from a failing output stream.

use miette::Diagnostic;
use thiserror::Error;

/// Error during AST → assembly generation.
#[derive(Debug, Error, Diagnostic)]
pub enum CodegenError {
    /// A binary node carries an operator with no machine instruction (e.g. `=`).
    #[error("unsupported operator '{operator}' in expression")]
    #[diagnostic(
        code(simplelang::codegen::operator),
        help("Only '+', '-' and '==' can appear in expressions")
    )]
    UnsupportedOperator { operator: &'static str },

    /// An expression shape the single scratch slot cannot hold.
    #[error("unsupported expression shape: {detail}")]
    #[diagnostic(code(simplelang::codegen::shape))]
    UnsupportedShape { detail: String },

    /// The output sink rejected a write.
    #[error("failed to write generated code: {0}")]
    #[diagnostic(code(simplelang::codegen::io))]
    Io(#[from] std::io::Error),
}
