//! SimpleLang Compiler Frontend
//!
//! This module gathers the frontend components:
//! - `lexer`: tokenization of source code
//! - `parser`: parsing tokens into AST
//! - `ast`: abstract syntax tree definitions
//! - `diagnostics`: syntax errors
//! - `printer`: token and tree dumps for debugging

// Syntax components are provided by the shared simplelang_syntax crate.
pub use simplelang_syntax::{ast, diagnostics, lexer, parser, printer};
