//! Syntax frontend for SimpleLang: lexer, parser, AST, syntax diagnostics and a tree printer.
//!
//! This crate is dependency-light and "syntax-only": it does not allocate storage slots or emit code. Those live in
//! the `simplelang` compiler crate's backend.
//!
//! ## Notes
//! - Vocabulary identity (keywords/operators/punctuation) comes from `simplelang_core::lang` registries.
//! - The pipeline is strictly staged: [`lexer::lex`] materialises every token before [`parser::parse`] runs.
//!
//! ## Examples
//! ```rust
//! use simplelang_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("int a = 4;");
//! let program = parser::parse(&tokens).unwrap();
//! assert_eq!(program.statements.len(), 1);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod token_helpers;
