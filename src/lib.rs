#![forbid(unsafe_code)]
//! SimpleLang Compiler
//!
//! SimpleLang is a tiny imperative language with `int` variables, `+`, `-`, `==` and `if`/`else`. This crate
//! compiles it to assembly for a three-register VM: frontend (lexer, parser, AST printer, re-exported from
//! `simplelang_syntax`), backend (code generation), the one-call [`pipeline`], and the `simplelang` CLI.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a compiler bug (logic error), use `.expect("INVARIANT: reason")` with a
//!   clear explanation.

pub mod backend;
pub mod cli;
pub mod frontend;
pub mod pipeline;
pub mod version;

pub use frontend::ast;
pub use frontend::diagnostics;
pub use frontend::lexer;
pub use frontend::parser;
pub use frontend::printer;

pub use backend::{CodegenError, CompilationContext, generate};
pub use pipeline::{CompileError, CompileOptions, compile};
