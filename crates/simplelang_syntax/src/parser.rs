//! Parser for SimpleLang
//!
//! Converts a token stream into an AST [`Program`] by recursive descent.
//!
//! ## Examples
//!
//! ```rust
//! use simplelang_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("int a; a = 2 + 3;");
//! let ast = parser::parse(&tokens).unwrap();
//! assert_eq!(ast.statements.len(), 2);
//! ```

use crate::ast::*;
use crate::diagnostics::{SyntaxError, errors};
use crate::lexer::{Token, TokenKind};
use simplelang_core::lang::keywords::KeywordId;
use simplelang_core::lang::operators::OperatorId;
use simplelang_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while keeping
// each grammar layer in its own file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
