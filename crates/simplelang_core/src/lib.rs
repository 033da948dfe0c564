//! Canonical language vocabulary for the SimpleLang compiler.
//!
//! This crate is intentionally tiny and dependency-free. It is the single source of truth for the spellings the
//! lexer recognises and the parser/codegen dispatch on, so that no other crate has to compare against string
//! literals like `"int"` or `"=="`.
//!
//! ## Notes
//!
//! - No IO, no global state, no compiler-specific types.

pub mod lang;
