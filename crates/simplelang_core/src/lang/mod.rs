//! Registry-first language vocabulary.
//!
//! Each submodule exposes a stable id enum, a `const` metadata table, and small lookup helpers
//! (`from_str`, `as_str`, `info_for`).
//!
//! ## Examples
//! ```rust
//! use simplelang_core::lang::keywords::{self, KeywordId};
//! use simplelang_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(keywords::from_str("int"), Some(KeywordId::Int));
//! assert_eq!(operators::as_str(OperatorId::EqEq), "==");
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;
pub mod registry;
