//! SimpleLang compiler backend
//!
//! This module lowers the AST produced by the frontend into assembly text for the three-register VM.
//!
//! ## Module Organization
//!
//! - `isa` - Registers, slots, labels and the [`Instruction`] enum with its text encoding
//! - `context` - Per-run state: variable→slot table and `if`-label counter
//! - `codegen` - The AST walk ([`Codegen`]) and the `generate*` entry points
//! - `errors` - [`CodegenError`]

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod codegen;
pub mod context;
pub mod errors;
pub mod isa;

pub use codegen::{Codegen, emit_program, generate, generate_to_string, render_listing, write_instructions};
pub use context::{CompilationContext, LabelAllocator, SymbolTable};
pub use errors::CodegenError;
pub use isa::{Instruction, Label, Register, Slot};
