//! Token types for the SimpleLang lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for operators (`=` included)
//! - `Punctuation(PunctuationId)` for delimiters and `;`
//!
//! ## Notes
//! - Every token keeps the exact text it was scanned from; tokens carry no source positions.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use simplelang_core::lang::keywords::{self, KeywordId};
use simplelang_core::lang::operators::OperatorId;
use simplelang_core::lang::punctuation::PunctuationId;

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Ident,
    Int,

    // ========== Special ==========
    /// A character no other rule accepts; rejection is left to the parser.
    Unknown,
    Eof,
}

/// A token with its kind and matched source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// The end-of-input token (empty text).
    pub const fn eof() -> Self {
        Self {
            kind: TokenKind::Eof,
            text: String::new(),
        }
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
