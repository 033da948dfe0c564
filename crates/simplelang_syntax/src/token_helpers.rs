//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to give diagnostics and the token dump
//! a single place that knows how each kind is named.

use crate::lexer::{Token, TokenKind};
use simplelang_core::lang::keywords::{self, KeywordId};
use simplelang_core::lang::operators::{self, OperatorId};
use simplelang_core::lang::punctuation::{self, PunctuationId};

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return the operator id, if this is an operator token.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    /// Upper-case tag used by the token dump (`INT`, `ID`, `EQ`, ...).
    pub fn dump_name(&self) -> &'static str {
        match self {
            TokenKind::Keyword(KeywordId::Int) => "INT",
            TokenKind::Keyword(KeywordId::If) => "IF",
            TokenKind::Keyword(KeywordId::Else) => "ELSE",
            TokenKind::Ident => "ID",
            TokenKind::Int => "NUM",
            TokenKind::Operator(OperatorId::Eq) => "ASSIGN",
            TokenKind::Operator(OperatorId::Plus) => "PLUS",
            TokenKind::Operator(OperatorId::Minus) => "MINUS",
            TokenKind::Operator(OperatorId::EqEq) => "EQ",
            TokenKind::Punctuation(PunctuationId::LBrace) => "LBRACE",
            TokenKind::Punctuation(PunctuationId::RBrace) => "RBRACE",
            TokenKind::Punctuation(PunctuationId::LParen) => "LPAREN",
            TokenKind::Punctuation(PunctuationId::RParen) => "RPAREN",
            TokenKind::Punctuation(PunctuationId::Semicolon) => "SEMI",
            TokenKind::Eof => "EOF",
            TokenKind::Unknown => "UNKNOWN",
        }
    }

    /// Human-readable name of a token class, for "expected ..." messages.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Keyword(id) => format!("'{}'", keywords::as_str(*id)),
            TokenKind::Operator(id) => format!("'{}'", operators::as_str(*id)),
            TokenKind::Punctuation(id) => format!("'{}'", punctuation::as_str(*id)),
            TokenKind::Ident => "identifier".to_string(),
            TokenKind::Int => "integer literal".to_string(),
            TokenKind::Unknown => "unrecognized character".to_string(),
            TokenKind::Eof => "end of input".to_string(),
        }
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Convenience wrapper for `self.kind.operator_id()`.
    pub fn operator_id(&self) -> Option<OperatorId> {
        self.kind.operator_id()
    }

    /// Describe this concrete token for diagnostics, including its text where that adds information.
    ///
    /// ## Examples
    /// ```rust
    /// use simplelang_syntax::lexer::{Token, TokenKind};
    ///
    /// assert_eq!(Token::new(TokenKind::Ident, "x").describe(), "identifier 'x'");
    /// assert_eq!(Token::eof().describe(), "end of input");
    /// ```
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Ident | TokenKind::Int | TokenKind::Unknown => {
                format!("{} '{}'", self.kind.describe(), self.text)
            }
            _ => self.kind.describe(),
        }
    }
}
