//! Syntax diagnostics for SimpleLang.
//!
//! Parsing has exactly one failure mode: a [`SyntaxError`] raised the moment an expected token class is absent. It is
//! fatal to the parse; there is no recovery and no partial AST.
//!
//! Tokens carry no source positions, so errors locate themselves by token index and quote the offending token.

use miette::Diagnostic;
use thiserror::Error;

use crate::lexer::Token;

/// A fatal parse error.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{message}, found {found} (token {token_index})")]
#[diagnostic(code(simplelang::syntax))]
pub struct SyntaxError {
    /// What the parser expected, e.g. `Expected ';' after assignment`
    pub message: String,
    /// Description of the token actually present
    pub found: String,
    /// Index of the offending token in the token stream
    pub token_index: usize,
    #[help]
    pub hint: Option<String>,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, found: &Token, token_index: usize) -> Self {
        Self {
            message: message.into(),
            found: found.describe(),
            token_index,
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

// ============================================================================
// Error catalog: common syntax errors with friendly hints
// ============================================================================

/// Constructors for the syntax errors the parser raises.
pub mod errors {
    use super::*;

    pub fn expected(what: &str, found: &Token, token_index: usize) -> SyntaxError {
        SyntaxError::new(format!("Expected {}", what), found, token_index)
    }

    pub fn expected_statement(found: &Token, token_index: usize) -> SyntaxError {
        SyntaxError::new("Expected a statement", found, token_index)
            .with_hint("Statements start with 'int', 'if', or a variable name being assigned")
    }

    pub fn expected_operand(found: &Token, token_index: usize) -> SyntaxError {
        SyntaxError::new("Expected number or identifier", found, token_index)
            .with_hint("Parenthesized sub-expressions are not supported")
    }

    pub fn literal_out_of_range(found: &Token, token_index: usize) -> SyntaxError {
        SyntaxError::new("Integer literal out of range", found, token_index)
            .with_hint(format!("Literals must fit in a signed 64-bit integer (max {})", i64::MAX))
    }

    pub fn chained_comparison(found: &Token, token_index: usize) -> SyntaxError {
        SyntaxError::new("Comparisons cannot be chained", found, token_index)
            .with_hint("An expression may contain at most one '=='")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenKind;

    #[test]
    fn test_display_includes_found_token_and_index() {
        let err = errors::expected("';' after declaration", &Token::new(TokenKind::Ident, "b"), 2);
        assert_eq!(
            err.to_string(),
            "Expected ';' after declaration, found identifier 'b' (token 2)"
        );
        assert_eq!(err.hint, None);
    }

    #[test]
    fn test_hint_is_reported_as_help() {
        let err = errors::expected_statement(&Token::new(TokenKind::Unknown, "@"), 0);
        let help = err.help().map(|h| h.to_string());
        assert_eq!(
            help.as_deref(),
            Some("Statements start with 'int', 'if', or a variable name being assigned")
        );
    }

    #[test]
    fn test_diagnostic_code() {
        let err = errors::expected_operand(&Token::eof(), 5);
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("simplelang::syntax"));
    }
}
