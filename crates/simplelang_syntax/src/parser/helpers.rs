/// Token-stream helpers.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `advance`)
/// - Matching / expecting keywords, operators, and punctuation
/// - Cursor save/restore for the one place the grammar needs to look past the next token
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the cursor is on [`TokenKind::Eof`] or past the end of the slice.
    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    /// Return the current token without consuming it.
    ///
    /// A stream that is missing its trailing `Eof` behaves as if it had one.
    fn peek(&self) -> &'a Token {
        self.tokens.get(self.pos).unwrap_or(&EOF_TOKEN)
    }

    /// Advance to the next token and return the token we just consumed.
    fn advance(&mut self) -> &'a Token {
        let idx = self.pos;
        if !self.is_at_end() {
            self.pos += 1;
        }
        self.tokens.get(idx).unwrap_or(&EOF_TOKEN)
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().kind.is_punctuation(id)
    }

    fn check_op(&self, id: OperatorId) -> bool {
        self.peek().kind.is_operator(id)
    }

    fn match_keyword(&mut self, id: KeywordId) -> bool {
        if self.check_keyword(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_op(&mut self, id: OperatorId) -> bool {
        if self.check_op(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn error_here(&self, what: &str) -> SyntaxError {
        errors::expected(what, self.peek(), self.pos)
    }

    fn expect_keyword(&mut self, id: KeywordId, what: &str) -> Result<(), SyntaxError> {
        if self.match_keyword(id) {
            Ok(())
        } else {
            Err(self.error_here(what))
        }
    }

    fn expect_punct(&mut self, id: PunctuationId, what: &str) -> Result<(), SyntaxError> {
        if self.check_punct(id) {
            self.advance();
            Ok(())
        } else {
            Err(self.error_here(what))
        }
    }

    fn expect_op(&mut self, id: OperatorId, what: &str) -> Result<(), SyntaxError> {
        if self.match_op(id) {
            Ok(())
        } else {
            Err(self.error_here(what))
        }
    }

    fn identifier(&mut self, what: &str) -> Result<Ident, SyntaxError> {
        if self.check(TokenKind::Ident) {
            Ok(self.advance().text.clone())
        } else {
            Err(self.error_here(what))
        }
    }

    /// Save the cursor so a speculative scan can be undone with [`Self::restore`].
    fn save(&self) -> usize {
        self.pos
    }

    fn restore(&mut self, pos: usize) {
        self.pos = pos;
    }
}
