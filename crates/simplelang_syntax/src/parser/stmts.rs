/// Statement parsing methods.
///
/// This chunk parses the four statement forms (`int` declarations with and without an
/// initializer, assignments, and `if`/`else`) plus brace-delimited bodies.
///
/// ## Notes
/// - Dispatch uses one token of lookahead. `int` additionally peeks past `int IDENTIFIER` with a
///   saved cursor and rewinds before committing to a form.
/// - Every form except `if` ends with `;`.
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    /// Parse one statement.
    ///
    /// Returns `Ok(None)` only under [`StatementPolicy::SkipUnknown`], when a token that cannot
    /// start a statement was consumed and dropped.
    fn statement(&mut self) -> Result<Option<Statement>, SyntaxError> {
        if self.check_keyword(KeywordId::Int) {
            self.declaration().map(Some)
        } else if self.check_keyword(KeywordId::If) {
            self.if_stmt().map(|stmt| Some(Statement::If(stmt)))
        } else if self.check(TokenKind::Ident) {
            self.assignment_stmt().map(Some)
        } else {
            self.unknown_statement()
        }
    }

    fn unknown_statement(&mut self) -> Result<Option<Statement>, SyntaxError> {
        match self.policy {
            StatementPolicy::Strict => Err(errors::expected_statement(self.peek(), self.pos)),
            StatementPolicy::SkipUnknown => {
                let index = self.pos;
                let token = self.advance();
                tracing::warn!(token = %token.describe(), index, "skipping token that cannot start a statement");
                Ok(None)
            }
        }
    }

    /// `int IDENTIFIER ;` or `int IDENTIFIER = expression ;`
    fn declaration(&mut self) -> Result<Statement, SyntaxError> {
        let saved = self.save();
        self.advance(); // int
        let has_initializer = if self.check(TokenKind::Ident) {
            self.advance();
            self.check_op(OperatorId::Eq)
        } else {
            false
        };
        self.restore(saved);

        if has_initializer {
            self.var_decl_assign()
        } else {
            self.var_decl()
        }
    }

    fn var_decl(&mut self) -> Result<Statement, SyntaxError> {
        self.expect_keyword(KeywordId::Int, "'int'")?;
        let name = self.identifier("identifier after 'int'")?;
        self.expect_punct(PunctuationId::Semicolon, "';' after declaration")?;
        Ok(Statement::VarDecl { name })
    }

    fn var_decl_assign(&mut self) -> Result<Statement, SyntaxError> {
        self.expect_keyword(KeywordId::Int, "'int'")?;
        let name = self.identifier("identifier after 'int'")?;
        self.expect_op(OperatorId::Eq, "'=' after variable name")?;
        let value = self.expression()?;
        self.expect_punct(PunctuationId::Semicolon, "';' after initializer")?;
        Ok(Statement::VarDeclAssign { name, value })
    }

    /// `IDENTIFIER = expression ;`
    fn assignment_stmt(&mut self) -> Result<Statement, SyntaxError> {
        let name = self.identifier("variable name")?;
        self.expect_op(OperatorId::Eq, "'=' after variable name")?;
        let value = self.expression()?;
        self.expect_punct(PunctuationId::Semicolon, "';' after assignment")?;
        Ok(Statement::Assign { name, value })
    }

    /// `if ( expression ) { stmt* } (else { stmt* })?`
    fn if_stmt(&mut self) -> Result<IfStmt, SyntaxError> {
        self.expect_keyword(KeywordId::If, "'if'")?;
        self.expect_punct(PunctuationId::LParen, "'(' after 'if'")?;
        let condition = self.expression()?;
        self.expect_punct(PunctuationId::RParen, "')' after if condition")?;
        self.expect_punct(PunctuationId::LBrace, "'{' to open if body")?;
        let then_body = self.block("'}' to close if body")?;

        let else_body = if self.match_keyword(KeywordId::Else) {
            self.expect_punct(PunctuationId::LBrace, "'{' after 'else'")?;
            self.block("'}' to close else body")?
        } else {
            Vec::new()
        };

        Ok(IfStmt {
            condition,
            then_body,
            else_body,
        })
    }

    /// Parse statements up to and including the closing `}`.
    fn block(&mut self, closing: &str) -> Result<Vec<Statement>, SyntaxError> {
        let mut stmts = Vec::new();
        while !self.check_punct(PunctuationId::RBrace) && !self.is_at_end() {
            if let Some(stmt) = self.statement()? {
                stmts.push(stmt);
            }
        }
        self.expect_punct(PunctuationId::RBrace, closing)?;
        Ok(stmts)
    }
}
