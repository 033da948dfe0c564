/// Expression parsing methods.
///
/// This chunk implements the expression grammar as a three-rung precedence ladder:
/// comparison → additive → primary.
///
/// ## Notes
/// - `==` is non-associative: at most one comparison per expression.
/// - `+`/`-` are left-associative and parsed iteratively, so `5 - 2 - 1` is `(5 - 2) - 1`.
/// - `primary` accepts only literals and identifiers; there are no parenthesized sub-expressions.
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn expression(&mut self) -> Result<Expr, SyntaxError> {
        self.comparison()
    }

    fn comparison(&mut self) -> Result<Expr, SyntaxError> {
        let left = self.additive()?;
        if !self.match_op(OperatorId::EqEq) {
            return Ok(left);
        }

        let right = self.additive()?;
        if self.check_op(OperatorId::EqEq) {
            return Err(errors::chained_comparison(self.peek(), self.pos));
        }
        Ok(Expr::binary(left, OperatorId::EqEq, right))
    }

    fn additive(&mut self) -> Result<Expr, SyntaxError> {
        let mut left = self.primary()?;

        loop {
            let op = if self.match_op(OperatorId::Plus) {
                OperatorId::Plus
            } else if self.match_op(OperatorId::Minus) {
                OperatorId::Minus
            } else {
                break;
            };

            let right = self.primary()?;
            left = Expr::binary(left, op, right);
        }

        Ok(left)
    }

    fn primary(&mut self) -> Result<Expr, SyntaxError> {
        match self.peek().kind {
            TokenKind::Int => {
                let index = self.pos;
                let token = self.advance();
                token
                    .text
                    .parse::<i64>()
                    .map(Expr::Int)
                    .map_err(|_| errors::literal_out_of_range(token, index))
            }
            TokenKind::Ident => Ok(Expr::Ident(self.advance().text.clone())),
            _ => Err(errors::expected_operand(self.peek(), self.pos)),
        }
    }
}
