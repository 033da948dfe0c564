/// Parse a token stream into an AST [`Program`].
///
/// This is the main public entrypoint for parsing. Tokens that cannot start a statement are
/// reported as errors ([`StatementPolicy::Strict`]).
///
/// ## Parameters
/// - `tokens`: Token stream produced by `simplelang_syntax::lexer`.
///
/// ## Errors
/// Returns the first [`SyntaxError`] encountered.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<Program, SyntaxError> {
    Parser::new(tokens).parse()
}

/// Parse a token stream with an explicit [`StatementPolicy`].
///
/// ## Errors
/// Returns the first [`SyntaxError`] encountered.
#[tracing::instrument(skip_all, fields(token_count = tokens.len(), policy = ?policy))]
pub fn parse_with_policy(tokens: &[Token], policy: StatementPolicy) -> Result<Program, SyntaxError> {
    Parser::with_policy(tokens, policy).parse()
}
