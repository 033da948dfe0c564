/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type, the [`StatementPolicy`] knob, and the
/// top-level `parse()` loop.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser`.

/// Stand-in for a missing trailing `Eof` token.
static EOF_TOKEN: Token = Token::eof();

/// What to do with a token that cannot start any statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatementPolicy {
    /// Report a [`SyntaxError`].
    #[default]
    Strict,
    /// Compatibility mode: consume the token, produce no node, keep parsing.
    ///
    /// Each skipped token is logged at `warn`.
    SkipUnknown,
}

/// Parser state.
///
/// ## Notes
/// - The parser is single-pass and stops at the first error.
/// - The only backtracking is the saved-cursor rewind that tells `int x;` from `int x = ...;`.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    policy: StatementPolicy,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream, using [`StatementPolicy::Strict`].
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `simplelang_syntax::lexer`.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self::with_policy(tokens, StatementPolicy::default())
    }

    /// Create a new parser with an explicit unknown-statement policy.
    pub fn with_policy(tokens: &'a [Token], policy: StatementPolicy) -> Self {
        Self { tokens, pos: 0, policy }
    }

    /// Parse the entire token stream into a [`Program`].
    ///
    /// ## Errors
    /// Returns the first [`SyntaxError`] encountered.
    pub fn parse(mut self) -> Result<Program, SyntaxError> {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            if let Some(stmt) = self.statement()? {
                statements.push(stmt);
            }
        }

        Ok(Program { statements })
    }
}
