/// Token-stream helpers.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `advance`)
/// - Matching / expecting keywords, operators, and punctuation
/// - Building positioned errors
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the current token is [`TokenKind::Eof`].
    fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    /// Return the current token without consuming it.
    ///
    /// `check_terminated` guarantees the stream ends with `Eof` and `advance` never moves past it,
    /// so the cursor is always in bounds.
    fn peek(&self) -> &'a Token {
        &self.tokens[self.pos]
    }

    /// Consume the current token and return it. The cursor stays on `Eof` once it gets there.
    fn advance(&mut self) -> &'a Token {
        let token = self.peek();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Return `true` if the current token has exactly this kind.
    fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().kind.is_punctuation(id)
    }

    /// Return `true` if the current token is an operator playing the given grammar role.
    fn check_operator_kind(&self, kind: OperatorKind) -> bool {
        self.peek().operator_id().map(operators::kind) == Some(kind)
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
        if self.peek().kind.is_operator(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of exactly `kind`, or fail with `expected <kind> but got <found>`.
    ///
    /// Every fixed token in the grammar goes through here.
    fn expect(&mut self, kind: TokenKind) -> Result<&'a Token, CompileError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error_here(format!("expected {} but got {}", kind, self.peek().kind)))
        }
    }

    fn expect_keyword(&mut self, id: KeywordId) -> Result<&'a Token, CompileError> {
        self.expect(TokenKind::Keyword(id))
    }

    fn expect_op(&mut self, id: OperatorId) -> Result<&'a Token, CompileError> {
        self.expect(TokenKind::Operator(id))
    }

    fn expect_punct(&mut self, id: PunctuationId) -> Result<&'a Token, CompileError> {
        self.expect(TokenKind::Punctuation(id))
    }

    /// Syntax error positioned at the current token.
    fn error_here(&self, message: impl Into<String>) -> CompileError {
        error_at(self.peek(), message)
    }

    /// Track one level of statement/parenthesis nesting.
    fn enter_nested(&mut self) -> Result<(), CompileError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error_here(format!("nesting deeper than {} levels", MAX_NESTING_DEPTH)));
        }
        self.depth += 1;
        Ok(())
    }

    fn exit_nested(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

/// Syntax error positioned at `token`.
fn error_at(token: &Token, message: impl Into<String>) -> CompileError {
    CompileError::syntax(message, token.line, token.span)
}

/// Convert a symbol-table rejection into a diagnostic positioned at the offending identifier.
fn declaration_error(err: SymbolError, name: &Token) -> CompileError {
    let help = match &err {
        SymbolError::AlreadyDeclared { first_line, .. } => format!("first declared at line {}", first_line),
    };
    error_at(name, err.to_string()).with_help(help)
}
