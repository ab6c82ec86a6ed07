/// Statement parsing methods.
///
/// This chunk validates statement forms: declarations, assignments, `if`/`agar`, `while`,
/// `for` (with its increment clause), `return`, and brace blocks.
///
/// ## Notes
/// - Dispatch is on the current token only. Once a production has consumed its first token,
///   any mismatch is fatal.
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    fn statement(&mut self) -> Result<(), CompileError> {
        self.enter_nested()?;

        match self.peek().kind {
            kind if kind.is_type_keyword() => self.declaration()?,
            TokenKind::Keyword(KeywordId::If) => self.if_stmt()?,
            TokenKind::Keyword(KeywordId::While) => self.while_stmt()?,
            TokenKind::Keyword(KeywordId::For) => self.for_stmt()?,
            TokenKind::Keyword(KeywordId::Return) => self.return_stmt()?,
            TokenKind::Punctuation(PunctuationId::LBrace) => self.block()?,
            TokenKind::Ident => self.assignment()?,
            found => return Err(self.error_here(format!("unexpected statement starting with {}", found))),
        }

        self.exit_nested();
        self.statements += 1;
        Ok(())
    }

    fn block(&mut self) -> Result<(), CompileError> {
        self.expect_punct(PunctuationId::LBrace)?;
        while !self.check_punct(PunctuationId::RBrace) && !self.is_at_end() {
            self.statement()?;
        }
        self.expect_punct(PunctuationId::RBrace)?;
        Ok(())
    }

    /// `typeKeyword IDENT '=' expression ';'`
    ///
    /// The name is registered before the initializer is read; the declared type is recorded but
    /// never compared with the initializer.
    fn declaration(&mut self) -> Result<(), CompileError> {
        let type_token = self.peek();
        let Some(type_id) = type_token.keyword_id().filter(|id| keywords::is_type(*id)) else {
            return Err(self.error_here(format!("expected type keyword but got {}", type_token.kind)));
        };
        self.advance();

        let name = self.expect(TokenKind::Ident)?;
        let declared_type = keywords::as_str(type_id);
        self.symbols
            .insert(&name.text, declared_type, name.line)
            .map_err(|err| declaration_error(err, name))?;
        tracing::debug!(name = %name.text, declared_type, line = name.line, "declared variable");

        self.expect_op(OperatorId::Assign)?;
        self.expression()?;
        self.expect_punct(PunctuationId::Semicolon)?;
        Ok(())
    }

    /// `IDENT '=' expression ';'`
    ///
    /// The target does not have to be declared.
    fn assignment(&mut self) -> Result<(), CompileError> {
        self.expect(TokenKind::Ident)?;
        self.expect_op(OperatorId::Assign)?;
        self.expression()?;
        self.expect_punct(PunctuationId::Semicolon)?;
        Ok(())
    }

    /// `('if' | 'agar') '(' condition ')' statement ('else' statement)?`
    ///
    /// An `else` followed directly by another conditional continues the chain in this loop, so a
    /// long `else agar` ladder does not add one level of nesting per link.
    fn if_stmt(&mut self) -> Result<(), CompileError> {
        loop {
            self.expect_keyword(KeywordId::If)?;
            self.expect_punct(PunctuationId::LParen)?;
            self.condition()?;
            self.expect_punct(PunctuationId::RParen)?;
            self.statement()?;

            if !self.match_keyword(KeywordId::Else) {
                return Ok(());
            }
            if !self.check_keyword(KeywordId::If) {
                return self.statement();
            }
            // The chained conditional is its own statement.
            self.statements += 1;
        }
    }

    fn while_stmt(&mut self) -> Result<(), CompileError> {
        self.expect_keyword(KeywordId::While)?;
        self.expect_punct(PunctuationId::LParen)?;
        self.condition()?;
        self.expect_punct(PunctuationId::RParen)?;
        self.statement()
    }

    /// `'for' '(' declaration condition ';' increment ')' statement`
    fn for_stmt(&mut self) -> Result<(), CompileError> {
        self.expect_keyword(KeywordId::For)?;
        self.expect_punct(PunctuationId::LParen)?;
        self.declaration()?;
        self.condition()?;
        self.expect_punct(PunctuationId::Semicolon)?;
        self.increment()?;
        self.expect_punct(PunctuationId::RParen)?;
        self.statement()
    }

    /// `IDENT ( '++' | '+' NUM | '+' '=' NUM | '=' NUM )`
    fn increment(&mut self) -> Result<(), CompileError> {
        let target = self.peek();
        if target.kind != TokenKind::Ident {
            return Err(self.error_here(format!("expected identifier for increment but got {}", target.kind)));
        }
        self.advance();

        let op = self.peek();
        match op.kind {
            TokenKind::Operator(OperatorId::PlusPlus) => {
                self.advance();
            }
            TokenKind::Operator(OperatorId::Plus) => {
                self.advance();
                if self.match_op(OperatorId::Assign) {
                    self.increment_amount("expected number after '+=' operator")?;
                } else {
                    let amount = self.increment_amount("expected number after increment operator")?;
                    // `i + 1` never assigns anything; it is kept for compatibility with older sources.
                    tracing::warn!(
                        line = op.line,
                        "increment `{0} + {1}` does not assign; read as `{0} += {1}`",
                        target.text,
                        amount.text
                    );
                }
            }
            TokenKind::Operator(OperatorId::Assign) => {
                self.advance();
                self.increment_amount("expected number after '=' in increment")?;
            }
            found => {
                return Err(self.error_here(format!("expected increment operator but got {}", found)));
            }
        }
        Ok(())
    }

    fn increment_amount(&mut self, message: &str) -> Result<&'a Token, CompileError> {
        if self.check(TokenKind::Num) {
            Ok(self.advance())
        } else {
            Err(self.error_here(format!("{} but got {}", message, self.peek().kind)))
        }
    }

    /// `'return' expression ';'`
    fn return_stmt(&mut self) -> Result<(), CompileError> {
        self.expect_keyword(KeywordId::Return)?;
        self.expression()?;
        self.expect_punct(PunctuationId::Semicolon)?;
        Ok(())
    }
}
