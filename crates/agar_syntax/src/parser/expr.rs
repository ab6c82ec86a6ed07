/// Expression parsing methods.
///
/// Two forms exist:
/// - `condition`: the flat form used inside `if`/`while`/`for` headers. Operands are bare
///   numbers or identifiers joined left to right by comparison/logical operators, all at one
///   level. Arithmetic is not accepted here.
/// - `expression`: the value form used by declarations, assignments, and `return`. Arithmetic
///   follows the usual precedence (`* /` over `+ -`, parentheses recurse), and the results may
///   be joined by the same flat comparison chain.
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    /// `operand ( compareOp operand )*`
    fn condition(&mut self) -> Result<(), CompileError> {
        self.operand()?;
        while self.peek().kind.is_comparison_operator() {
            self.advance();
            self.operand()?;
        }
        Ok(())
    }

    /// `NUM | IDENT`
    fn operand(&mut self) -> Result<&'a Token, CompileError> {
        if self.peek().kind.is_operand() {
            Ok(self.advance())
        } else {
            Err(self.error_here(format!(
                "expected a number or identifier but got {}",
                self.peek().kind
            )))
        }
    }

    /// `additive ( compareOp additive )*`
    fn expression(&mut self) -> Result<(), CompileError> {
        self.additive()?;
        while self.peek().kind.is_comparison_operator() {
            self.advance();
            self.additive()?;
        }
        Ok(())
    }

    /// `term ( ('+' | '-') term )*`
    fn additive(&mut self) -> Result<(), CompileError> {
        self.term()?;
        while self.check_operator_kind(OperatorKind::Additive) {
            self.advance();
            self.term()?;
        }
        Ok(())
    }

    /// `factor ( ('*' | '/') factor )*`
    fn term(&mut self) -> Result<(), CompileError> {
        self.factor()?;
        while self.check_operator_kind(OperatorKind::Multiplicative) {
            self.advance();
            self.factor()?;
        }
        Ok(())
    }

    /// `NUM | IDENT | '(' expression ')'`
    fn factor(&mut self) -> Result<(), CompileError> {
        if self.peek().kind.is_operand() {
            self.advance();
            return Ok(());
        }

        if self.check_punct(PunctuationId::LParen) {
            self.enter_nested()?;
            self.advance();
            self.expression()?;
            self.expect_punct(PunctuationId::RParen)?;
            self.exit_nested();
            return Ok(());
        }

        Err(self.error_here(format!(
            "expected a number, identifier or '(' but got {}",
            self.peek().kind
        )))
    }
}
