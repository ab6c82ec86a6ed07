/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type, the [`Validation`] it produces, and its top-level
/// `parse()` entrypoint.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.

/// Deepest statement/parenthesis nesting accepted before the parser gives up instead of
/// exhausting the native stack.
const MAX_NESTING_DEPTH: usize = 512;

/// Outcome of a successful validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    /// Number of statement productions completed, nested ones included.
    pub statements: usize,
    /// Every declaration seen during the run.
    pub symbols: SymbolTable,
}

/// Parser state.
///
/// ## Notes
/// - The parser is single-pass and fail-fast: the first violation ends the run. There is no
///   backtracking and no resynchronization.
/// - The cursor (`pos`) only moves forward, one token per accepted token.
/// - The symbol table is owned by this parser; nothing is shared between runs.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    symbols: SymbolTable,
    statements: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `agar_syntax::lexer`.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            symbols: SymbolTable::new(),
            statements: 0,
            depth: 0,
        }
    }

    /// Validate the entire token stream.
    ///
    /// ## Errors
    /// Returns the first [`CompileError`] met. A stream that is empty or does not end with
    /// exactly one trailing `Eof` token is rejected up front.
    pub fn parse(mut self) -> Result<Validation, CompileError> {
        self.check_terminated()?;

        while !self.is_at_end() {
            self.statement()?;
        }

        Ok(Validation {
            statements: self.statements,
            symbols: self.symbols,
        })
    }

    fn check_terminated(&self) -> Result<(), CompileError> {
        let Some(last) = self.tokens.last() else {
            return Err(CompileError::syntax(
                "token stream is empty; expected a trailing T_EOF",
                1,
                Default::default(),
            ));
        };
        if last.kind != TokenKind::Eof {
            return Err(CompileError::syntax(
                format!("token stream ends with {} instead of T_EOF", last.kind),
                last.line,
                last.span,
            ));
        }
        if let Some(stray) = self.tokens[..self.tokens.len() - 1]
            .iter()
            .find(|t| t.kind == TokenKind::Eof)
        {
            return Err(CompileError::syntax(
                "T_EOF appears before the end of the token stream",
                stray.line,
                stray.span,
            ));
        }
        Ok(())
    }
}
