/// Validate a token stream against the Agar grammar.
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `tokens`: Token stream produced by `agar_syntax::lexer`.
///
/// ## Errors
/// Returns the first syntax error (including duplicate declarations).
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<Validation, CompileError> {
    let validation = Parser::new(tokens).parse()?;
    tracing::debug!(
        statements = validation.statements,
        symbols = validation.symbols.len(),
        "validated token stream"
    );
    Ok(validation)
}
