//! Agar Front End
//!
//! This module wires the syntax components together:
//! - `lexer`: tokenization of source code
//! - `parser`: grammar validation of the token stream
//! - `symbols`: flat symbol table for the duplicate-declaration check
//! - `diagnostics`: the error type and report rendering
//!
//! ## Notes
//! - Every [`validate`] call builds its own lexer, parser and symbol table. Nothing is shared
//!   between runs, so independent sources can be validated on separate threads.

// Syntax components are provided by the shared agar_syntax crate.
pub use agar_syntax::{diagnostics, lexer, parser, span, symbols};

pub use agar_syntax::diagnostics::CompileError;
pub use agar_syntax::parser::Validation;

/// Lex and validate `source`.
///
/// ## Errors
/// Returns the first lexical or syntax error. Lexing finishes before parsing starts, so a
/// lexical error anywhere in the file wins over a syntax error earlier in it.
///
/// ## Examples
/// ```rust
/// let validation = agar::frontend::validate("int a = 5; agar (a > 1) { return a; }").unwrap();
/// assert_eq!(validation.statements, 3);
///
/// let err = agar::frontend::validate("int a; a = 5;").unwrap_err();
/// assert_eq!(err.to_string(), "syntax error: expected T_ASSIGN but got T_SEMICOLON at line 1");
/// ```
pub fn validate(source: &str) -> Result<Validation, CompileError> {
    let tokens = lexer::lex(source)?;
    parser::parse(&tokens)
}

/// Validate several independent sources on scoped threads.
///
/// Results come back in input order.
pub fn validate_many<S>(sources: &[S]) -> Vec<Result<Validation, CompileError>>
where
    S: AsRef<str> + Sync,
{
    std::thread::scope(|scope| {
        let handles: Vec<_> = sources
            .iter()
            .map(|source| scope.spawn(move || validate(source.as_ref())))
            .collect();
        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(result) => result,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    })
}
