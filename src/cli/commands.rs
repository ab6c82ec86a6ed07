//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.
//!
//! A source file that fails validation is not a CLI error: the diagnostic is the program's
//! normal output, printed to stdout, and the command returns [`ExitCode::FAILURE`].

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::frontend::{self, diagnostics, lexer};
use crate::lexer::Token;

use super::{CliError, CliResult, ExitCode};

/// Printed to stdout when a file validates.
pub const SUCCESS_MESSAGE: &str = "Compilation successful!";

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected before reading.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read a source file with a size check.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error, or not UTF-8)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(path: &Path) -> CliResult<String> {
    let display = path.display();
    let metadata =
        fs::metadata(path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", display, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            display,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", display, e)))
}

/// Validate a file and print the outcome.
///
/// With `report`, a failing run also renders the source snippet to stderr.
pub fn check_file(path: &Path, report: bool) -> CliResult<ExitCode> {
    let source = read_source(path)?;

    match frontend::validate(&source) {
        Ok(validation) => {
            tracing::info!(
                file = %path.display(),
                statements = validation.statements,
                symbols = validation.symbols.len(),
                "validation passed"
            );
            println!("{}", SUCCESS_MESSAGE);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            println!("{}", err);
            if report {
                eprint!("{}", diagnostics::render_report(&path.to_string_lossy(), &source, &err));
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Lex a file and print its tokens.
pub fn lex_file(path: &Path) -> CliResult<ExitCode> {
    let source = read_source(path)?;

    match lexer::lex(&source) {
        Ok(tokens) => {
            print!("{}", format_tokens(&tokens));
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            println!("{}", err);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Render a token sequence, one `line  T_KIND  'text'` row per token.
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let _ = writeln!(out, "{:<4}  {:<12} '{}'", token.line, token.kind.name(), token.text);
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tokens_layout() {
        let tokens = lexer::lex("int a = 5;\nreturn a;").unwrap();
        let dump = format_tokens(&tokens);
        let rows: Vec<&str> = dump.lines().collect();
        assert_eq!(rows.len(), tokens.len());
        assert_eq!(rows[0], "1     T_INT        'int'");
        assert_eq!(rows[5], "2     T_RETURN     'return'");
        assert_eq!(rows.last().copied(), Some("2     T_EOF        ''"));
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source(Path::new("no/such/file.agar")).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.starts_with("Cannot access file 'no/such/file.agar'"), "{}", err.message);
    }
}
