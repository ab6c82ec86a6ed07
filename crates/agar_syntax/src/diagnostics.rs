//! Diagnostics and error reporting for Agar.
//!
//! Every stage of the front end is fail-fast: it returns the first [`CompileError`] it meets and stops. The error
//! carries enough location information for both output styles the CLI offers:
//! - the one-line form (`Display`), e.g. `syntax error: expected T_ASSIGN but got T_SEMICOLON at line 1`;
//! - a graphical report with a source snippet, rendered by [`render_report`] through `miette`.

use std::fmt;

use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme, NamedSource};
use thiserror::Error;

use crate::span::Span;

/// A front-end error with location information.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{kind}: {message} at line {line}")]
pub struct CompileError {
    pub kind: ErrorKind,
    pub message: String,
    /// 1-based source line.
    pub line: usize,
    #[label("here")]
    pub span: Span,
    #[help]
    pub help: Option<String>,
}

impl CompileError {
    pub fn lexical(message: impl Into<String>, line: usize, span: Span) -> Self {
        Self {
            kind: ErrorKind::Lexical,
            message: message.into(),
            line,
            span,
            help: None,
        }
    }

    pub fn syntax(message: impl Into<String>, line: usize, span: Span) -> Self {
        Self {
            kind: ErrorKind::Syntax,
            message: message.into(),
            line,
            span,
            help: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// The two error categories the front end can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unrecognized character, malformed number, or incomplete multi-character operator.
    Lexical,
    /// Token sequence does not match the grammar, or a duplicate declaration.
    Syntax,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "lexical error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
        }
    }
}

/// A [`CompileError`] bundled with the source it points into, for graphical rendering.
#[derive(Debug, Error, Diagnostic)]
#[error("{kind}: {message}")]
struct SourceReport {
    kind: ErrorKind,
    message: String,
    #[source_code]
    source_code: NamedSource<String>,
    #[label("here")]
    span: Span,
    #[help]
    help: Option<String>,
}

/// Render `error` as a graphical report with a snippet of `source`.
///
/// The output is plain text (no ANSI colors), suitable for a terminal or a log file.
pub fn render_report(file_name: &str, source: &str, error: &CompileError) -> String {
    let report = SourceReport {
        kind: error.kind,
        message: error.message.clone(),
        source_code: NamedSource::new(file_name, source.to_string()),
        span: clamp_span(error.span, source.len()),
        help: error.help.clone(),
    };

    let mut out = String::new();
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
    if handler.render_report(&mut out, &report).is_err() {
        // Snippet could not be drawn; the one-line form still carries the line number.
        return error.to_string();
    }
    out
}

fn clamp_span(span: Span, len: usize) -> Span {
    let start = span.start.min(len);
    Span::new(start, span.end.clamp(start, len))
}
