//! Token types for the Agar lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for operators
//! - `Punctuation(PunctuationId)` for punctuation tokens
//!
//! ## Notes
//! - Kinds carry no payload; the exact lexeme lives in [`Token::text`]. This keeps `TokenKind` `Copy` and lets the
//!   parser compare kinds directly in `expect`.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use std::fmt;

use crate::span::Span;
use agar_core::lang::keywords::{self, KeywordId};
use agar_core::lang::operators::{self, OperatorId};
use agar_core::lang::punctuation::{self, PunctuationId};

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Ident,
    Num,

    // ========== Special ==========
    Eof,
}

impl TokenKind {
    /// Stable diagnostic name (`T_INT`, `T_ID`, `T_EOF`, ...).
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Keyword(id) => keywords::token_name(*id),
            TokenKind::Operator(id) => operators::token_name(*id),
            TokenKind::Punctuation(id) => punctuation::token_name(*id),
            TokenKind::Ident => "T_ID",
            TokenKind::Num => "T_NUM",
            TokenKind::Eof => "T_EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexeme.
///
/// Tokens are produced once, in source order, and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// The exact lexeme (empty for [`TokenKind::Eof`]).
    pub text: String,
    /// 1-based line on which the lexeme starts.
    pub line: usize,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            span,
        }
    }
}

/// Resolve a scanned word to a keyword id, if reserved.
pub fn keyword_id(word: &str) -> Option<KeywordId> {
    keywords::from_str(word)
}
