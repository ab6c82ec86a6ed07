//! Punctuation vocabulary.
//!
//! This module defines the non-operator punctuation used by the lexer/parser: parentheses, braces, and the statement
//! terminator.
//!
//! ## Examples
//! ```rust
//! use agar_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str(";"), Some(PunctuationId::Semicolon));
//! assert_eq!(punctuation::token_name(PunctuationId::RBrace), "T_RBRACE");
//! ```

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    LParen,
    RParen,
    LBrace,
    RBrace,
    Semicolon,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub token_name: &'static str,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    info(PunctuationId::LParen, "(", "T_LPAREN"),
    info(PunctuationId::RParen, ")", "T_RPAREN"),
    info(PunctuationId::LBrace, "{", "T_LBRACE"),
    info(PunctuationId::RBrace, "}", "T_RBRACE"),
    info(PunctuationId::Semicolon, ";", "T_SEMICOLON"),
];

/// Return the canonical spelling for a punctuation token.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Return the diagnostic token name for a punctuation token.
pub fn token_name(id: PunctuationId) -> &'static str {
    info_for(id).token_name
}

/// Return the full metadata entry for a punctuation token.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .expect("punctuation info missing")
}

/// Resolve a punctuation spelling to its identifier.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

const fn info(id: PunctuationId, canonical: &'static str, token_name: &'static str) -> PunctuationInfo {
    PunctuationInfo {
        id,
        canonical,
        token_name,
    }
}
