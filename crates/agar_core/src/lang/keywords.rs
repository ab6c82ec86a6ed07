//! Define the reserved keyword vocabulary for the Agar language.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records canonical spellings, aliases, categories, and the token names printed in
//! diagnostics.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and whole-word.
//! - `agar` is the localized spelling of `if`. It is registered as an alias, so both spellings resolve to
//!   [`KeywordId::If`] and the parser needs a single production for the conditional.
//!
//! ## Examples
//! ```rust
//! use agar_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("while"), Some(KeywordId::While));
//! assert_eq!(keywords::from_str("agar"), Some(KeywordId::If));
//! assert_eq!(keywords::from_str("While"), None);
//! assert_eq!(keywords::token_name(KeywordId::Int), "T_INT");
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Type keywords (start a declaration)
    Int,
    Float,
    Double,
    String,
    Bool,
    Char,

    // Control flow / statements
    If,
    Else,
    Return,
    While,
    For,
}

/// High-level grouping used by the parser to dispatch statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// Declared type of a variable (`int`, `float`, ...).
    Type,
    /// Statement-introducing keywords.
    ControlFlow,
}

/// Metadata for a keyword.
///
/// ## Notes
/// - `canonical` is the preferred spelling for docs and declared-type names.
/// - `aliases` are additional spellings accepted by the lexer.
/// - `token_name` is the stable `T_*` name used in "expected X but got Y" diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub category: KeywordCategory,
    pub token_name: &'static str,
}

/// Registry of all keywords.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Types
    info(KeywordId::Int, "int", &[], KeywordCategory::Type, "T_INT"),
    info(KeywordId::Float, "float", &[], KeywordCategory::Type, "T_FLOAT"),
    info(KeywordId::Double, "double", &[], KeywordCategory::Type, "T_DOUBLE"),
    info(KeywordId::String, "string", &[], KeywordCategory::Type, "T_STRING"),
    info(KeywordId::Bool, "bool", &[], KeywordCategory::Type, "T_BOOL"),
    info(KeywordId::Char, "char", &[], KeywordCategory::Type, "T_CHAR"),
    // Control flow
    info(KeywordId::If, "if", &["agar"], KeywordCategory::ControlFlow, "T_IF"),
    info(KeywordId::Else, "else", &[], KeywordCategory::ControlFlow, "T_ELSE"),
    info(KeywordId::Return, "return", &[], KeywordCategory::ControlFlow, "T_RETURN"),
    info(KeywordId::While, "while", &[], KeywordCategory::ControlFlow, "T_WHILE"),
    info(KeywordId::For, "for", &[], KeywordCategory::ControlFlow, "T_FOR"),
];

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Accepted alias spellings.
pub fn aliases(id: KeywordId) -> &'static [&'static str] {
    info_for(id).aliases
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Diagnostic token name (`T_INT`, `T_IF`, ...).
pub fn token_name(id: KeywordId) -> &'static str {
    info_for(id).token_name
}

/// Return `true` if the keyword names a declarable type.
pub fn is_type(id: KeywordId) -> bool {
    category(id) == KeywordCategory::Type
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling (canonical or alias).
///
/// ## Returns
/// - `Some(KeywordId)` if the whole word matches this registry.
/// - `None` otherwise (the word is an identifier).
pub fn from_str(s: &str) -> Option<KeywordId> {
    if let Some(k) = KEYWORDS.iter().find(|k| k.canonical == s) {
        return Some(k.id);
    }
    KEYWORDS
        .iter()
        .find(|k| {
            let aliases: &[&str] = k.aliases;
            aliases.contains(&s)
        })
        .map(|k| k.id)
}

const fn info(
    id: KeywordId,
    canonical: &'static str,
    aliases: &'static [&'static str],
    category: KeywordCategory,
    token_name: &'static str,
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        aliases,
        category,
        token_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localized_conditional_is_alias_of_if() {
        assert_eq!(from_str("agar"), Some(KeywordId::If));
        assert_eq!(from_str("if"), Some(KeywordId::If));
        assert_eq!(aliases(KeywordId::If), &["agar"]);
    }

    #[test]
    fn test_matching_is_whole_word() {
        assert_eq!(from_str("integer"), None);
        assert_eq!(from_str("in"), None);
        assert_eq!(from_str("agarwal"), None);
        assert_eq!(from_str("INT"), None);
    }

    #[test]
    fn test_type_keywords() {
        let types: Vec<_> = KEYWORDS.iter().filter(|k| is_type(k.id)).map(|k| k.canonical).collect();
        assert_eq!(types, vec!["int", "float", "double", "string", "bool", "char"]);
        assert!(!is_type(KeywordId::Return));
    }
}
