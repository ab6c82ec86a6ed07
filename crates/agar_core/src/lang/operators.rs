//! Operator vocabulary.
//!
//! This module defines the canonical operator set together with the metadata the parser needs to pick a production:
//! which operators join a flat comparison chain, which are additive, and which are multiplicative.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - `+=` is deliberately absent: the lexer emits `+` followed by `=`, and the `for` increment clause recognizes that
//!   pair itself.
//!
//! ## Examples
//! ```rust
//! use agar_core::lang::operators::{self, OperatorId, OperatorKind};
//!
//! assert_eq!(operators::from_str("&&"), Some(OperatorId::AndAnd));
//! assert_eq!(operators::kind(OperatorId::AndAnd), OperatorKind::Comparison);
//! assert_eq!(operators::token_name(OperatorId::Assign), "T_ASSIGN");
//! ```

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,

    // Comparison / logical (flat chain, no precedence among them)
    EqEq,
    NotEq,
    Lt,
    Gt,
    AndAnd,
    OrOr,

    // Assignment / mutation
    Assign,
    PlusPlus,
}

/// Grammar role of an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    /// `+` and `-`.
    Additive,
    /// `*` and `/`.
    Multiplicative,
    /// `==`, `!=`, `<`, `>`, `&&`, `||`: all share one left-to-right level.
    Comparison,
    /// `=`.
    Assignment,
    /// `++`.
    Increment,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub kind: OperatorKind,
    pub token_name: &'static str,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    info(OperatorId::Plus, "+", OperatorKind::Additive, "T_PLUS"),
    info(OperatorId::Minus, "-", OperatorKind::Additive, "T_MINUS"),
    info(OperatorId::Star, "*", OperatorKind::Multiplicative, "T_MUL"),
    info(OperatorId::Slash, "/", OperatorKind::Multiplicative, "T_DIV"),
    info(OperatorId::EqEq, "==", OperatorKind::Comparison, "T_EQ"),
    info(OperatorId::NotEq, "!=", OperatorKind::Comparison, "T_NEQ"),
    info(OperatorId::Lt, "<", OperatorKind::Comparison, "T_LT"),
    info(OperatorId::Gt, ">", OperatorKind::Comparison, "T_GT"),
    info(OperatorId::AndAnd, "&&", OperatorKind::Comparison, "T_AND"),
    info(OperatorId::OrOr, "||", OperatorKind::Comparison, "T_OR"),
    info(OperatorId::Assign, "=", OperatorKind::Assignment, "T_ASSIGN"),
    info(OperatorId::PlusPlus, "++", OperatorKind::Increment, "T_INCREMENT"),
];

/// Return the spelling for an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Return the grammar role for an operator.
pub fn kind(id: OperatorId) -> OperatorKind {
    info_for(id).kind
}

/// Return the diagnostic token name for an operator.
pub fn token_name(id: OperatorId) -> &'static str {
    info_for(id).token_name
}

/// Return `true` if the operator joins a flat comparison chain.
pub fn is_comparison(id: OperatorId) -> bool {
    kind(id) == OperatorKind::Comparison
}

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Resolve an operator spelling to its identifier.
pub fn from_str(s: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == s).map(|o| o.id)
}

const fn info(id: OperatorId, spelling: &'static str, kind: OperatorKind, token_name: &'static str) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        kind,
        token_name,
    }
}
