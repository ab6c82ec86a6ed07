//! Agar language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: reserved keywords, operators,
//! and punctuation.
//!
//! Callers work with **stable IDs** (e.g. `KeywordId`, `OperatorId`) and look up spellings and
//! metadata via registry tables instead of comparing strings.
//!
//! ## Notes
//! - Registries are **pure**: no IO, no side effects.
//! - The lexer/parser enforce syntax; registries provide spellings, categories, and the `T_*` token names used in
//!   diagnostics.
//!
//! ## Examples
//! ```rust
//! use agar_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("agar"), Some(KeywordId::If));
//! assert_eq!(keywords::as_str(KeywordId::If), "if");
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;
