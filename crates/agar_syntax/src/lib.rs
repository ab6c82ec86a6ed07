//! Shared syntax front end for the Agar language: lexer, symbol table, validating parser, diagnostics.
//!
//! ## Notes
//! - Validation is a pure traversal: the parser checks structure and never builds a syntax tree.
//! - The only semantic check is duplicate declaration, backed by the flat [`symbols::SymbolTable`].
//! - Every stage is fail-fast and returns the first [`diagnostics::CompileError`] it meets.
//! - Vocabulary identity (keywords/operators/punctuation) comes from `agar_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use agar_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("int a = 5; agar (a > 1) { a = a * 2; }").unwrap();
//! let validation = parser::parse(&tokens).unwrap();
//! assert_eq!(validation.symbols.type_of("a"), Some("int"));
//! ```

pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod symbols;
pub mod token_helpers;
