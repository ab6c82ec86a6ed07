//! Provide the canonical language vocabulary for the Agar front end.
//!
//! This crate is intentionally small and dependency-free. It holds the registries that both the
//! lexer and the parser consult, so spellings and diagnostic token names live in exactly one place.
//!
//! ## Notes
//!
//! - This is a vocabulary crate: **no IO**, no global state, and no syntax-tree types.

pub mod lang;
