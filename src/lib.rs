#![forbid(unsafe_code)]
//! Agar language front end
//!
//! Agar is a small C-like teaching language. This crate answers one question about a source file:
//! is it lexically and syntactically valid? It provides the end-to-end driver
//! ([`frontend::validate`]) and the `agar` command-line tool.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a front-end bug (logic error), use `.expect("INVARIANT: reason")`
//!   with a clear explanation.

pub mod cli;
pub mod frontend;
pub mod version;

pub use frontend::diagnostics;
pub use frontend::lexer;
pub use frontend::parser;
pub use frontend::symbols;

pub use frontend::{Validation, validate};
