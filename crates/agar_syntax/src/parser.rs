//! Validating parser for the Agar programming language
//!
//! Consumes a token sequence with a single token of lookahead and checks it against the Agar grammar by recursive
//! descent. Nothing is retained except the flat symbol table: validation is a traversal with structural checks.
//!
//! ```text
//! program      := statement* EOF
//! statement    := declaration | assignment | ifStmt | whileStmt | forStmt | returnStmt | block
//! block        := '{' statement* '}'
//! declaration  := typeKeyword IDENT '=' expression ';'
//! assignment   := IDENT '=' expression ';'
//! ifStmt       := ('if' | 'agar') '(' condition ')' statement ('else' statement)?
//! whileStmt    := 'while' '(' condition ')' statement
//! forStmt      := 'for' '(' declaration condition ';' increment ')' statement
//! increment    := IDENT ( '++' | '+' NUM | '+' '=' NUM | '=' NUM )
//! returnStmt   := 'return' expression ';'
//! condition    := operand ( compareOp operand )*
//! expression   := additive ( compareOp additive )*
//! additive     := term ( ('+' | '-') term )*
//! term         := factor ( ('*' | '/') factor )*
//! factor       := NUM | IDENT | '(' expression ')'
//! operand      := NUM | IDENT
//! compareOp    := '==' | '!=' | '<' | '>' | '&&' | '||'
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use agar_syntax::{lexer, parser};
//!
//! let source = "int a = 5; int b = a + 10; agar (b > 10) { return b; } else { return 0; }";
//! let tokens = lexer::lex(source).unwrap();
//! let validation = parser::parse(&tokens).unwrap();
//! assert_eq!(validation.symbols.len(), 2);
//! ```

use crate::diagnostics::CompileError;
use crate::lexer::{Token, TokenKind};
use crate::symbols::{SymbolError, SymbolTable};
use agar_core::lang::keywords::{self, KeywordId};
use agar_core::lang::operators::{self, OperatorId, OperatorKind};
use agar_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
