//! Lexer for the Agar programming language
//!
//! Handles tokenization including:
//! - Keywords (`int`, `float`, ..., `if`/`agar`, `else`, `return`, `while`, `for`)
//! - Identifiers and numeric literals
//! - Operators and punctuation, including the two-character forms `++ == != && ||`
//! - `//` line comments and line counting
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `numbers` - Numeric literal scanning
//!
//! ## Notes
//! - The lexer is fail-fast: the first unrecognized construct is returned as a [`CompileError`] and nothing after it
//!   is scanned.
//! - It never looks more than one character past the current one, and that lookahead is bounds-checked (an operator
//!   at the very end of the input simply sees "no next character").

mod numbers;
pub mod tokens;

pub use tokens::{Token, TokenKind, keyword_id};

use crate::diagnostics::CompileError;
use crate::span::Span;
use agar_core::lang::operators::OperatorId;
use agar_core::lang::punctuation::PunctuationId;

// ============================================================================
// LEXER STATE
// ----------------------------------------------------------------------------
// [Between tokens] → skip whitespace (count '\n') → [Token start]
//                                                       ↓
//                        '//' → skip to end of line → [Between tokens]
//                        digit → number  |  letter → word  |  punct/op → 1 or 2 chars
//                        anything else → error (stop)
// ============================================================================

/// Lexer for Agar source code.
///
/// Converts source text into a token sequence that always ends with a single `Eof` token.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    /// 1-based line of the next character to be scanned.
    line: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            line: 1,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// Returns the token sequence on success, or the first lexical error.
    /// The token sequence always ends with exactly one `Eof` token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, CompileError> {
        while !self.is_at_end() {
            self.scan_token()?;
        }

        self.tokens.push(Token::new(
            TokenKind::Eof,
            "",
            self.line,
            Span::new(self.current_pos, self.current_pos),
        ));

        Ok(self.tokens)
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.current_pos..].chars();
        iter.next(); // skip current
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            if c == '\n' {
                self.line += 1;
            }
            Some(c)
        } else {
            None
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) -> Result<(), CompileError> {
        // Skip whitespace, including newlines (line counting happens in `advance`)
        while let Some(c) = self.peek() {
            if c.is_ascii_whitespace() {
                self.advance();
            } else {
                break;
            }
        }

        // Line comments
        if self.peek() == Some('/') && self.peek_next() == Some('/') {
            while let Some(c) = self.peek() {
                if c == '\n' {
                    break;
                }
                self.advance();
            }
            return Ok(());
        }

        let start = self.current_pos;
        let line = self.line;

        let Some(c) = self.advance() else {
            return Ok(());
        };

        match c {
            // Single-character operators and punctuation
            '-' => self.add_op(OperatorId::Minus, start, line),
            '*' => self.add_op(OperatorId::Star, start, line),
            '/' => self.add_op(OperatorId::Slash, start, line),
            '>' => self.add_op(OperatorId::Gt, start, line),
            '<' => self.add_op(OperatorId::Lt, start, line),
            '(' => self.add_punct(PunctuationId::LParen, start, line),
            ')' => self.add_punct(PunctuationId::RParen, start, line),
            '{' => self.add_punct(PunctuationId::LBrace, start, line),
            '}' => self.add_punct(PunctuationId::RBrace, start, line),
            ';' => self.add_punct(PunctuationId::Semicolon, start, line),

            // One character of lookahead, with a single-character fallback
            '+' => self.operator(start, line, OperatorId::Plus, &[('+', OperatorId::PlusPlus)]),
            '=' => self.operator(start, line, OperatorId::Assign, &[('=', OperatorId::EqEq)]),

            // One character of lookahead, no fallback
            '!' => self.required_pair(start, line, c, '=', OperatorId::NotEq)?,
            '&' => self.required_pair(start, line, c, '&', OperatorId::AndAnd)?,
            '|' => self.required_pair(start, line, c, '|', OperatorId::OrOr)?,

            // Numbers
            '0'..='9' => self.scan_number(start, line)?,

            // Identifiers and keywords
            _ if is_word_start(c) => self.scan_word(start, line),

            _ => {
                let mut err = CompileError::lexical(
                    format!("Unexpected character: {}", c),
                    line,
                    Span::new(start, self.current_pos),
                );
                if c == '_' {
                    err = err.with_help("identifiers may only contain ASCII letters and digits");
                }
                return Err(err);
            }
        }

        Ok(())
    }

    // ========================================================================
    // Operator helpers
    // ========================================================================

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn add_token(&mut self, kind: TokenKind, start: usize, line: usize) {
        let text = &self.source[start..self.current_pos];
        self.tokens
            .push(Token::new(kind, text, line, Span::new(start, self.current_pos)));
    }

    fn add_op(&mut self, id: OperatorId, start: usize, line: usize) {
        self.add_token(TokenKind::Operator(id), start, line);
    }

    fn add_punct(&mut self, id: PunctuationId, start: usize, line: usize) {
        self.add_token(TokenKind::Punctuation(id), start, line);
    }

    /// Try to match compound operator, fallback to simple.
    fn operator(&mut self, start: usize, line: usize, simple: OperatorId, compounds: &[(char, OperatorId)]) {
        for (c, id) in compounds {
            if self.match_char(*c) {
                self.add_op(*id, start, line);
                return;
            }
        }
        self.add_op(simple, start, line);
    }

    /// Match a two-character operator whose first character is meaningless on its own (`!=`, `&&`, `||`).
    fn required_pair(
        &mut self,
        start: usize,
        line: usize,
        first: char,
        second: char,
        id: OperatorId,
    ) -> Result<(), CompileError> {
        if self.match_char(second) {
            self.add_op(id, start, line);
            Ok(())
        } else {
            Err(CompileError::lexical(
                format!("Unexpected character: {}", first),
                line,
                Span::new(start, self.current_pos),
            )
            .with_help(format!("did you mean '{}{}'?", first, second)))
        }
    }

    // ========================================================================
    // Words
    // ========================================================================

    fn scan_word(&mut self, start: usize, line: usize) {
        while let Some(c) = self.peek() {
            if is_word_continue(c) {
                self.advance();
            } else {
                break;
            }
        }

        let word = &self.source[start..self.current_pos];
        let kind = match keyword_id(word) {
            Some(id) => TokenKind::Keyword(id),
            None => TokenKind::Ident,
        };
        self.add_token(kind, start, line);
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start a word (ASCII letters only).
fn is_word_start(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Check if a character can continue a word (ASCII letters and digits, no underscore).
fn is_word_continue(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, CompileError> {
    let tokens = Lexer::new(source).tokenize()?;
    tracing::debug!(token_count = tokens.len(), "lexed source");
    Ok(tokens)
}

// ============================================================================
// TESTS
// ============================================================================
