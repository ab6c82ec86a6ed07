//! Number scanning for the Agar lexer
//!
//! A numeric literal is a run of digits with at most one `.` anywhere after the first digit (`12`, `1.2`, `3.`).

use super::Lexer;
use super::tokens::TokenKind;
use crate::diagnostics::CompileError;
use crate::span::Span;

impl<'a> Lexer<'a> {
    /// Scan the rest of a numeric literal whose first digit has already been consumed.
    pub(super) fn scan_number(&mut self, start: usize, line: usize) -> Result<(), CompileError> {
        let mut has_decimal = false;

        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.advance();
            } else if c == '.' {
                if has_decimal {
                    let pos = self.current_pos;
                    return Err(CompileError::lexical(
                        format!("unexpected '.' in number at position {}", pos),
                        self.line,
                        Span::new(pos, pos + 1),
                    )
                    .with_help("a numeric literal may contain at most one '.'"));
                }
                has_decimal = true;
                self.advance();
            } else {
                break;
            }
        }

        self.add_token(TokenKind::Num, start, line);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::{TokenKind, lex};
    use crate::span::Span;

    #[test]
    fn test_integer_and_decimal_literals() {
        for literal in ["12", "1.2", "0", "3.", "007"] {
            let tokens = lex(literal).unwrap();
            assert_eq!(tokens[0].kind, TokenKind::Num);
            assert_eq!(tokens[0].text, literal);
            assert_eq!(tokens.len(), 2);
        }
    }

    #[test]
    fn test_second_decimal_point_is_rejected_at_its_position() {
        let err = lex("1.2.3").unwrap_err();
        assert_eq!(err.message, "unexpected '.' in number at position 3");
        assert_eq!(err.span, Span::new(3, 4));
        assert_eq!(err.line, 1);

        let err = lex("int x = 10;\nfloat y = 4.5.6;").unwrap_err();
        assert_eq!(err.message, "unexpected '.' in number at position 25");
        assert_eq!(err.line, 2);
    }

    #[test]
    fn test_number_followed_by_word() {
        let tokens = lex("12abc").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Num);
        assert_eq!(tokens[0].text, "12");
        assert_eq!(tokens[1].kind, TokenKind::Ident);
        assert_eq!(tokens[1].text, "abc");
    }

    #[test]
    fn test_leading_dot_is_not_a_number() {
        let err = lex(".5").unwrap_err();
        assert_eq!(err.message, "Unexpected character: .");
    }
}
