#![no_main]

use agar::frontend::{lexer, parser};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Only UTF-8 input reaches the front end
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(tokens) = lexer::lex(s) {
            // Any lexed stream must parse to Ok or a located error, never panic
            if let Err(err) = parser::parse(&tokens) {
                assert!(err.line >= 1);
                assert!(err.span.end <= s.len());
            }
        }
    }
});
