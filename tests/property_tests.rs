//! Property-based tests for the Agar front end
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use agar::frontend::{self, lexer};
use agar::lexer::TokenKind;
use agar_core::lang::keywords;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Valid Agar identifiers: ASCII letters then alphanumerics, never a keyword spelling.
fn ident_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9]{0,8}".prop_filter("Not a keyword", |s| keywords::from_str(s).is_none())
}

fn type_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["int", "float", "double", "string", "bool", "char"])
}

fn number_strategy() -> impl Strategy<Value = String> {
    prop_oneof!["[0-9]{1,6}", "[0-9]{1,3}\\.[0-9]{0,3}"]
}

/// Whitespace and `//` comments only.
fn trivia_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just(" ".to_string()),
            Just("\t".to_string()),
            Just("\r\n".to_string()),
            Just("\n".to_string()),
            "//[ -~]{0,20}\n",
        ],
        0..20,
    )
    .prop_map(|parts| parts.concat())
}

/// A sequence of declarations with pairwise distinct names.
fn declarations_strategy() -> impl Strategy<Value = Vec<(&'static str, String, String)>> {
    prop::collection::vec((type_strategy(), ident_strategy(), number_strategy()), 1..12).prop_map(|decls| {
        let mut seen = std::collections::HashSet::new();
        decls.into_iter().filter(|(_, name, _)| seen.insert(name.clone())).collect()
    })
}

fn render(decls: &[(&str, String, String)]) -> String {
    decls
        .iter()
        .map(|(ty, name, value)| format!("{} {} = {};\n", ty, name, value))
        .collect()
}

// =============================================================================
// Lexer Properties
// =============================================================================

proptest! {
    /// Property: Lexing is deterministic, for valid and invalid input alike
    #[test]
    fn lexing_is_deterministic(source in "[ -~\n]{0,80}") {
        prop_assert_eq!(lexer::lex(&source), lexer::lex(&source));
    }

    /// Property: Whitespace and comments produce only the end-of-input token
    #[test]
    fn trivia_lexes_to_eof_only(source in trivia_strategy()) {
        let tokens = lexer::lex(&source).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::Eof);
        prop_assert_eq!(tokens[0].line, source.matches('\n').count() + 1);

        let validation = frontend::validate(&source).unwrap();
        prop_assert_eq!(validation.statements, 0);
    }

    /// Property: A successful lex always ends with exactly one EOF token
    #[test]
    fn successful_lex_ends_with_single_eof(source in "[a-z0-9 ;=+(){}<>\n]{0,60}") {
        if let Ok(tokens) = lexer::lex(&source) {
            let eofs = tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
            prop_assert_eq!(eofs, 1);
            prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        }
    }

    /// Property: Token lines never decrease
    #[test]
    fn token_lines_are_monotonic(source in "[a-z0-9 ;=\n]{0,60}") {
        let tokens = lexer::lex(&source).unwrap();
        prop_assert!(tokens.windows(2).all(|w| w[0].line <= w[1].line));
    }

    /// Property: Identifiers survive lexing unchanged
    #[test]
    fn identifiers_survive_lexing(ident in ident_strategy()) {
        let tokens = lexer::lex(&format!("x = {};", ident)).unwrap();
        prop_assert_eq!(tokens.len(), 5);
        prop_assert_eq!(tokens[2].kind, TokenKind::Ident);
        prop_assert_eq!(&tokens[2].text, &ident);
    }
}

// =============================================================================
// Validation Properties
// =============================================================================

proptest! {
    /// Property: Declarations with distinct names validate and are all recorded
    #[test]
    fn generated_declarations_validate(decls in declarations_strategy()) {
        let validation = frontend::validate(&render(&decls)).unwrap();
        prop_assert_eq!(validation.statements, decls.len());
        prop_assert_eq!(validation.symbols.len(), decls.len());
        for (ty, name, _) in &decls {
            prop_assert_eq!(validation.symbols.type_of(name), Some(*ty));
        }
    }

    /// Property: Re-declaring any earlier name fails on the re-declaration's line
    #[test]
    fn duplicate_declarations_are_detected(
        decls in declarations_strategy(),
        pick in any::<prop::sample::Index>(),
        ty in type_strategy(),
    ) {
        let (_, name, _) = pick.get(&decls);
        let source = format!("{}{} {} = 0;\n", render(&decls), ty, name);

        let err = frontend::validate(&source).unwrap_err();
        prop_assert_eq!(err.message, format!("variable '{}' already declared", name));
        prop_assert_eq!(err.line, decls.len() + 1);
    }

    /// Property: Dropping the initializer of any declaration is a syntax error
    #[test]
    fn declaration_without_initializer_fails(ty in type_strategy(), name in ident_strategy()) {
        let err = frontend::validate(&format!("{} {};", ty, name)).unwrap_err();
        prop_assert_eq!(err.message, "expected T_ASSIGN but got T_SEMICOLON");
    }

    /// Property: `if` and `agar` are interchangeable
    #[test]
    fn conditional_spellings_agree(name in ident_strategy(), value in number_strategy()) {
        let body = format!("({} > {}) {{ {} = {}; }} else {{ return {}; }}", name, value, name, value, name);
        let with_if = frontend::validate(&format!("if {}", body));
        let with_agar = frontend::validate(&format!("agar {}", body));
        prop_assert!(with_if.is_ok());
        prop_assert_eq!(with_if, with_agar);
    }
}
