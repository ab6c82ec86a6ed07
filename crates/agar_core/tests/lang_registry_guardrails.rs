use std::collections::{HashMap, HashSet};

use agar_core::lang::keywords;
use agar_core::lang::operators;
use agar_core::lang::punctuation;

#[test]
fn keywords_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, keywords::KeywordId> = HashMap::new();

    for info in keywords::KEYWORDS {
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            keywords::as_str(info.id),
            info.canonical,
            "keyword as_str mismatch for {:?}",
            info.id
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate keyword spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }

        for &alias in info.aliases {
            assert_eq!(
                keywords::from_str(alias),
                Some(info.id),
                "keyword alias not resolvable: {}",
                alias
            );
            if let Some(prev) = seen.insert(alias, info.id) {
                panic!(
                    "duplicate keyword alias spelling {:?}: {:?} and {:?}",
                    alias, prev, info.id
                );
            }
        }
    }
}

#[test]
fn keyword_spellings_are_ascii_alphanumeric_words() {
    // The lexer only scans `[A-Za-z][A-Za-z0-9]*` as a word; anything else could never be classified.
    for info in keywords::KEYWORDS {
        for spelling in std::iter::once(&info.canonical).chain(info.aliases.iter()) {
            let mut chars = spelling.chars();
            let first = chars.next().expect("empty keyword spelling");
            assert!(first.is_ascii_alphabetic(), "keyword {:?} must start with a letter", spelling);
            assert!(
                chars.all(|c| c.is_ascii_alphanumeric()),
                "keyword {:?} must be alphanumeric",
                spelling
            );
        }
    }
}

#[test]
fn operators_spellings_unique_and_resolvable() {
    let mut seen = HashSet::new();
    for info in operators::OPERATORS {
        assert_eq!(operators::from_str(info.spelling), Some(info.id));
        assert_eq!(operators::as_str(info.id), info.spelling);
        assert!(seen.insert(info.spelling), "duplicate operator spelling {:?}", info.spelling);
    }
}

#[test]
fn punctuation_spellings_unique_and_resolvable() {
    let mut seen = HashSet::new();
    for info in punctuation::PUNCTUATION {
        assert_eq!(punctuation::from_str(info.canonical), Some(info.id));
        assert_eq!(punctuation::as_str(info.id), info.canonical);
        assert!(seen.insert(info.canonical), "duplicate punctuation spelling {:?}", info.canonical);
    }
}

#[test]
fn token_names_unique_across_registries() {
    let mut seen = HashSet::new();
    let names = keywords::KEYWORDS
        .iter()
        .map(|k| k.token_name)
        .chain(operators::OPERATORS.iter().map(|o| o.token_name))
        .chain(punctuation::PUNCTUATION.iter().map(|p| p.token_name));

    for name in names {
        assert!(name.starts_with("T_"), "token name {:?} must start with T_", name);
        assert!(seen.insert(name), "duplicate token name {:?}", name);
    }
    // Reserved for lexer-level kinds that have no registry entry.
    for reserved in ["T_ID", "T_NUM", "T_EOF"] {
        assert!(!seen.contains(reserved), "{} is reserved for non-registry tokens", reserved);
    }
}

#[test]
fn comparison_chain_operators() {
    let chain: Vec<_> = operators::OPERATORS
        .iter()
        .filter(|o| operators::is_comparison(o.id))
        .map(|o| o.spelling)
        .collect();
    assert_eq!(chain, vec!["==", "!=", "<", ">", "&&", "||"]);
}
