//! Integration tests for the selector tokenizer.

use pysel_query::{SelectorError, SelectorToken, SelectorTokenizer};

fn tokenize(input: &str) -> Vec<SelectorToken> {
    let mut tokenizer = SelectorTokenizer::new(input);
    tokenizer.run().unwrap();
    tokenizer.into_tokens()
}

fn tokenize_err(input: &str) -> SelectorError {
    let mut tokenizer = SelectorTokenizer::new(input);
    tokenizer.run().unwrap_err()
}

#[test]
fn test_tokenize_simple_chain() {
    assert_eq!(
        tokenize("class > def"),
        vec![
            SelectorToken::Ident("class".to_string()),
            SelectorToken::Whitespace,
            SelectorToken::Greater,
            SelectorToken::Whitespace,
            SelectorToken::Ident("def".to_string()),
            SelectorToken::Eof,
        ]
    );
}

#[test]
fn test_tokenize_collapses_whitespace_runs() {
    assert_eq!(
        tokenize("a  \t b"),
        vec![
            SelectorToken::Ident("a".to_string()),
            SelectorToken::Whitespace,
            SelectorToken::Ident("b".to_string()),
            SelectorToken::Eof,
        ]
    );
}

#[test]
fn test_tokenize_attribute_predicate() {
    assert_eq!(
        tokenize("[from^=os.path]"),
        vec![
            SelectorToken::LeftBracket,
            SelectorToken::Ident("from".to_string()),
            SelectorToken::PrefixMatch,
            SelectorToken::Ident("os.path".to_string()),
            SelectorToken::RightBracket,
            SelectorToken::Eof,
        ]
    );
}

#[test]
fn test_tokenize_not_equal() {
    assert_eq!(
        tokenize("[name!=x]"),
        vec![
            SelectorToken::LeftBracket,
            SelectorToken::Ident("name".to_string()),
            SelectorToken::NotEq,
            SelectorToken::Ident("x".to_string()),
            SelectorToken::RightBracket,
            SelectorToken::Eof,
        ]
    );
}

#[test]
fn test_tokenize_hash_stops_at_dot() {
    assert_eq!(
        tokenize("#foo,"),
        vec![
            SelectorToken::Hash("foo".to_string()),
            SelectorToken::Comma,
            SelectorToken::Eof,
        ]
    );
    assert!(matches!(
        tokenize_err("#os.path"),
        SelectorError::UnexpectedChar { ch: '.', .. }
    ));
}

#[test]
fn test_tokenize_strings() {
    assert_eq!(
        tokenize("\"double\" 'single'"),
        vec![
            SelectorToken::String("double".to_string()),
            SelectorToken::Whitespace,
            SelectorToken::String("single".to_string()),
            SelectorToken::Eof,
        ]
    );
}

#[test]
fn test_tokenize_pseudo_call() {
    assert_eq!(
        tokenize(":not(#x)"),
        vec![
            SelectorToken::Colon,
            SelectorToken::Ident("not".to_string()),
            SelectorToken::LeftParen,
            SelectorToken::Hash("x".to_string()),
            SelectorToken::RightParen,
            SelectorToken::Eof,
        ]
    );
}

#[test]
fn test_tokenize_underscore_identifiers() {
    assert_eq!(
        tokenize("#__init__"),
        vec![
            SelectorToken::Hash("__init__".to_string()),
            SelectorToken::Eof,
        ]
    );
}

#[test]
fn test_tokenize_rejects_stray_characters() {
    assert!(matches!(
        tokenize_err("def @"),
        SelectorError::UnexpectedChar { ch: '@', position: 4 }
    ));
    assert!(matches!(
        tokenize_err(".cls"),
        SelectorError::UnexpectedChar { ch: '.', position: 0 }
    ));
}

#[test]
fn test_tokenize_unterminated_string() {
    assert_eq!(tokenize_err("'oops"), SelectorError::UnterminatedString);
}

#[test]
fn test_tokenize_empty_input() {
    assert_eq!(tokenize(""), vec![SelectorToken::Eof]);
}
