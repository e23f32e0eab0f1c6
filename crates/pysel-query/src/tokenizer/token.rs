//! Selector token types.

use std::fmt;

/// One token of selector text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorToken {
    /// An unquoted identifier. Starts with a letter or `_`; may continue
    /// with letters, digits, `_`, and `.` (dotted module paths appear as
    /// single ident tokens).
    Ident(String),
    /// `#` followed by a plain identifier.
    Hash(String),
    /// A quoted string, quotes stripped.
    String(String),
    /// `,`
    Comma,
    /// `>`
    Greater,
    /// A run of whitespace. Significant: it is the descendant combinator.
    Whitespace,
    /// `:`
    Colon,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `=`
    Eq,
    /// `!=`
    NotEq,
    /// `^=`
    PrefixMatch,
    /// End of selector text.
    Eof,
}

impl fmt::Display for SelectorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectorToken::Ident(name) => write!(f, "identifier '{name}'"),
            SelectorToken::Hash(name) => write!(f, "'#{name}'"),
            SelectorToken::String(value) => write!(f, "string \"{value}\""),
            SelectorToken::Comma => f.write_str("','"),
            SelectorToken::Greater => f.write_str("'>'"),
            SelectorToken::Whitespace => f.write_str("whitespace"),
            SelectorToken::Colon => f.write_str("':'"),
            SelectorToken::LeftBracket => f.write_str("'['"),
            SelectorToken::RightBracket => f.write_str("']'"),
            SelectorToken::LeftParen => f.write_str("'('"),
            SelectorToken::RightParen => f.write_str("')'"),
            SelectorToken::Eq => f.write_str("'='"),
            SelectorToken::NotEq => f.write_str("'!='"),
            SelectorToken::PrefixMatch => f.write_str("'^='"),
            SelectorToken::Eof => f.write_str("end of selector"),
        }
    }
}
