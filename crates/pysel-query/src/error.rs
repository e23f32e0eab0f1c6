//! Selector-text errors.

use thiserror::Error;

/// Error produced while tokenizing or parsing selector text.
///
/// Selector errors are always fatal for the whole query: a selector that
/// does not parse matches nothing and the caller should report the error
/// rather than silently returning zero results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A character with no meaning in the selector grammar.
    #[error("unexpected character '{ch}' at position {position}")]
    UnexpectedChar {
        /// The offending character.
        ch: char,
        /// 0-based character offset into the selector text.
        position: usize,
    },

    /// A quoted attribute value with no closing quote.
    #[error("unterminated string in selector")]
    UnterminatedString,

    /// An identifier was required (after `:`, inside `[...]`) but
    /// something else appeared.
    #[error("expected an identifier, found {0}")]
    ExpectedIdentifier(String),

    /// A `#` with no plain identifier after it. Dotted names are
    /// attribute values, not ids, so `#a.b` is rejected here too.
    #[error("'#' must be followed by a plain identifier")]
    ExpectedIdName,

    /// A structurally out-of-place token.
    #[error("unexpected {0} in selector")]
    UnexpectedToken(String),

    /// The selector text ended mid-construct.
    #[error("unexpected end of selector")]
    UnexpectedEof,

    /// The selector text was empty, or a comma delimited an empty
    /// alternative.
    #[error("empty selector")]
    EmptySelector,

    /// A combinator or pseudo-class argument position held no simple
    /// selector (`> >`, `:not()`).
    #[error("expected a simple selector")]
    EmptyCompound,

    /// A pseudo-class name outside the supported set.
    #[error("unknown pseudo-class ':{0}'")]
    UnknownPseudoClass(String),
}
