//! Selector tokenizer, parser, and tree matching for the pysel query
//! engine.
//!
//! # Scope
//!
//! This crate implements:
//! - **Selector Tokenizer**
//!   - Identifiers (with dotted module paths), `#id` hashes, quoted
//!     strings
//!   - Attribute operators `=`, `!=`, `^=`
//!   - Whitespace as a significant token (the descendant combinator)
//!
//! - **Selector Parser**
//!   - Compound selectors: `tag`, `#id`, `[attr op value]`,
//!     `:pseudo(...)`
//!   - Chains with descendant and child combinators, leading-`>`
//!     anchors
//!   - Comma-separated alternatives
//!
//! - **Matcher**
//!   - Lazy depth-first pre-order matching over
//!     [`pysel_ast::SyntaxTree`]
//!   - Subject-first upward ancestry verification
//!   - One yield per node regardless of how many alternatives match
//!
//! - **Pseudo-classes**
//!   - `:not(S)` — node-local negation
//!   - `:has(S)` — scoped subtree search, `:has(> S)` for immediate
//!     children
//!   - `:extends(S)` — declared base-class matching, `:extends()` for
//!     base-less classes

/// Selector-text error types.
pub mod error;
/// Selector matching over syntax trees.
pub mod matcher;
/// Selector parsing.
pub mod parser;
/// Parsed selector model.
pub mod selector;
/// Selector tokenization.
pub mod tokenizer;

pub use error::SelectorError;
pub use matcher::{Match, Matches, matches};
pub use parser::{SelectorParser, parse_selector};
pub use selector::{
    AttrOp, AttrPredicate, Combinator, Compound, PseudoClass, SelectorChain, SelectorList,
};
pub use tokenizer::{SelectorToken, SelectorTokenizer};
