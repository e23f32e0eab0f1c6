//! Selector tokenization.
//!
//! Turns selector text into a flat token stream. Whitespace is a real
//! token here because it doubles as the descendant combinator; the
//! parser decides where it matters.

/// Selector token types.
pub mod token;
/// Selector tokenizer implementation.
pub mod tokenizer;

pub use token::SelectorToken;
pub use tokenizer::SelectorTokenizer;
