//! Selector parsing.

/// Recursive-descent selector parser.
pub mod parser;

pub use parser::{SelectorParser, parse_selector};
