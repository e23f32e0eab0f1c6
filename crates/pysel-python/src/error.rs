//! Source-file parse errors.

use thiserror::Error;

/// Error parsing a Python source file.
///
/// Tree-sitter is error-tolerant and produces ERROR/MISSING nodes rather
/// than failing outright; the front end treats the first such node as a
/// fatal per-file parse error so that batch callers can skip the file and
/// continue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The source contains a syntax error.
    #[error("syntax error at line {line}, column {column}: {context}")]
    Syntax {
        /// 1-based line of the first syntax error.
        line: usize,
        /// 1-based column of the first syntax error.
        column: usize,
        /// A short snippet of the problematic source text.
        context: String,
    },

    /// The Python grammar could not be loaded into the parser.
    #[error("failed to load Python grammar: {0}")]
    Grammar(String),

    /// The parser returned no tree at all (configuration problem, not a
    /// property of the source).
    #[error("parser produced no syntax tree")]
    Unavailable,
}
