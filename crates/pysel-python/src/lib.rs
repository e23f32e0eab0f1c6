//! Python front end for the pysel query engine.
//!
//! Parses Python source text with tree-sitter and canonicalizes the
//! concrete syntax tree into a [`pysel_ast::SyntaxTree`]. This crate is
//! the only place that knows the shape of the tree-sitter-python
//! grammar; everything downstream works on the arena tree and its
//! descriptors. Retargeting the engine at another language means writing
//! another front end with the same output type.

mod builder;
mod error;

pub use error::ParseError;

use builder::TreeBuilder;
use pysel_ast::SyntaxTree;

/// Parse Python source text into a syntax tree.
///
/// The returned tree's root is the module node; statements and the
/// expressions below them appear as canonical nodes (class, def, import,
/// assign, call, attr) or as opaque structural nodes, with syntactic
/// wrapper levels of the concrete grammar (suites, expression
/// statements, parentheses, decorator wrappers) flattened away.
///
/// # Errors
///
/// Returns [`ParseError::Syntax`] with the 1-based line and column of
/// the first syntax error in malformed source, or a configuration error
/// if the grammar cannot be loaded.
pub fn parse_module(source: &str) -> Result<SyntaxTree, ParseError> {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .map_err(|e| ParseError::Grammar(e.to_string()))?;

    let cst = parser.parse(source, None).ok_or(ParseError::Unavailable)?;

    if let Some(node) = first_error_node(cst.root_node()) {
        return Err(syntax_error(node, source));
    }

    Ok(TreeBuilder::new(source).build(cst.root_node()))
}

/// Find the first ERROR or MISSING node in document order, if any.
fn first_error_node(node: tree_sitter::Node<'_>) -> Option<tree_sitter::Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_error_node(child) {
            return Some(found);
        }
    }
    None
}

/// Build a [`ParseError::Syntax`] from an ERROR/MISSING node.
fn syntax_error(node: tree_sitter::Node<'_>, source: &str) -> ParseError {
    let start = node.start_position();

    let context = if node.is_missing() {
        format!("missing {}", node.kind())
    } else {
        let text = source.get(node.byte_range()).unwrap_or_default();
        if text.len() > 50 {
            let truncated: String = text.chars().take(47).collect();
            format!("{truncated}...")
        } else {
            text.to_owned()
        }
    };

    ParseError::Syntax {
        line: start.row + 1,
        column: start.column + 1,
        context,
    }
}
