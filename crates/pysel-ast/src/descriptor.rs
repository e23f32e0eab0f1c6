//! Node descriptors: the kind/id/attribute view the matcher sees.
//!
//! A [`Descriptor`] is derived on demand from a node's canonical data and
//! borrows from the tree; nothing is cached between matches. This module
//! is the single place that decides which attribute names each kind
//! exposes, so extending the vocabulary is a table change here plus a
//! payload variant in [`NodeData`].

use crate::{NodeData, NodeId, NodeKind, SyntaxTree};

/// The derived kind/id/attribute view of one syntax-tree node.
///
/// - `id` is the node's canonical representative name and is always a
///   plain identifier (dotted paths only ever appear as attribute
///   values, never as ids).
/// - Attributes form a multimap: one name may carry several values on
///   the same node (an import statement naming several symbols, a call
///   with several keyword arguments).
#[derive(Debug, Clone)]
pub struct Descriptor<'a> {
    /// The canonical kind tag.
    pub kind: NodeKind,
    /// The canonical id, when the kind has a natural single name.
    pub id: Option<&'a str>,
    attributes: Vec<(&'static str, &'a str)>,
}

impl<'a> Descriptor<'a> {
    const fn empty(kind: NodeKind) -> Self {
        Descriptor {
            kind,
            id: None,
            attributes: Vec::new(),
        }
    }

    /// All values this node carries for the given attribute name.
    ///
    /// Unknown attribute names yield an empty iterator; they are not an
    /// error (closed-world: they simply never match).
    #[must_use]
    pub fn values(&self, name: &str) -> impl Iterator<Item = &'a str> {
        self.attributes
            .iter()
            .filter(move |(n, _)| *n == name)
            .map(|(_, v)| *v)
    }

    /// All `(name, value)` attribute pairs, in extraction order.
    #[must_use]
    pub fn attributes(&self) -> &[(&'static str, &'a str)] {
        &self.attributes
    }
}

/// Derive the [`Descriptor`] of a node.
///
/// Pure function of the node, no side effects, never fails: unknown or
/// missing nodes yield a descriptor with no id and no attributes, making
/// them invisible to tagged and attributed selectors while the node
/// itself remains traversable as structural context.
#[must_use]
pub fn describe(tree: &SyntaxTree, id: NodeId) -> Descriptor<'_> {
    let Some(node) = tree.get(id) else {
        return Descriptor::empty(NodeKind::Opaque);
    };

    match &node.data {
        NodeData::Module | NodeData::Opaque => Descriptor::empty(node.data.kind()),

        NodeData::Class(data) => named(NodeKind::Class, &data.name),
        NodeData::Def(data) => named(NodeKind::Def, &data.name),
        NodeData::Attr(data) => named(NodeKind::Attr, &data.name),

        NodeData::Import(data) => {
            let mut attributes = Vec::new();
            if let Some(from) = &data.from {
                attributes.push(("from", from.as_str()));
            }
            for name in &data.names {
                attributes.push(("name", name.as_str()));
            }
            for full in &data.full {
                attributes.push(("full", full.as_str()));
            }
            Descriptor {
                kind: NodeKind::Import,
                id: None,
                attributes,
            }
        }

        NodeData::Assign(data) => {
            let attributes = data
                .names
                .iter()
                .map(|n| ("name", n.as_str()))
                .collect::<Vec<_>>();
            Descriptor {
                kind: NodeKind::Assign,
                id: data.target.as_deref(),
                attributes,
            }
        }

        NodeData::Call(data) => {
            let mut attributes = Vec::new();
            if let Some(name) = &data.name {
                attributes.push(("name", name.as_str()));
            }
            for arg in &data.args {
                attributes.push(("arg", arg.as_str()));
            }
            for kwarg in &data.kwargs {
                attributes.push(("kwarg", kwarg.as_str()));
            }
            Descriptor {
                kind: NodeKind::Call,
                id: data.name.as_deref(),
                attributes,
            }
        }
    }
}

/// Descriptor for the kinds whose id doubles as their `name` attribute.
fn named(kind: NodeKind, name: &str) -> Descriptor<'_> {
    Descriptor {
        kind,
        id: Some(name),
        attributes: vec![("name", name)],
    }
}
