//! Selector matching over syntax trees.
//!
//! Matching is purely functional over an immutable tree: a single
//! depth-first pre-order walk tests every node against the selector
//! list, yielding each matching node exactly once, in source order.
//! Restarting means calling [`matches`] again.
//!
//! Chains are verified subject-first: the candidate node must satisfy
//! the subject compound, then ancestry is resolved existentially up the
//! tree. A `Child` combinator pins the next compound to the immediate
//! parent; a `Descendant` combinator may settle on any matching
//! ancestor, and every candidate is tried, since a later `Child` step
//! or a scope anchor can rule out the nearest one.

use pysel_ast::{BaseExpr, NodeData, NodeId, NodeKind, SyntaxTree, describe};

use crate::selector::{
    AttrOp, Combinator, Compound, PseudoClass, SelectorChain, SelectorList,
};

/// One matched node with its 1-based source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// The matched node.
    pub node: NodeId,
    /// The node's 1-based source line.
    pub line: usize,
}

/// Lazily match a selector list against a tree.
///
/// The module root is traversal scaffolding only; it is never a
/// candidate. Each matching node is yielded once, regardless of how many
/// alternatives match it.
#[must_use]
pub fn matches<'a>(list: &'a SelectorList, tree: &'a SyntaxTree) -> Matches<'a> {
    Matches {
        list,
        tree,
        walk: tree.descendants(tree.root()),
    }
}

/// Lazy iterator over the matches of a selector list, in source order.
pub struct Matches<'a> {
    list: &'a SelectorList,
    tree: &'a SyntaxTree,
    walk: pysel_ast::DescendantIterator<'a>,
}

impl Iterator for Matches<'_> {
    type Item = Match;

    fn next(&mut self) -> Option<Self::Item> {
        let scope = self.tree.root();
        loop {
            let node = self.walk.next()?;
            let hit = self
                .list
                .chains
                .iter()
                .any(|chain| chain_matches(self.tree, node, chain, scope));
            if hit {
                return Some(Match {
                    node,
                    line: self.tree.line(node),
                });
            }
        }
    }
}

/// Whether `node` satisfies one chain, with ancestry resolved strictly
/// inside `scope` (exclusive).
fn chain_matches(tree: &SyntaxTree, node: NodeId, chain: &SelectorChain, scope: NodeId) -> bool {
    compound_matches(tree, node, &chain.subject)
        && ancestry_matches(tree, node, &chain.ancestors, chain.anchor, scope)
}

/// Whether some sequence of ancestors of `current`, strictly inside
/// `scope`, satisfies the remaining compounds and then the anchor.
///
/// A `Descendant` step must try every matching ancestor, not just the
/// nearest: a `Child` step (or the anchor) further left pins its node
/// to an immediate parent, so which ancestor the `Descendant` step
/// settles on decides whether the rest of the chain can be placed.
fn ancestry_matches(
    tree: &SyntaxTree,
    current: NodeId,
    steps: &[(Combinator, Compound)],
    anchor: Option<Combinator>,
    scope: NodeId,
) -> bool {
    let Some(((combinator, compound), rest)) = steps.split_first() else {
        // The anchor relates the leftmost matched node to the scope root.
        return match anchor {
            Some(Combinator::Child) => tree.parent(current) == Some(scope),
            Some(Combinator::Descendant) | None => true,
        };
    };

    match combinator {
        Combinator::Child => tree.parent(current).filter(|&p| p != scope).is_some_and(|p| {
            compound_matches(tree, p, compound) && ancestry_matches(tree, p, rest, anchor, scope)
        }),
        Combinator::Descendant => tree
            .ancestors(current)
            .take_while(|&a| a != scope)
            .any(|a| {
                compound_matches(tree, a, compound)
                    && ancestry_matches(tree, a, rest, anchor, scope)
            }),
    }
}

/// Whether `node` satisfies every simple selector of one compound.
///
/// Module and opaque nodes are structure only: no compound matches them,
/// whatever its predicates, so a bare `[name!=x]` cannot light up every
/// unmodeled literal in the file.
fn compound_matches(tree: &SyntaxTree, node: NodeId, compound: &Compound) -> bool {
    let descriptor = describe(tree, node);
    if descriptor.kind.selector_tag().is_none() {
        return false;
    }

    if let Some(tag) = &compound.tag
        && descriptor.kind.selector_tag() != Some(tag.as_str())
    {
        return false;
    }

    if let Some(id) = &compound.id
        && descriptor.id != Some(id.as_str())
    {
        return false;
    }

    for predicate in &compound.attrs {
        let mut values = descriptor.values(&predicate.name);
        let holds = match predicate.op {
            AttrOp::Eq => values.any(|v| v == predicate.value),
            AttrOp::StartsWith => values.any(|v| v.starts_with(&predicate.value)),
            // A node carrying no such attribute satisfies `!=`.
            AttrOp::NotEq => !values.any(|v| v == predicate.value),
        };
        if !holds {
            return false;
        }
    }

    compound
        .pseudos
        .iter()
        .all(|pseudo| pseudo_matches(tree, node, pseudo))
}

/// Evaluate one pseudo-class on `node`.
fn pseudo_matches(tree: &SyntaxTree, node: NodeId, pseudo: &PseudoClass) -> bool {
    match pseudo {
        // The argument is evaluated against the node itself, subject
        // compound only; its combinators play no role.
        PseudoClass::Not(list) => !list
            .chains
            .iter()
            .any(|chain| compound_matches(tree, node, &chain.subject)),

        // Some strict descendant satisfies the argument, with the node
        // itself as the scope for anchors (`:has(> def)`).
        PseudoClass::Has(list) => tree.descendants(node).any(|descendant| {
            list.chains
                .iter()
                .any(|chain| chain_matches(tree, descendant, chain, node))
        }),

        PseudoClass::Extends(list) => {
            let Some(NodeData::Class(data)) = tree.data(node) else {
                return false;
            };
            if list.chains.is_empty() {
                return data.bases.is_empty();
            }
            data.bases.iter().any(|base| {
                list.chains
                    .iter()
                    .any(|chain| base_matches(base, &chain.subject))
            })
        }
    }
}

/// Whether a declared base expression satisfies a compound.
///
/// Bases are addressable by tag (against the base's recorded kind) and
/// `#id` (against its name) only; attribute or pseudo predicates never
/// match a base.
fn base_matches(base: &BaseExpr, compound: &Compound) -> bool {
    if !compound.attrs.is_empty() || !compound.pseudos.is_empty() {
        return false;
    }

    if let Some(tag) = &compound.tag
        && base.kind.and_then(NodeKind::selector_tag) != Some(tag.as_str())
    {
        return false;
    }

    if let Some(id) = &compound.id
        && base.name.as_deref() != Some(id.as_str())
    {
        return false;
    }

    true
}
