//! Parsed selector model.
//!
//! A selector list is one or more alternatives separated by commas; each
//! alternative is a chain of compounds joined by combinators. The chain
//! is stored subject-first: matching walks from the candidate node
//! upward through its ancestors, so the ancestor compounds are kept in
//! right-to-left order.

/// How an ancestor compound relates to the compound on its right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// Whitespace: any ancestor.
    Descendant,
    /// `>`: the immediate parent.
    Child,
}

/// Comparison operator of an attribute predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrOp {
    /// `[name=value]` — some value equals.
    Eq,
    /// `[name!=value]` — no value equals.
    NotEq,
    /// `[name^=value]` — some value starts with.
    StartsWith,
}

/// One `[name op value]` predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrPredicate {
    /// The attribute name being tested.
    pub name: String,
    /// The comparison operator.
    pub op: AttrOp,
    /// The literal to compare against.
    pub value: String,
}

/// A pseudo-class with its parenthesized selector-list argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PseudoClass {
    /// `:not(S)` — the node itself matches no alternative's subject
    /// compound. The argument's combinators are ignored by matching.
    Not(SelectorList),
    /// `:has(S)` — some strict descendant matches the argument, with
    /// the node itself as the scope for leading `>`.
    Has(SelectorList),
    /// `:extends(S)` — class-only: some declared base matches some
    /// alternative's subject compound. An empty argument matches
    /// classes with no declared bases.
    Extends(SelectorList),
}

/// One simple-selector group: tag, id, attribute predicates, and
/// pseudo-classes that all apply to the same node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compound {
    /// The tag name, if present. Unknown tags are kept verbatim and
    /// simply never match.
    pub tag: Option<String>,
    /// The `#id`, if present.
    pub id: Option<String>,
    /// All `[...]` predicates, in source order.
    pub attrs: Vec<AttrPredicate>,
    /// All `:pseudo(...)` terms, in source order.
    pub pseudos: Vec<PseudoClass>,
}

impl Compound {
    /// Whether the compound contains at least one simple selector.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tag.is_none() && self.id.is_none() && self.attrs.is_empty() && self.pseudos.is_empty()
    }
}

/// One alternative of a selector list: the subject compound plus the
/// ancestor compounds to its left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorChain {
    /// The rightmost compound; the one the matched node satisfies.
    pub subject: Compound,
    /// Ancestor compounds in right-to-left order, each carrying the
    /// combinator that joins it to the compound on its right.
    pub ancestors: Vec<(Combinator, Compound)>,
    /// A leading combinator anchoring the leftmost compound to the
    /// scope: `> def` at top level means "direct child of the module".
    /// Only [`Combinator::Child`] can occur here (leading whitespace is
    /// trimmed away).
    pub anchor: Option<Combinator>,
}

/// A full parsed selector: comma-separated alternatives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorList {
    /// The alternatives, in source order. Empty only as the argument of
    /// `:extends()`, where it means "no declared bases".
    pub chains: Vec<SelectorChain>,
}
