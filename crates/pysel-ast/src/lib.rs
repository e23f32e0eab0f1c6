//! Arena syntax tree for the pysel query engine.
//!
//! A parsed Python source file becomes one immutable [`SyntaxTree`]: an
//! arena of nodes indexed by [`NodeId`], each carrying a canonical kind,
//! a 1-based source line, and parent/child links.
//!
//! # Design
//!
//! The tree uses arena allocation with [`NodeId`] indices for all
//! relationships, providing O(1) access and traversal without borrow
//! checker issues. The node vocabulary is a closed set of variants
//! ([`NodeData`]); source constructs outside that vocabulary are kept as
//! [`NodeData::Opaque`] nodes so they still contribute tree structure
//! (an `if` block between a class and a method breaks the child relation,
//! exactly as it does in the abstract syntax) without ever being
//! selectable themselves.
//!
//! Parent/child here means the *structural* relation of the abstract
//! syntax: a method is an immediate child of its class, a call is an
//! immediate child of the assignment whose right-hand side it is. Front
//! ends are responsible for flattening any purely syntactic wrapper
//! levels of their concrete grammar before allocating nodes here.

mod descriptor;

pub use descriptor::{Descriptor, describe};

/// A type-safe index into the syntax tree arena.
///
/// Provides O(1) access to any node in the tree without borrowing issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The module root node is always at index 0.
    pub const ROOT: NodeId = NodeId(0);
}

/// Canonical kind tag of a syntax-tree node.
///
/// This is the vocabulary the selector language draws its type selectors
/// from. `Module` and `Opaque` are structural only and have no selector
/// tag: no type selector can name them, so they never match a tagged
/// compound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// The file root.
    Module,
    /// A class definition.
    Class,
    /// A function or method definition.
    Def,
    /// An import statement (plain or `from` form).
    Import,
    /// An assignment statement.
    Assign,
    /// A call expression.
    Call,
    /// An attribute access expression.
    Attr,
    /// A construct the query vocabulary does not model.
    Opaque,
}

impl NodeKind {
    /// The type-selector name for this kind, if it has one.
    ///
    /// Returns `None` for [`NodeKind::Module`] and [`NodeKind::Opaque`],
    /// which are traversable structure but not addressable by selectors.
    #[must_use]
    pub const fn selector_tag(self) -> Option<&'static str> {
        match self {
            Self::Class => Some("class"),
            Self::Def => Some("def"),
            Self::Import => Some("import"),
            Self::Assign => Some("assign"),
            Self::Call => Some("call"),
            Self::Attr => Some("attr"),
            Self::Module | Self::Opaque => None,
        }
    }
}

/// A base-class expression recorded on a class node, canonicalized to the
/// pieces `:extends(...)` can address: an optional kind and an optional
/// representative name.
///
/// - `class C(Base)` — no kind, name `Base`
/// - `class C(mod.Base)` — kind [`NodeKind::Attr`], name `Base`
/// - `class C(factory())` — kind [`NodeKind::Call`], name `factory`
///
/// A base expression too exotic to canonicalize still occupies a slot
/// (so the class does not count as base-less) but matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseExpr {
    /// The kind of the base expression, when it is one of the kinds a
    /// tagged compound can name. Plain identifier bases have no kind.
    pub kind: Option<NodeKind>,
    /// The representative identifier of the base, when it has one.
    pub name: Option<String>,
}

/// Payload of a class definition node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassData {
    /// The declared class name.
    pub name: String,
    /// Declared base-class expressions, in source order. Keyword
    /// arguments in the class head (`metaclass=...`) are not bases.
    pub bases: Vec<BaseExpr>,
}

/// Payload of a function or method definition node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefData {
    /// The declared function name.
    pub name: String,
}

/// Payload of an import statement node.
///
/// A single statement may import several symbols; every per-symbol field
/// is therefore a list, and the corresponding descriptor attributes are
/// multi-valued.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImportData {
    /// The module a `from`-import is relative to; `None` for plain
    /// imports.
    pub from: Option<String>,
    /// Each imported symbol. For plain imports this is the dotted module
    /// path itself (`import a.b` imports the symbol `a.b`).
    pub names: Vec<String>,
    /// The fully-qualified path per symbol: module and name joined for
    /// `from`-imports, the dotted path itself for plain imports.
    pub full: Vec<String>,
}

/// Payload of an assignment statement node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssignData {
    /// The single primary target identifier: present only when the
    /// assignment has exactly one target and that target is a plain
    /// identifier.
    pub target: Option<String>,
    /// Every plain identifier among the targets, including identifiers
    /// inside tuple or list unpacking. Attribute and subscript targets
    /// contribute nothing here; they surface as their own nodes.
    pub names: Vec<String>,
}

/// Payload of a call expression node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CallData {
    /// The called function name, when the callee is a plain identifier.
    /// A method call (`obj.m()`) has no name of its own; the attribute
    /// access is a separate child node.
    pub name: Option<String>,
    /// The textual form of each positional argument that is a simple
    /// reference: a plain identifier or a dotted attribute path.
    pub args: Vec<String>,
    /// Each keyword-argument name.
    pub kwargs: Vec<String>,
}

/// Payload of an attribute access expression node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrData {
    /// The accessed attribute name (the part after the dot).
    pub name: String,
}

/// Kind-specific data of a syntax-tree node.
///
/// A closed enumeration: every recognized construct carries exactly the
/// canonicalized fields the descriptor layer exposes, and everything else
/// is [`NodeData::Opaque`] rather than a runtime type error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    /// The file root.
    Module,
    /// A class definition.
    Class(ClassData),
    /// A function or method definition.
    Def(DefData),
    /// An import statement.
    Import(ImportData),
    /// An assignment statement.
    Assign(AssignData),
    /// A call expression.
    Call(CallData),
    /// An attribute access expression.
    Attr(AttrData),
    /// An unmodeled construct kept for its tree structure.
    Opaque,
}

impl NodeData {
    /// The canonical kind tag of this node.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Module => NodeKind::Module,
            Self::Class(_) => NodeKind::Class,
            Self::Def(_) => NodeKind::Def,
            Self::Import(_) => NodeKind::Import,
            Self::Assign(_) => NodeKind::Assign,
            Self::Call(_) => NodeKind::Call,
            Self::Attr(_) => NodeKind::Attr,
            Self::Opaque => NodeKind::Opaque,
        }
    }
}

/// A node in the syntax tree.
///
/// Stores indices for the parent/child relationships, enabling O(1)
/// traversal in either direction.
#[derive(Debug, Clone)]
pub struct Node {
    /// Kind-specific data.
    pub data: NodeData,
    /// 1-based source line where the construct starts.
    pub line: usize,
    /// The enclosing node; `None` only for the module root.
    pub parent: Option<NodeId>,
    /// Child nodes in source order.
    pub children: Vec<NodeId>,
}

/// Arena-based syntax tree with O(1) node access and traversal.
///
/// This structure stores all nodes in a contiguous vector, using indices
/// for all relationships. Trees are built once by a front end and read
/// many times by the matcher; nothing mutates a tree after construction.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    /// All nodes in the tree, indexed by `NodeId`.
    /// The module node is always at index 0 (`NodeId::ROOT`).
    nodes: Vec<Node>,
}

impl SyntaxTree {
    /// Create a new tree containing just the module root node.
    #[must_use]
    pub fn new() -> Self {
        let module = Node {
            data: NodeData::Module,
            line: 1,
            parent: None,
            children: Vec::new(),
        };
        SyntaxTree {
            nodes: vec![module],
        }
    }

    /// Get the module root node ID.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get the number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty (it never is; there is always the
    /// module root).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a new node and return its ID.
    /// The node is not yet attached to the tree.
    pub fn alloc(&mut self, data: NodeData, line: usize) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            data,
            line,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Append `child` as the last child of `parent`, updating both links.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
    }

    /// Get the kind-specific data of a node.
    #[must_use]
    pub fn data(&self, id: NodeId) -> Option<&NodeData> {
        self.get(id).map(|n| &n.data)
    }

    /// Get the canonical kind of a node. Missing IDs are opaque.
    #[must_use]
    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.get(id).map_or(NodeKind::Opaque, |n| n.data.kind())
    }

    /// Get the 1-based source line of a node.
    #[must_use]
    pub fn line(&self, id: NodeId) -> usize {
        self.get(id).map_or(0, |n| n.line)
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get all children of a node, in source order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Check if `descendant` is a proper descendant of `ancestor`.
    #[must_use]
    pub fn is_descendant_of(&self, descendant: NodeId, ancestor: NodeId) -> bool {
        self.ancestors(descendant).any(|id| id == ancestor)
    }

    /// Iterate over all ancestors of a node, from parent to module root.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> AncestorIterator<'_> {
        AncestorIterator {
            tree: self,
            current: self.parent(id),
        }
    }

    /// Iterate over all proper descendants of a node in depth-first
    /// pre-order, which is source order.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> DescendantIterator<'_> {
        let mut stack = Vec::new();
        stack.extend(self.children(id).iter().rev().copied());
        DescendantIterator { tree: self, stack }
    }
}

impl Default for SyntaxTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over ancestors of a node.
pub struct AncestorIterator<'a> {
    tree: &'a SyntaxTree,
    current: Option<NodeId>,
}

impl Iterator for AncestorIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.parent(id);
        Some(id)
    }
}

/// Iterator over proper descendants of a node, depth-first pre-order.
pub struct DescendantIterator<'a> {
    tree: &'a SyntaxTree,
    stack: Vec<NodeId>,
}

impl Iterator for DescendantIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.children(id).iter().rev().copied());
        Some(id)
    }
}
