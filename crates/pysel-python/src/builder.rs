//! Canonicalizes the tree-sitter CST into the arena tree.
//!
//! Two jobs happen in one walk:
//!
//! - **Flattening.** Wrapper levels that exist only in the concrete
//!   grammar (`block`, `expression_statement`,
//!   `parenthesized_expression`, `decorated_definition`) are skipped, so
//!   arena parent/child is the structural relation of the abstract
//!   syntax: a method is an immediate child of its class.
//! - **Extraction.** Recognized constructs are canonicalized into
//!   [`NodeData`] payloads (names, import paths, assignment targets,
//!   call arguments, base-class expressions); everything else becomes an
//!   opaque structural node.

use pysel_ast::{
    AssignData, AttrData, BaseExpr, CallData, ClassData, DefData, ImportData, NodeData, NodeId,
    NodeKind, SyntaxTree,
};
use tree_sitter::Node;

/// CST kinds that are purely syntactic wrappers: their children are
/// hoisted to the wrapper's parent.
const TRANSPARENT: [&str; 4] = [
    "block",
    "expression_statement",
    "parenthesized_expression",
    "decorated_definition",
];

/// One-shot builder turning a parsed CST into a [`SyntaxTree`].
pub struct TreeBuilder<'s> {
    source: &'s str,
    tree: SyntaxTree,
}

impl<'s> TreeBuilder<'s> {
    /// Create a builder over the given source text.
    pub fn new(source: &'s str) -> Self {
        TreeBuilder {
            source,
            tree: SyntaxTree::new(),
        }
    }

    /// Walk the module node and return the finished tree.
    pub fn build(mut self, module: Node<'_>) -> SyntaxTree {
        self.build_children(module, NodeId::ROOT);
        self.tree
    }

    /// Visit every named child of `cst`, attaching results under
    /// `parent`.
    fn build_children(&mut self, cst: Node<'_>, parent: NodeId) {
        let mut cursor = cst.walk();
        for child in cst.named_children(&mut cursor) {
            self.visit(child, parent);
        }
    }

    /// Visit one CST node: flatten, canonicalize, or keep opaque.
    fn visit(&mut self, cst: Node<'_>, parent: NodeId) {
        let kind = cst.kind();

        if TRANSPARENT.contains(&kind) {
            self.build_children(cst, parent);
            return;
        }

        let data = match kind {
            "comment" => return,
            "class_definition" => NodeData::Class(self.class_data(cst)),
            "function_definition" => NodeData::Def(DefData {
                name: self.field_text(cst, "name"),
            }),
            "import_statement" => NodeData::Import(self.import_data(cst)),
            "import_from_statement" => NodeData::Import(self.import_from_data(cst)),
            "assignment" => NodeData::Assign(self.assign_data(cst)),
            "call" => NodeData::Call(self.call_data(cst)),
            "attribute" => NodeData::Attr(AttrData {
                name: self.field_text(cst, "attribute"),
            }),
            _ => NodeData::Opaque,
        };

        let id = self.tree.alloc(data, cst.start_position().row + 1);
        self.tree.append_child(parent, id);
        self.build_children(cst, id);
    }

    /// Source text of a node. The source is valid UTF-8, so this cannot
    /// fail in practice.
    fn text(&self, cst: Node<'_>) -> &'s str {
        cst.utf8_text(self.source.as_bytes()).unwrap_or_default()
    }

    /// Owned source text of a named field, or empty when absent.
    fn field_text(&self, cst: Node<'_>, field: &str) -> String {
        cst.child_by_field_name(field)
            .map(|n| self.text(n).to_owned())
            .unwrap_or_default()
    }

    fn class_data(&self, cst: Node<'_>) -> ClassData {
        let mut bases = Vec::new();

        if let Some(args) = cst.child_by_field_name("superclasses") {
            let mut cursor = args.walk();
            for arg in args.named_children(&mut cursor) {
                match arg.kind() {
                    // Keyword arguments in the class head (metaclass=...)
                    // are not bases.
                    "keyword_argument" | "comment" => {}
                    "identifier" => bases.push(BaseExpr {
                        kind: None,
                        name: Some(self.text(arg).to_owned()),
                    }),
                    "attribute" => bases.push(BaseExpr {
                        kind: Some(NodeKind::Attr),
                        name: arg
                            .child_by_field_name("attribute")
                            .map(|n| self.text(n).to_owned()),
                    }),
                    "call" => bases.push(BaseExpr {
                        kind: Some(NodeKind::Call),
                        name: arg
                            .child_by_field_name("function")
                            .filter(|f| f.kind() == "identifier")
                            .map(|f| self.text(f).to_owned()),
                    }),
                    // Anything else still occupies a base slot (the
                    // class is not base-less) but matches nothing.
                    _ => bases.push(BaseExpr {
                        kind: None,
                        name: None,
                    }),
                }
            }
        }

        ClassData {
            name: self.field_text(cst, "name"),
            bases,
        }
    }

    /// `import a.b, c as d` — each alias contributes its original dotted
    /// path as both `name` and `full`.
    fn import_data(&self, cst: Node<'_>) -> ImportData {
        let mut data = ImportData::default();

        let mut cursor = cst.walk();
        for child in cst.named_children(&mut cursor) {
            match child.kind() {
                "dotted_name" => {
                    let path = self.text(child).to_owned();
                    data.names.push(path.clone());
                    data.full.push(path);
                }
                "aliased_import" => {
                    if let Some(name) = child.child_by_field_name("name") {
                        let path = self.text(name).to_owned();
                        data.names.push(path.clone());
                        data.full.push(path);
                    }
                }
                _ => {}
            }
        }

        data
    }

    /// `from m import a, b as c` — `from` is the module, each imported
    /// symbol is a `name`, and `full` joins the two.
    fn import_from_data(&self, cst: Node<'_>) -> ImportData {
        let mut data = ImportData::default();

        let module = cst.child_by_field_name("module_name");
        data.from = module.map(|m| self.text(m).to_owned());

        let mut cursor = cst.walk();
        for child in cst.named_children(&mut cursor) {
            if module.is_some_and(|m| m.id() == child.id()) {
                continue;
            }
            match child.kind() {
                "dotted_name" | "identifier" => {
                    self.push_symbol(&mut data, self.text(child));
                }
                "aliased_import" => {
                    if let Some(name) = child.child_by_field_name("name") {
                        self.push_symbol(&mut data, self.text(name));
                    }
                }
                "wildcard_import" => self.push_symbol(&mut data, "*"),
                _ => {}
            }
        }

        data
    }

    /// Record one imported symbol with its fully-qualified path.
    fn push_symbol(&self, data: &mut ImportData, symbol: &str) {
        data.full.push(match &data.from {
            Some(from) => format!("{from}.{symbol}"),
            None => symbol.to_owned(),
        });
        data.names.push(symbol.to_owned());
    }

    fn assign_data(&self, cst: Node<'_>) -> AssignData {
        let mut data = AssignData::default();

        if let Some(left) = cst.child_by_field_name("left") {
            match left.kind() {
                "identifier" => {
                    let name = self.text(left).to_owned();
                    data.target = Some(name.clone());
                    data.names.push(name);
                }
                "pattern_list" | "tuple_pattern" | "list_pattern" => {
                    let mut cursor = left.walk();
                    for element in left.named_children(&mut cursor) {
                        if element.kind() == "identifier" {
                            data.names.push(self.text(element).to_owned());
                        }
                    }
                }
                // Attribute/subscript targets have no identifier of
                // their own; the access surfaces as its own node.
                _ => {}
            }
        }

        data
    }

    fn call_data(&self, cst: Node<'_>) -> CallData {
        let mut data = CallData::default();

        data.name = cst
            .child_by_field_name("function")
            .filter(|f| f.kind() == "identifier")
            .map(|f| self.text(f).to_owned());

        if let Some(args) = cst.child_by_field_name("arguments") {
            let mut cursor = args.walk();
            for arg in args.named_children(&mut cursor) {
                match arg.kind() {
                    "identifier" => data.args.push(self.text(arg).to_owned()),
                    "attribute" => {
                        if let Some(path) = self.dotted_path(arg) {
                            data.args.push(path);
                        }
                    }
                    "keyword_argument" => {
                        if let Some(name) = arg.child_by_field_name("name") {
                            data.kwargs.push(self.text(name).to_owned());
                        }
                    }
                    _ => {}
                }
            }
        }

        data
    }

    /// The dotted textual form of an attribute chain made only of plain
    /// identifiers (`a.b.c`); anything fancier is not a simple reference.
    fn dotted_path(&self, attr: Node<'_>) -> Option<String> {
        let object = attr.child_by_field_name("object")?;
        let name = attr.child_by_field_name("attribute")?;

        let prefix = match object.kind() {
            "identifier" => self.text(object).to_owned(),
            "attribute" => self.dotted_path(object)?,
            _ => return None,
        };

        Some(format!("{prefix}.{}", self.text(name)))
    }
}
