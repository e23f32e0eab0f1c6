//! Integration tests for the arena syntax tree and descriptor layer.

use pysel_ast::{
    AssignData, BaseExpr, CallData, ClassData, DefData, ImportData, NodeData, NodeId, NodeKind,
    SyntaxTree, describe,
};

fn class(name: &str, bases: Vec<BaseExpr>) -> NodeData {
    NodeData::Class(ClassData {
        name: name.to_string(),
        bases,
    })
}

fn def(name: &str) -> NodeData {
    NodeData::Def(DefData {
        name: name.to_string(),
    })
}

/// module
/// └── class Widget(Base)      line 1
///     ├── def render          line 2
///     │   └── call print      line 3
///     └── def resize          line 5
fn sample_tree() -> SyntaxTree {
    let mut tree = SyntaxTree::new();

    let widget = tree.alloc(
        class(
            "Widget",
            vec![BaseExpr {
                kind: None,
                name: Some("Base".to_string()),
            }],
        ),
        1,
    );
    tree.append_child(tree.root(), widget);

    let render = tree.alloc(def("render"), 2);
    tree.append_child(widget, render);

    let call = tree.alloc(
        NodeData::Call(CallData {
            name: Some("print".to_string()),
            args: vec!["data".to_string()],
            kwargs: Vec::new(),
        }),
        3,
    );
    tree.append_child(render, call);

    let resize = tree.alloc(def("resize"), 5);
    tree.append_child(widget, resize);

    tree
}

#[test]
fn test_new_tree_has_module_root() {
    let tree = SyntaxTree::new();
    assert_eq!(tree.root(), NodeId::ROOT);
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.kind(tree.root()), NodeKind::Module);
    assert_eq!(tree.parent(tree.root()), None);
}

#[test]
fn test_append_child_links_both_directions() {
    let tree = sample_tree();
    let widget = tree.children(tree.root())[0];

    assert_eq!(tree.parent(widget), Some(tree.root()));
    assert_eq!(tree.children(widget).len(), 2);
    for &child in tree.children(widget) {
        assert_eq!(tree.parent(child), Some(widget));
    }
}

#[test]
fn test_kind_and_line() {
    let tree = sample_tree();
    let widget = tree.children(tree.root())[0];
    let resize = tree.children(widget)[1];

    assert_eq!(tree.kind(widget), NodeKind::Class);
    assert_eq!(tree.kind(resize), NodeKind::Def);
    assert_eq!(tree.line(widget), 1);
    assert_eq!(tree.line(resize), 5);
}

#[test]
fn test_missing_id_is_opaque() {
    let tree = sample_tree();
    let missing = NodeId(999);

    assert!(tree.get(missing).is_none());
    assert_eq!(tree.kind(missing), NodeKind::Opaque);
    assert_eq!(tree.line(missing), 0);
    assert!(tree.children(missing).is_empty());
}

#[test]
fn test_ancestors_walk_to_root() {
    let tree = sample_tree();
    let widget = tree.children(tree.root())[0];
    let render = tree.children(widget)[0];
    let call = tree.children(render)[0];

    let ancestors: Vec<NodeId> = tree.ancestors(call).collect();
    assert_eq!(ancestors, vec![render, widget, tree.root()]);
}

#[test]
fn test_is_descendant_of() {
    let tree = sample_tree();
    let widget = tree.children(tree.root())[0];
    let render = tree.children(widget)[0];
    let call = tree.children(render)[0];
    let resize = tree.children(widget)[1];

    assert!(tree.is_descendant_of(call, widget));
    assert!(tree.is_descendant_of(call, tree.root()));
    assert!(!tree.is_descendant_of(widget, call));
    assert!(!tree.is_descendant_of(call, resize));
    // Proper descendant: a node is not its own descendant.
    assert!(!tree.is_descendant_of(call, call));
}

#[test]
fn test_descendants_pre_order_is_source_order() {
    let tree = sample_tree();
    let lines: Vec<usize> = tree
        .descendants(tree.root())
        .map(|id| tree.line(id))
        .collect();
    assert_eq!(lines, vec![1, 2, 3, 5]);
}

#[test]
fn test_descendants_of_leaf_is_empty() {
    let tree = sample_tree();
    let widget = tree.children(tree.root())[0];
    let resize = tree.children(widget)[1];
    assert_eq!(tree.descendants(resize).count(), 0);
}

#[test]
fn test_selector_tags() {
    assert_eq!(NodeKind::Class.selector_tag(), Some("class"));
    assert_eq!(NodeKind::Def.selector_tag(), Some("def"));
    assert_eq!(NodeKind::Import.selector_tag(), Some("import"));
    assert_eq!(NodeKind::Assign.selector_tag(), Some("assign"));
    assert_eq!(NodeKind::Call.selector_tag(), Some("call"));
    assert_eq!(NodeKind::Attr.selector_tag(), Some("attr"));
    assert_eq!(NodeKind::Module.selector_tag(), None);
    assert_eq!(NodeKind::Opaque.selector_tag(), None);
}

#[test]
fn test_describe_class_and_def() {
    let tree = sample_tree();
    let widget = tree.children(tree.root())[0];
    let render = tree.children(widget)[0];

    let d = describe(&tree, widget);
    assert_eq!(d.kind, NodeKind::Class);
    assert_eq!(d.id, Some("Widget"));
    assert_eq!(d.values("name").collect::<Vec<_>>(), vec!["Widget"]);

    let d = describe(&tree, render);
    assert_eq!(d.kind, NodeKind::Def);
    assert_eq!(d.id, Some("render"));
}

#[test]
fn test_describe_module_is_empty() {
    let tree = sample_tree();
    let d = describe(&tree, tree.root());
    assert_eq!(d.kind, NodeKind::Module);
    assert_eq!(d.id, None);
    assert!(d.attributes().is_empty());
}

#[test]
fn test_describe_import_multivalued() {
    let mut tree = SyntaxTree::new();
    let import = tree.alloc(
        NodeData::Import(ImportData {
            from: Some("os.path".to_string()),
            names: vec!["join".to_string(), "split".to_string()],
            full: vec!["os.path.join".to_string(), "os.path.split".to_string()],
        }),
        1,
    );
    tree.append_child(tree.root(), import);

    let d = describe(&tree, import);
    assert_eq!(d.kind, NodeKind::Import);
    assert_eq!(d.id, None);
    assert_eq!(d.values("from").collect::<Vec<_>>(), vec!["os.path"]);
    assert_eq!(d.values("name").collect::<Vec<_>>(), vec!["join", "split"]);
    assert_eq!(
        d.values("full").collect::<Vec<_>>(),
        vec!["os.path.join", "os.path.split"]
    );
    // Unknown attribute names are empty, not an error.
    assert_eq!(d.values("arg").count(), 0);
}

#[test]
fn test_describe_assign_single_target() {
    let mut tree = SyntaxTree::new();
    let assign = tree.alloc(
        NodeData::Assign(AssignData {
            target: Some("config".to_string()),
            names: vec!["config".to_string()],
        }),
        1,
    );
    tree.append_child(tree.root(), assign);

    let d = describe(&tree, assign);
    assert_eq!(d.id, Some("config"));
    assert_eq!(d.values("name").collect::<Vec<_>>(), vec!["config"]);
}

#[test]
fn test_describe_assign_unpacking_has_no_id() {
    let mut tree = SyntaxTree::new();
    let assign = tree.alloc(
        NodeData::Assign(AssignData {
            target: None,
            names: vec!["a".to_string(), "b".to_string()],
        }),
        1,
    );
    tree.append_child(tree.root(), assign);

    let d = describe(&tree, assign);
    assert_eq!(d.id, None);
    assert_eq!(d.values("name").collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn test_describe_call() {
    let mut tree = SyntaxTree::new();
    let call = tree.alloc(
        NodeData::Call(CallData {
            name: Some("connect".to_string()),
            args: vec!["host".to_string(), "settings.port".to_string()],
            kwargs: vec!["timeout".to_string()],
        }),
        1,
    );
    tree.append_child(tree.root(), call);

    let d = describe(&tree, call);
    assert_eq!(d.id, Some("connect"));
    assert_eq!(d.values("name").collect::<Vec<_>>(), vec!["connect"]);
    assert_eq!(
        d.values("arg").collect::<Vec<_>>(),
        vec!["host", "settings.port"]
    );
    assert_eq!(d.values("kwarg").collect::<Vec<_>>(), vec!["timeout"]);
}
