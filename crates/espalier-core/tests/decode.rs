use espalier_core::{decode, encode, DecodeError, NodeId, NodeKind, NodeSpec, Tree, TreeSpec};

// Post-order description of: Root r0 -> Loop l1 -> Sequence s1 -> [c1, a1].
fn five_entry_table() -> TreeSpec {
    TreeSpec::new(vec![
        NodeSpec::leaf("Condition", "c1").with_behavior("isNotFull"),
        NodeSpec::leaf("Action", "a1").with_behavior("detect"),
        NodeSpec::branch("Sequence", "s1", 2),
        NodeSpec::branch("Loop", "l1", 1),
        NodeSpec::branch("Root", "r0", 1),
    ])
}

fn child_names(tree: &Tree, id: NodeId) -> Vec<String> {
    tree.children(id)
        .iter()
        .map(|&child| tree.get(child).expect("child resolves").name.clone())
        .collect()
}

#[test]
fn post_order_table_decodes_to_nested_shape() {
    let tree = decode(&five_entry_table()).expect("well-formed table");

    assert_eq!(tree.len(), 5);
    let root = tree.root().expect("root set");
    let record = tree.get(root).unwrap();
    assert_eq!(record.kind, NodeKind::Root);
    assert_eq!(record.name, "r0");

    assert_eq!(child_names(&tree, root), ["l1"]);
    let l1 = tree.children(root)[0];
    assert_eq!(child_names(&tree, l1), ["s1"]);
    let s1 = tree.children(l1)[0];
    assert_eq!(child_names(&tree, s1), ["c1", "a1"]); // declared order preserved

    let c1 = tree.children(s1)[0];
    assert_eq!(tree.get(c1).unwrap().behavior.as_deref(), Some("isNotFull"));
    assert_eq!(tree.get(s1).unwrap().behavior, None);
}

#[test]
fn parent_links_point_back_to_the_adopting_entry() {
    let tree = decode(&five_entry_table()).unwrap();
    let root = tree.root().unwrap();
    let l1 = tree.children(root)[0];
    let s1 = tree.children(l1)[0];

    for &leaf in tree.children(s1) {
        assert_eq!(tree.parent(leaf), Some(s1));
    }
    assert_eq!(tree.parent(s1), Some(l1));
    assert_eq!(tree.parent(root), None);
}

#[test]
fn decoding_is_deterministic() {
    let first = decode(&five_entry_table()).unwrap();
    let second = decode(&five_entry_table()).unwrap();
    assert_eq!(encode(&first), encode(&second));
}

#[test]
fn leaf_count_matches_zero_arity_entries() {
    let spec = five_entry_table();
    let tree = decode(&spec).unwrap();
    assert_eq!(tree.leaf_count(), spec.leaf_count());
    assert_eq!(tree.leaf_count(), 2);
}

#[test]
fn single_zero_arity_entry_becomes_the_root() {
    let spec = TreeSpec::new(vec![NodeSpec::leaf("Action", "solo").with_behavior("noop")]);
    let tree = decode(&spec).unwrap();

    assert_eq!(tree.len(), 1);
    let root = tree.root().unwrap();
    assert_eq!(tree.get(root).unwrap().name, "solo");
    assert!(tree.children(root).is_empty());
}

#[test]
fn partial_consumption_leaves_earlier_subtrees_for_later_entries() {
    let spec = TreeSpec::new(vec![
        NodeSpec::leaf("Action", "a").with_behavior("one"),
        NodeSpec::leaf("Action", "b").with_behavior("two"),
        NodeSpec::branch("Sequence", "s", 1),
        NodeSpec::leaf("Condition", "c").with_behavior("three"),
        NodeSpec::branch("Selector", "top", 3),
    ]);
    let tree = decode(&spec).unwrap();

    // "s" adopted only "b"; "a" stayed on the stack for "top".
    let top = tree.root().unwrap();
    assert_eq!(child_names(&tree, top), ["a", "s", "c"]);
    let s = tree.children(top)[1];
    assert_eq!(child_names(&tree, s), ["b"]);
}

#[test]
fn overdeclared_arity_is_rejected() {
    let spec = TreeSpec::new(vec![
        NodeSpec::leaf("Action", "a1").with_behavior("go"),
        NodeSpec::branch("Sequence", "s1", 3),
    ]);
    let err = decode(&spec).expect_err("arity exceeds available subtrees");
    assert_eq!(
        err,
        DecodeError::NotEnoughChildren {
            index: 1,
            name: "s1".into(),
            declared: 3,
            available: 1,
        }
    );
}

#[test]
fn empty_description_is_rejected() {
    let err = decode(&TreeSpec::default()).expect_err("nothing to decode");
    assert_eq!(err, DecodeError::EmptyInput);
}

#[test]
fn disconnected_subtrees_are_rejected() {
    let spec = TreeSpec::new(vec![
        NodeSpec::leaf("Action", "a1").with_behavior("go"),
        NodeSpec::leaf("Action", "a2").with_behavior("stop"),
    ]);
    let err = decode(&spec).expect_err("two roots remain");
    assert_eq!(err, DecodeError::DanglingSubtrees { remaining: 2 });
}

#[test]
fn unknown_kind_text_is_preserved() {
    let spec = TreeSpec::new(vec![
        NodeSpec::leaf("Action", "a1").with_behavior("go"),
        NodeSpec::branch("Fallback", "f1", 1),
    ]);
    let tree = decode(&spec).unwrap();

    let record = tree.get(tree.root().unwrap()).unwrap();
    assert_eq!(record.kind, NodeKind::Custom("Fallback".into()));
    assert_eq!(record.kind.as_str(), "Fallback");
}

#[test]
fn blank_behavior_text_normalizes_to_none() {
    let spec = TreeSpec::new(vec![NodeSpec {
        kind: "Sequence".into(),
        name: "s1".into(),
        behavior: Some(String::new()),
        children: 0,
    }]);
    let tree = decode(&spec).unwrap();
    assert_eq!(tree.get(tree.root().unwrap()).unwrap().behavior, None);
}
