//! Tests for read-only tree lookups

use rstest::rstest;

use treexfer::domain::{Node, TreeArena, ROOT_ID};
use treexfer::util::testing;

fn seed_tree() -> TreeArena {
    testing::init_test_setup();
    TreeArena::from_node(&Node::seed()).expect("seed is well-formed")
}

#[test]
fn given_every_node_when_finding_then_node_and_path_end_at_id() {
    let tree = seed_tree();
    for id in tree.flatten() {
        let node = tree.find_node(&id).expect("present");
        assert_eq!(node.id(), id);

        let path = tree.find_path(&id);
        assert_eq!(path.first().map(String::as_str), Some(ROOT_ID));
        assert_eq!(path.last(), Some(&id));
    }
}

#[rstest]
#[case("node1", &["(root)", "node1"])]
#[case("node1-3-2", &["(root)", "node1", "node1-3", "node1-3-2"])]
#[case("node2-2", &["(root)", "node2", "node2-2"])]
fn given_nested_id_when_finding_path_then_returns_root_inclusive_path(
    #[case] id: &str,
    #[case] expected: &[&str],
) {
    assert_eq!(seed_tree().find_path(id), expected);
}

#[test]
fn given_unknown_id_when_finding_then_returns_nothing() {
    let tree = seed_tree();
    assert!(tree.find("missing").is_none());
    assert!(tree.find_path("missing").is_empty());
    assert!(tree.find_parent("missing").is_none());
}

#[test]
fn given_root_when_finding_parent_then_returns_nothing() {
    assert!(seed_tree().find_parent(ROOT_ID).is_none());
}

#[test]
fn given_nested_id_when_finding_parent_then_returns_parent_and_its_path() {
    let tree = seed_tree();
    let parent = tree.find_parent("node1-3-1").expect("has parent");
    assert_eq!(parent.id(), "node1-3");
    assert_eq!(parent.path, ["(root)", "node1", "node1-3"]);

    let child = tree.index_of("node1-3-1").unwrap();
    assert_eq!(parent.position_of(child), Some(0));
}

#[test]
fn given_parent_index_when_looking_up_child_then_only_direct_children_match() {
    let tree = seed_tree();
    let node1 = tree.index_of("node1").unwrap();
    assert!(tree.child_by_id(node1, "node1-3").is_some());
    assert!(tree.child_by_id(node1, "node1-3-1").is_none());
}

#[test]
fn given_duplicate_ids_when_building_tree_then_fails() {
    let node = Node::branch(
        ROOT_ID,
        vec![
            Node::branch("a", vec![Node::leaf("x")]),
            Node::branch("b", vec![Node::leaf("x")]),
        ],
    );
    assert!(TreeArena::from_node(&node).is_err());
}
