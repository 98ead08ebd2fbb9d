//! Tests for cascading removal and sibling reordering

use rstest::rstest;

use treexfer::domain::{Direction, Node, TreeArena, ROOT_ID};
use treexfer::util::testing;

fn seed_tree() -> TreeArena {
    testing::init_test_setup();
    TreeArena::from_node(&Node::seed()).expect("seed is well-formed")
}

fn children_of(tree: &TreeArena, id: &str) -> Vec<String> {
    tree.find_node(id)
        .expect("present")
        .children
        .iter()
        .map(|&c| tree.get_node(c).unwrap().id().to_string())
        .collect()
}

// ============================================================
// Removal
// ============================================================

#[test]
fn given_single_child_chain_when_removing_leaf_then_prunes_up_to_root() {
    let chain = Node::branch(
        ROOT_ID,
        vec![Node::branch("a", vec![Node::branch("b", vec![Node::leaf("leaf")])])],
    );
    let mut tree = TreeArena::from_node(&chain).unwrap();

    let removed = tree.remove_subtree("leaf");

    assert_eq!(removed, ["leaf", "b", "a"]);
    assert_eq!(tree.len(), 1);
    assert!(tree.flatten_except_root().is_empty());
    assert!(!tree.contains("a"));
}

#[test]
fn given_node_with_sibling_when_removing_then_parent_is_kept() {
    let mut tree = seed_tree();

    let removed = tree.remove_subtree("node2-1");

    assert_eq!(removed, ["node2-1"]);
    assert_eq!(children_of(&tree, "node2"), ["node2-2"]);
    assert!(!tree.contains("node2-1-1"));
}

#[rstest]
#[case(ROOT_ID)]
#[case("missing")]
fn given_root_or_unknown_id_when_removing_then_tree_is_unchanged(#[case] id: &str) {
    let mut tree = seed_tree();
    let before = tree.clone();

    assert!(tree.remove_subtree(id).is_empty());
    assert_eq!(tree, before);
}

#[test]
fn given_tree_when_removing_non_destructively_then_original_is_untouched() {
    let tree = seed_tree();

    let pruned = tree.without_subtree("node1");

    assert!(tree.contains("node1-3-3"));
    assert_eq!(pruned.flatten_except_root()[0], "node2");
    assert_eq!(pruned.len(), tree.len() - 7);
}

// ============================================================
// Reordering
// ============================================================

#[test]
fn given_middle_child_when_moving_up_then_swaps_with_previous_sibling() {
    let mut tree = seed_tree();
    assert!(tree.can_move_up("node1-2"));

    assert!(tree.move_up("node1-2"));

    assert_eq!(children_of(&tree, "node1"), ["node1-2", "node1-1", "node1-3"]);
}

#[test]
fn given_first_child_of_first_branch_when_checking_up_then_cannot_move() {
    let tree = seed_tree();
    assert!(!tree.can_move_up("node1-1"));
    assert!(!tree.can_move_up("node1"));
    assert!(!tree.can_move_up(ROOT_ID));
}

#[test]
fn given_last_child_when_moving_down_then_moves_enclosing_subtree() {
    let mut tree = seed_tree();
    assert!(tree.can_move_down("node1-3-3"));

    assert!(tree.move_down("node1-3-3"));

    // node1-3 is node1's last child, so node1 itself swaps with node2
    assert_eq!(children_of(&tree, ROOT_ID), ["node2", "node1"]);
    assert_eq!(
        children_of(&tree, "node1-3"),
        ["node1-3-1", "node1-3-2", "node1-3-3"]
    );
}

#[test]
fn given_first_grandchild_when_moving_up_then_moves_nearest_movable_ancestor() {
    let mut tree = seed_tree();

    assert!(tree.move_up("node2-1-1"));

    assert_eq!(children_of(&tree, ROOT_ID), ["node2", "node1"]);
    assert_eq!(children_of(&tree, "node2-1"), ["node2-1-1", "node2-1-2"]);
}

#[test]
fn given_any_node_when_moving_then_predicate_agrees_with_effect() {
    let tree = seed_tree();
    for id in tree.flatten() {
        for direction in [Direction::Up, Direction::Down] {
            let moved = tree.moved(&id, direction);
            assert_eq!(
                tree.can_move(&id, direction),
                moved != tree,
                "{} {}",
                id,
                direction
            );
        }
    }
}

#[test]
fn given_unmovable_node_when_moving_in_place_then_reports_no_change() {
    let mut tree = seed_tree();
    let before = tree.clone();

    assert!(!tree.move_down("node2-2"));
    assert!(!tree.move_sibling("missing", Direction::Up));
    assert_eq!(tree, before);
}
