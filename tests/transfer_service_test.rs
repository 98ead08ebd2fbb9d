//! Tests for the two-pane transfer controller

use treexfer::application::services::{transfer, Affordances, TransferService};
use treexfer::application::{ApplicationError, Side};
use treexfer::domain::{DomainError, Node, TreeArena, ROOT_ID};
use treexfer::util::testing;

fn service() -> TransferService {
    testing::init_test_setup();
    TransferService::from_seed(&Node::seed()).expect("seed is well-formed")
}

// ============================================================
// Construction
// ============================================================

#[test]
fn given_seed_when_creating_service_then_left_is_full_and_right_is_empty() {
    let service = service();

    assert_eq!(service.left().items().len(), 12);
    assert!(service.right().items().is_empty());
    assert_eq!(service.right().tree().root_id(), ROOT_ID);
    assert!(service.selection().is_none());
    assert_eq!(service.affordances(), Affordances::default());
}

#[test]
fn given_trees_with_different_roots_when_creating_service_then_fails() {
    let result = TransferService::new(TreeArena::with_root("a"), TreeArena::with_root("b"));

    assert!(matches!(
        result,
        Err(ApplicationError::Domain(DomainError::LineageMismatch { .. }))
    ));
}

// ============================================================
// Selection
// ============================================================

#[test]
fn given_selection_when_selecting_other_pane_then_first_selection_is_cleared() {
    let mut service = service();
    service.move_to_right("node2-2").unwrap();
    service.select_left("node1-2").unwrap();

    service.select_right("node2-2").unwrap();

    assert_eq!(service.selected(Side::Right), Some("node2-2"));
    assert_eq!(service.selected(Side::Left), None);
}

#[test]
fn given_node_when_selecting_then_computes_affordances_and_preview() {
    let mut service = service();

    service.select_left("node1-2").unwrap();

    assert!(service.can_move_up());
    assert!(service.can_move_down());
    let preview = service.preview().expect("preview for selection");
    assert_eq!(preview.flatten_except_root(), ["node1", "node1-2"]);
}

#[test]
fn given_first_node_when_selecting_then_up_is_disabled() {
    let mut service = service();

    service.select_left("node1-1").unwrap();

    assert!(!service.can_move_up());
    assert!(service.can_move_down());
}

#[test]
fn given_root_or_unknown_id_when_selecting_then_selection_is_unchanged() {
    let mut service = service();
    service.select_left("node1").unwrap();

    service.select_left(ROOT_ID).unwrap();
    service.select_left("missing").unwrap();
    service.select_right("node1-1").unwrap();

    assert_eq!(service.selected(Side::Left), Some("node1"));
}

#[test]
fn given_selection_when_clearing_side_then_only_that_side_clears() {
    let mut service = service();
    service.select_left("node1").unwrap();

    service.select(Side::Right, None).unwrap();
    assert_eq!(service.selected(Side::Left), Some("node1"));

    service.select(Side::Left, Some("")).unwrap();
    assert!(service.selection().is_none());
}

// ============================================================
// Transfer
// ============================================================

#[test]
fn given_selected_subtree_when_moving_right_then_grafts_under_lineage_chain() {
    let mut service = service();
    service.select_left("node1-3").unwrap();

    assert!(service.move_to_right("node1-3").unwrap());

    assert_eq!(
        service.right().items(),
        ["node1", "node1-3", "node1-3-1", "node1-3-2", "node1-3-3"]
    );
    assert_eq!(
        service.left().items(),
        [
            "node1", "node1-1", "node1-2", "node2", "node2-1", "node2-1-1", "node2-1-2",
            "node2-2"
        ]
    );
    // previous position 3 now holds node2
    assert_eq!(service.selected(Side::Left), Some("node2"));
}

#[test]
fn given_last_children_when_moving_right_then_prunes_emptied_parent() {
    let mut service = service();

    service.move_to_right("node2-2").unwrap();
    assert_eq!(service.selected(Side::Left), Some("node2-1-2"));

    service.move_to_right("node2-1").unwrap();

    assert!(!service.left().tree().contains("node2"));
    assert_eq!(service.selected(Side::Left), Some("node1-3-3"));
    assert_eq!(
        service.right().items(),
        ["node2", "node2-2", "node2-1", "node2-1-1", "node2-1-2"]
    );
}

#[test]
fn given_moved_subtree_when_moving_back_left_then_reselects_in_right_pane() {
    let mut service = service();
    service.move_to_right("node2-2").unwrap();
    service.move_to_right("node2-1").unwrap();

    assert!(service.move_to_left("node2-2").unwrap());

    assert_eq!(
        service.left().items().last().map(String::as_str),
        Some("node2-2")
    );
    assert_eq!(service.selected(Side::Right), Some("node2-1"));
    assert_eq!(service.selected(Side::Left), None);
}

#[test]
fn given_whole_tree_moved_when_source_empties_then_selection_is_cleared() {
    let mut service = service();

    service.move_to_right("node1").unwrap();
    service.move_to_right("node2").unwrap();

    assert!(service.left().items().is_empty());
    assert!(service.selection().is_none());
    assert_eq!(service.right().tree(), &TreeArena::from_node(&Node::seed()).unwrap());
}

#[test]
fn given_empty_root_or_unknown_id_when_moving_then_nothing_changes() {
    let mut service = service();
    service.select_left("node1").unwrap();

    assert!(!service.move_to_right("").unwrap());
    assert!(!service.move_to_right(ROOT_ID).unwrap());
    assert!(!service.move_to_right("missing").unwrap());
    assert!(!service.move_to_left("node1").unwrap());

    assert_eq!(service.left().items().len(), 12);
    assert_eq!(service.selected(Side::Left), Some("node1"));
}

#[test]
fn given_trees_when_transferring_then_inputs_are_untouched() {
    let source = TreeArena::from_node(&Node::seed()).unwrap();
    let dest = TreeArena::with_root(ROOT_ID);

    let moved = transfer(&source, &dest, "node1-2").unwrap().expect("moved");

    assert_eq!(moved.previous_index, 2);
    assert_eq!(moved.dest_items, ["node1", "node1-2"]);
    assert_eq!(moved.source_items.len(), 11);
    assert!(source.contains("node1-2"));
    assert!(dest.flatten_except_root().is_empty());
}

// ============================================================
// Reorder
// ============================================================

#[test]
fn given_selected_node_when_moving_up_then_reorders_and_refreshes_affordances() {
    let mut service = service();
    service.select_left("node1-2").unwrap();

    assert!(service.move_up().unwrap());

    assert_eq!(&service.left().items()[..3], ["node1", "node1-2", "node1-1"]);
    assert_eq!(service.selected(Side::Left), Some("node1-2"));
    assert!(!service.can_move_up());
    assert!(service.can_move_down());
}

#[test]
fn given_selection_in_right_pane_when_moving_down_then_reorders_right_pane() {
    let mut service = service();
    service.move_to_right("node1-1").unwrap();
    service.move_to_right("node2-2").unwrap();
    service.select_right("node1-1").unwrap();

    assert!(service.move_down().unwrap());

    assert_eq!(service.right().items(), ["node2", "node2-2", "node1", "node1-1"]);
    assert_eq!(service.left().items().len(), 10);
}

#[test]
fn given_unmovable_selection_when_moving_then_state_is_unchanged() {
    let mut service = service();
    service.select_left("node2-2").unwrap();
    let before = service.left().clone();

    assert!(!service.move_down().unwrap());

    assert_eq!(service.left(), &before);
    assert_eq!(service.selected(Side::Left), Some("node2-2"));
}

#[test]
fn given_no_selection_when_moving_then_nothing_happens() {
    let mut service = service();
    assert!(!service.move_up().unwrap());
    assert!(!service.move_down().unwrap());
}
