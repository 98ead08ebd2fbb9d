/*
Outline rendering for the terminal. The tree engine never builds display
output itself; this is the render collaborator for the CLI.
 */
use termtree::Tree;
use tracing::instrument;

use crate::domain::{Lineage, Node, TreeArena};

pub trait OutlineConvert {
    fn to_outline(&self) -> Tree<String>;
}

impl OutlineConvert for Node {
    fn to_outline(&self) -> Tree<String> {
        let leaves: Vec<_> = self.children.iter().map(|c| c.to_outline()).collect();
        Tree::new(self.id.clone()).with_leaves(leaves)
    }
}

impl OutlineConvert for TreeArena {
    #[instrument(level = "trace", skip(self))]
    fn to_outline(&self) -> Tree<String> {
        let root_idx = self.root();
        let mut tree = Tree::new(self.root_id().to_string());

        fn build_tree(arena: &TreeArena, node_idx: generational_arena::Index, parent_tree: &mut Tree<String>) {
            if let Some(node) = arena.get_node(node_idx) {
                for &child_idx in &node.children {
                    if let Some(child) = arena.get_node(child_idx) {
                        let mut child_tree = Tree::new(child.id().to_string());
                        build_tree(arena, child_idx, &mut child_tree);
                        parent_tree.push(child_tree);
                    }
                }
            }
        }

        build_tree(self, root_idx, &mut tree);
        tree
    }
}

impl OutlineConvert for Lineage {
    fn to_outline(&self) -> Tree<String> {
        self.to_node().to_outline()
    }
}
