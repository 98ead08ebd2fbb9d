//! A detached subtree together with the ancestor ids it hung from.

use tracing::{debug, instrument};

use crate::domain::arena::TreeArena;
use crate::domain::error::DomainResult;
use crate::domain::node::Node;

/// Path from a tree's root down to a detached subtree.
///
/// `ancestors` runs from the root to the subtree's parent and is empty when
/// the subtree is the whole tree. The subtree is an independent copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lineage {
    ancestors: Vec<String>,
    subtree: TreeArena,
}

impl Lineage {
    pub fn ancestors(&self) -> &[String] {
        &self.ancestors
    }

    pub fn subtree(&self) -> &TreeArena {
        &self.subtree
    }

    /// Identifier of the detached node.
    pub fn id(&self) -> &str {
        self.subtree.root_id()
    }

    /// Identifier of the root of the tree the lineage was taken from.
    pub fn root_id(&self) -> &str {
        self.ancestors
            .first()
            .map(String::as_str)
            .unwrap_or_else(|| self.subtree.root_id())
    }

    /// Rebuilds the lineage as a single-child ancestor chain ending in the
    /// detached subtree.
    pub fn to_tree(&self) -> DomainResult<TreeArena> {
        let Some((root_id, rest)) = self.ancestors.split_first() else {
            return Ok(self.subtree.clone());
        };
        let mut chain = TreeArena::with_root(root_id.clone());
        let mut parent = chain.root();
        for id in rest {
            parent = chain.insert_node(id.clone(), parent)?;
        }
        chain.copy_subtree_from(&self.subtree, self.subtree.root(), parent)?;
        Ok(chain)
    }

    /// Single-child chain as an owned node value.
    pub fn to_node(&self) -> Node {
        self.ancestors
            .iter()
            .rev()
            .fold(self.subtree.to_node(), |child, id| {
                Node::branch(id.clone(), vec![child])
            })
    }
}

impl TreeArena {
    /// Copies the subtree rooted at `id` together with its ancestor path.
    /// Returns `None` when `id` is not in the tree.
    #[instrument(level = "debug", skip(self))]
    pub fn extract_subtree(&self, id: &str) -> Option<Lineage> {
        let located = self.find(id)?;
        let mut subtree = TreeArena::with_root(id);
        for &child in &located.node.children {
            let root = subtree.root();
            // ids are unique in the source, so a fresh arena cannot collide
            subtree.copy_subtree_from(self, child, root).ok()?;
        }

        let mut ancestors = located.path;
        ancestors.pop();
        debug!("extract_subtree: {} below {:?}", id, ancestors);
        Some(Lineage { ancestors, subtree })
    }

    /// Merges a lineage back into a copy of this tree, re-creating missing
    /// ancestors at the correct depth.
    pub fn graft(&self, lineage: &Lineage) -> DomainResult<TreeArena> {
        self.merge(&lineage.to_tree()?)
    }
}
