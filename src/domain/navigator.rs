//! Read-only lookups: a node, its path from the root, and its parent.

use generational_arena::Index;
use tracing::instrument;

use crate::domain::arena::{TreeArena, TreeNode};

/// A node located in a tree together with its root-inclusive id path.
#[derive(Debug, Clone)]
pub struct Located<'a> {
    pub index: Index,
    pub node: &'a TreeNode,
    /// Identifiers from the root down to and including `node`
    pub path: Vec<String>,
}

impl Located<'_> {
    pub fn id(&self) -> &str {
        self.node.id()
    }

    /// Position of the child `child` among this node's children.
    pub fn position_of(&self, child: Index) -> Option<usize> {
        self.node.children.iter().position(|&c| c == child)
    }
}

impl TreeArena {
    /// Locates `id` and its path from the root.
    #[instrument(level = "trace", skip(self))]
    pub fn find(&self, id: &str) -> Option<Located<'_>> {
        let index = self.index_of(id)?;
        let mut path = Vec::new();
        let mut cursor = Some(index);
        while let Some(idx) = cursor {
            let node = self.node(idx);
            path.push(node.data.id.clone());
            cursor = node.parent;
        }
        path.reverse();
        Some(Located {
            index,
            node: self.node(index),
            path,
        })
    }

    /// Root-inclusive path to `id`, empty when `id` is absent.
    pub fn find_path(&self, id: &str) -> Vec<String> {
        self.find(id).map(|l| l.path).unwrap_or_default()
    }

    pub fn find_node(&self, id: &str) -> Option<&TreeNode> {
        self.find(id).map(|l| l.node)
    }

    /// Parent of `id` with the path to the parent. Absent for the root and
    /// for unknown ids.
    #[instrument(level = "trace", skip(self))]
    pub fn find_parent(&self, id: &str) -> Option<Located<'_>> {
        let path = self.find_path(id);
        if path.len() < 2 {
            return None;
        }
        self.find(&path[path.len() - 2])
    }

    /// Direct child of `parent` carrying `id`.
    pub fn child_by_id(&self, parent: Index, id: &str) -> Option<Index> {
        self.get_node(parent)?
            .children
            .iter()
            .copied()
            .find(|&c| self.node(c).id() == id)
    }
}
