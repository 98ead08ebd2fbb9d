use std::collections::HashMap;
use std::fmt;

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::node::Node;

/// Data payload for tree nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    /// Identifier, unique within one tree
    pub id: String,
}

impl fmt::Display for NodeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// Tree node in the arena-based hierarchy structure.
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub data: NodeData,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes in the arena, in sibling order
    pub children: Vec<Index>,
}

impl TreeNode {
    pub fn id(&self) -> &str {
        &self.data.id
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Arena-based tree: the state of one pane.
///
/// Uses a generational arena for memory-safe node references and keeps an
/// identifier index so lookups are O(1). The root always exists; a tree whose
/// root has no children is the empty pane. `Clone` is a full deep copy that
/// shares nothing with the original.
#[derive(Debug, Clone)]
pub struct TreeArena {
    arena: Arena<TreeNode>,
    root: Index,
    ids: HashMap<String, Index>,
}

impl TreeArena {
    /// Creates a tree consisting of the root only.
    pub fn with_root(id: impl Into<String>) -> Self {
        let id = id.into();
        let mut arena = Arena::new();
        let root = arena.insert(TreeNode {
            data: NodeData { id: id.clone() },
            parent: None,
            children: Vec::new(),
        });
        let mut ids = HashMap::new();
        ids.insert(id, root);
        Self { arena, root, ids }
    }

    /// Builds an arena from an owned node value, preserving sibling order.
    #[instrument(level = "debug", skip(node), fields(root = %node.id))]
    pub fn from_node(node: &Node) -> DomainResult<Self> {
        let mut tree = Self::with_root(node.id.clone());
        // reversed push keeps sibling insertion order when popping
        let mut stack: Vec<(&Node, Index)> = node
            .children
            .iter()
            .rev()
            .map(|c| (c, tree.root))
            .collect();

        while let Some((current, parent_idx)) = stack.pop() {
            let current_idx = tree.insert_node(current.id.clone(), parent_idx)?;
            for child in current.children.iter().rev() {
                stack.push((child, current_idx));
            }
        }
        Ok(tree)
    }

    /// Snapshot of the whole tree as an owned node value.
    pub fn to_node(&self) -> Node {
        self.node_value(self.root)
    }

    /// Snapshot of the subtree rooted at `idx`.
    pub fn node_value(&self, idx: Index) -> Node {
        let node = self.node(idx);
        Node {
            id: node.data.id.clone(),
            children: node.children.iter().map(|&c| self.node_value(c)).collect(),
        }
    }

    /// Appends a new node as the last child of `parent`.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, id: String, parent: Index) -> DomainResult<Index> {
        if self.ids.contains_key(&id) {
            return Err(DomainError::DuplicateId(id));
        }
        if !self.arena.contains(parent) {
            return Err(DomainError::Internal(format!(
                "parent of {id} is not part of this tree"
            )));
        }
        let node_idx = self.arena.insert(TreeNode {
            data: NodeData { id: id.clone() },
            parent: Some(parent),
            children: Vec::new(),
        });
        self.arena[parent].children.push(node_idx);
        self.ids.insert(id, node_idx);
        Ok(node_idx)
    }

    /// Deep-copies the subtree at `src_idx` of `src` under `parent` of this tree.
    pub fn copy_subtree_from(
        &mut self,
        src: &TreeArena,
        src_idx: Index,
        parent: Index,
    ) -> DomainResult<Index> {
        let top = self.insert_node(src.node(src_idx).data.id.clone(), parent)?;
        let mut stack: Vec<(Index, Index)> = src
            .node(src_idx)
            .children
            .iter()
            .rev()
            .map(|&c| (c, top))
            .collect();

        while let Some((current, new_parent)) = stack.pop() {
            let new_idx = self.insert_node(src.node(current).data.id.clone(), new_parent)?;
            for &child in src.node(current).children.iter().rev() {
                stack.push((child, new_idx));
            }
        }
        Ok(top)
    }

    /// Detaches the subtree at `idx` from its parent and frees its nodes.
    /// The root cannot be detached.
    pub(crate) fn detach(&mut self, idx: Index) -> DomainResult<()> {
        let parent = self
            .node(idx)
            .parent
            .ok_or_else(|| DomainError::InvalidRoot(self.node(idx).data.id.clone()))?;
        self.arena[parent].children.retain(|&c| c != idx);

        let doomed: Vec<Index> = self.iter_from(idx).map(|(i, _)| i).collect();
        for i in doomed {
            if let Some(node) = self.arena.remove(i) {
                self.ids.remove(&node.data.id);
            }
        }
        Ok(())
    }

    /// Swaps two positions in the ordered children of `parent`.
    pub(crate) fn swap_children(&mut self, parent: Index, a: usize, b: usize) {
        self.arena[parent].children.swap(a, b);
    }

    /// Indices handed out by this arena stay valid until their node is detached.
    pub(crate) fn node(&self, idx: Index) -> &TreeNode {
        &self.arena[idx]
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, idx: Index) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    pub fn index_of(&self, id: &str) -> Option<Index> {
        self.ids.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains_key(id)
    }

    pub fn root(&self) -> Index {
        self.root
    }

    pub fn root_id(&self) -> &str {
        &self.node(self.root).data.id
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// True when the root has no children.
    pub fn is_empty(&self) -> bool {
        self.node(self.root).children.is_empty()
    }

    /// Pre-order, left-to-right traversal of the whole tree.
    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> TreeIterator {
        TreeIterator::new(self, self.root)
    }

    /// Pre-order traversal of the subtree rooted at `idx`.
    pub fn iter_from(&self, idx: Index) -> TreeIterator {
        TreeIterator::new(self, idx)
    }

    /// All identifiers in depth-first order.
    pub fn flatten(&self) -> Vec<String> {
        self.iter().map(|(_, n)| n.data.id.clone()).collect()
    }

    /// All identifiers in depth-first order, root excluded. Feeds a pane's
    /// selection control.
    #[instrument(level = "debug", skip(self), fields(root = %self.root_id()))]
    pub fn flatten_except_root(&self) -> Vec<String> {
        self.iter().skip(1).map(|(_, n)| n.data.id.clone()).collect()
    }
}

impl PartialEq for TreeArena {
    fn eq(&self, other: &Self) -> bool {
        self.to_node() == other.to_node()
    }
}

impl Eq for TreeArena {}

pub struct TreeIterator<'a> {
    arena: &'a TreeArena,
    stack: Vec<Index>,
}

impl<'a> TreeIterator<'a> {
    fn new(arena: &'a TreeArena, start: Index) -> Self {
        let mut stack = Vec::new();
        if arena.get_node(start).is_some() {
            stack.push(start);
        }
        Self { arena, stack }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let current_idx = self.stack.pop()?;
        let node = self.arena.get_node(current_idx)?;
        // Push children in reverse order for left-to-right traversal
        for &child in node.children.iter().rev() {
            self.stack.push(child);
        }
        Some((current_idx, node))
    }
}
