//! Structural merge of two trees sharing a root identifier.

use generational_arena::Index;
use tracing::{debug, instrument};

use crate::domain::arena::TreeArena;
use crate::domain::error::{DomainError, DomainResult};

impl TreeArena {
    /// Merges `source` into a fresh copy of `self`.
    ///
    /// Children are matched by identifier level by level: matched pairs merge
    /// recursively in target order, unmatched target children are kept as-is,
    /// and unmatched source children are appended in source order. A side
    /// without children takes the other side's children wholesale.
    ///
    /// # Errors
    /// * `LineageMismatch` if the root identifiers differ.
    /// * `DuplicateId` if `source` carries an id that `self` holds elsewhere.
    #[instrument(level = "debug", skip(self, source), fields(root = %self.root_id()))]
    pub fn merge(&self, source: &TreeArena) -> DomainResult<TreeArena> {
        if self.root_id() != source.root_id() {
            return Err(DomainError::LineageMismatch {
                expected: self.root_id().to_string(),
                found: source.root_id().to_string(),
            });
        }
        let mut merged = TreeArena::with_root(self.root_id());
        let root = merged.root();
        merged.merge_children(root, (self, self.root()), (source, source.root()))?;
        debug!("merge: {} nodes after merge", merged.len());
        Ok(merged)
    }

    fn merge_children(
        &mut self,
        into: Index,
        (target, t_idx): (&TreeArena, Index),
        (source, s_idx): (&TreeArena, Index),
    ) -> DomainResult<()> {
        let t_children = &target.node(t_idx).children;
        let s_children = &source.node(s_idx).children;

        if t_children.is_empty() {
            for &c in s_children {
                self.copy_subtree_from(source, c, into)?;
            }
            return Ok(());
        }
        if s_children.is_empty() {
            for &c in t_children {
                self.copy_subtree_from(target, c, into)?;
            }
            return Ok(());
        }

        for &tc in t_children {
            let id = target.node(tc).id();
            match source.child_by_id(s_idx, id) {
                Some(sc) => {
                    let merged = self.insert_node(id.to_string(), into)?;
                    self.merge_children(merged, (target, tc), (source, sc))?;
                }
                None => {
                    self.copy_subtree_from(target, tc, into)?;
                }
            }
        }
        for &sc in s_children {
            if target.child_by_id(t_idx, source.node(sc).id()).is_none() {
                self.copy_subtree_from(source, sc, into)?;
            }
        }
        Ok(())
    }
}
