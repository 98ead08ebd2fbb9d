//! Structural transforms: cascading removal and sibling reordering.
//!
//! `&mut self` methods are the destructive forms and operate in place on a tree
//! the caller owns exclusively. The `&self` forms copy first and leave the
//! receiver untouched.

use std::fmt;

use generational_arena::Index;
use tracing::{debug, instrument, trace};

use crate::domain::arena::TreeArena;

/// Direction of a sibling reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// The node that actually changes position for a reorder request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MovableUnit {
    parent: Index,
    position: usize,
    neighbour: usize,
}

impl TreeArena {
    /// Removes the subtree rooted at `id`, then prunes every ancestor left
    /// without children, stopping below the root.
    ///
    /// Returns the heads of all removed subtrees, `id` first. Root and unknown
    /// ids leave the tree unchanged and return an empty list.
    #[instrument(level = "debug", skip(self))]
    pub fn remove_subtree(&mut self, id: &str) -> Vec<String> {
        let mut removed = Vec::new();
        let Some(mut target) = self.index_of(id) else {
            debug!("remove_subtree: {} not found", id);
            return removed;
        };

        while let Some(parent) = self.node(target).parent {
            let target_id = self.node(target).id().to_string();
            if self.detach(target).is_err() {
                break;
            }
            removed.push(target_id);
            if !self.node(parent).is_leaf() {
                break;
            }
            trace!("remove_subtree: pruning empty {}", self.node(parent).id());
            target = parent;
        }
        removed
    }

    /// Non-destructive form of [`TreeArena::remove_subtree`].
    pub fn without_subtree(&self, id: &str) -> TreeArena {
        let mut copy = self.clone();
        copy.remove_subtree(id);
        copy
    }

    /// Finds the nearest ancestor-or-self of `id` that is not at the boundary
    /// among its siblings in `direction`. A first child can only move up by
    /// moving its parent up, and so on towards the root.
    fn movable_unit(&self, id: &str, direction: Direction) -> Option<MovableUnit> {
        let mut current = self.index_of(id)?;
        loop {
            let parent = self.node(current).parent?;
            let siblings = &self.node(parent).children;
            let position = siblings.iter().position(|&c| c == current)?;
            let at_boundary = match direction {
                Direction::Up => position == 0,
                Direction::Down => position + 1 == siblings.len(),
            };
            if !at_boundary {
                let neighbour = match direction {
                    Direction::Up => position - 1,
                    Direction::Down => position + 1,
                };
                return Some(MovableUnit {
                    parent,
                    position,
                    neighbour,
                });
            }
            current = parent;
        }
    }

    pub fn can_move(&self, id: &str, direction: Direction) -> bool {
        self.movable_unit(id, direction).is_some()
    }

    pub fn can_move_up(&self, id: &str) -> bool {
        self.can_move(id, Direction::Up)
    }

    pub fn can_move_down(&self, id: &str) -> bool {
        self.can_move(id, Direction::Down)
    }

    /// Swaps the movable unit of `id` with its neighbour in `direction`.
    /// Returns whether the sibling order changed.
    #[instrument(level = "debug", skip(self))]
    pub fn move_sibling(&mut self, id: &str, direction: Direction) -> bool {
        match self.movable_unit(id, direction) {
            Some(unit) => {
                trace!(
                    "move_sibling: {} swaps positions {} and {}",
                    id,
                    unit.position,
                    unit.neighbour
                );
                self.swap_children(unit.parent, unit.position, unit.neighbour);
                true
            }
            None => false,
        }
    }

    pub fn move_up(&mut self, id: &str) -> bool {
        self.move_sibling(id, Direction::Up)
    }

    pub fn move_down(&mut self, id: &str) -> bool {
        self.move_sibling(id, Direction::Down)
    }

    /// Non-destructive form of [`TreeArena::move_sibling`].
    pub fn moved(&self, id: &str, direction: Direction) -> TreeArena {
        let mut copy = self.clone();
        copy.move_sibling(id, direction);
        copy
    }
}
