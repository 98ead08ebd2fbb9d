//! Transfer controller
//!
//! Orchestrates cross-pane moves and in-pane reorders as single state
//! transitions: trees, flattened lists, affordances and preview are computed
//! completely before any of them replaces the current state.

use tracing::{debug, info, instrument};

use crate::application::selection::{reselect, Side};
use crate::application::ApplicationResult;
use crate::domain::{Direction, DomainError, DomainResult, Node, TreeArena};

/// One pane: its tree and the flattened, root-excluded id list derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pane {
    tree: TreeArena,
    items: Vec<String>,
}

impl Pane {
    pub fn new(tree: TreeArena) -> Self {
        let items = tree.flatten_except_root();
        Self { tree, items }
    }

    pub fn tree(&self) -> &TreeArena {
        &self.tree
    }

    /// Selectable ids in depth-first order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|i| i == id)
    }
}

/// Enabled state of the reorder controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Affordances {
    pub up: bool,
    pub down: bool,
}

impl Affordances {
    pub fn of(tree: &TreeArena, id: &str) -> Self {
        Self {
            up: tree.can_move_up(id),
            down: tree.can_move_down(id),
        }
    }
}

/// The selected node of one pane and everything derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub side: Side,
    pub id: String,
    pub affordances: Affordances,
    /// Lineage chain of the selected subtree, rooted at the pane root
    pub preview: TreeArena,
}

impl Selection {
    fn focus(side: Side, tree: &TreeArena, id: &str) -> DomainResult<Self> {
        let lineage = tree
            .extract_subtree(id)
            .ok_or_else(|| DomainError::NotFound(id.to_string()))?;
        Ok(Self {
            side,
            id: id.to_string(),
            affordances: Affordances::of(tree, id),
            preview: lineage.to_tree()?,
        })
    }
}

/// Outcome of moving one subtree from a source tree into a destination tree.
#[derive(Debug, Clone)]
pub struct Transfer {
    pub source: TreeArena,
    pub dest: TreeArena,
    pub source_items: Vec<String>,
    pub dest_items: Vec<String>,
    /// Position the moved id had in the source's flattened list
    pub previous_index: usize,
}

/// Moves the subtree rooted at `id` from `source` into `dest`.
///
/// The subtree is removed from a copy of `source` (pruning emptied ancestors)
/// and grafted into a copy of `dest` below its original ancestor chain.
/// Returns `None` for an empty id, the root, or an id not in `source`.
#[instrument(level = "debug", skip(source, dest))]
pub fn transfer(source: &TreeArena, dest: &TreeArena, id: &str) -> DomainResult<Option<Transfer>> {
    if id.is_empty() || id == source.root_id() {
        debug!("transfer: nothing to move for {:?}", id);
        return Ok(None);
    }
    let Some(lineage) = source.extract_subtree(id) else {
        debug!("transfer: {} not found", id);
        return Ok(None);
    };
    let previous_index = source
        .flatten_except_root()
        .iter()
        .position(|i| i == id)
        .unwrap_or_default();

    let new_source = source.without_subtree(id);
    let new_dest = dest.graft(&lineage)?;
    Ok(Some(Transfer {
        source_items: new_source.flatten_except_root(),
        dest_items: new_dest.flatten_except_root(),
        source: new_source,
        dest: new_dest,
        previous_index,
    }))
}

/// State of the two-pane transfer list.
///
/// At most one pane holds a selection at a time; picking in one pane clears
/// the other.
#[derive(Debug, Clone)]
pub struct TransferService {
    left: Pane,
    right: Pane,
    selection: Option<Selection>,
}

impl TransferService {
    /// Create a service over two trees sharing a root identifier.
    pub fn new(left: TreeArena, right: TreeArena) -> ApplicationResult<Self> {
        if left.root_id() != right.root_id() {
            return Err(DomainError::LineageMismatch {
                expected: left.root_id().to_string(),
                found: right.root_id().to_string(),
            }
            .into());
        }
        Ok(Self {
            left: Pane::new(left),
            right: Pane::new(right),
            selection: None,
        })
    }

    /// Left pane fully populated from `seed`, right pane an empty root.
    pub fn from_seed(seed: &Node) -> ApplicationResult<Self> {
        let left = TreeArena::from_node(seed)?;
        let right = TreeArena::with_root(seed.id.clone());
        Self::new(left, right)
    }

    pub fn pane(&self, side: Side) -> &Pane {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn left(&self) -> &Pane {
        &self.left
    }

    pub fn right(&self) -> &Pane {
        &self.right
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Selected id of `side`, if that pane holds the selection.
    pub fn selected(&self, side: Side) -> Option<&str> {
        self.selection
            .as_ref()
            .filter(|s| s.side == side)
            .map(|s| s.id.as_str())
    }

    pub fn affordances(&self) -> Affordances {
        self.selection
            .as_ref()
            .map(|s| s.affordances)
            .unwrap_or_default()
    }

    pub fn can_move_up(&self) -> bool {
        self.affordances().up
    }

    pub fn can_move_down(&self) -> bool {
        self.affordances().down
    }

    pub fn preview(&self) -> Option<&TreeArena> {
        self.selection.as_ref().map(|s| &s.preview)
    }

    /// Picks `id` in `side`, or clears that pane's selection for `None`/empty.
    ///
    /// The root and ids not present in the pane are ignored.
    #[instrument(level = "debug", skip(self))]
    pub fn select(&mut self, side: Side, id: Option<&str>) -> ApplicationResult<()> {
        let Some(id) = id.filter(|i| !i.is_empty()) else {
            if self.selected(side).is_some() {
                self.clear_selection();
            }
            return Ok(());
        };
        let tree = self.pane(side).tree();
        if id == tree.root_id() || !tree.contains(id) {
            debug!("select: ignoring {} in {} pane", id, side);
            return Ok(());
        }
        let selection = Selection::focus(side, tree, id)?;
        self.selection = Some(selection);
        Ok(())
    }

    pub fn select_left(&mut self, id: &str) -> ApplicationResult<()> {
        self.select(Side::Left, Some(id))
    }

    pub fn select_right(&mut self, id: &str) -> ApplicationResult<()> {
        self.select(Side::Right, Some(id))
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Moves `id` from the left pane into the right pane.
    pub fn move_to_right(&mut self, id: &str) -> ApplicationResult<bool> {
        self.move_across(Side::Left, id)
    }

    /// Moves `id` from the right pane into the left pane.
    pub fn move_to_left(&mut self, id: &str) -> ApplicationResult<bool> {
        self.move_across(Side::Right, id)
    }

    /// Moves `id` out of `from` into the other pane and reselects in `from`
    /// at the position the moved id occupied, clamped to the shortened list.
    /// Returns whether anything moved.
    #[instrument(level = "debug", skip(self))]
    pub fn move_across(&mut self, from: Side, id: &str) -> ApplicationResult<bool> {
        let source = self.pane(from).tree();
        let dest = self.pane(from.other()).tree();
        let Some(moved) = transfer(source, dest, id)? else {
            return Ok(false);
        };

        let source_pane = Pane {
            tree: moved.source,
            items: moved.source_items,
        };
        let dest_pane = Pane {
            tree: moved.dest,
            items: moved.dest_items,
        };
        let selection = match reselect(source_pane.items(), moved.previous_index) {
            Some(next) => Some(Selection::focus(from, source_pane.tree(), &next)?),
            None => None,
        };

        info!(
            "moved {} from {} to {} pane ({} selected)",
            id,
            from,
            from.other(),
            selection.as_ref().map(|s| s.id.as_str()).unwrap_or("nothing")
        );
        match from {
            Side::Left => {
                self.left = source_pane;
                self.right = dest_pane;
            }
            Side::Right => {
                self.right = source_pane;
                self.left = dest_pane;
            }
        }
        self.selection = selection;
        Ok(true)
    }

    pub fn move_up(&mut self) -> ApplicationResult<bool> {
        self.reorder(Direction::Up)
    }

    pub fn move_down(&mut self) -> ApplicationResult<bool> {
        self.reorder(Direction::Down)
    }

    /// Reorders the selected node of whichever pane holds the selection and
    /// recomputes that pane's list and affordances. Returns whether the
    /// sibling order changed.
    #[instrument(level = "debug", skip(self))]
    pub fn reorder(&mut self, direction: Direction) -> ApplicationResult<bool> {
        let Some((side, id)) = self.selection.as_ref().map(|s| (s.side, s.id.clone())) else {
            return Ok(false);
        };
        let mut tree = self.pane(side).tree().clone();
        if !tree.move_sibling(&id, direction) {
            debug!("reorder: {} cannot move {}", id, direction);
            return Ok(false);
        }

        let pane = Pane::new(tree);
        let selection = Selection::focus(side, pane.tree(), &id)?;
        match side {
            Side::Left => self.left = pane,
            Side::Right => self.right = pane,
        }
        self.selection = Some(selection);
        Ok(true)
    }
}
