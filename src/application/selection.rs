//! Pane identity and the default-selection policy applied after a transfer.

use std::fmt;

/// One of the two independently selectable panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Picks the item at `min(previous_index, len - 1)`, or nothing for an empty list.
pub fn reselect(items: &[String], previous_index: usize) -> Option<String> {
    let last = items.len().checked_sub(1)?;
    items.get(previous_index.min(last)).cloned()
}
