//! Owned node value: the structural form of a tree used for seeds and snapshots.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Reserved identifier of the root of both panes.
pub const ROOT_ID: &str = "(root)";

/// A labelled tree node with ordered children.
///
/// An empty `children` list denotes a leaf. Two nodes are equal when their
/// identifiers and their ordered children are equal, recursively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    pub fn leaf(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            children: Vec::new(),
        }
    }

    pub fn branch(id: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            id: id.into(),
            children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// The built-in sample hierarchy used when no seed file is configured.
    pub fn seed() -> Self {
        Node::branch(
            ROOT_ID,
            vec![
                Node::branch(
                    "node1",
                    vec![
                        Node::leaf("node1-1"),
                        Node::leaf("node1-2"),
                        Node::branch(
                            "node1-3",
                            vec![
                                Node::leaf("node1-3-1"),
                                Node::leaf("node1-3-2"),
                                Node::leaf("node1-3-3"),
                            ],
                        ),
                    ],
                ),
                Node::branch(
                    "node2",
                    vec![
                        Node::branch(
                            "node2-1",
                            vec![Node::leaf("node2-1-1"), Node::leaf("node2-1-2")],
                        ),
                        Node::leaf("node2-2"),
                    ],
                ),
            ],
        )
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
