//! Domain layer: the tree mutation engine
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod error;
pub mod lineage;
pub mod merge;
pub mod mutator;
pub mod navigator;
pub mod node;

pub use arena::{NodeData, TreeArena, TreeIterator, TreeNode};
pub use error::{DomainError, DomainResult};
pub use lineage::Lineage;
pub use mutator::Direction;
pub use navigator::Located;
pub use node::{Node, ROOT_ID};
