//! Seed loading service
//!
//! Supplies the initial left-pane hierarchy: either the built-in sample or a
//! TOML document describing nested `id`/`children` tables.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{Node, TreeArena};
use crate::infrastructure::traits::FileSystem;

/// Service for loading and validating seed trees.
pub struct SeedService {
    fs: Arc<dyn FileSystem>,
}

impl SeedService {
    /// Create a new seed service.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Load the seed from `seed_file`, or the built-in sample when `None`.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&self, seed_file: Option<&Path>) -> ApplicationResult<Node> {
        let Some(path) = seed_file else {
            debug!("load: using built-in seed");
            return Ok(Node::seed());
        };
        if !self.fs.is_file(path) {
            return Err(ApplicationError::Seed {
                path: path.to_path_buf(),
                message: "not a file".to_string(),
            });
        }
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read seed", path)?;
        Self::parse(&content, path)
    }

    /// Parse and validate a seed document.
    ///
    /// # Errors
    /// Returns `ApplicationError::Seed` for malformed TOML, an empty root id or
    /// duplicate node ids.
    pub fn parse(content: &str, path: &Path) -> ApplicationResult<Node> {
        let seed_err = |message: String| ApplicationError::Seed {
            path: path.to_path_buf(),
            message,
        };
        let node: Node = toml::from_str(content).map_err(|e| seed_err(e.to_string()))?;
        if node.id.trim().is_empty() {
            return Err(seed_err("root id must not be empty".to_string()));
        }
        let tree = TreeArena::from_node(&node).map_err(|e| seed_err(e.to_string()))?;
        debug!("parse: {} nodes below {}", tree.len() - 1, tree.root_id());
        Ok(node)
    }
}
