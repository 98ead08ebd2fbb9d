//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the tree invariants.
/// These are independent of configuration, I/O and presentation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("node not found: {0}")]
    NotFound(String),

    #[error("operation not permitted on root: {0}")]
    InvalidRoot(String),

    #[error("lineage mismatch: expected root {expected}, found {found}")]
    LineageMismatch { expected: String, found: String },

    #[error("duplicate node id: {0}")]
    DuplicateId(String),

    #[error("internal tree operation failed: {0}")]
    Internal(String),
}

/// Result type for tree operations.
pub type DomainResult<T> = Result<T, DomainError>;
