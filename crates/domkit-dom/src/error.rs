//! DOM operation errors

use crate::NodeId;

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// Node id does not belong to this tree
    #[error("Node not found: {0}")]
    NotFound(NodeId),

    /// Tree shape violation, e.g. appending an ancestor to its descendant
    #[error("Hierarchy request error: {0}")]
    HierarchyRequest(&'static str),

    /// Tag or attribute name the host refuses
    #[error("Invalid character in name: {0:?}")]
    InvalidCharacter(String),

    /// Operation needs an element but got another node kind
    #[error("Invalid node type for {0}")]
    InvalidNodeType(NodeId),
}
