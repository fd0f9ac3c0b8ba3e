//! Signature-tree node identifiers with generational indices.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Node identifier with generational index for stale reference detection.
///
/// Signature trees store all nodes of one artifact in a single slot table.
/// The generation counter increments when a slot is reused after a subtree
/// is detached, allowing detection of stale references to removed nodes.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeId {
    /// Index into the tree's slot table.
    pub index: u32,
    /// Generation counter for stale reference detection.
    pub generation: u32,
}

impl NodeId {
    /// Creates a new node ID with the given index and generation.
    #[must_use]
    pub const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({}v{})", self.index, self.generation)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.index)
    }
}
