//! Node identifier type.
//!
//! Node ids come straight from the input records and double as the
//! externally visible move identifiers in search results.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a node in the game tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(i32);

impl NodeId {
    /// Create a new node identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use alphabeta::identifiers::NodeId;
    ///
    /// let id = NodeId::new(4);
    /// assert_eq!(id.get(), 4);
    /// ```
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Get the raw integer identifier.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for NodeId {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

impl From<NodeId> for i32 {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

impl PartialEq<i32> for NodeId {
    fn eq(&self, other: &i32) -> bool {
        self.0 == *other
    }
}
