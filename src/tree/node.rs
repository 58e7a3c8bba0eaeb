//! Tree nodes and the player role derived from depth

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::identifiers::NodeId;

/// Which side chooses at a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Maximizer,
    Minimizer,
}

impl Role {
    /// Role of a node at the given depth (root = 0). Even depths maximize.
    pub fn for_depth(depth: usize) -> Self {
        if depth.is_multiple_of(2) {
            Role::Maximizer
        } else {
            Role::Minimizer
        }
    }

    /// Role of this node's children.
    pub fn opponent(self) -> Self {
        match self {
            Role::Maximizer => Role::Minimizer,
            Role::Minimizer => Role::Maximizer,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Maximizer => "max",
            Role::Minimizer => "min",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A position in the game tree.
///
/// Nodes are only created by the tree builder; `role` and `depth` always
/// agree with the node's position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    parent_id: Option<NodeId>,
    value: i32,
    role: Role,
    depth: usize,
    children: Vec<Node>,
}

impl Node {
    pub(crate) fn new(
        id: NodeId,
        parent_id: Option<NodeId>,
        value: i32,
        depth: usize,
        children: Vec<Node>,
    ) -> Self {
        Self {
            id,
            parent_id,
            value,
            role: Role::for_depth(depth),
            depth,
            children,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Declared parent, `None` for the root.
    pub fn parent_id(&self) -> Option<NodeId> {
        self.parent_id
    }

    /// Stored score. Only meaningful for leaves during search.
    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Children in record encounter order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Pre-order depth-first walk over this node and its descendants.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    /// Find a descendant (or this node) by id.
    pub fn find(&self, id: NodeId) -> Option<&Node> {
        self.iter().find(|node| node.id == id)
    }
}
