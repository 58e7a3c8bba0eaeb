//! Search results and the prune log
//!
//! `Display` on [`SearchResult`] produces the text wire format: a first line
//! `from to value`, then one `parent child kind` line per pruned sibling.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Result, identifiers::NodeId};

/// Which bound triggered a cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PruneKind {
    /// A minimizing node fell to or below alpha.
    Alpha,
    /// A maximizing node reached or exceeded beta.
    Beta,
}

impl PruneKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PruneKind::Alpha => "alpha",
            PruneKind::Beta => "beta",
        }
    }
}

impl fmt::Display for PruneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sibling subtree skipped by a cutoff at `parent_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PruneRecord {
    pub parent_id: NodeId,
    pub child_id: NodeId,
    pub kind: PruneKind,
}

impl PruneRecord {
    pub fn new(parent_id: NodeId, child_id: NodeId, kind: PruneKind) -> Self {
        Self {
            parent_id,
            child_id,
            kind,
        }
    }
}

impl fmt::Display for PruneRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.parent_id, self.child_id, self.kind)
    }
}

/// Outcome of one search: the chosen move and every cutoff in discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Always the root id
    pub best_move_from: NodeId,
    /// Chosen child, or the root itself when the root is a leaf
    pub best_move_to: NodeId,
    pub best_value: i32,
    pub prunes: Vec<PruneRecord>,
    /// Nodes whose value was computed, root excluded
    pub nodes_evaluated: usize,
}

impl SearchResult {
    /// First line of the wire format.
    pub fn best_move_line(&self) -> String {
        format!("{} {} {}", self.best_move_from, self.best_move_to, self.best_value)
    }

    /// Whether the subtree under `child` was skipped.
    pub fn was_pruned(&self, child: NodeId) -> bool {
        self.prunes.iter().any(|record| record.child_id == child)
    }

    /// Pretty-printed JSON document.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Number of cutoffs of the given kind.
    pub fn count(&self, kind: PruneKind) -> usize {
        self.prunes.iter().filter(|record| record.kind == kind).count()
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.best_move_line())?;
        for record in &self.prunes {
            writeln!(f, "{record}")?;
        }
        Ok(())
    }
}
