//! Two-pass assembly of a rooted, role-annotated tree from flat records

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span, warn};

use super::{node::Node, record::RawRecord};
use crate::{Error, Result, identifiers::NodeId, search::SearchResult};

/// Parent value marking a record as the root.
pub const DEFAULT_ROOT_SENTINEL: i32 = -1;

/// What to do when more than one record carries the root sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RootPolicy {
    /// Fail with [`Error::MultipleRoots`].
    #[default]
    Reject,
    /// Keep the first root encountered and ignore the rest.
    FirstFound,
}

/// What to do when two records share an id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// The later record overwrites parent and value; the node keeps the
    /// encounter position of its first occurrence.
    #[default]
    LastWins,
    /// Fail with [`Error::DuplicateNodeId`].
    Reject,
}

/// Configuration for tree construction.
///
/// # Examples
///
/// ```
/// use alphabeta::tree::{BuildConfig, DuplicatePolicy, RootPolicy};
///
/// let config = BuildConfig::new()
///     .with_root_policy(RootPolicy::FirstFound)
///     .with_duplicate_policy(DuplicatePolicy::Reject)
///     .with_root_sentinel(0);
/// assert_eq!(config.root_sentinel, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Parent id that marks the root record
    pub root_sentinel: i32,
    /// Resolution for several root records
    pub root_policy: RootPolicy,
    /// Resolution for repeated ids
    pub duplicate_policy: DuplicatePolicy,
}

impl BuildConfig {
    /// Create a configuration with sentinel `-1`, rejecting multiple roots
    /// and resolving duplicates last-write-wins.
    pub fn new() -> Self {
        Self {
            root_sentinel: DEFAULT_ROOT_SENTINEL,
            root_policy: RootPolicy::default(),
            duplicate_policy: DuplicatePolicy::default(),
        }
    }

    /// Set the parent value that marks the root.
    pub fn with_root_sentinel(mut self, sentinel: i32) -> Self {
        self.root_sentinel = sentinel;
        self
    }

    /// Set the multiple-root resolution.
    pub fn with_root_policy(mut self, policy: RootPolicy) -> Self {
        self.root_policy = policy;
        self
    }

    /// Set the duplicate-id resolution.
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A built game tree.
///
/// Only nodes reachable from the root are kept. The tree is immutable once
/// built and can be searched any number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameTree {
    root: Node,
    node_count: usize,
}

impl GameTree {
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Number of nodes reachable from the root, root included.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Depth of the deepest node (0 for a single-node tree).
    pub fn max_depth(&self) -> usize {
        self.root.iter().map(Node::depth).max().unwrap_or(0)
    }

    /// Pre-order walk over every node.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.root.iter()
    }

    /// Run alpha-beta search from the root.
    pub fn search(&self) -> SearchResult {
        crate::search::search(&self.root)
    }
}

/// Build a tree with the default [`BuildConfig`].
pub fn build<I>(records: I) -> Result<GameTree>
where
    I: IntoIterator<Item = RawRecord>,
{
    build_with(records, &BuildConfig::default())
}

struct Entry {
    id: NodeId,
    parent: i32,
    value: i32,
}

/// Build a tree from records in encounter order.
///
/// Assembly recurses once per level, as does dropping the tree, so the
/// supported depth is bounded by the thread's stack.
pub fn build_with<I>(records: I, config: &BuildConfig) -> Result<GameTree>
where
    I: IntoIterator<Item = RawRecord>,
{
    let _span = debug_span!("build_tree").entered();

    // First pass: one entry per id, in first-seen order.
    let mut entries: Vec<Entry> = Vec::new();
    let mut index: HashMap<NodeId, usize> = HashMap::new();
    for record in records {
        let id = NodeId::new(record.id);
        match index.get(&id) {
            Some(&slot) => match config.duplicate_policy {
                DuplicatePolicy::Reject => return Err(Error::DuplicateNodeId { id }),
                DuplicatePolicy::LastWins => {
                    warn!(%id, "duplicate node id, later record overwrites earlier");
                    let entry = &mut entries[slot];
                    entry.parent = record.parent_id;
                    entry.value = record.value;
                }
            },
            None => {
                index.insert(id, entries.len());
                entries.push(Entry {
                    id,
                    parent: record.parent_id,
                    value: record.value,
                });
            }
        }
    }

    // Second pass: wire children to parents, collect roots.
    let mut children: HashMap<NodeId, Vec<usize>> = HashMap::new();
    let mut roots: Vec<usize> = Vec::new();
    for (slot, entry) in entries.iter().enumerate() {
        if entry.parent == config.root_sentinel {
            roots.push(slot);
            continue;
        }
        let parent = NodeId::new(entry.parent);
        if parent == entry.id || !index.contains_key(&parent) {
            debug!(id = %entry.id, %parent, "dropping record with unresolvable parent");
            continue;
        }
        children.entry(parent).or_default().push(slot);
    }

    let root_slot = match roots.as_slice() {
        [] => {
            return Err(Error::NoRootFound {
                sentinel: config.root_sentinel,
            });
        }
        [only] => *only,
        [first, ..] => match config.root_policy {
            RootPolicy::Reject => {
                return Err(Error::MultipleRoots {
                    ids: roots.iter().map(|&slot| entries[slot].id).collect(),
                });
            }
            RootPolicy::FirstFound => {
                warn!(
                    root = %entries[*first].id,
                    candidates = roots.len(),
                    "multiple roots found, keeping the first"
                );
                *first
            }
        },
    };

    let root = assemble(root_slot, 0, &entries, &children, config.root_sentinel);
    let node_count = root.iter().count();
    if node_count < entries.len() {
        debug!(dropped = entries.len() - node_count, "records unreachable from root");
    }
    debug!(root = %root.id(), nodes = node_count, "tree built");

    Ok(GameTree { root, node_count })
}

// Every slot sits in at most one children list and the root slot in none,
// so each slot is assembled at most once.
fn assemble(
    slot: usize,
    depth: usize,
    entries: &[Entry],
    children: &HashMap<NodeId, Vec<usize>>,
    sentinel: i32,
) -> Node {
    let entry = &entries[slot];
    let kids = children
        .get(&entry.id)
        .map(|slots| {
            slots
                .iter()
                .map(|&child| assemble(child, depth + 1, entries, children, sentinel))
                .collect()
        })
        .unwrap_or_default();
    let parent = (entry.parent != sentinel).then(|| NodeId::new(entry.parent));
    Node::new(entry.id, parent, entry.value, depth, kids)
}
