//! Common test utilities for the alphabeta test suite.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use alphabeta::{GameTree, Node, NodeId, RawRecord, Role, build};
use rand::{Rng, rngs::StdRng};

/// Convert `(id, parent, value)` triples into records.
pub fn records(triples: &[(i32, i32, i32)]) -> Vec<RawRecord> {
    triples.iter().copied().map(RawRecord::from).collect()
}

/// Build a tree from triples, panicking on build errors.
pub fn tree(triples: &[(i32, i32, i32)]) -> GameTree {
    build(records(triples)).expect("test tree should build")
}

/// Look up a node by id.
pub fn node(tree: &GameTree, id: i32) -> &Node {
    tree.root()
        .find(NodeId::new(id))
        .unwrap_or_else(|| panic!("node {id} missing from tree"))
}

/// Write `contents` to `name` under `dir` and return the path.
pub fn write_tree_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("failed to write tree file");
    path
}

/// Plain minimax without pruning, used as a reference value.
pub fn minimax(node: &Node) -> i32 {
    let values = node.children().iter().map(minimax);
    match (node.is_leaf(), node.role()) {
        (true, _) => node.value(),
        (false, Role::Maximizer) => values.max().unwrap_or(i32::MIN),
        (false, Role::Minimizer) => values.min().unwrap_or(i32::MAX),
    }
}

/// Random tree with ids assigned in breadth-first order from 1.
///
/// Every internal node gets between 1 and `max_children` children until
/// `depth` is reached; leaf values fall in `-20..=20`.
pub fn random_tree(rng: &mut StdRng, depth: usize, max_children: usize) -> Vec<RawRecord> {
    let mut records = vec![RawRecord::new(1, -1, 0)];
    let mut frontier = vec![1];
    let mut next_id = 2;
    for level in 0..depth {
        let mut next_frontier = Vec::new();
        for &parent in &frontier {
            let count = rng.random_range(1..=max_children);
            for _ in 0..count {
                let value = if level + 1 == depth {
                    rng.random_range(-20..=20)
                } else {
                    0
                };
                records.push(RawRecord::new(next_id, parent, value));
                next_frontier.push(next_id);
                next_id += 1;
            }
        }
        frontier = next_frontier;
    }
    records
}
