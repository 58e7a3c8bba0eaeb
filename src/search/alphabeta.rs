//! Minimax search with alpha-beta cutoffs
//!
//! Children are evaluated strictly left to right, so the prune log is fully
//! determined by the tree: the same tree always yields the same records in
//! the same order.

use tracing::{debug, debug_span, trace};

use super::trace::{PruneKind, PruneRecord, SearchResult};
use crate::tree::{Node, Role};

/// Recursive evaluator that owns the prune log of one search.
#[derive(Debug, Default)]
pub struct Evaluator {
    prunes: Vec<PruneRecord>,
    nodes_evaluated: usize,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of `node` under the window `(alpha, beta)`, dispatched on the
    /// node's role. Leaves return their stored value.
    pub fn evaluate(&mut self, node: &Node, mut alpha: i32, mut beta: i32) -> i32 {
        self.nodes_evaluated += 1;
        let children = node.children();
        if children.is_empty() {
            return node.value();
        }

        match node.role() {
            Role::Maximizer => {
                let mut value = i32::MIN;
                for (index, child) in children.iter().enumerate() {
                    debug_assert_eq!(child.role(), Role::Minimizer);
                    value = value.max(self.evaluate(child, alpha, beta));
                    if value >= beta {
                        self.prune(node, &children[index + 1..], PruneKind::Beta);
                        return value;
                    }
                    alpha = alpha.max(value);
                }
                value
            }
            Role::Minimizer => {
                let mut value = i32::MAX;
                for (index, child) in children.iter().enumerate() {
                    debug_assert_eq!(child.role(), Role::Maximizer);
                    value = value.min(self.evaluate(child, alpha, beta));
                    if value <= alpha {
                        self.prune(node, &children[index + 1..], PruneKind::Alpha);
                        return value;
                    }
                    beta = beta.min(value);
                }
                value
            }
        }
    }

    fn prune(&mut self, parent: &Node, skipped: &[Node], kind: PruneKind) {
        for child in skipped {
            trace!(parent = %parent.id(), child = %child.id(), %kind, "cutoff");
            self.prunes.push(PruneRecord::new(parent.id(), child.id(), kind));
        }
    }

    /// Cutoffs recorded so far, in discovery order.
    pub fn prunes(&self) -> &[PruneRecord] {
        &self.prunes
    }

    /// Number of `evaluate` calls so far.
    pub fn nodes_evaluated(&self) -> usize {
        self.nodes_evaluated
    }

    pub fn into_prunes(self) -> Vec<PruneRecord> {
        self.prunes
    }
}

/// Evaluate `node` under `(alpha, beta)`, appending any cutoffs to `log`.
pub fn evaluate(node: &Node, alpha: i32, beta: i32, log: &mut Vec<PruneRecord>) -> i32 {
    let mut evaluator = Evaluator::new();
    let value = evaluator.evaluate(node, alpha, beta);
    log.extend(evaluator.into_prunes());
    value
}

/// Pick the best move from `root` and record every cutoff.
///
/// The root is a maximizer with an unbounded window. It never prunes its own
/// children, and ties go to the earliest child.
///
/// Evaluation recurses once per tree level, so very deep chains can exhaust
/// the thread's stack.
pub fn search(root: &Node) -> SearchResult {
    let _span = debug_span!("search", root = %root.id()).entered();

    let Some((first, rest)) = root.children().split_first() else {
        return SearchResult {
            best_move_from: root.id(),
            best_move_to: root.id(),
            best_value: root.value(),
            prunes: Vec::new(),
            nodes_evaluated: 0,
        };
    };
    debug_assert_eq!(root.role(), Role::Maximizer);

    let mut evaluator = Evaluator::new();
    let beta = i32::MAX;
    let mut best_child = first;
    let mut best_value = evaluator.evaluate(first, i32::MIN, beta);
    let mut alpha = best_value;

    for child in rest {
        let value = evaluator.evaluate(child, alpha, beta);
        if value > best_value {
            best_value = value;
            best_child = child;
        }
        alpha = alpha.max(best_value);
    }

    let nodes_evaluated = evaluator.nodes_evaluated();
    let prunes = evaluator.into_prunes();
    debug!(
        best = %best_child.id(),
        value = best_value,
        prunes = prunes.len(),
        nodes_evaluated,
        "search finished"
    );

    SearchResult {
        best_move_from: root.id(),
        best_move_to: best_child.id(),
        best_value,
        prunes,
        nodes_evaluated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        identifiers::NodeId,
        tree::{GameTree, RawRecord, build},
    };

    fn tree(triples: &[(i32, i32, i32)]) -> GameTree {
        build(triples.iter().copied().map(RawRecord::from)).unwrap()
    }

    fn node(tree: &GameTree, id: i32) -> &Node {
        tree.root().find(NodeId::new(id)).unwrap()
    }

    fn prune(parent: i32, child: i32, kind: PruneKind) -> PruneRecord {
        PruneRecord::new(NodeId::new(parent), NodeId::new(child), kind)
    }

    #[test]
    fn leaf_root_is_its_own_move() {
        let tree = tree(&[(7, -1, 42)]);
        let result = search(tree.root());
        assert_eq!(result.best_move_from, 7);
        assert_eq!(result.best_move_to, 7);
        assert_eq!(result.best_value, 42);
        assert!(result.prunes.is_empty());
        assert_eq!(result.nodes_evaluated, 0);
    }

    #[test]
    fn single_level_takes_maximum_without_pruning() {
        let tree = tree(&[(1, -1, 0), (2, 1, 3), (3, 1, 5), (4, 1, 9)]);
        let result = search(tree.root());
        assert_eq!(result.best_move_to, 4);
        assert_eq!(result.best_value, 9);
        assert!(result.prunes.is_empty());
        assert_eq!(result.nodes_evaluated, 3);
    }

    #[test]
    fn ties_keep_first_child() {
        let tree = tree(&[(1, -1, 0), (2, 1, 5), (3, 1, 9), (4, 1, 9), (5, 1, 1)]);
        let result = search(tree.root());
        assert_eq!(result.best_move_to, 3);
        assert_eq!(result.best_value, 9);
    }

    #[test]
    fn first_child_seeds_best_move_at_minimum_value() {
        let tree = tree(&[(1, -1, 0), (2, 1, i32::MIN), (3, 1, i32::MIN)]);
        let result = search(tree.root());
        assert_eq!(result.best_move_to, 2);
        assert_eq!(result.best_value, i32::MIN);
    }

    #[test]
    fn maximizer_beta_cutoff_skips_remaining_children() {
        // 3 is a maximizer at depth 2 with leaves [3, 12, 8].
        let tree = tree(&[(1, -1, 0), (2, 1, 0), (3, 2, 0), (4, 3, 3), (5, 3, 12), (6, 3, 8)]);
        let mut evaluator = Evaluator::new();
        let value = evaluator.evaluate(node(&tree, 3), i32::MIN, 10);

        assert_eq!(value, 12);
        assert_eq!(evaluator.prunes(), &[prune(3, 6, PruneKind::Beta)]);
        // node 3 plus leaves 4 and 5
        assert_eq!(evaluator.nodes_evaluated(), 3);
    }

    #[test]
    fn minimizer_alpha_cutoff_skips_remaining_children() {
        let tree = tree(&[(1, -1, 0), (2, 1, 0), (3, 2, 8), (4, 2, 2), (5, 2, 5)]);
        let mut log = Vec::new();
        let value = evaluate(node(&tree, 2), 5, i32::MAX, &mut log);

        assert_eq!(value, 2);
        assert_eq!(log, vec![prune(2, 5, PruneKind::Alpha)]);
    }

    #[test]
    fn cutoff_on_last_child_records_nothing() {
        let tree = tree(&[(1, -1, 0), (2, 1, 0), (3, 2, 8), (4, 2, 2)]);
        let mut log = Vec::new();
        assert_eq!(evaluate(node(&tree, 2), 5, i32::MAX, &mut log), 2);
        assert!(log.is_empty());
    }

    #[test]
    fn pruned_subtree_is_never_visited() {
        // Node 4's subtree would add cutoffs of its own if it were searched.
        let tree = tree(&[
            (1, -1, 0),
            (2, 1, 0),
            (3, 1, 0),
            (5, 2, 10),
            (6, 3, 1),
            (4, 3, 0),
            (7, 4, 100),
            (8, 7, 1),
            (9, 7, 2),
        ]);
        let result = search(tree.root());
        assert_eq!(result.best_move_to, 2);
        assert_eq!(result.best_value, 10);
        assert_eq!(result.prunes, vec![prune(3, 4, PruneKind::Alpha)]);
        // 2, 5, 3, 6
        assert_eq!(result.nodes_evaluated, 4);
    }

    #[test]
    fn textbook_two_ply_tree() {
        let tree = tree(&[
            (1, -1, 0),
            (2, 1, 0),
            (3, 1, 0),
            (4, 1, 0),
            (5, 2, 3),
            (6, 2, 12),
            (7, 2, 8),
            (8, 3, 2),
            (9, 3, 4),
            (10, 3, 6),
            (11, 4, 14),
            (12, 4, 5),
            (13, 4, 2),
        ]);
        let result = search(tree.root());
        assert_eq!(result.best_move_line(), "1 2 3");
        assert_eq!(
            result.prunes,
            vec![prune(3, 9, PruneKind::Alpha), prune(3, 10, PruneKind::Alpha)]
        );
        assert_eq!(result.nodes_evaluated, 10);
    }

    #[test]
    fn repeated_searches_are_identical() {
        let tree = tree(&[
            (1, -1, 0),
            (2, 1, 0),
            (3, 1, 0),
            (4, 2, 6),
            (5, 2, 2),
            (6, 3, 1),
            (7, 3, 9),
        ]);
        assert_eq!(tree.search(), tree.search());
    }
}
