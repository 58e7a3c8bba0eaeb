//! Rendering of trees and search results for CLI output

use std::{collections::HashMap, io::Write};

use anyhow::Result;

use crate::{
    identifiers::NodeId,
    search::{PruneKind, SearchResult},
    tree::GameTree,
};

/// Text wire format: best move line, then one line per prune record.
pub fn write_text<W: Write>(writer: &mut W, result: &SearchResult) -> Result<()> {
    write!(writer, "{result}")?;
    Ok(())
}

pub fn write_json<W: Write>(writer: &mut W, result: &SearchResult) -> Result<()> {
    writeln!(writer, "{}", result.to_json()?)?;
    Ok(())
}

/// Prune log as CSV with a header row.
pub fn write_prune_csv<W: Write>(writer: &mut W, result: &SearchResult) -> Result<()> {
    writeln!(writer, "parent_id,child_id,kind")?;
    for record in &result.prunes {
        writeln!(writer, "{},{},{}", record.parent_id, record.child_id, record.kind)?;
    }
    Ok(())
}

/// Graphviz rendering of the tree with the search overlaid.
///
/// Pruned edges are dashed and labelled with the bound that cut them; the
/// chosen root move is bold.
pub fn write_dot<W: Write>(writer: &mut W, tree: &GameTree, result: &SearchResult) -> Result<()> {
    let pruned: HashMap<(NodeId, NodeId), PruneKind> = result
        .prunes
        .iter()
        .map(|record| ((record.parent_id, record.child_id), record.kind))
        .collect();

    writeln!(writer, "digraph alphabeta {{")?;
    writeln!(writer, "  node [shape=box];")?;
    for node in tree.nodes() {
        let label = if node.is_leaf() {
            format!("{}\\n{}", node.id(), node.value())
        } else {
            format!("{}\\n{}", node.id(), node.role())
        };
        writeln!(writer, "  \"{}\" [label=\"{label}\"];", node.id())?;
    }
    for node in tree.nodes() {
        for child in node.children() {
            let edge = (node.id(), child.id());
            let attrs = if let Some(kind) = pruned.get(&edge) {
                format!(" [style=dashed, label=\"{kind}\"]")
            } else if node.id() == result.best_move_from && child.id() == result.best_move_to {
                " [style=bold]".to_string()
            } else {
                String::new()
            };
            writeln!(writer, "  \"{}\" -> \"{}\"{attrs};", node.id(), child.id())?;
        }
    }
    writeln!(writer, "}}")?;
    Ok(())
}

/// Print a section header
pub fn print_section<W: Write>(writer: &mut W, title: &str) -> Result<()> {
    writeln!(writer, "\n{}", "=".repeat(60))?;
    writeln!(writer, "{title}")?;
    writeln!(writer, "{}", "=".repeat(60))?;
    Ok(())
}

/// Print a key-value pair
pub fn print_kv<W: Write>(writer: &mut W, key: &str, value: &str) -> Result<()> {
    writeln!(writer, "  {:20} {}", format!("{}:", key), value)?;
    Ok(())
}
