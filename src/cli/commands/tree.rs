//! Tree command - Show the built tree with derived roles

use std::{
    collections::BTreeMap,
    io::{self, Write},
};

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{
        config::TreeSource,
        output::{print_kv, print_section},
    },
    tree::{Node, Role},
};

#[derive(Parser, Debug)]
#[command(about = "Print every reachable node with its depth and role")]
pub struct TreeArgs {
    #[command(flatten)]
    pub source: TreeSource,
}

pub fn execute(args: TreeArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run(&args, &mut handle)?;
    handle.flush()?;
    Ok(())
}

pub fn run<W: Write>(args: &TreeArgs, writer: &mut W) -> Result<()> {
    let tree = args.source.load()?;

    print_section(writer, "Game Tree")?;
    print_kv(writer, "Root", &tree.root().id().to_string())?;
    print_kv(writer, "Nodes", &tree.node_count().to_string())?;
    print_kv(writer, "Max depth", &tree.max_depth().to_string())?;
    let leaves = tree.nodes().filter(|node| node.is_leaf()).count();
    print_kv(writer, "Leaves", &leaves.to_string())?;

    writeln!(writer, "\nNodes by depth:")?;
    let mut by_depth: BTreeMap<usize, usize> = BTreeMap::new();
    for node in tree.nodes() {
        *by_depth.entry(node.depth()).or_insert(0) += 1;
    }
    for (depth, count) in by_depth {
        writeln!(writer, "  Depth {depth} ({}): {count} nodes", Role::for_depth(depth))?;
    }

    writeln!(writer, "\nStructure:")?;
    for node in tree.nodes() {
        writeln!(writer, "{}", describe(node))?;
    }
    Ok(())
}

fn describe(node: &Node) -> String {
    let indent = "  ".repeat(node.depth() + 1);
    if node.is_leaf() {
        format!("{indent}{} [{}] = {}", node.id(), node.role(), node.value())
    } else {
        format!("{indent}{} [{}]", node.id(), node.role())
    }
}
