//! alphabeta CLI - Alpha-beta pruning traces over static game trees
//!
//! This CLI provides:
//! - The best move and prune log for a tree file
//! - An inspection view of the built tree and its roles
//! - Export of the search trace as JSON, CSV, or Graphviz DOT

use alphabeta::cli::{
    commands::{export, search, tree},
    config::CommonConfig,
};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "alphabeta")]
#[command(version, about = "Alpha-beta pruning traces for static game trees", long_about = None)]
struct Cli {
    /// Default log filter (overridden by RUST_LOG)
    #[arg(long, global = true, env = "ALPHABETA_LOG", default_value_t = CommonConfig::default().log_level)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the best move and list pruned branches
    Search(search::SearchArgs),

    /// Show the built tree with derived roles
    Tree(tree::TreeArgs),

    /// Export the search trace to a file
    Export(export::ExportArgs),
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command {
        Commands::Search(args) => search::execute(args),
        Commands::Tree(args) => tree::execute(args),
        Commands::Export(args) => export::execute(args),
    }
}
