//! Export command - Write the search trace to a file

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use crate::{
    cli::{
        config::TreeSource,
        output::{write_dot, write_json, write_prune_csv},
    },
    search::PruneKind,
};

#[derive(Parser, Debug)]
#[command(about = "Export the search result in various formats")]
pub struct ExportArgs {
    #[command(flatten)]
    pub source: TreeSource,

    /// Output file path
    #[arg(long, short = 'o')]
    pub output: PathBuf,

    /// Export format
    #[arg(long, short = 'f', value_enum, default_value = "csv")]
    pub format: ExportFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Full search result as JSON
    Json,
    /// Prune log as CSV
    Csv,
    /// Tree with the search overlaid, for Graphviz
    Dot,
}

pub fn execute(args: ExportArgs) -> Result<()> {
    let tree = args.source.load()?;
    let result = tree.search();

    let file = File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    let mut writer = BufWriter::new(file);
    match args.format {
        ExportFormat::Json => write_json(&mut writer, &result)?,
        ExportFormat::Csv => write_prune_csv(&mut writer, &result)?,
        ExportFormat::Dot => write_dot(&mut writer, &tree, &result)?,
    }
    writer.flush()?;

    println!("✓ Search result exported to: {}", args.output.display());
    println!(
        "  {} alpha and {} beta cutoffs",
        result.count(PruneKind::Alpha),
        result.count(PruneKind::Beta)
    );
    Ok(())
}
