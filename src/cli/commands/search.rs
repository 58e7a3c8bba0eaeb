//! Search command - Run alpha-beta over a tree file and print the trace

use std::io::{self, Write};

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::cli::{
    config::TreeSource,
    output::{write_json, write_text},
};

#[derive(Parser, Debug)]
#[command(about = "Find the best move and report pruned branches")]
pub struct SearchArgs {
    #[command(flatten)]
    pub source: TreeSource,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `from to value` followed by `parent child kind` lines
    Text,
    /// Pretty-printed JSON
    Json,
}

pub fn execute(args: SearchArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run(&args, &mut handle)?;
    handle.flush()?;
    Ok(())
}

/// Run the command, writing the result to `writer`.
pub fn run<W: Write>(args: &SearchArgs, writer: &mut W) -> Result<()> {
    let tree = args.source.load()?;
    let result = tree.search();
    match args.format {
        OutputFormat::Text => write_text(writer, &result),
        OutputFormat::Json => write_json(writer, &result),
    }
}
