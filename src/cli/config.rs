//! Shared configuration types for CLI commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use tracing::info;

use crate::tree::{
    BuildConfig, DuplicatePolicy, GameTree, RootPolicy, builder::DEFAULT_ROOT_SENTINEL,
    build_with, read_records,
};

/// Common configuration shared across commands
#[derive(Debug, Clone)]
pub struct CommonConfig {
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

/// How to resolve several root records
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MultipleRootsArg {
    /// Fail the build
    Reject,
    /// Keep the first root in file order
    FirstFound,
}

/// How to resolve repeated node ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DuplicatesArg {
    /// Later records overwrite earlier ones
    LastWins,
    /// Fail the build
    Reject,
}

/// Tree file and build options shared by every command
#[derive(Args, Debug, Clone)]
pub struct TreeSource {
    /// Tree file with one `id parent value` record per line
    #[arg(default_value = "tree.txt")]
    pub file: PathBuf,

    /// Resolution when more than one record has the root sentinel
    #[arg(long, value_enum, default_value = "reject")]
    pub multiple_roots: MultipleRootsArg,

    /// Resolution when two records share an id
    #[arg(long, value_enum, default_value = "last-wins")]
    pub duplicates: DuplicatesArg,

    /// Parent value marking the root record
    #[arg(long, default_value_t = DEFAULT_ROOT_SENTINEL, allow_negative_numbers = true)]
    pub sentinel: i32,
}

impl TreeSource {
    pub fn build_config(&self) -> BuildConfig {
        let root_policy = match self.multiple_roots {
            MultipleRootsArg::Reject => RootPolicy::Reject,
            MultipleRootsArg::FirstFound => RootPolicy::FirstFound,
        };
        let duplicate_policy = match self.duplicates {
            DuplicatesArg::LastWins => DuplicatePolicy::LastWins,
            DuplicatesArg::Reject => DuplicatePolicy::Reject,
        };
        BuildConfig::new()
            .with_root_sentinel(self.sentinel)
            .with_root_policy(root_policy)
            .with_duplicate_policy(duplicate_policy)
    }

    /// Read the file and build the tree.
    pub fn load(&self) -> Result<GameTree> {
        let records = read_records(&self.file)?;
        info!(file = %self.file.display(), records = records.len(), "loaded records");
        build_with(records, &self.build_config())
            .with_context(|| format!("failed to build tree from {}", self.file.display()))
    }
}
