//! Subcommands of the `alphabeta` binary

pub mod export;
pub mod search;
pub mod tree;
