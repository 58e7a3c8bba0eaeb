//! Alpha-beta search over a built game tree

pub mod alphabeta;
pub mod trace;

pub use alphabeta::{evaluate, search};
pub use trace::{PruneKind, PruneRecord, SearchResult};
