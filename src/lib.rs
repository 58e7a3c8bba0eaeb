//! Alpha-beta pruning over a static game tree
//!
//! This crate provides:
//! - Tree construction from flat `(id, parent, value)` records, with roles
//!   derived from depth parity
//! - Alpha-beta search reporting the best move and an ordered prune log
//! - A record reader for the line-oriented text format
//! - CLI commands for searching, inspecting and exporting trees
//!
//! ```
//! use alphabeta::tree::{build, parse_records};
//!
//! let records = parse_records("1 -1 0\n2 1 3\n3 1 5\n");
//! let tree = build(records).unwrap();
//! let result = tree.search();
//! assert_eq!(result.to_string(), "1 3 5\n");
//! ```

pub mod cli;
pub mod error;
pub mod identifiers;
pub mod search;
pub mod tree;

pub use error::{Error, Result};
pub use identifiers::NodeId;
pub use search::{PruneKind, PruneRecord, SearchResult, search};
pub use tree::{BuildConfig, GameTree, Node, RawRecord, Role, build, build_with};
