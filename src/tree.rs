//! Game tree construction from flat parent-pointer records

pub mod builder;
pub mod node;
pub mod record;

pub use builder::{BuildConfig, DuplicatePolicy, GameTree, RootPolicy, build, build_with};
pub use node::{Node, Role};
pub use record::{RawRecord, parse_line, parse_records, read_records};
