//! Error types for the alphabeta crate

use thiserror::Error;

use crate::identifiers::NodeId;

/// Main error type for the alphabeta crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("no root found: no record has the parent sentinel {sentinel}")]
    NoRootFound { sentinel: i32 },

    #[error("multiple roots found: {}", format_ids(.ids))]
    MultipleRoots { ids: Vec<NodeId> },

    #[error("duplicate node id {id}")]
    DuplicateNodeId { id: NodeId },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}

fn format_ids(ids: &[NodeId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
