//! Raw `(id, parent, value)` records and their text representation
//!
//! Input is line oriented: each line holds whitespace-separated integers
//! `id parent value`. Anything else (headers, blank lines, commentary) is
//! skipped rather than treated as an error.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{Error, Result};

/// One node record as read from input, before validation against the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub id: i32,
    pub parent_id: i32,
    pub value: i32,
}

impl RawRecord {
    pub fn new(id: i32, parent_id: i32, value: i32) -> Self {
        Self {
            id,
            parent_id,
            value,
        }
    }
}

impl From<(i32, i32, i32)> for RawRecord {
    fn from((id, parent_id, value): (i32, i32, i32)) -> Self {
        Self::new(id, parent_id, value)
    }
}

/// Parse one line into a record.
///
/// The first three whitespace-separated tokens must all be integers; any
/// tokens after them are ignored.
pub fn parse_line(line: &str) -> Option<RawRecord> {
    let mut tokens = line.split_whitespace();
    let id = tokens.next()?.parse().ok()?;
    let parent_id = tokens.next()?.parse().ok()?;
    let value = tokens.next()?.parse().ok()?;
    Some(RawRecord::new(id, parent_id, value))
}

/// Parse every well-formed line of `input`, in order.
pub fn parse_records(input: &str) -> Vec<RawRecord> {
    input
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let record = parse_line(line);
            if record.is_none() && !line.trim().is_empty() {
                trace!(line = index + 1, content = line, "skipping malformed record");
            }
            record
        })
        .collect()
}

/// Read and parse a tree file.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<RawRecord>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| Error::Io {
        operation: format!("read tree file {}", path.display()),
        source,
    })?;
    Ok(parse_records(&contents))
}
