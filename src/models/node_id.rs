//! Node identifiers and the sources that mint them.

use compact_str::{format_compact, CompactString};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identity of one position in the organization chart.
///
/// Assigned once at creation and never reused within a session.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(CompactString);

impl NodeId {
    pub fn new(value: impl Into<CompactString>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Mints fresh node ids.
///
/// Production code uses [`UuidIdSource`]; tests inject [`SequentialIdSource`] to get a
/// reproducible sequence.
pub trait IdSource: Send {
    fn next_id(&mut self) -> NodeId;
}

/// Random (v4) UUIDs: 122 bits of entropy per id.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
    fn next_id(&mut self) -> NodeId {
        let uuid = uuid::Uuid::new_v4();
        let mut buf = uuid::Uuid::encode_buffer();
        NodeId::new(&*uuid.simple().encode_lower(&mut buf))
    }
}

#[derive(Debug, Clone)]
pub struct SequentialIdSource {
    prefix: CompactString,
    next: u64,
}

impl SequentialIdSource {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: CompactString::from(prefix),
            next: 1,
        }
    }
}

impl Default for SequentialIdSource {
    fn default() -> Self {
        Self::new("node")
    }
}

impl IdSource for SequentialIdSource {
    fn next_id(&mut self) -> NodeId {
        let id = NodeId(format_compact!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/node_id.rs"]
mod tests;
