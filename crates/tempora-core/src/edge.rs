//! Temporal edge types

use crate::time::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Arbitrary edge metadata
pub type Attributes = HashMap<String, serde_json::Value>;

/// Node identifier
///
/// Nodes are never created explicitly; any hashable value becomes a node the
/// first time it appears as an edge endpoint.
pub trait NodeId: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> NodeId for T {}

/// Position of an edge in the append-only log
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub usize);

impl EdgeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A directed edge `source -> target` that occurred at `time`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemporalEdge<N> {
    /// Log position
    pub id: EdgeId,

    /// Occurrence time
    pub time: Timestamp,

    /// Source node
    pub source: N,

    /// Target node
    pub target: N,

    /// Arbitrary metadata
    #[serde(default)]
    pub attributes: Attributes,
}

impl<N: NodeId> TemporalEdge<N> {
    /// Whether `node` is either endpoint
    pub fn touches(&self, node: &N) -> bool {
        self.source == *node || self.target == *node
    }

    /// Get an attribute value by key
    pub fn attribute(&self, key: &str) -> Option<&serde_json::Value> {
        self.attributes.get(key)
    }
}

impl<N: std::fmt::Display> std::fmt::Display for TemporalEdge<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} @ t={}", self.source, self.target, self.time)
    }
}
