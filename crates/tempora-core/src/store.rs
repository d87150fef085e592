//! Append-only temporal edge store

use crate::edge::{Attributes, EdgeId, NodeId, TemporalEdge};
use crate::error::Result;
use crate::index::{IndexRange, TimeIndex};
use crate::time::Timestamp;
use std::collections::HashSet;

/// Append-only log of temporal edges with a time index
///
/// Edges are kept in ingestion order; the [`TimeIndex`] provides the time
/// ordering. Nothing is ever removed or mutated.
#[derive(Debug, Clone)]
pub struct EdgeStore<N> {
    edges: Vec<TemporalEdge<N>>,
    index: TimeIndex,
    nodes: HashSet<N>,
}

impl<N> Default for EdgeStore<N> {
    fn default() -> Self {
        Self {
            edges: Vec::new(),
            index: TimeIndex::new(),
            nodes: HashSet::new(),
        }
    }
}

impl<N: NodeId> EdgeStore<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an edge `source -> target` occurring at `time`
    ///
    /// Duplicate edges are stored as distinct entries. Fails only when `time`
    /// is NaN, in which case nothing is recorded.
    pub fn add_edge(
        &mut self,
        source: N,
        target: N,
        time: f64,
        attributes: Attributes,
    ) -> Result<EdgeId> {
        let time = Timestamp::new(time)?;
        let id = EdgeId(self.edges.len());

        if self.index.insert(time, id) {
            tracing::trace!("New timestamp {} indexed", time);
        }
        self.nodes.insert(source.clone());
        self.nodes.insert(target.clone());
        self.edges.push(TemporalEdge {
            id,
            time,
            source,
            target,
            attributes,
        });

        Ok(id)
    }

    /// Edges with `start <= t <= end`
    ///
    /// With both bounds unset this is the full log in insertion order. With
    /// either bound set, edges come out by ascending timestamp and in
    /// insertion order within a timestamp.
    pub fn edges_in_range(&self, start: Option<f64>, end: Option<f64>) -> EdgeRange<'_, N> {
        if start.is_none() && end.is_none() {
            EdgeRange::Log(self.edges.iter())
        } else {
            EdgeRange::Indexed {
                edges: &self.edges,
                ids: self.index.range(start, end),
            }
        }
    }

    /// Full edge log in insertion order
    pub fn list_edges(&self) -> &[TemporalEdge<N>] {
        &self.edges
    }

    pub fn edge(&self, id: EdgeId) -> Option<&TemporalEdge<N>> {
        self.edges.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.nodes.iter()
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.nodes.contains(node)
    }

    pub fn index(&self) -> &TimeIndex {
        &self.index
    }

    /// Distinct timestamps, ascending
    pub fn timestamps(&self) -> impl Iterator<Item = Timestamp> + '_ {
        self.index.timestamps()
    }

    /// Earliest and latest timestamp, if any edge exists
    pub fn time_span(&self) -> Option<(Timestamp, Timestamp)> {
        Some((self.index.first()?, self.index.last()?))
    }
}

/// Lazy iterator returned by [`EdgeStore::edges_in_range`]
pub enum EdgeRange<'a, N> {
    Log(std::slice::Iter<'a, TemporalEdge<N>>),
    Indexed {
        edges: &'a [TemporalEdge<N>],
        ids: IndexRange<'a>,
    },
}

impl<'a, N> Iterator for EdgeRange<'a, N> {
    type Item = &'a TemporalEdge<N>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Log(iter) => iter.next(),
            Self::Indexed { edges, ids } => {
                let edges: &'a [TemporalEdge<N>] = edges;
                ids.next().map(|id| &edges[id.index()])
            }
        }
    }
}
