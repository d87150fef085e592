//! Temporal graph: edge store plus windowed queries

use crate::edge::{Attributes, EdgeId, NodeId, TemporalEdge};
use crate::error::Result;
use crate::motif::{ChainMotif, MotifQuery, MotifSearch};
use crate::snapshot::Snapshot;
use crate::store::{EdgeRange, EdgeStore};
use crate::time::{TimeWindow, Timestamp};
use crate::traversal::{TemporalPath, TraversalEngine};

/// Graph of time-stamped edges over a dynamic node set
///
/// Every query materializes a fresh [`Snapshot`] of the edges inside its
/// window and runs a static algorithm against it. Ingestion takes `&mut self`
/// and queries take `&self`; there is no internal locking.
#[derive(Debug, Clone)]
pub struct TemporalGraph<N> {
    directed: bool,
    store: EdgeStore<N>,
}

impl<N: NodeId> Default for TemporalGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeId> TemporalGraph<N> {
    /// Create an empty directed graph
    pub fn new() -> Self {
        Self::with_directed(true)
    }

    /// Create an empty undirected graph
    pub fn undirected() -> Self {
        Self::with_directed(false)
    }

    pub fn with_directed(directed: bool) -> Self {
        Self {
            directed,
            store: EdgeStore::new(),
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Ingestion
    // ─────────────────────────────────────────────────────────────────────────

    /// Add an edge `source -> target` occurring at time `t`
    pub fn add_edge(&mut self, source: N, target: N, t: f64, attributes: Attributes) -> Result<EdgeId> {
        let id = self.store.add_edge(source, target, t, attributes)?;
        tracing::trace!("Added edge {} at t={}", id, t);
        Ok(id)
    }

    /// Add an edge without attributes
    pub fn add_edge_at(&mut self, source: N, target: N, t: f64) -> Result<EdgeId> {
        self.add_edge(source, target, t, Attributes::new())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Edge access
    // ─────────────────────────────────────────────────────────────────────────

    /// Edges with `start <= t <= end` (see [`EdgeStore::edges_in_range`])
    pub fn edges_in_range(&self, start: Option<f64>, end: Option<f64>) -> EdgeRange<'_, N> {
        self.store.edges_in_range(start, end)
    }

    /// Edges inside a query window
    pub fn edges_in_window(&self, window: TimeWindow) -> EdgeRange<'_, N> {
        let (start, end) = window.bounds();
        self.store.edges_in_range(start, end)
    }

    /// Full edge log in insertion order
    pub fn list_edges(&self) -> &[TemporalEdge<N>] {
        self.store.list_edges()
    }

    pub fn edge(&self, id: EdgeId) -> Option<&TemporalEdge<N>> {
        self.store.edge(id)
    }

    pub fn edge_count(&self) -> usize {
        self.store.len()
    }

    pub fn node_count(&self) -> usize {
        self.store.node_count()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.store.nodes()
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.store.contains_node(node)
    }

    /// Distinct timestamps, ascending
    pub fn timestamps(&self) -> impl Iterator<Item = Timestamp> + '_ {
        self.store.timestamps()
    }

    pub fn time_span(&self) -> Option<(Timestamp, Timestamp)> {
        self.store.time_span()
    }

    pub fn store(&self) -> &EdgeStore<N> {
        &self.store
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Materialize the static graph of the edges inside `window`
    pub fn snapshot(&self, window: TimeWindow) -> Snapshot<N> {
        Snapshot::from_edges(self.directed, self.edges_in_window(window))
    }

    /// Whether `target` can be reached from `source` inside `window`
    pub fn reachable(&self, source: &N, target: &N, window: TimeWindow) -> bool {
        tracing::debug!("Reachability {:?} -> {:?} over {}", source, target, window);
        TraversalEngine::reachable(&self.snapshot(window), source, target)
    }

    /// Fewest-hop path from `source` to `target` inside `window`
    pub fn shortest_path(&self, source: &N, target: &N, window: TimeWindow) -> Option<TemporalPath<N>> {
        tracing::debug!("Shortest path {:?} -> {:?} over {}", source, target, window);
        TraversalEngine::shortest_path(&self.snapshot(window), source, target)
    }

    /// Degree of `node` in the snapshot of `window`, 0 when absent
    pub fn degree(&self, node: &N, window: TimeWindow) -> usize {
        self.snapshot(window).degree(node)
    }

    /// Chains of `query.length` nodes with bounded inter-edge delay
    pub fn find_chain_motifs(&self, query: &MotifQuery) -> Result<Vec<ChainMotif<N>>> {
        let (motifs, _) = MotifSearch::run(query, self.edges_in_window(query.window))?;
        Ok(motifs)
    }
}
