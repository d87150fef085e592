//! Convenience wrappers for common temporal queries

use crate::edge::NodeId;
use crate::error::Result;
use crate::graph::TemporalGraph;
use crate::motif::{ChainMotif, MotifQuery};
use crate::time::TimeWindow;
use crate::traversal::TemporalPath;

/// Read-only query view over a [`TemporalGraph`]
#[derive(Debug, Clone, Copy)]
pub struct TemporalQueries<'g, N> {
    graph: &'g TemporalGraph<N>,
}

impl<'g, N: NodeId> TemporalQueries<'g, N> {
    pub fn new(graph: &'g TemporalGraph<N>) -> Self {
        Self { graph }
    }

    pub fn reachable_at(&self, source: &N, target: &N, t: f64) -> bool {
        self.graph.reachable(source, target, TimeWindow::at(t))
    }

    pub fn reachable_in_window(&self, source: &N, target: &N, start: f64, end: f64) -> bool {
        self.graph
            .reachable(source, target, TimeWindow::between(start, end))
    }

    pub fn shortest_path_at(&self, source: &N, target: &N, t: f64) -> Option<TemporalPath<N>> {
        self.graph.shortest_path(source, target, TimeWindow::at(t))
    }

    pub fn degree_at(&self, node: &N, t: f64) -> usize {
        self.graph.degree(node, TimeWindow::at(t))
    }

    /// Chain motifs of `length` nodes, optionally delay-bounded and windowed
    pub fn chain_motifs(
        &self,
        length: usize,
        within: Option<f64>,
        window: TimeWindow,
    ) -> Result<Vec<ChainMotif<N>>> {
        let mut query = MotifQuery::new(length).in_window(window);
        query.within = within;
        self.graph.find_chain_motifs(&query)
    }
}

impl<N: NodeId> TemporalGraph<N> {
    /// Query view borrowing this graph
    pub fn queries(&self) -> TemporalQueries<'_, N> {
        TemporalQueries::new(self)
    }
}
